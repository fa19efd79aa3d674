//! Which side of a pool a swap sells into.

/// Direction of a single-pool swap.
///
/// Every pool pairs the exchange's base asset with one paired asset, so a
/// direction fully determines the input and output assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Sell the base asset, receive the paired asset.
    BaseToPaired,
    /// Sell the paired asset, receive the base asset.
    PairedToBase,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::BaseToPaired => Self::PairedToBase,
            Self::PairedToBase => Self::BaseToPaired,
        }
    }

    /// Returns `true` when the base asset is the input.
    #[must_use]
    pub const fn sells_base(self) -> bool {
        matches!(self, Self::BaseToPaired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_is_involution() {
        for dir in [SwapDirection::BaseToPaired, SwapDirection::PairedToBase] {
            assert_eq!(dir.reversed().reversed(), dir);
            assert_ne!(dir.reversed(), dir);
        }
    }

    #[test]
    fn sells_base() {
        assert!(SwapDirection::BaseToPaired.sells_base());
        assert!(!SwapDirection::PairedToBase.sells_base());
    }
}
