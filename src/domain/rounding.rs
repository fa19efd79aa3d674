//! Explicit rounding direction for arithmetic operations.

/// Rounding direction for integer division on domain types.
///
/// Every division in the engine names its direction.  Pool math always
/// rounds against the caller: payouts and minted shares round
/// [`Down`](Rounding::Down).
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Up.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
