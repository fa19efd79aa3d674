//! Pool identity assigned by the factory.

use core::fmt;

/// Identity of a pool inside a [`Factory`](crate::factory::Factory).
///
/// Ids are dense and assigned in creation order, starting at zero.  An id
/// is only meaningful for the factory that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PoolId(u64);

impl PoolId {
    /// Wraps a raw pool index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Returns the raw pool index.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(PoolId::new(3).to_string(), "pool#3");
    }
}
