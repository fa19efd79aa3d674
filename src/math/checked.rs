//! Checked arithmetic trait for domain wrapper types.
//!
//! The value types expose `Option`-returning `checked_*` methods;
//! [`CheckedArithmetic`] lifts them into [`AmmError`] so pool code can use
//! `?` throughout.
//!
//! # Examples
//!
//! ```
//! use hydra_dex::domain::Amount;
//! use hydra_dex::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//! assert!(Amount::new(1).safe_sub(&Amount::new(2)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: saturation hides accounting bugs.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn amount_overflow_maps_to_error() {
        let Err(AmmError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn amount_underflow_maps_to_error() {
        let Err(AmmError::Underflow(_)) = Amount::ZERO.safe_sub(&Amount::new(1)) else {
            panic!("expected Underflow");
        };
    }

    #[test]
    fn shares_round_trip() {
        let Ok(total) = Shares::new(40).safe_add(&Shares::new(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(total.safe_sub(&Shares::new(42)), Ok(Shares::ZERO));
        assert!(Shares::ZERO.safe_sub(&Shares::new(1)).is_err());
    }
}
