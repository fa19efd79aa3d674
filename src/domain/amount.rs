//! Raw asset quantity with checked arithmetic.

use core::fmt;

use super::{Decimals, Rounding};
use crate::error::AmmError;

/// An unsigned fixed-point asset quantity, stored as a count of the
/// smallest unit.
///
/// The ledger convention is 18 fractional digits, so `1.0` of an asset is
/// `10^18` raw units.  `Amount` itself never interprets decimals; use
/// [`Amount::from_whole`] to scale a whole-unit quantity.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_div(&Amount::new(3), Rounding::Down), Some(Amount::new(66)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Scales a whole-unit quantity by `10^decimals`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the scaled value exceeds `u128`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hydra_dex::domain::{Amount, Decimals};
    ///
    /// let one = Amount::from_whole(1, Decimals::LEDGER).expect("fits");
    /// assert_eq!(one.get(), 1_000_000_000_000_000_000);
    /// ```
    pub const fn from_whole(units: u128, decimals: Decimals) -> Result<Self, AmmError> {
        match units.checked_mul(decimals.factor()) {
            Some(v) => Ok(Self(v)),
            None => Err(AmmError::Overflow("whole-unit amount exceeds u128")),
        }
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    ///
    /// Products of two realistic 18-decimal amounts routinely exceed
    /// `u128`; pool math goes through [`mul_div`](crate::math::mul_div)
    /// instead.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        match crate::math::div_round(self.0, divisor.0, rounding) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
