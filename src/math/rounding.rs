//! Rounding helpers for integer division.
//!
//! [`div_round`] is the `u128` building block behind
//! [`Amount::checked_div`](crate::domain::Amount::checked_div).  Wider
//! products go through [`mul_div`](super::mul_div).
//!
//! # Convention
//!
//! Round against the party receiving value:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`] |
//! | Liquidity payout | [`Rounding::Down`] |
//! | Shares minted | [`Rounding::Down`] |
//! | Paired asset required on deposit | [`Rounding::Down`] |
//!
//! # Examples
//!
//! ```
//! use hydra_dex::domain::Rounding;
//! use hydra_dex::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a non-zero remainder implies d > 1.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(10, 5, Rounding::Down), Some(2));
        assert_eq!(div_round(10, 5, Rounding::Up), Some(2));
    }

    #[test]
    fn inexact_division_splits() {
        assert_eq!(div_round(7, 2, Rounding::Down), Some(3));
        assert_eq!(div_round(7, 2, Rounding::Up), Some(4));
    }

    #[test]
    fn max_numerator_round_up() {
        assert_eq!(
            div_round(u128::MAX, 2, Rounding::Up),
            Some(u128::MAX / 2 + 1)
        );
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(div_round(1, 0, Rounding::Up), None);
    }
}
