//! Constant-product pricing with a 1% input fee.
//!
//! ```text
//! with_fee   = amount_in × 99
//! amount_out = floor(with_fee × reserve_out / (reserve_in × 100 + with_fee))
//! ```
//!
//! The withheld 1% stays in the pool's input reserve, so the invariant
//! product `reserve_in × reserve_out` strictly grows on every non-zero swap
//! and each outstanding share becomes worth more.

use ethnum::U256;

use super::wide::narrow;
use crate::domain::Amount;
use crate::error::{AmmError, Result};

/// Numerator of the post-fee input fraction.
pub const FEE_NUMERATOR: u128 = 99;

/// Denominator of the post-fee input fraction.
pub const FEE_DENOMINATOR: u128 = 100;

/// Output of selling `amount_in` into a pool with the given reserves.
///
/// Pure: no state is read or written.
///
/// # Errors
///
/// - [`AmmError::InvalidReserves`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the 256-bit numerator overflows (inputs
///   beyond any realistic supply).
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Amount;
/// use hydra_dex::math::get_amount_out;
///
/// // floor(1 × 99 × 2000 / (1000 × 100 + 99)) = floor(198000 / 100099) = 1
/// let out = get_amount_out(Amount::new(1), Amount::new(1_000), Amount::new(2_000))
///     .expect("funded reserves");
/// assert_eq!(out, Amount::new(1));
/// ```
pub fn get_amount_out(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidReserves {
            reserve_in,
            reserve_out,
        });
    }

    let with_fee = U256::from(amount_in.get()) * U256::from(FEE_NUMERATOR);
    let numerator = with_fee
        .checked_mul(U256::from(reserve_out.get()))
        .ok_or(AmmError::Overflow("swap numerator overflow"))?;
    let denominator = U256::from(reserve_in.get()) * U256::from(FEE_DENOMINATOR) + with_fee;

    let out = narrow(numerator / denominator, "swap output exceeds u128")?;
    Ok(Amount::new(out))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const E18: u128 = 1_000_000_000_000_000_000;

    fn quote(amount_in: u128, reserve_in: u128, reserve_out: u128) -> u128 {
        let Ok(out) = get_amount_out(
            Amount::new(amount_in),
            Amount::new(reserve_in),
            Amount::new(reserve_out),
        ) else {
            panic!("expected Ok");
        };
        out.get()
    }

    #[test]
    fn one_base_into_thousand_two_thousand() {
        // 1e18 × 99 × 2000e18 / (1000e18 × 100 + 99e18) = 198000e18 / 100099
        assert_eq!(
            quote(E18, 1_000 * E18, 2_000 * E18),
            1_978_041_738_678_708_079
        );
    }

    #[test]
    fn matches_reference_formula_for_larger_trades() {
        assert_eq!(
            quote(20 * E18, 1_000 * E18, 2_000 * E18),
            38_831_143_361_443_420_278
        );
        assert_eq!(
            quote(100 * E18, 1_000 * E18, 2_000 * E18),
            180_163_785_259_326_660_600
        );
    }

    #[test]
    fn zero_input_yields_zero() {
        assert_eq!(quote(0, 1_000, 2_000), 0);
    }

    #[test]
    fn strictly_worse_than_spot() {
        let out = quote(10 * E18, 1_000 * E18, 2_000 * E18);
        let spot = 10 * E18 * 2_000 / 1_000;
        assert!(out < spot);
    }

    #[test]
    fn empty_reserves_rejected() {
        let result = get_amount_out(Amount::new(1), Amount::ZERO, Amount::new(5));
        assert!(matches!(result, Err(AmmError::InvalidReserves { .. })));
        let result = get_amount_out(Amount::new(1), Amount::new(5), Amount::ZERO);
        assert!(matches!(result, Err(AmmError::InvalidReserves { .. })));
    }

    #[test]
    fn absurd_inputs_overflow_instead_of_wrapping() {
        let result = get_amount_out(Amount::MAX, Amount::new(1), Amount::MAX);
        assert!(matches!(result, Err(AmmError::Overflow(_))));
    }
}
