//! 256-bit intermediates for pool math.
//!
//! With the 18-decimal ledger convention, the product of two reserves
//! overflows `u128` long before either reserve does: `100e18 × 200e18` is
//! already about `2^134`.  Every multiply-then-divide in the engine
//! therefore widens to [`U256`] and narrows back with an explicit check.

use ethnum::U256;

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

const TWO: U256 = U256::new(2);

/// Computes `a × b / d` with a 256-bit intermediate product.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `d` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Rounding;
/// use hydra_dex::math::mul_div;
///
/// let e18 = 10u128.pow(18);
/// // 200e18 × 50e18 / 100e18 would overflow u128 without widening.
/// let q = mul_div(200 * e18, 50 * e18, 100 * e18, Rounding::Down).expect("fits");
/// assert_eq!(q, 100 * e18);
/// ```
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Result<u128> {
    if d == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = U256::from(a) * U256::from(b);
    let divisor = U256::from(d);
    let mut quotient = product / divisor;
    if rounding.is_up() && product % divisor != U256::ZERO {
        quotient = quotient + U256::ONE;
    }
    narrow(quotient, "mul_div quotient exceeds u128")
}

/// Returns `floor(sqrt(a × b))`, computed without overflow.
///
/// The result always fits in `u128` because `a × b < 2^256`.
#[must_use]
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    let n = U256::from(a) * U256::from(b);
    let (_, root) = isqrt(n).into_words();
    root
}

/// Returns `a × b` as a 256-bit value.
#[must_use]
pub fn wide_product(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Narrows a 256-bit value back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] carrying `context` if the high word is
/// non-zero.
pub fn narrow(value: U256, context: &'static str) -> Result<u128> {
    let (high, low) = value.into_words();
    if high != 0 {
        return Err(AmmError::Overflow(context));
    }
    Ok(low)
}

/// Integer square root via Newton's method.
fn isqrt(n: U256) -> U256 {
    if n == U256::ZERO {
        return U256::ZERO;
    }
    let mut x = n;
    let mut y = (x + U256::ONE) / TWO;
    while y < x {
        x = y;
        y = (x + n / x) / TWO;
    }
    x
}
