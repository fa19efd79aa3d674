//! Arithmetic utilities for pool calculations.
//!
//! - [`CheckedArithmetic`]: overflow-safe operations on domain types.
//! - [`div_round`]: `u128` division with explicit [`Rounding`](crate::domain::Rounding).
//! - [`mul_div`] / [`sqrt_product`]: 256-bit intermediates for share and
//!   reserve math.
//! - [`get_amount_out`]: the constant-product pricing function.

mod checked;
mod pricing;
mod rounding;
mod wide;

pub use checked::CheckedArithmetic;
pub use ethnum::U256;
pub use pricing::{get_amount_out, FEE_DENOMINATOR, FEE_NUMERATOR};
pub use rounding::div_round;
pub use wide::{mul_div, narrow, sqrt_product, wide_product};
