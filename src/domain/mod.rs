//! Fundamental domain value types used throughout the exchange.
//!
//! Identities (assets, accounts, pools), quantities (amounts, shares),
//! and the small enums that describe swaps.  All quantities are integer
//! newtypes with checked arithmetic; nothing here touches floating point.

mod account_id;
mod amount;
mod asset_id;
mod decimals;
mod pool_id;
mod rounding;
mod shares;
mod swap_direction;
mod swap_result;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use decimals::Decimals;
pub use pool_id::PoolId;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
pub use swap_result::SwapResult;
