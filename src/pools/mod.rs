//! Liquidity pools.
//!
//! Every pool pairs the exchange's base asset with exactly one other asset
//! and prices trades on the constant-product curve.
//!
//! - [`Pool`]: reserves, share ledger and quotes; its effectful operations
//!   run through [`Exchange`](crate::exchange::Exchange).
//! - [`ShareLedger`]: per-pool liquidity share balances.
//! - [`DepositQuote`] / [`WithdrawalQuote`] / [`SwapQuote`]: pure quotes
//!   carrying the post-operation state.

mod pool;
mod quote;
mod share_ledger;

#[cfg(test)]
mod proptest_properties;

pub(crate) use pool::reject_pool_account;
pub use pool::Pool;
pub use quote::{DepositQuote, SwapQuote, WithdrawalQuote};
pub use share_ledger::ShareLedger;
