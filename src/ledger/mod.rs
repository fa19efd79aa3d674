//! Asset ledger implementations.
//!
//! - [`MemoryLedger`]: in-memory multi-asset ledger with allowances.
//! - [`Transaction`] / [`atomically`]: journaling wrapper that makes a
//!   sequence of ledger calls all-or-nothing.

mod memory;
mod transaction;

pub use memory::{AssetInfo, MemoryLedger};
pub use transaction::{atomically, Transaction};
