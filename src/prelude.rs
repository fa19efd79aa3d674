//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_dex::prelude::*;
//! ```

pub use crate::config::{ExchangeConfig, ShareTokenConfig};
pub use crate::domain::{
    AccountId, Amount, AssetId, Decimals, PoolId, Rounding, Shares, SwapDirection, SwapResult,
};
pub use crate::error::{AmmError, Result};
pub use crate::exchange::Exchange;
pub use crate::factory::Factory;
pub use crate::ledger::{atomically, MemoryLedger, Transaction};
pub use crate::math::CheckedArithmetic;
pub use crate::pools::Pool;
pub use crate::router::{RoutePlan, Router, SwapStep};
pub use crate::sync::SharedExchange;
pub use crate::traits::AssetLedger;
