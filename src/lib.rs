//! # Hydra DEX
//!
//! Constant-product exchange engine: liquidity pools that each pair one
//! asset against a shared base asset, a factory registry with at most one
//! pool per asset, and a stateless router that swaps between any two
//! registered assets through the base.
//!
//! All balances live on an external [`AssetLedger`](traits::AssetLedger);
//! pools only hold the bookkeeping that mirrors their ledger account.
//! [`MemoryLedger`](ledger::MemoryLedger) is an in-memory implementation
//! for simulation and tests.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize` / `Deserialize` on value and config types |
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_dex::prelude::*;
//!
//! let e18 = 1_000_000_000_000_000_000u128;
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let lp = AccountId::from_bytes([0xa1; 32]);
//! let trader = AccountId::from_bytes([0xb0; 32]);
//!
//! // 1. Fund accounts on the ledger
//! let mut ledger = MemoryLedger::new();
//! for who in [lp, trader] {
//!     ledger.mint(AssetId::NATIVE, who, Amount::new(10_000 * e18)).expect("mint");
//!     ledger.mint(usdc, who, Amount::new(10_000 * e18)).expect("mint");
//! }
//!
//! // 2. Create the exchange and a pool
//! let mut exchange = Exchange::new(ExchangeConfig::default(), ledger).expect("valid config");
//! let pool = exchange.create_pool(usdc).expect("new asset");
//! let pool_account = exchange.pool(pool).expect("registered").account();
//! let router = exchange.router().account();
//!
//! // 3. Approve and seed liquidity: 1 000 base for 2 000 USDC
//! for asset in [AssetId::NATIVE, usdc] {
//!     exchange.ledger_mut().approve(asset, lp, pool_account, Amount::MAX).expect("approve");
//! }
//! exchange
//!     .add_liquidity(lp, usdc, Amount::new(2_000 * e18), Amount::new(1_000 * e18))
//!     .expect("deposit");
//!
//! // 4. Quote, then swap 1 base for USDC through the router
//! exchange.ledger_mut().approve(AssetId::NATIVE, trader, router, Amount::MAX).expect("approve");
//! let quoted = exchange
//!     .get_amount_out(AssetId::NATIVE, usdc, Amount::new(e18))
//!     .expect("quote");
//! let received = exchange
//!     .swap_assets(trader, AssetId::NATIVE, usdc, Amount::new(e18), quoted, trader)
//!     .expect("swap");
//!
//! assert_eq!(received, quoted);
//! assert_eq!(received, Amount::new(1_978_041_738_678_708_079));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Exchange    │  one atomic operation per call
//! └──────┬───────┘
//!        │
//!   ┌────┴─────┐
//!   ▼          ▼
//! ┌──────┐  ┌─────────┐
//! │Router│─▶│ Factory  │  asset → pool registry, pool arena
//! └──────┘  └────┬────┘
//!                ▼
//!          ┌──────────┐
//!          │   Pools   │  reserves, shares, quotes
//!          └────┬─────┘
//!               │ Transaction (journaled)
//!               ▼
//!          ┌──────────┐
//!          │AssetLedger│
//!          └──────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetId`](domain::AssetId), etc. |
//! | [`traits`] | The [`AssetLedger`](traits::AssetLedger) collaborator contract |
//! | [`ledger`] | [`MemoryLedger`](ledger::MemoryLedger) and the journaled [`Transaction`](ledger::Transaction) |
//! | [`config`] | [`ExchangeConfig`](config::ExchangeConfig) and share-token metadata |
//! | [`pools`]  | [`Pool`](pools::Pool), its share ledger and quotes |
//! | [`factory`] | [`Factory`](factory::Factory) pool registry |
//! | [`router`] | [`Router`](router::Router) and [`RoutePlan`](router::RoutePlan) |
//! | [`exchange`] | [`Exchange`](exchange::Exchange) facade |
//! | [`sync`] | [`SharedExchange`](sync::SharedExchange) for multi-threaded callers |
//! | [`math`]   | Checked arithmetic, 256-bit intermediates, pricing |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod factory;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod router;
pub mod sync;
pub mod traits;
