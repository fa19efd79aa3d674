//! Multi-hop routing through the base asset.
//!
//! - [`Router`]: plans and executes swaps between any two assets.
//! - [`RoutePlan`] / [`SwapStep`]: the resolved path with every amount.

mod route;
#[allow(clippy::module_inception)]
mod router;

pub use route::{RoutePlan, SwapStep};
pub use router::Router;
