//! Exchange configuration.
//!
//! [`ExchangeConfig`] is the declarative blueprint for an
//! [`Exchange`](crate::exchange::Exchange): which asset is the base, which
//! account the router spends as, and how pool shares are labelled.

mod exchange_config;
mod share_token;

pub use exchange_config::{ExchangeConfig, DEFAULT_ROUTER_ACCOUNT};
pub use share_token::ShareTokenConfig;
