//! Planned swap paths.

use crate::domain::{Amount, AssetId, PoolId, SwapDirection};
use crate::pools::SwapQuote;

/// One pool hop of a [`RoutePlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapStep {
    asset_in: AssetId,
    asset_out: AssetId,
    quote: SwapQuote,
}

impl SwapStep {
    pub(crate) const fn new(asset_in: AssetId, asset_out: AssetId, quote: SwapQuote) -> Self {
        Self {
            asset_in,
            asset_out,
            quote,
        }
    }

    /// Pool traded against.
    #[must_use]
    pub const fn pool(&self) -> PoolId {
        self.quote.pool()
    }

    /// Direction within that pool.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.quote.direction()
    }

    /// Asset sold in this hop.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Asset bought in this hop.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Units sold in this hop.
    pub const fn amount_in(&self) -> Amount {
        self.quote.amount_in()
    }

    /// Units bought in this hop.
    pub const fn amount_out(&self) -> Amount {
        self.quote.amount_out()
    }

    /// The underlying pool quote.
    #[must_use]
    pub const fn quote(&self) -> &SwapQuote {
        &self.quote
    }
}

/// An ordered one- or two-hop path with every amount resolved.
///
/// The intermediate hop always passes through the base asset: a swap
/// between two non-base assets sells into the first asset's pool for base,
/// then sells that base into the second asset's pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    steps: Vec<SwapStep>,
}

impl RoutePlan {
    pub(crate) fn new(steps: Vec<SwapStep>) -> Self {
        Self { steps }
    }

    /// The hops in execution order.
    #[must_use]
    pub fn steps(&self) -> &[SwapStep] {
        &self.steps
    }

    /// Number of hops.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.steps.len()
    }

    /// Units the caller sells.
    pub fn amount_in(&self) -> Amount {
        self.steps
            .first()
            .map_or(Amount::ZERO, SwapStep::amount_in)
    }

    /// Units the recipient receives.
    pub fn amount_out(&self) -> Amount {
        self.steps.last().map_or(Amount::ZERO, SwapStep::amount_out)
    }
}
