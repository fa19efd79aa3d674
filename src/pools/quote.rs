//! Pure quotes produced by a [`Pool`](super::Pool) before any effect.
//!
//! A quote carries every amount the operation will move *and* the pool
//! state it will leave behind.  Committing a quote is therefore a plain
//! assignment, which is what lets the engine validate everything up front
//! and apply nothing on failure.

use crate::domain::{Amount, PoolId, Shares, SwapDirection};

/// Accepted amounts and minted shares of a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    pub(crate) pool: PoolId,
    pub(crate) base: Amount,
    pub(crate) paired: Amount,
    pub(crate) shares: Shares,
    pub(crate) base_reserve_after: Amount,
    pub(crate) paired_reserve_after: Amount,
}

impl DepositQuote {
    /// Base units the pool will take.
    pub const fn base(&self) -> Amount {
        self.base
    }

    /// Paired units the pool will take.
    pub const fn paired(&self) -> Amount {
        self.paired
    }

    /// Shares that will be minted.
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Returns `true` for the zero deposit.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.base.is_zero() && self.paired.is_zero() && self.shares.is_zero()
    }
}

/// Payout of a share redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalQuote {
    pub(crate) pool: PoolId,
    pub(crate) shares: Shares,
    pub(crate) base: Amount,
    pub(crate) paired: Amount,
    pub(crate) base_reserve_after: Amount,
    pub(crate) paired_reserve_after: Amount,
}

impl WithdrawalQuote {
    /// Shares that will be burned.
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Base units paid out.
    pub const fn base(&self) -> Amount {
        self.base
    }

    /// Paired units paid out.
    pub const fn paired(&self) -> Amount {
        self.paired
    }
}

/// Input, output and post-trade reserves of a single-pool swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    pub(crate) pool: PoolId,
    pub(crate) direction: SwapDirection,
    pub(crate) amount_in: Amount,
    pub(crate) amount_out: Amount,
    pub(crate) base_reserve_after: Amount,
    pub(crate) paired_reserve_after: Amount,
}

impl SwapQuote {
    /// Pool the quote was computed against.
    #[must_use]
    pub const fn pool(&self) -> PoolId {
        self.pool
    }

    /// Swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Units sold into the pool.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Units the pool pays out.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Base reserve after the swap.
    pub const fn base_reserve_after(&self) -> Amount {
        self.base_reserve_after
    }

    /// Paired reserve after the swap.
    pub const fn paired_reserve_after(&self) -> Amount {
        self.paired_reserve_after
    }
}
