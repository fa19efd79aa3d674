//! Outcome of an executed swap.

use core::fmt;

use super::{Amount, PoolId, SwapDirection};

/// What a single-pool swap actually moved.
///
/// Unlike a quote, a `SwapResult` is only produced after the ledger
/// transfers succeeded and the pool committed its new reserves.  A zero
/// input yields a zero output (the no-op swap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapResult {
    pool: PoolId,
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapResult {
    /// Creates a new `SwapResult`.
    #[must_use]
    pub const fn new(
        pool: PoolId,
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            pool,
            direction,
            amount_in,
            amount_out,
        }
    }

    /// Pool the swap executed against.
    #[must_use]
    pub const fn pool(&self) -> PoolId {
        self.pool
    }

    /// Direction of the swap.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Units pulled from the caller.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Units pushed to the recipient.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult({}, {:?}, in={}, out={})",
            self.pool, self.direction, self.amount_in, self.amount_out
        )
    }
}
