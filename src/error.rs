//! Unified error types for the Hydra DEX engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Every variant that corresponds to a violated caller-side condition carries
//! the values needed to recompute and resubmit (required vs. supplied,
//! requested vs. available, and so on).
//!
//! # Propagation
//!
//! A failed operation is always all-or-nothing: no reserve, share balance,
//! registry entry or ledger balance changes when an operation returns `Err`.

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId, PoolId, Shares};

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Every failure the exchange engine can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The null (all-zero) asset identifier, or the base asset itself, was
    /// supplied where a pairable asset is required.
    #[error("invalid asset {asset}: {reason}")]
    InvalidAsset {
        /// The rejected asset identifier.
        asset: AssetId,
        /// Why the asset was rejected.
        reason: &'static str,
    },

    /// A pool is already registered for the asset.
    #[error("pool already exists for asset {asset} ({pool})")]
    PoolAlreadyExists {
        /// Asset whose pool was requested twice.
        asset: AssetId,
        /// The pool that is already registered.
        pool: PoolId,
    },

    /// No pool is registered for an asset a route requires.
    #[error("no pool registered for asset {asset}")]
    PoolNotFound {
        /// The asset without a pool.
        asset: AssetId,
    },

    /// A pool identifier does not belong to this registry.
    #[error("unknown pool {0}")]
    UnknownPool(PoolId),

    /// The caller supplied less of the paired asset than the current
    /// reserve ratio requires.
    #[error("insufficient paired asset: required {required}, supplied {supplied}")]
    InsufficientPairedAsset {
        /// Paired amount implied by the base deposit at the current ratio.
        required: Amount,
        /// Paired amount the caller was willing to provide.
        supplied: Amount,
    },

    /// A redeem or share transfer exceeds the holder's balance.
    #[error("insufficient shares: requested {requested}, available {available}")]
    InsufficientShares {
        /// Shares the caller tried to move or burn.
        requested: Shares,
        /// Shares the caller actually holds.
        available: Shares,
    },

    /// The computed output fell below the caller's slippage bound.
    #[error("insufficient output amount: got {amount_out}, minimum {min_amount_out}")]
    InsufficientOutputAmount {
        /// Output the pool (or path) would deliver.
        amount_out: Amount,
        /// Minimum the caller declared acceptable.
        min_amount_out: Amount,
    },

    /// A non-zero deposit would mint zero shares.
    #[error("deposit of {base} base / {paired} paired mints no shares")]
    InsufficientLiquidityMinted {
        /// Base units offered.
        base: Amount,
        /// Paired units offered.
        paired: Amount,
    },

    /// Pricing was requested against an empty reserve.
    #[error("invalid reserves: in={reserve_in}, out={reserve_out}")]
    InvalidReserves {
        /// Reserve of the input side.
        reserve_in: Amount,
        /// Reserve of the output side.
        reserve_out: Amount,
    },

    /// A pool reserve account was named as the party to an operation.
    #[error("pool reserve account {0} cannot act as trader, provider or recipient")]
    PoolAccount(AccountId),

    /// A route was requested from an asset to itself.
    #[error("cannot route {0} to itself")]
    IdenticalAssets(AssetId),

    /// Surfaced unchanged from the asset ledger.
    #[error("insufficient balance of {asset} for {account}: balance {balance}, needed {needed}")]
    InsufficientBalance {
        /// Asset being moved.
        asset: AssetId,
        /// Account being debited.
        account: AccountId,
        /// Its current balance.
        balance: Amount,
        /// Amount the transfer needed.
        needed: Amount,
    },

    /// Surfaced unchanged from the asset ledger.
    #[error("insufficient allowance of {asset} for spender {spender}: allowance {allowance}, needed {needed}")]
    InsufficientAllowance {
        /// Asset being moved.
        asset: AssetId,
        /// Account spending on the owner's behalf.
        spender: AccountId,
        /// Allowance currently granted.
        allowance: Amount,
        /// Amount the transfer needed.
        needed: Amount,
    },

    /// Arithmetic overflow in an intermediate calculation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow in an intermediate calculation.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Decimal precision outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),
}
