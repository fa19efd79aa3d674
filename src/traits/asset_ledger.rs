//! The fungible-asset ledger capability the engine consumes.
//!
//! The ledger is an external collaborator: it owns every balance, including
//! the balances that back pool reserves.  Pools only ever move value
//! through this trait, which is what keeps `reserve == balance_of(pool)`
//! true without any hidden state.
//!
//! # Contract
//!
//! - A failed call leaves the ledger unchanged.
//! - `transfer` fails with [`AmmError::InsufficientBalance`] when `from`
//!   holds less than `amount`.
//! - `transfer_from` checks the allowance first
//!   ([`AmmError::InsufficientAllowance`]), then the balance, and consumes
//!   the allowance on success.
//! - Zero-amount transfers succeed.
//!
//! The engine wraps every top-level operation in a
//! [`Transaction`](crate::ledger::Transaction) that journals successful
//! calls and replays their inverses if a later step fails.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;

/// Multi-asset fungible ledger.
///
/// # Implementors
///
/// - [`MemoryLedger`](crate::ledger::MemoryLedger): in-memory reference
///   ledger for simulation and tests.
/// - [`Transaction`](crate::ledger::Transaction): journaling wrapper around
///   any other implementor.
pub trait AssetLedger {
    /// Balance of `account` in `asset`.  Unknown pairs read as zero.
    #[must_use]
    fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount;

    /// Amount `spender` may still move out of `owner`'s balance.
    #[must_use]
    fn allowance(&self, asset: AssetId, owner: AccountId, spender: AccountId) -> Amount;

    /// Sets the allowance of `spender` over `owner`'s balance to `amount`.
    ///
    /// # Errors
    ///
    /// Implementations may reject approvals (e.g. unknown assets).
    fn approve(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Moves `amount` of `asset` from `from` to `to` on behalf of `spender`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientAllowance`] if `spender` is not approved for
    ///   `amount`.
    /// - [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    fn transfer_from(
        &mut self,
        asset: AssetId,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError>;
}
