//! Per-pool liquidity share accounting.

use std::collections::HashMap;

use crate::domain::{AccountId, Shares};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// A checked share-ledger change waiting to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShareUpdate {
    owner: AccountId,
    balance: Shares,
    total: Shares,
}

/// Share balances of one pool.
///
/// Invariant: `total == Σ balances`.  Zero balances are not stored.
/// Mutations compute every new value before writing any, so a failed call
/// changes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    total: Shares,
    balances: HashMap<AccountId, Shares>,
}

impl ShareLedger {
    /// Creates an empty share ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total outstanding shares.
    #[must_use]
    pub const fn total(&self) -> Shares {
        self.total
    }

    /// Shares held by `owner`.
    #[must_use]
    pub fn balance_of(&self, owner: AccountId) -> Shares {
        self.balances.get(&owner).copied().unwrap_or(Shares::ZERO)
    }

    /// Number of accounts with a non-zero balance.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.balances.len()
    }

    /// Iterates over `(holder, shares)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (AccountId, Shares)> + '_ {
        self.balances.iter().map(|(owner, shares)| (*owner, *shares))
    }

    /// Issues `shares` to `owner`.
    ///
    /// # Errors
    ///
    /// [`AmmError::Overflow`] if the total would exceed `u128`.
    pub fn mint(&mut self, owner: AccountId, shares: Shares) -> Result<()> {
        let update = self.plan_mint(owner, shares)?;
        self.apply(update);
        Ok(())
    }

    /// Destroys `shares` held by `owner`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientShares`] if `owner` holds fewer than `shares`.
    pub fn burn(&mut self, owner: AccountId, shares: Shares) -> Result<()> {
        let update = self.plan_burn(owner, shares)?;
        self.apply(update);
        Ok(())
    }

    /// Moves `shares` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientShares`] if `from` holds fewer than `shares`.
    pub fn transfer(&mut self, from: AccountId, to: AccountId, shares: Shares) -> Result<()> {
        let debited = self.debit(from, shares)?;
        if from == to {
            return Ok(());
        }
        let credited = self.balance_of(to).safe_add(&shares)?;
        self.store(from, debited);
        self.store(to, credited);
        Ok(())
    }

    pub(crate) fn plan_mint(&self, owner: AccountId, shares: Shares) -> Result<ShareUpdate> {
        Ok(ShareUpdate {
            owner,
            balance: self.balance_of(owner).safe_add(&shares)?,
            total: self.total.safe_add(&shares)?,
        })
    }

    pub(crate) fn plan_burn(&self, owner: AccountId, shares: Shares) -> Result<ShareUpdate> {
        Ok(ShareUpdate {
            owner,
            balance: self.debit(owner, shares)?,
            total: self.total.safe_sub(&shares)?,
        })
    }

    /// Writes a planned change.  The plan must come from this ledger with
    /// no mutation in between.
    pub(crate) fn apply(&mut self, update: ShareUpdate) {
        self.total = update.total;
        self.store(update.owner, update.balance);
    }

    fn debit(&self, owner: AccountId, shares: Shares) -> Result<Shares> {
        let available = self.balance_of(owner);
        available
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares {
                requested: shares,
                available,
            })
    }

    fn store(&mut self, owner: AccountId, balance: Shares) {
        if balance.is_zero() {
            self.balances.remove(&owner);
        } else {
            self.balances.insert(owner, balance);
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const ALICE: AccountId = AccountId::from_bytes([1; 32]);
    const BOB: AccountId = AccountId::from_bytes([2; 32]);

    fn sum(ledger: &ShareLedger) -> u128 {
        ledger.iter().map(|(_, s)| s.get()).sum()
    }

    #[test]
    fn mint_and_burn_track_total() {
        let mut ledger = ShareLedger::new();
        assert!(ledger.mint(ALICE, Shares::new(100)).is_ok());
        assert!(ledger.mint(BOB, Shares::new(50)).is_ok());
        assert!(ledger.burn(ALICE, Shares::new(40)).is_ok());
        assert_eq!(ledger.total(), Shares::new(110));
        assert_eq!(sum(&ledger), 110);
    }

    #[test]
    fn burning_everything_forgets_holder() {
        let mut ledger = ShareLedger::new();
        assert!(ledger.mint(ALICE, Shares::new(7)).is_ok());
        assert!(ledger.burn(ALICE, Shares::new(7)).is_ok());
        assert_eq!(ledger.holders(), 0);
        assert!(ledger.total().is_zero());
    }

    #[test]
    fn over_burn_rejected_without_change() {
        let mut ledger = ShareLedger::new();
        assert!(ledger.mint(ALICE, Shares::new(10)).is_ok());
        let Err(AmmError::InsufficientShares {
            requested,
            available,
        }) = ledger.burn(ALICE, Shares::new(11))
        else {
            panic!("expected InsufficientShares");
        };
        assert_eq!(requested, Shares::new(11));
        assert_eq!(available, Shares::new(10));
        assert_eq!(ledger.total(), Shares::new(10));
    }

    #[test]
    fn transfer_preserves_total() {
        let mut ledger = ShareLedger::new();
        assert!(ledger.mint(ALICE, Shares::new(10)).is_ok());
        assert!(ledger.transfer(ALICE, BOB, Shares::new(4)).is_ok());
        assert_eq!(ledger.balance_of(ALICE), Shares::new(6));
        assert_eq!(ledger.balance_of(BOB), Shares::new(4));
        assert_eq!(ledger.total(), Shares::new(10));
        assert!(ledger.transfer(BOB, ALICE, Shares::new(5)).is_err());
    }

    #[test]
    fn planned_burn_waits_for_apply() {
        let mut ledger = ShareLedger::new();
        assert!(ledger.mint(ALICE, Shares::new(10)).is_ok());
        let Ok(update) = ledger.plan_burn(ALICE, Shares::new(4)) else {
            panic!("plan failed");
        };
        assert_eq!(ledger.balance_of(ALICE), Shares::new(10));
        ledger.apply(update);
        assert_eq!(ledger.balance_of(ALICE), Shares::new(6));
        assert_eq!(ledger.total(), Shares::new(6));
        assert!(ledger.plan_mint(BOB, Shares::new(u128::MAX)).is_err());
    }

    #[test]
    fn self_transfer_is_neutral() {
        let mut ledger = ShareLedger::new();
        assert!(ledger.mint(ALICE, Shares::new(10)).is_ok());
        assert!(ledger.transfer(ALICE, ALICE, Shares::new(10)).is_ok());
        assert_eq!(ledger.balance_of(ALICE), Shares::new(10));
    }
}
