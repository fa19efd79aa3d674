//! Journaled ledger access for all-or-nothing operations.
//!
//! Every engine operation follows the same shape:
//!
//! 1. quote against current pool state (pure),
//! 2. move assets through a [`Transaction`],
//! 3. commit the quoted pool state.
//!
//! If step 2 fails part-way, [`atomically`] replays the inverse of each
//! journaled ledger call in reverse order, so the caller observes no change
//! at all.  Step 3 only runs after the transaction has been kept.
//!
//! A [`Transaction`] that is dropped without being kept rolls back too,
//! which covers a panic unwinding out of the operation.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::Result;
use crate::traits::AssetLedger;

/// One successful ledger mutation, recorded for rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JournalEntry {
    Transfer {
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    },
    Allowance {
        asset: AssetId,
        owner: AccountId,
        spender: AccountId,
        previous: Amount,
    },
}

/// A ledger wrapper that journals every successful mutation.
///
/// Reads pass straight through.  Obtain one through [`atomically`].
/// Dropping a transaction that was not kept undoes its journal.
#[derive(Debug)]
pub struct Transaction<'a, L: AssetLedger> {
    ledger: &'a mut L,
    journal: Vec<JournalEntry>,
}

impl<'a, L: AssetLedger> Transaction<'a, L> {
    fn new(ledger: &'a mut L) -> Self {
        Self {
            ledger,
            journal: Vec::new(),
        }
    }

    /// Number of mutations recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.journal.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.journal.is_empty()
    }

    /// Keeps every recorded mutation.
    fn keep(mut self) {
        self.journal.clear();
    }

    /// Undoes every recorded mutation, most recent first.
    fn rollback(&mut self) {
        let entries = self.journal.len();
        while let Some(entry) = self.journal.pop() {
            let undone = match entry {
                JournalEntry::Transfer {
                    asset,
                    from,
                    to,
                    amount,
                } => self.ledger.transfer(asset, to, from, amount),
                JournalEntry::Allowance {
                    asset,
                    owner,
                    spender,
                    previous,
                } => self.ledger.approve(asset, owner, spender, previous),
            };
            if let Err(error) = undone {
                tracing::error!(?entry, %error, "ledger rollback step failed");
            }
        }
        if entries > 0 {
            tracing::warn!(entries, "rolled back ledger transaction");
        }
    }
}

impl<L: AssetLedger> Drop for Transaction<'_, L> {
    fn drop(&mut self) {
        self.rollback();
    }
}

impl<L: AssetLedger> AssetLedger for Transaction<'_, L> {
    fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount {
        self.ledger.balance_of(asset, account)
    }

    fn allowance(&self, asset: AssetId, owner: AccountId, spender: AccountId) -> Amount {
        self.ledger.allowance(asset, owner, spender)
    }

    fn approve(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let previous = self.ledger.allowance(asset, owner, spender);
        self.ledger.approve(asset, owner, spender, amount)?;
        self.journal.push(JournalEntry::Allowance {
            asset,
            owner,
            spender,
            previous,
        });
        Ok(())
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        self.ledger.transfer(asset, from, to, amount)?;
        self.journal.push(JournalEntry::Transfer {
            asset,
            from,
            to,
            amount,
        });
        Ok(())
    }

    fn transfer_from(
        &mut self,
        asset: AssetId,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let previous = self.ledger.allowance(asset, from, spender);
        self.ledger.transfer_from(asset, spender, from, to, amount)?;
        // Undo order is reversed, so the transfer is reverted before the
        // allowance is restored.
        self.journal.push(JournalEntry::Allowance {
            asset,
            owner: from,
            spender,
            previous,
        });
        self.journal.push(JournalEntry::Transfer {
            asset,
            from,
            to,
            amount,
        });
        Ok(())
    }
}

/// Runs `op` against a journaled view of `ledger`.
///
/// On `Ok` the recorded mutations stay applied.  On `Err`, or if `op`
/// panics, they are undone in reverse order; the error is returned or the
/// panic keeps unwinding.
///
/// # Errors
///
/// Whatever `op` returns.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{AccountId, Amount, AssetId};
/// use hydra_dex::error::AmmError;
/// use hydra_dex::ledger::{atomically, MemoryLedger};
/// use hydra_dex::traits::AssetLedger;
///
/// let token = AssetId::from_bytes([7; 32]);
/// let alice = AccountId::from_bytes([1; 32]);
/// let bob = AccountId::from_bytes([2; 32]);
/// let mut ledger = MemoryLedger::new();
/// ledger.mint(token, alice, Amount::new(10)).expect("mint");
///
/// let result: Result<(), AmmError> = atomically(&mut ledger, |tx| {
///     tx.transfer(token, alice, bob, Amount::new(10))?;
///     tx.transfer(token, alice, bob, Amount::new(1))
/// });
/// assert!(result.is_err());
/// assert_eq!(ledger.balance_of(token, alice), Amount::new(10));
/// ```
pub fn atomically<L, T, F>(ledger: &mut L, op: F) -> Result<T>
where
    L: AssetLedger,
    F: FnOnce(&mut Transaction<'_, L>) -> Result<T>,
{
    let mut tx = Transaction::new(ledger);
    match op(&mut tx) {
        Ok(value) => {
            tx.keep();
            Ok(value)
        }
        Err(error) => {
            tracing::debug!(%error, "operation failed, reverting ledger");
            drop(tx);
            Err(error)
        }
    }
}
