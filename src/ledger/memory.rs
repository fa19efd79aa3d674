//! In-memory reference ledger.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, AssetId, Decimals};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

/// Display metadata and supply of one asset held by a [`MemoryLedger`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetInfo {
    name: String,
    symbol: String,
    decimals: Decimals,
    total_supply: Amount,
}

impl AssetInfo {
    /// Human-readable asset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Display decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Units issued so far.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }
}

/// A multi-asset ledger backed by hash maps.
///
/// Follows the usual fungible-token rules: transfers fail on insufficient
/// balance, `transfer_from` consumes allowance, and an allowance of
/// [`Amount::MAX`] is treated as unlimited.  Assets do not need to be
/// registered to be moved; registration through [`issue`](Self::issue)
/// only records metadata and supply.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{AccountId, Amount, AssetId};
/// use hydra_dex::ledger::MemoryLedger;
/// use hydra_dex::traits::AssetLedger;
///
/// let token = AssetId::from_bytes([7; 32]);
/// let alice = AccountId::from_bytes([1; 32]);
/// let bob = AccountId::from_bytes([2; 32]);
///
/// let mut ledger = MemoryLedger::new();
/// ledger.mint(token, alice, Amount::new(100)).expect("mint");
/// ledger.transfer(token, alice, bob, Amount::new(40)).expect("transfer");
/// assert_eq!(ledger.balance_of(token, bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    assets: HashMap<AssetId, AssetInfo>,
    balances: HashMap<(AssetId, AccountId), Amount>,
    allowances: HashMap<(AssetId, AccountId, AccountId), Amount>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `asset` with display metadata and mints `supply` to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset` is null or already registered.
    /// - [`AmmError::Overflow`] if the supply does not fit.
    pub fn issue(
        &mut self,
        asset: AssetId,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: Decimals,
        to: AccountId,
        supply: Amount,
    ) -> Result<()> {
        if asset.is_null() {
            return Err(AmmError::InvalidAsset {
                asset,
                reason: "null asset cannot be issued",
            });
        }
        if self.assets.contains_key(&asset) {
            return Err(AmmError::InvalidAsset {
                asset,
                reason: "asset already issued",
            });
        }
        self.assets.insert(
            asset,
            AssetInfo {
                name: name.into(),
                symbol: symbol.into(),
                decimals,
                total_supply: Amount::ZERO,
            },
        );
        self.mint(asset, to, supply)
    }

    /// Credits `amount` of `asset` to `to`, creating it from nothing.
    ///
    /// # Errors
    ///
    /// [`AmmError::Overflow`] if the balance or the recorded supply would
    /// exceed `u128`.
    pub fn mint(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<()> {
        let balance = self.balance_of(asset, to).safe_add(&amount)?;
        let supply = match self.assets.get(&asset) {
            Some(info) => Some(info.total_supply.safe_add(&amount)?),
            None => None,
        };

        self.balances.insert((asset, to), balance);
        if let (Some(info), Some(supply)) = (self.assets.get_mut(&asset), supply) {
            info.total_supply = supply;
        }
        Ok(())
    }

    /// Metadata of a registered asset.
    #[must_use]
    pub fn asset_info(&self, asset: AssetId) -> Option<&AssetInfo> {
        self.assets.get(&asset)
    }

    /// Number of non-zero balances currently recorded.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.values().filter(|b| !b.is_zero()).count()
    }

    fn debit_credit(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let balance = self.balance_of(asset, from);
        if balance < amount {
            return Err(AmmError::InsufficientBalance {
                asset,
                account: from,
                balance,
                needed: amount,
            });
        }
        if from == to || amount.is_zero() {
            return Ok(());
        }

        let debited = balance.safe_sub(&amount)?;
        let credited = self.balance_of(asset, to).safe_add(&amount)?;
        self.balances.insert((asset, from), debited);
        self.balances.insert((asset, to), credited);
        Ok(())
    }
}

impl AssetLedger for MemoryLedger {
    fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount {
        self.balances
            .get(&(asset, account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, asset: AssetId, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&(asset, owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn approve(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            self.allowances.remove(&(asset, owner, spender));
        } else {
            self.allowances.insert((asset, owner, spender), amount);
        }
        Ok(())
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        self.debit_credit(asset, from, to, amount)
    }

    fn transfer_from(
        &mut self,
        asset: AssetId,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let allowance = self.allowance(asset, from, spender);
        if allowance < amount {
            return Err(AmmError::InsufficientAllowance {
                asset,
                spender,
                allowance,
                needed: amount,
            });
        }
        self.debit_credit(asset, from, to, amount)?;
        if allowance != Amount::MAX {
            let remaining = allowance.safe_sub(&amount)?;
            self.approve(asset, from, spender, remaining)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const TOKEN: AssetId = AssetId::from_bytes([7; 32]);
    const ALICE: AccountId = AccountId::from_bytes([1; 32]);
    const BOB: AccountId = AccountId::from_bytes([2; 32]);
    const POOL: AccountId = AccountId::from_bytes([3; 32]);

    fn funded() -> MemoryLedger {
        let mut ledger = MemoryLedger::new();
        let Ok(()) = ledger.issue(
            TOKEN,
            "Token",
            "TKN",
            Decimals::LEDGER,
            ALICE,
            Amount::new(1_000),
        ) else {
            panic!("issue failed");
        };
        ledger
    }

    // -- issue / mint --------------------------------------------------

    #[test]
    fn issue_records_metadata_and_supply() {
        let ledger = funded();
        let Some(info) = ledger.asset_info(TOKEN) else {
            panic!("asset not registered");
        };
        assert_eq!(info.name(), "Token");
        assert_eq!(info.symbol(), "TKN");
        assert_eq!(info.decimals(), Decimals::LEDGER);
        assert_eq!(info.total_supply(), Amount::new(1_000));
        assert_eq!(ledger.balance_of(TOKEN, ALICE), Amount::new(1_000));
    }

    #[test]
    fn issue_twice_rejected() {
        let mut ledger = funded();
        let result = ledger.issue(TOKEN, "Again", "AGN", Decimals::LEDGER, BOB, Amount::new(1));
        assert!(matches!(result, Err(AmmError::InvalidAsset { .. })));
        assert_eq!(ledger.balance_of(TOKEN, BOB), Amount::ZERO);
    }

    #[test]
    fn issue_null_rejected() {
        let mut ledger = MemoryLedger::new();
        let result = ledger.issue(AssetId::NULL, "N", "N", Decimals::LEDGER, BOB, Amount::new(1));
        assert!(matches!(result, Err(AmmError::InvalidAsset { .. })));
    }

    #[test]
    fn mint_overflow_leaves_balance() {
        let mut ledger = funded();
        assert!(ledger.mint(TOKEN, ALICE, Amount::MAX).is_err());
        assert_eq!(ledger.balance_of(TOKEN, ALICE), Amount::new(1_000));
    }

    // -- transfer ------------------------------------------------------

    #[test]
    fn transfer_moves_balance() {
        let mut ledger = funded();
        assert!(ledger.transfer(TOKEN, ALICE, BOB, Amount::new(400)).is_ok());
        assert_eq!(ledger.balance_of(TOKEN, ALICE), Amount::new(600));
        assert_eq!(ledger.balance_of(TOKEN, BOB), Amount::new(400));
    }

    #[test]
    fn transfer_over_balance_rejected() {
        let mut ledger = funded();
        let Err(AmmError::InsufficientBalance {
            balance, needed, ..
        }) = ledger.transfer(TOKEN, BOB, ALICE, Amount::new(1))
        else {
            panic!("expected InsufficientBalance");
        };
        assert_eq!(balance, Amount::ZERO);
        assert_eq!(needed, Amount::new(1));
    }

    #[test]
    fn zero_transfer_from_empty_account_succeeds() {
        let mut ledger = MemoryLedger::new();
        assert!(ledger.transfer(TOKEN, BOB, ALICE, Amount::ZERO).is_ok());
        assert_eq!(ledger.holder_count(), 0);
    }

    #[test]
    fn self_transfer_is_balance_neutral() {
        let mut ledger = funded();
        assert!(ledger.transfer(TOKEN, ALICE, ALICE, Amount::new(10)).is_ok());
        assert_eq!(ledger.balance_of(TOKEN, ALICE), Amount::new(1_000));
    }

    // -- allowances ----------------------------------------------------

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut ledger = funded();
        assert!(ledger.approve(TOKEN, ALICE, POOL, Amount::new(300)).is_ok());
        assert!(ledger
            .transfer_from(TOKEN, POOL, ALICE, POOL, Amount::new(200))
            .is_ok());
        assert_eq!(ledger.allowance(TOKEN, ALICE, POOL), Amount::new(100));
        assert_eq!(ledger.balance_of(TOKEN, POOL), Amount::new(200));
    }

    #[test]
    fn transfer_from_without_allowance_rejected() {
        let mut ledger = funded();
        let result = ledger.transfer_from(TOKEN, POOL, ALICE, POOL, Amount::new(1));
        assert!(matches!(result, Err(AmmError::InsufficientAllowance { .. })));
        assert_eq!(ledger.balance_of(TOKEN, ALICE), Amount::new(1_000));
    }

    #[test]
    fn failed_transfer_from_keeps_allowance() {
        let mut ledger = funded();
        assert!(ledger.approve(TOKEN, BOB, POOL, Amount::new(50)).is_ok());
        let result = ledger.transfer_from(TOKEN, POOL, BOB, POOL, Amount::new(50));
        assert!(matches!(result, Err(AmmError::InsufficientBalance { .. })));
        assert_eq!(ledger.allowance(TOKEN, BOB, POOL), Amount::new(50));
    }

    #[test]
    fn unlimited_allowance_is_not_consumed() {
        let mut ledger = funded();
        assert!(ledger.approve(TOKEN, ALICE, POOL, Amount::MAX).is_ok());
        assert!(ledger
            .transfer_from(TOKEN, POOL, ALICE, BOB, Amount::new(10))
            .is_ok());
        assert_eq!(ledger.allowance(TOKEN, ALICE, POOL), Amount::MAX);
    }
}
