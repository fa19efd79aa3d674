//! Constant-product pool pairing the base asset with one paired asset.
//!
//! # Deposit
//!
//! - Empty pool: both amounts are taken as given and
//!   `floor(sqrt(base × paired))` shares are minted.
//! - Otherwise: `required = floor(base × paired_reserve / base_reserve)`
//!   paired units are taken and `floor(total × base / base_reserve)` shares
//!   are minted.
//!
//! # Withdrawal
//!
//! Each reserve pays out `floor(reserve × shares / total)`.  Redeeming every
//! outstanding share empties the pool exactly.
//!
//! # Swap
//!
//! Priced by [`get_amount_out`](crate::math::get_amount_out); the 1% fee
//! stays in the input reserve.
//!
//! Every effectful method first builds a quote from the live reserves,
//! then moves assets inside one [`atomically`](crate::ledger::atomically)
//! block, and commits the quoted state only once that block has succeeded.
//! The effectful methods are crate-internal; callers reach them through
//! [`Exchange`](crate::exchange::Exchange), which runs each one as its own
//! ledger transaction.
//!
//! Pool reserve accounts never act as trader, provider or recipient.  A
//! pool paying itself would be a ledger no-op while the reserve still
//! moved.

use ethnum::U256;

use super::quote::{DepositQuote, SwapQuote, WithdrawalQuote};
use super::share_ledger::{ShareLedger, ShareUpdate};
use crate::config::ShareTokenConfig;
use crate::domain::{
    AccountId, Amount, AssetId, PoolId, Rounding, Shares, SwapDirection, SwapResult,
};
use crate::error::{AmmError, Result};
use crate::ledger::{atomically, Transaction};
use crate::math::{self, mul_div, sqrt_product, wide_product, CheckedArithmetic};
use crate::traits::AssetLedger;

/// A two-asset constant-product liquidity pool.
///
/// # State
///
/// - `base_reserve` / `paired_reserve`: units held by [`account`](Self::account)
///   on the ledger
/// - `shares`: outstanding liquidity shares and their holders
///
/// Invariant: `base_reserve > 0 ⇔ paired_reserve > 0 ⇔ total_shares > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    id: PoolId,
    account: AccountId,
    base_asset: AssetId,
    paired_asset: AssetId,
    share_token: ShareTokenConfig,
    base_reserve: Amount,
    paired_reserve: Amount,
    shares: ShareLedger,
}

impl Pool {
    /// Creates an empty pool.  Pools are normally created through
    /// [`Factory::create_pool`](crate::factory::Factory::create_pool).
    #[must_use]
    pub fn new(
        id: PoolId,
        base_asset: AssetId,
        paired_asset: AssetId,
        share_token: ShareTokenConfig,
    ) -> Self {
        Self {
            id,
            account: AccountId::for_pool(id),
            base_asset,
            paired_asset,
            share_token,
            base_reserve: Amount::ZERO,
            paired_reserve: Amount::ZERO,
            shares: ShareLedger::new(),
        }
    }

    // -- identity -------------------------------------------------------

    /// Registry identifier.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Ledger account holding the reserves.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// The exchange-wide base asset.
    #[must_use]
    pub const fn base_asset(&self) -> AssetId {
        self.base_asset
    }

    /// The asset this pool pairs against the base.
    #[must_use]
    pub const fn paired_asset(&self) -> AssetId {
        self.paired_asset
    }

    /// Share-token metadata.
    #[must_use]
    pub const fn share_token(&self) -> &ShareTokenConfig {
        &self.share_token
    }

    /// Asset sold into the pool for `direction`.
    #[must_use]
    pub const fn input_asset(&self, direction: SwapDirection) -> AssetId {
        match direction {
            SwapDirection::BaseToPaired => self.base_asset,
            SwapDirection::PairedToBase => self.paired_asset,
        }
    }

    /// Asset paid out by the pool for `direction`.
    #[must_use]
    pub const fn output_asset(&self, direction: SwapDirection) -> AssetId {
        self.input_asset(direction.reversed())
    }

    // -- reads ----------------------------------------------------------

    /// Base units held.
    #[must_use]
    pub const fn base_reserve(&self) -> Amount {
        self.base_reserve
    }

    /// Paired units held.
    #[must_use]
    pub const fn paired_reserve(&self) -> Amount {
        self.paired_reserve
    }

    /// Outstanding shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.shares.total()
    }

    /// Shares held by `owner`.
    #[must_use]
    pub fn shares_of(&self, owner: AccountId) -> Shares {
        self.shares.balance_of(owner)
    }

    /// Read-only view of every share balance.
    #[must_use]
    pub const fn share_ledger(&self) -> &ShareLedger {
        &self.shares
    }

    /// Returns `true` when no shares are outstanding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shares.total().is_zero()
    }

    /// `base_reserve × paired_reserve`, never smaller after a swap.
    #[must_use]
    pub fn invariant_product(&self) -> U256 {
        wide_product(self.base_reserve.get(), self.paired_reserve.get())
    }

    /// Pure constant-product pricing; see [`math::get_amount_out`].
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidReserves`] if either reserve is zero.
    pub fn get_amount_out(
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        math::get_amount_out(amount_in, reserve_in, reserve_out)
    }

    /// Paired units received for selling `base_in` at current reserves.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidReserves`] on an empty pool.
    pub fn get_paired_amount(&self, base_in: Amount) -> Result<Amount> {
        Self::get_amount_out(base_in, self.base_reserve, self.paired_reserve)
    }

    /// Base units received for selling `paired_in` at current reserves.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidReserves`] on an empty pool.
    pub fn get_base_amount(&self, paired_in: Amount) -> Result<Amount> {
        Self::get_amount_out(paired_in, self.paired_reserve, self.base_reserve)
    }

    // -- quotes ---------------------------------------------------------

    /// Quotes a deposit of `base_provided` and up to `paired_desired`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientPairedAsset`] if `paired_desired` is below
    ///   the ratio-implied requirement.
    /// - [`AmmError::InsufficientLiquidityMinted`] if a non-zero deposit
    ///   would mint no shares.
    pub fn quote_deposit(&self, paired_desired: Amount, base_provided: Amount) -> Result<DepositQuote> {
        let (paired, shares) = if self.is_empty() {
            let shares = sqrt_product(base_provided.get(), paired_desired.get());
            (paired_desired, Shares::new(shares))
        } else {
            let required = Amount::new(mul_div(
                base_provided.get(),
                self.paired_reserve.get(),
                self.base_reserve.get(),
                Rounding::Down,
            )?);
            if paired_desired < required {
                return Err(AmmError::InsufficientPairedAsset {
                    required,
                    supplied: paired_desired,
                });
            }
            let minted = mul_div(
                self.total_shares().get(),
                base_provided.get(),
                self.base_reserve.get(),
                Rounding::Down,
            )?;
            (required, Shares::new(minted))
        };

        if shares.is_zero() && !(base_provided.is_zero() && paired.is_zero()) {
            return Err(AmmError::InsufficientLiquidityMinted {
                base: base_provided,
                paired,
            });
        }
        if shares.is_zero() {
            return Ok(DepositQuote {
                pool: self.id,
                base: Amount::ZERO,
                paired: Amount::ZERO,
                shares,
                base_reserve_after: self.base_reserve,
                paired_reserve_after: self.paired_reserve,
            });
        }

        let _ = self.total_shares().safe_add(&shares)?;
        Ok(DepositQuote {
            pool: self.id,
            base: base_provided,
            paired,
            shares,
            base_reserve_after: self.base_reserve.safe_add(&base_provided)?,
            paired_reserve_after: self.paired_reserve.safe_add(&paired)?,
        })
    }

    /// Quotes `owner` redeeming `shares`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientShares`] if `owner` holds fewer than `shares`.
    pub fn quote_withdrawal(&self, owner: AccountId, shares: Shares) -> Result<WithdrawalQuote> {
        let available = self.shares_of(owner);
        if shares > available {
            return Err(AmmError::InsufficientShares {
                requested: shares,
                available,
            });
        }
        if shares.is_zero() {
            return Ok(WithdrawalQuote {
                pool: self.id,
                shares,
                base: Amount::ZERO,
                paired: Amount::ZERO,
                base_reserve_after: self.base_reserve,
                paired_reserve_after: self.paired_reserve,
            });
        }

        let total = self.total_shares().get();
        let base = Amount::new(mul_div(
            self.base_reserve.get(),
            shares.get(),
            total,
            Rounding::Down,
        )?);
        let paired = Amount::new(mul_div(
            self.paired_reserve.get(),
            shares.get(),
            total,
            Rounding::Down,
        )?);

        Ok(WithdrawalQuote {
            pool: self.id,
            shares,
            base,
            paired,
            base_reserve_after: self.base_reserve.safe_sub(&base)?,
            paired_reserve_after: self.paired_reserve.safe_sub(&paired)?,
        })
    }

    /// Quotes selling `amount_in` in `direction` at the live reserves.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidReserves`] if the pool is empty and `amount_in`
    /// is non-zero.
    pub fn quote_swap(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapQuote> {
        if amount_in.is_zero() {
            return Ok(SwapQuote {
                pool: self.id,
                direction,
                amount_in,
                amount_out: Amount::ZERO,
                base_reserve_after: self.base_reserve,
                paired_reserve_after: self.paired_reserve,
            });
        }

        let (base_after, paired_after, amount_out) = match direction {
            SwapDirection::BaseToPaired => {
                let out = self.get_paired_amount(amount_in)?;
                (
                    self.base_reserve.safe_add(&amount_in)?,
                    self.paired_reserve.safe_sub(&out)?,
                    out,
                )
            }
            SwapDirection::PairedToBase => {
                let out = self.get_base_amount(amount_in)?;
                (
                    self.base_reserve.safe_sub(&out)?,
                    self.paired_reserve.safe_add(&amount_in)?,
                    out,
                )
            }
        };

        Ok(SwapQuote {
            pool: self.id,
            direction,
            amount_in,
            amount_out,
            base_reserve_after: base_after,
            paired_reserve_after: paired_after,
        })
    }

    // -- effects --------------------------------------------------------

    /// Deposits liquidity on behalf of `caller`; returns the minted shares.
    ///
    /// The caller must have approved this pool's [`account`](Self::account)
    /// for both assets.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolAccount`] if `caller` is a pool reserve account.
    /// - Quote errors from [`quote_deposit`](Self::quote_deposit).
    /// - Ledger errors from pulling the assets.
    pub(crate) fn add_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        paired_desired: Amount,
        base_provided: Amount,
    ) -> Result<Shares> {
        reject_pool_account(caller)?;
        let quote = self.quote_deposit(paired_desired, base_provided)?;
        if quote.is_noop() {
            return Ok(Shares::ZERO);
        }
        let update = self.shares.plan_mint(caller, quote.shares)?;

        atomically(ledger, |tx| self.settle_deposit(tx, caller, &quote))?;
        self.commit_deposit(&quote, update);

        tracing::debug!(
            pool = %self.id,
            provider = %caller,
            base = %quote.base,
            paired = %quote.paired,
            shares = %quote.shares,
            "liquidity added"
        );
        Ok(quote.shares)
    }

    /// Redeems `shares` held by `caller`; returns `(base, paired)` paid out.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolAccount`] if `caller` is a pool reserve account.
    /// - [`AmmError::InsufficientShares`] if `caller` holds fewer than
    ///   `shares`.
    /// - Ledger errors from paying out.
    pub(crate) fn remove_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        shares: Shares,
    ) -> Result<(Amount, Amount)> {
        reject_pool_account(caller)?;
        let quote = self.quote_withdrawal(caller, shares)?;
        if quote.shares.is_zero() {
            return Ok((Amount::ZERO, Amount::ZERO));
        }
        let update = self.shares.plan_burn(caller, quote.shares)?;

        atomically(ledger, |tx| self.settle_withdrawal(tx, caller, &quote))?;
        self.commit_withdrawal(&quote, update);

        tracing::debug!(
            pool = %self.id,
            provider = %caller,
            shares = %quote.shares,
            base = %quote.base,
            paired = %quote.paired,
            "liquidity removed"
        );
        Ok((quote.base, quote.paired))
    }

    /// Sells `amount_in` from `caller` and pays the output to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolAccount`] if `caller` or `recipient` is a pool
    ///   reserve account.
    /// - [`AmmError::InsufficientOutputAmount`] if the output is below
    ///   `min_amount_out`.
    /// - [`AmmError::InvalidReserves`] on an empty pool.
    /// - Ledger errors from the pull or the push.
    pub(crate) fn swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        amount_in: Amount,
        min_amount_out: Amount,
        direction: SwapDirection,
        recipient: AccountId,
    ) -> Result<SwapResult> {
        reject_pool_account(caller)?;
        reject_pool_account(recipient)?;
        let quote = self.quote_swap(direction, amount_in)?;
        if quote.amount_out < min_amount_out {
            return Err(AmmError::InsufficientOutputAmount {
                amount_out: quote.amount_out,
                min_amount_out,
            });
        }
        if quote.amount_in.is_zero() {
            return Ok(SwapResult::new(self.id, direction, Amount::ZERO, Amount::ZERO));
        }

        atomically(ledger, |tx| self.settle_swap(tx, caller, recipient, &quote))?;
        self.commit_swap(&quote);

        tracing::debug!(
            pool = %self.id,
            trader = %caller,
            %recipient,
            ?direction,
            amount_in = %quote.amount_in,
            amount_out = %quote.amount_out,
            "swap executed"
        );
        Ok(SwapResult::new(
            self.id,
            direction,
            quote.amount_in,
            quote.amount_out,
        ))
    }

    /// Moves shares between holders.  Reserves are untouched.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolAccount`] if `from` or `to` is a pool reserve
    ///   account.
    /// - [`AmmError::InsufficientShares`] if `from` holds fewer than
    ///   `shares`.
    pub fn transfer_shares(&mut self, from: AccountId, to: AccountId, shares: Shares) -> Result<()> {
        reject_pool_account(from)?;
        reject_pool_account(to)?;
        self.shares.transfer(from, to, shares)?;
        tracing::debug!(pool = %self.id, %from, %to, %shares, "shares transferred");
        Ok(())
    }

    // -- settlement -----------------------------------------------------
    //
    // Ledger movements only.  Pool state is untouched until the enclosing
    // transaction has succeeded and the matching commit runs.

    pub(crate) fn settle_deposit<L: AssetLedger>(
        &self,
        tx: &mut Transaction<'_, L>,
        caller: AccountId,
        quote: &DepositQuote,
    ) -> Result<()> {
        self.pull(tx, self.base_asset, caller, quote.base)?;
        self.pull(tx, self.paired_asset, caller, quote.paired)
    }

    pub(crate) fn settle_withdrawal<L: AssetLedger>(
        &self,
        tx: &mut Transaction<'_, L>,
        caller: AccountId,
        quote: &WithdrawalQuote,
    ) -> Result<()> {
        self.push(tx, self.base_asset, caller, quote.base)?;
        self.push(tx, self.paired_asset, caller, quote.paired)
    }

    pub(crate) fn settle_swap<L: AssetLedger>(
        &self,
        tx: &mut Transaction<'_, L>,
        caller: AccountId,
        recipient: AccountId,
        quote: &SwapQuote,
    ) -> Result<()> {
        self.pull(tx, self.input_asset(quote.direction), caller, quote.amount_in)?;
        self.push(tx, self.output_asset(quote.direction), recipient, quote.amount_out)
    }

    // -- commit ---------------------------------------------------------

    fn commit_deposit(&mut self, quote: &DepositQuote, update: ShareUpdate) {
        debug_assert_eq!(quote.pool, self.id);
        self.shares.apply(update);
        self.base_reserve = quote.base_reserve_after;
        self.paired_reserve = quote.paired_reserve_after;
    }

    fn commit_withdrawal(&mut self, quote: &WithdrawalQuote, update: ShareUpdate) {
        debug_assert_eq!(quote.pool, self.id);
        self.shares.apply(update);
        self.base_reserve = quote.base_reserve_after;
        self.paired_reserve = quote.paired_reserve_after;
    }

    pub(crate) fn commit_swap(&mut self, quote: &SwapQuote) {
        debug_assert_eq!(quote.pool, self.id);
        self.base_reserve = quote.base_reserve_after;
        self.paired_reserve = quote.paired_reserve_after;
    }

    // -- ledger plumbing ------------------------------------------------

    fn pull<L: AssetLedger>(
        &self,
        tx: &mut Transaction<'_, L>,
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        tx.transfer_from(asset, self.account, from, self.account, amount)
    }

    fn push<L: AssetLedger>(
        &self,
        tx: &mut Transaction<'_, L>,
        asset: AssetId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        tx.transfer(asset, self.account, to, amount)
    }
}

pub(crate) fn reject_pool_account(account: AccountId) -> Result<()> {
    if account.is_pool_account() {
        return Err(AmmError::PoolAccount(account));
    }
    Ok(())
}
