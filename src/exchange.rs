//! The exchange facade: factory, router and ledger behind one API.

use crate::config::ExchangeConfig;
use crate::domain::{AccountId, Amount, AssetId, PoolId, Shares, SwapDirection};
use crate::error::Result;
use crate::factory::Factory;
use crate::pools::Pool;
use crate::router::{RoutePlan, Router};
use crate::traits::AssetLedger;

/// A complete exchange over an [`AssetLedger`].
///
/// Every mutating method is one atomic operation: it either completes in
/// full or returns `Err` with pools, registry and ledger unchanged.  Pool
/// state is committed only after the operation's ledger transaction has
/// succeeded.
/// Exclusive `&mut self` access serializes operations; wrap the exchange
/// in a [`SharedExchange`](crate::sync::SharedExchange) to share it
/// across threads.
///
/// # Approvals
///
/// - Pool operations pull assets with the pool's
///   [`account`](Pool::account) as spender.
/// - [`swap_assets`](Self::swap_assets) pulls with the router's
///   [`account`](Router::account) as spender.
///
/// # Example
///
/// ```rust
/// use hydra_dex::prelude::*;
///
/// let token = AssetId::from_bytes([7; 32]);
/// let alice = AccountId::from_bytes([1; 32]);
/// let e18 = 1_000_000_000_000_000_000u128;
///
/// let mut ledger = MemoryLedger::new();
/// ledger.mint(AssetId::NATIVE, alice, Amount::new(1_000 * e18)).expect("mint");
/// ledger.mint(token, alice, Amount::new(1_000 * e18)).expect("mint");
///
/// let mut exchange = Exchange::new(ExchangeConfig::default(), ledger).expect("valid config");
/// let pool = exchange.create_pool(token).expect("new pool");
/// let account = exchange.pool(pool).expect("registered").account();
/// for asset in [AssetId::NATIVE, token] {
///     exchange.ledger_mut().approve(asset, alice, account, Amount::MAX).expect("approve");
/// }
///
/// let shares = exchange
///     .add_liquidity(alice, token, Amount::new(200 * e18), Amount::new(100 * e18))
///     .expect("deposit");
/// assert_eq!(shares, Shares::new(141_421_356_237_309_504_880));
/// ```
#[derive(Debug)]
pub struct Exchange<L: AssetLedger> {
    config: ExchangeConfig,
    factory: Factory,
    router: Router,
    ledger: L,
}

impl<L: AssetLedger> Exchange<L> {
    /// Creates an exchange with no pools.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidConfiguration`](crate::error::AmmError::InvalidConfiguration)
    /// if `config` fails validation.
    pub fn new(config: ExchangeConfig, ledger: L) -> Result<Self> {
        config.validate()?;
        let factory = Factory::new(config.base_asset(), config.share_token().clone());
        let router = Router::new(config.router_account());
        tracing::info!(
            base = %config.base_asset(),
            router = %config.router_account(),
            "exchange initialised"
        );
        Ok(Self {
            config,
            factory,
            router,
            ledger,
        })
    }

    // -- accessors ------------------------------------------------------

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// The asset every pool pairs against.
    #[must_use]
    pub const fn base_asset(&self) -> AssetId {
        self.config.base_asset()
    }

    /// The pool registry.
    #[must_use]
    pub const fn factory(&self) -> &Factory {
        &self.factory
    }

    /// The router.
    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// The underlying ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable ledger access for funding and approvals.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Consumes the exchange, returning its ledger.
    pub fn into_ledger(self) -> L {
        self.ledger
    }

    // -- registry -------------------------------------------------------

    /// Registers an empty pool for `asset`.
    ///
    /// # Errors
    ///
    /// See [`Factory::create_pool`].
    pub fn create_pool(&mut self, asset: AssetId) -> Result<PoolId> {
        self.factory.create_pool(asset)
    }

    /// Pool registered for `asset`, if any.
    #[must_use]
    pub fn get_pool(&self, asset: AssetId) -> Option<PoolId> {
        self.router.get_pool(&self.factory, asset)
    }

    /// Borrows a pool by id.
    ///
    /// # Errors
    ///
    /// See [`Factory::pool`].
    pub fn pool(&self, id: PoolId) -> Result<&Pool> {
        self.factory.pool(id)
    }

    /// Borrows the pool for `asset`.
    ///
    /// # Errors
    ///
    /// See [`Factory::pool_for`].
    pub fn pool_for(&self, asset: AssetId) -> Result<&Pool> {
        self.factory.pool_for(asset)
    }

    // -- pool reads -----------------------------------------------------

    /// Base reserve of `asset`'s pool.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`](crate::error::AmmError::PoolNotFound).
    pub fn base_reserve(&self, asset: AssetId) -> Result<Amount> {
        Ok(self.factory.pool_for(asset)?.base_reserve())
    }

    /// Paired reserve of `asset`'s pool.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`](crate::error::AmmError::PoolNotFound).
    pub fn paired_reserve(&self, asset: AssetId) -> Result<Amount> {
        Ok(self.factory.pool_for(asset)?.paired_reserve())
    }

    /// Shares `owner` holds in `asset`'s pool.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`](crate::error::AmmError::PoolNotFound).
    pub fn shares_of(&self, asset: AssetId, owner: AccountId) -> Result<Shares> {
        Ok(self.factory.pool_for(asset)?.shares_of(owner))
    }

    // -- pool operations ------------------------------------------------

    /// Deposits `base_provided` and up to `paired_desired` into `asset`'s
    /// pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`](crate::error::AmmError::PoolNotFound) if no pool is registered for `asset`.
    /// - [`AmmError::PoolAccount`](crate::error::AmmError::PoolAccount) if `caller` is a pool reserve account.
    /// - Quote errors from [`Pool::quote_deposit`].
    /// - Ledger errors from pulling either asset.
    pub fn add_liquidity(
        &mut self,
        caller: AccountId,
        asset: AssetId,
        paired_desired: Amount,
        base_provided: Amount,
    ) -> Result<Shares> {
        self.factory
            .pool_for_mut(asset)?
            .add_liquidity(&mut self.ledger, caller, paired_desired, base_provided)
    }

    /// Redeems `shares` of `asset`'s pool; returns `(base, paired)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`](crate::error::AmmError::PoolNotFound) if no pool is registered for `asset`.
    /// - [`AmmError::PoolAccount`](crate::error::AmmError::PoolAccount) if `caller` is a pool reserve account.
    /// - [`AmmError::InsufficientShares`](crate::error::AmmError::InsufficientShares) if `caller` holds fewer than
    ///   `shares`.
    /// - Ledger errors from paying out.
    pub fn remove_liquidity(
        &mut self,
        caller: AccountId,
        asset: AssetId,
        shares: Shares,
    ) -> Result<(Amount, Amount)> {
        self.factory
            .pool_for_mut(asset)?
            .remove_liquidity(&mut self.ledger, caller, shares)
    }

    /// Single-pool swap against `asset`'s pool; returns the output amount.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`](crate::error::AmmError::PoolNotFound) if no pool is registered for `asset`.
    /// - [`AmmError::PoolAccount`](crate::error::AmmError::PoolAccount) if `caller` or `recipient` is a pool
    ///   reserve account.
    /// - [`AmmError::InsufficientOutputAmount`](crate::error::AmmError::InsufficientOutputAmount) below `min_amount_out`.
    /// - [`AmmError::InvalidReserves`](crate::error::AmmError::InvalidReserves) on an empty pool.
    /// - Ledger errors from the pull or the push.
    pub fn swap(
        &mut self,
        caller: AccountId,
        asset: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        direction: SwapDirection,
        recipient: AccountId,
    ) -> Result<Amount> {
        let result = self.factory.pool_for_mut(asset)?.swap(
            &mut self.ledger,
            caller,
            amount_in,
            min_amount_out,
            direction,
            recipient,
        )?;
        Ok(result.amount_out())
    }

    /// Moves liquidity shares of `asset`'s pool between holders.
    ///
    /// # Errors
    ///
    /// See [`Pool::transfer_shares`], plus `PoolNotFound`.
    pub fn transfer_shares(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        shares: Shares,
    ) -> Result<()> {
        self.factory
            .pool_for_mut(asset)?
            .transfer_shares(from, to, shares)
    }

    // -- routing --------------------------------------------------------

    /// Resolves and prices the path from `asset_in` to `asset_out`.
    ///
    /// # Errors
    ///
    /// See [`Router::plan`].
    pub fn plan(&self, asset_in: AssetId, asset_out: AssetId, amount_in: Amount) -> Result<RoutePlan> {
        self.router
            .plan(&self.factory, asset_in, asset_out, amount_in)
    }

    /// Output of selling `amount_in` of `asset_in` for `asset_out` at the
    /// current reserves.
    ///
    /// # Errors
    ///
    /// See [`Router::get_amount_out`].
    pub fn get_amount_out(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount> {
        self.router
            .get_amount_out(&self.factory, asset_in, asset_out, amount_in)
    }

    /// Routed swap between any two assets; returns the delivered amount.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolAccount`](crate::error::AmmError::PoolAccount) if `caller` or `recipient` is a pool
    ///   reserve account.
    /// - Planning errors from [`Router::plan`].
    /// - [`AmmError::InsufficientOutputAmount`](crate::error::AmmError::InsufficientOutputAmount) if the final output is below
    ///   `min_amount_out`.
    /// - Ledger errors from any transfer.
    pub fn swap_assets(
        &mut self,
        caller: AccountId,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        recipient: AccountId,
    ) -> Result<Amount> {
        self.router.swap(
            &mut self.factory,
            &mut self.ledger,
            caller,
            asset_in,
            asset_out,
            amount_in,
            min_amount_out,
            recipient,
        )
    }
}
