//! Stateless swap orchestration across one or two pools.
//!
//! # Routing
//!
//! | `asset_in` | `asset_out` | Path |
//! |------------|-------------|------|
//! | base | X | Pool(X), base → X |
//! | X | base | Pool(X), X → base |
//! | X | Y | Pool(X), X → base, then Pool(Y), base → Y |
//!
//! # Execution
//!
//! A routed swap plans against the live reserves and checks the slippage
//! bound once for the whole path.  It then moves assets in one ledger
//! transaction:
//!
//! 1. caller → first pool (`transfer_from`, router account as spender)
//! 2. each pool → the next pool's account, or → recipient on the last hop
//!
//! Only after that transaction succeeds does every pool commit its quoted
//! reserves.  The intermediate base asset never touches the caller.

use super::route::{RoutePlan, SwapStep};
use crate::domain::{AccountId, Amount, AssetId, PoolId, SwapDirection};
use crate::error::{AmmError, Result};
use crate::factory::Factory;
use crate::ledger::{atomically, Transaction};
use crate::pools::{reject_pool_account, Pool};
use crate::traits::AssetLedger;

/// Multi-hop swap router.
///
/// Holds no state besides the account it spends as: callers approve
/// [`account`](Self::account) for the asset they sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Router {
    account: AccountId,
}

impl Router {
    /// Creates a router spending as `account`.
    #[must_use]
    pub const fn new(account: AccountId) -> Self {
        Self { account }
    }

    /// The router's spender identity.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Pool registered for `asset`, if any.
    #[must_use]
    pub fn get_pool(&self, factory: &Factory, asset: AssetId) -> Option<PoolId> {
        factory.get_pool(asset)
    }

    /// Resolves the path from `asset_in` to `asset_out` and prices every hop
    /// at the pools' current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `asset_in == asset_out`.
    /// - [`AmmError::PoolNotFound`] if a required pool is missing.
    /// - [`AmmError::InvalidReserves`] if a hop prices against an empty pool.
    pub fn plan(
        &self,
        factory: &Factory,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<RoutePlan> {
        if asset_in == asset_out {
            return Err(AmmError::IdenticalAssets(asset_in));
        }
        let base = factory.base_asset();

        let steps = if asset_in == base {
            let pool = factory.pool_for(asset_out)?;
            vec![step(pool, SwapDirection::BaseToPaired, amount_in)?]
        } else if asset_out == base {
            let pool = factory.pool_for(asset_in)?;
            vec![step(pool, SwapDirection::PairedToBase, amount_in)?]
        } else {
            let first_pool = factory.pool_for(asset_in)?;
            let second_pool = factory.pool_for(asset_out)?;
            let first = step(first_pool, SwapDirection::PairedToBase, amount_in)?;
            let second = step(second_pool, SwapDirection::BaseToPaired, first.amount_out())?;
            vec![first, second]
        };

        Ok(RoutePlan::new(steps))
    }

    /// Output of selling `amount_in` of `asset_in` for `asset_out`.
    ///
    /// # Errors
    ///
    /// Same as [`plan`](Self::plan).
    pub fn get_amount_out(
        &self,
        factory: &Factory,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount> {
        Ok(self.plan(factory, asset_in, asset_out, amount_in)?.amount_out())
    }

    /// Sells `amount_in` of `asset_in` from `caller` and delivers at least
    /// `min_amount_out` of `asset_out` to `recipient`.
    ///
    /// The transfers run as one transaction on `ledger`; pools commit only
    /// once it has succeeded, so any failure leaves every pool untouched.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolAccount`] if `caller` or `recipient` is a pool
    ///   reserve account.
    /// - Planning errors from [`plan`](Self::plan).
    /// - [`AmmError::InsufficientOutputAmount`] if the final output is below
    ///   `min_amount_out`.
    /// - Ledger errors from any transfer.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn swap<L: AssetLedger>(
        &self,
        factory: &mut Factory,
        ledger: &mut L,
        caller: AccountId,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        min_amount_out: Amount,
        recipient: AccountId,
    ) -> Result<Amount> {
        reject_pool_account(caller)?;
        reject_pool_account(recipient)?;
        let plan = self.plan(factory, asset_in, asset_out, amount_in)?;
        let amount_out = plan.amount_out();
        if amount_out < min_amount_out {
            return Err(AmmError::InsufficientOutputAmount {
                amount_out,
                min_amount_out,
            });
        }
        if amount_in.is_zero() {
            return Ok(Amount::ZERO);
        }

        match plan.steps() {
            [only] => {
                let pool = factory.pool_mut(only.pool())?;
                let account = pool.account();
                atomically(ledger, |tx| {
                    self.pull(tx, only, caller, account)?;
                    push(tx, only, account, recipient)
                })?;
                pool.commit_swap(only.quote());
            }
            [first, second] => {
                let (first_pool, second_pool) = factory.pair_mut(first.pool(), second.pool())?;
                let (first_account, second_account) = (first_pool.account(), second_pool.account());
                atomically(ledger, |tx| {
                    self.pull(tx, first, caller, first_account)?;
                    push(tx, first, first_account, second_account)?;
                    push(tx, second, second_account, recipient)
                })?;
                first_pool.commit_swap(first.quote());
                second_pool.commit_swap(second.quote());
            }
            _ => return Err(AmmError::InvalidConfiguration("unsupported route length")),
        }

        tracing::debug!(
            trader = %caller,
            %recipient,
            %asset_in,
            %asset_out,
            %amount_in,
            %amount_out,
            hops = plan.hops(),
            "routed swap executed"
        );
        Ok(amount_out)
    }

    fn pull<L: AssetLedger>(
        &self,
        tx: &mut Transaction<'_, L>,
        step: &SwapStep,
        caller: AccountId,
        pool_account: AccountId,
    ) -> Result<()> {
        tx.transfer_from(
            step.asset_in(),
            self.account,
            caller,
            pool_account,
            step.amount_in(),
        )
    }
}

fn step(pool: &Pool, direction: SwapDirection, amount_in: Amount) -> Result<SwapStep> {
    let quote = pool.quote_swap(direction, amount_in)?;
    Ok(SwapStep::new(
        pool.input_asset(direction),
        pool.output_asset(direction),
        quote,
    ))
}

fn push<L: AssetLedger>(
    tx: &mut Transaction<'_, L>,
    step: &SwapStep,
    from: AccountId,
    to: AccountId,
) -> Result<()> {
    if step.amount_out().is_zero() {
        return Ok(());
    }
    tx.transfer(step.asset_out(), from, to, step.amount_out())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::{ShareTokenConfig, DEFAULT_ROUTER_ACCOUNT};
    use crate::ledger::MemoryLedger;
    use crate::math::get_amount_out;

    const E18: u128 = 1_000_000_000_000_000_000;
    const BASE: AssetId = AssetId::NATIVE;
    const TOKEN_A: AssetId = AssetId::from_bytes([0xa0; 32]);
    const TOKEN_B: AssetId = AssetId::from_bytes([0xb0; 32]);
    const LP: AccountId = AccountId::from_bytes([0x11; 32]);
    const TRADER: AccountId = AccountId::from_bytes([0x22; 32]);

    fn e18(units: u128) -> Amount {
        Amount::new(units * E18)
    }

    struct Fixture {
        factory: Factory,
        ledger: MemoryLedger,
        router: Router,
    }

    fn fixture() -> Fixture {
        let mut factory = Factory::new(BASE, ShareTokenConfig::default());
        let mut ledger = MemoryLedger::new();
        let router = Router::new(DEFAULT_ROUTER_ACCOUNT);

        for asset in [BASE, TOKEN_A, TOKEN_B] {
            for who in [LP, TRADER] {
                let Ok(()) = ledger.mint(asset, who, e18(100_000)) else {
                    panic!("mint failed");
                };
            }
            let Ok(()) = ledger.approve(asset, TRADER, router.account(), Amount::MAX) else {
                panic!("approve failed");
            };
        }

        for (asset, base, paired) in [(TOKEN_A, 1_000, 2_000), (TOKEN_B, 1_000, 500)] {
            let Ok(id) = factory.create_pool(asset) else {
                panic!("create failed");
            };
            let Ok(pool) = factory.pool_mut(id) else {
                panic!("pool missing");
            };
            for a in [BASE, asset] {
                let Ok(()) = ledger.approve(a, LP, pool.account(), Amount::MAX) else {
                    panic!("approve failed");
                };
            }
            let Ok(_) = pool.add_liquidity(&mut ledger, LP, e18(paired), e18(base)) else {
                panic!("seed failed");
            };
        }

        Fixture {
            factory,
            ledger,
            router,
        }
    }

    fn routed_swap(
        f: &mut Fixture,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<Amount> {
        let Fixture {
            factory,
            ledger,
            router,
        } = f;
        router.swap(factory, ledger, TRADER, asset_in, asset_out, amount_in, min_out, TRADER)
    }

    // -- planning -------------------------------------------------------

    #[test]
    fn single_hop_directions() {
        let f = fixture();
        let Ok(buy) = f.router.plan(&f.factory, BASE, TOKEN_A, e18(1)) else {
            panic!("plan failed");
        };
        assert_eq!(buy.hops(), 1);
        assert_eq!(buy.steps()[0].direction(), SwapDirection::BaseToPaired);

        let Ok(sell) = f.router.plan(&f.factory, TOKEN_A, BASE, e18(1)) else {
            panic!("plan failed");
        };
        assert_eq!(sell.hops(), 1);
        assert_eq!(sell.steps()[0].direction(), SwapDirection::PairedToBase);
    }

    #[test]
    fn two_hop_quote_chains_pool_quotes() {
        let f = fixture();
        let Ok(out) = f.router.get_amount_out(&f.factory, TOKEN_A, TOKEN_B, e18(10)) else {
            panic!("quote failed");
        };
        let (Ok(mid), Ok(pool_b)) = (
            get_amount_out(e18(10), e18(2_000), e18(1_000)),
            f.factory.pool_for(TOKEN_B),
        ) else {
            panic!("hop quote failed");
        };
        assert_eq!(pool_b.get_paired_amount(mid), Ok(out));
    }

    #[test]
    fn identical_assets_rejected() {
        let f = fixture();
        assert_eq!(
            f.router.plan(&f.factory, TOKEN_A, TOKEN_A, e18(1)),
            Err(AmmError::IdenticalAssets(TOKEN_A))
        );
    }

    #[test]
    fn missing_pool_reported() {
        let f = fixture();
        let missing = AssetId::from_bytes([0xcc; 32]);
        assert_eq!(
            f.router.get_amount_out(&f.factory, TOKEN_A, missing, e18(1)),
            Err(AmmError::PoolNotFound { asset: missing })
        );
        assert_eq!(f.router.get_pool(&f.factory, missing), None);
    }

    // -- execution ------------------------------------------------------

    #[test]
    fn two_hop_swap_delivers_quote_and_skips_caller() {
        let mut f = fixture();
        let Ok(quoted) = f.router.get_amount_out(&f.factory, TOKEN_A, TOKEN_B, e18(10)) else {
            panic!("quote failed");
        };
        let base_before = f.ledger.balance_of(BASE, TRADER);

        assert_eq!(routed_swap(&mut f, TOKEN_A, TOKEN_B, e18(10), quoted), Ok(quoted));
        assert_eq!(f.ledger.balance_of(BASE, TRADER), base_before);
        assert_eq!(f.ledger.balance_of(TOKEN_A, TRADER), e18(99_990));
        assert_eq!(
            f.ledger.balance_of(TOKEN_B, TRADER),
            Amount::new(100_000 * E18 + quoted.get())
        );
        for pool in f.factory.all_pools() {
            assert_eq!(f.ledger.balance_of(BASE, pool.account()), pool.base_reserve());
            assert_eq!(
                f.ledger.balance_of(pool.paired_asset(), pool.account()),
                pool.paired_reserve()
            );
        }
    }

    #[test]
    fn slippage_failure_changes_nothing() {
        let mut f = fixture();
        let Ok(quoted) = f.router.get_amount_out(&f.factory, TOKEN_A, TOKEN_B, e18(10)) else {
            panic!("quote failed");
        };
        let pools_before: Vec<Pool> = f.factory.all_pools().cloned().collect();
        let result = routed_swap(&mut f, TOKEN_A, TOKEN_B, e18(10), Amount::new(quoted.get() + 1));
        assert!(matches!(
            result,
            Err(AmmError::InsufficientOutputAmount { .. })
        ));
        let pools_after: Vec<Pool> = f.factory.all_pools().cloned().collect();
        assert_eq!(pools_before, pools_after);
        assert_eq!(f.ledger.balance_of(TOKEN_A, TRADER), e18(100_000));
    }

    #[test]
    fn missing_allowance_leaves_every_pool_untouched() {
        let mut f = fixture();
        let pools_before: Vec<Pool> = f.factory.all_pools().cloned().collect();
        let Ok(()) = f.ledger.approve(TOKEN_A, TRADER, f.router.account(), e18(1)) else {
            panic!("approve failed");
        };
        let result = routed_swap(&mut f, TOKEN_A, TOKEN_B, e18(10), Amount::ZERO);
        assert!(matches!(result, Err(AmmError::InsufficientAllowance { .. })));
        let pools_after: Vec<Pool> = f.factory.all_pools().cloned().collect();
        assert_eq!(pools_before, pools_after);
        assert_eq!(f.ledger.allowance(TOKEN_A, TRADER, f.router.account()), e18(1));
    }

    #[test]
    fn pool_accounts_cannot_receive_routed_output() {
        let mut f = fixture();
        let pools_before: Vec<Pool> = f.factory.all_pools().cloned().collect();
        let accounts: Vec<AccountId> = pools_before.iter().map(Pool::account).collect();
        for account in accounts {
            let Fixture {
                factory,
                ledger,
                router,
            } = &mut f;
            let result = router.swap(
                factory,
                ledger,
                TRADER,
                TOKEN_A,
                TOKEN_B,
                e18(10),
                Amount::ZERO,
                account,
            );
            assert_eq!(result, Err(AmmError::PoolAccount(account)));
        }
        let pools_after: Vec<Pool> = f.factory.all_pools().cloned().collect();
        assert_eq!(pools_before, pools_after);
        assert_eq!(f.ledger.balance_of(TOKEN_A, TRADER), e18(100_000));
    }

    #[test]
    fn pool_account_cannot_sell_through_router() {
        let mut f = fixture();
        let Ok(account) = f.factory.pool_for(TOKEN_A).map(Pool::account) else {
            panic!("pool missing");
        };
        let Fixture {
            factory,
            ledger,
            router,
        } = &mut f;
        let result = router.swap(
            factory,
            ledger,
            account,
            TOKEN_A,
            BASE,
            e18(1),
            Amount::ZERO,
            TRADER,
        );
        assert_eq!(result, Err(AmmError::PoolAccount(account)));
    }

    #[test]
    fn zero_amount_is_noop() {
        let mut f = fixture();
        assert_eq!(
            routed_swap(&mut f, TOKEN_A, TOKEN_B, Amount::ZERO, Amount::ZERO),
            Ok(Amount::ZERO)
        );
    }
}
