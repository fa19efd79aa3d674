//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Swap reversibility**: base→paired→base returns ≤ the original.
//! 2. **Invariant growth**: `base × paired` never decreases across swaps.
//! 3. **Output monotonicity**: a larger input never yields a smaller output.
//! 4. **Liquidity conservation**: deposit then full redeem returns ≤ the
//!    deposit, and the pool ends empty.
//! 5. **Share accounting**: Σ balances == total and reserves equal the
//!    pool account's ledger balances after any operation sequence.

use proptest::prelude::*;

use super::Pool;
use crate::config::ShareTokenConfig;
use crate::domain::{AccountId, Amount, AssetId, PoolId, Shares, SwapDirection};
use crate::ledger::MemoryLedger;
use crate::math::get_amount_out;
use crate::traits::AssetLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const BASE: AssetId = AssetId::NATIVE;
const TOKEN: AssetId = AssetId::from_bytes([0x70; 32]);
const TRADERS: [AccountId; 3] = [
    AccountId::from_bytes([1; 32]),
    AccountId::from_bytes([2; 32]),
    AccountId::from_bytes([3; 32]),
];
const FUNDING: u128 = 1_000_000_000_000_000_000_000_000;

fn funded_pool() -> (Pool, MemoryLedger) {
    let pool = Pool::new(PoolId::new(0), BASE, TOKEN, ShareTokenConfig::default());
    let mut ledger = MemoryLedger::new();
    for who in TRADERS {
        for asset in [BASE, TOKEN] {
            let Ok(()) = ledger.mint(asset, who, Amount::new(FUNDING)) else {
                panic!("mint failed");
            };
            let Ok(()) = ledger.approve(asset, who, pool.account(), Amount::MAX) else {
                panic!("approve failed");
            };
        }
    }
    (pool, ledger)
}

fn seeded_pool(base: u128, paired: u128) -> (Pool, MemoryLedger) {
    let (mut pool, mut ledger) = funded_pool();
    let seeded = pool.add_liquidity(&mut ledger, TRADERS[0], Amount::new(paired), Amount::new(base));
    let Ok(_) = seeded else {
        panic!("seed deposit failed");
    };
    (pool, ledger)
}

fn swap(
    pool: &mut Pool,
    ledger: &mut MemoryLedger,
    who: AccountId,
    direction: SwapDirection,
    amount_in: u128,
) -> Option<u128> {
    pool.swap(ledger, who, Amount::new(amount_in), Amount::ZERO, direction, who)
        .ok()
        .map(|r| r.amount_out().get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves between 1e6 and 1e24 raw units.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000_000u128..=1_000_000_000_000_000_000_000_000u128
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![
        Just(SwapDirection::BaseToPaired),
        Just(SwapDirection::PairedToBase),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Deposit { who: usize, base: u128 },
    Withdraw { who: usize, per_mille: u128 },
    Swap { who: usize, direction: SwapDirection, amount: u128 },
    Transfer { from: usize, to: usize, per_mille: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3, 1u128..=1_000_000_000_000_000_000_000u128)
            .prop_map(|(who, base)| Op::Deposit { who, base }),
        (0usize..3, 0u128..=1_000).prop_map(|(who, per_mille)| Op::Withdraw { who, per_mille }),
        (0usize..3, direction_strategy(), 0u128..=1_000_000_000_000_000_000_000u128)
            .prop_map(|(who, direction, amount)| Op::Swap { who, direction, amount }),
        (0usize..3, 0usize..3, 0u128..=1_000)
            .prop_map(|(from, to, per_mille)| Op::Transfer { from, to, per_mille }),
    ]
}

// ---------------------------------------------------------------------------
// Properties 1-3: pricing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        rb in reserve_strategy(),
        rp in reserve_strategy(),
        divisor in 10u128..=10_000,
    ) {
        let (mut pool, mut ledger) = seeded_pool(rb, rp);
        let swap_in = (rb / divisor).max(1);

        let Some(received) = swap(&mut pool, &mut ledger, TRADERS[1], SwapDirection::BaseToPaired, swap_in) else {
            return Ok(());
        };
        if received == 0 { return Ok(()); }
        let Some(back) = swap(&mut pool, &mut ledger, TRADERS[1], SwapDirection::PairedToBase, received) else {
            return Ok(());
        };

        prop_assert!(
            back <= swap_in,
            "round-trip should lose value: back={} > original={}",
            back, swap_in
        );
    }

    #[test]
    fn prop_invariant_never_decreases(
        rb in reserve_strategy(),
        rp in reserve_strategy(),
        direction in direction_strategy(),
        amount in 0u128..=1_000_000_000_000_000_000_000u128,
    ) {
        let (mut pool, mut ledger) = seeded_pool(rb, rp);
        let before = pool.invariant_product();
        let _ = swap(&mut pool, &mut ledger, TRADERS[2], direction, amount);
        prop_assert!(pool.invariant_product() >= before);
        prop_assert!(!pool.base_reserve().is_zero());
        prop_assert!(!pool.paired_reserve().is_zero());
    }

    #[test]
    fn prop_output_monotonic_in_input(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        small in 0u128..=1_000_000_000_000_000_000u128,
        extra in 0u128..=1_000_000_000_000_000_000u128,
    ) {
        let (Ok(a), Ok(b)) = (
            get_amount_out(Amount::new(small), Amount::new(rin), Amount::new(rout)),
            get_amount_out(Amount::new(small + extra), Amount::new(rin), Amount::new(rout)),
        ) else {
            return Err(TestCaseError::fail("pricing failed on funded reserves"));
        };
        prop_assert!(a <= b);
        prop_assert!(b.get() < rout);
    }
}

// ---------------------------------------------------------------------------
// Properties 4-5: liquidity and share accounting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_liquidity_conservation(
        rb in reserve_strategy(),
        rp in reserve_strategy(),
    ) {
        let (mut pool, mut ledger) = seeded_pool(rb, rp);
        let all = pool.shares_of(TRADERS[0]);
        let Ok((base, paired)) = pool.remove_liquidity(&mut ledger, TRADERS[0], all) else {
            return Err(TestCaseError::fail("full redeem failed"));
        };
        prop_assert_eq!(base.get(), rb);
        prop_assert_eq!(paired.get(), rp);
        prop_assert!(pool.is_empty());
        prop_assert!(pool.base_reserve().is_zero() && pool.paired_reserve().is_zero());
    }

    #[test]
    fn prop_shares_and_reserves_stay_consistent(
        rb in reserve_strategy(),
        rp in reserve_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..24),
    ) {
        let (mut pool, mut ledger) = seeded_pool(rb, rp);

        for op in ops {
            let _applied = match op {
                Op::Deposit { who, base } => {
                    let paired = Amount::new(FUNDING);
                    pool.add_liquidity(&mut ledger, TRADERS[who], paired, Amount::new(base))
                        .is_ok()
                }
                Op::Withdraw { who, per_mille } => {
                    let held = pool.shares_of(TRADERS[who]).get();
                    let shares = Shares::new(held / 1_000 * per_mille);
                    pool.remove_liquidity(&mut ledger, TRADERS[who], shares).is_ok()
                }
                Op::Swap { who, direction, amount } => {
                    swap(&mut pool, &mut ledger, TRADERS[who], direction, amount).is_some()
                }
                Op::Transfer { from, to, per_mille } => {
                    let held = pool.shares_of(TRADERS[from]).get();
                    let shares = Shares::new(held / 1_000 * per_mille);
                    pool.transfer_shares(TRADERS[from], TRADERS[to], shares).is_ok()
                }
            };

            let sum: u128 = pool.share_ledger().iter().map(|(_, s)| s.get()).sum();
            prop_assert_eq!(sum, pool.total_shares().get());
            prop_assert_eq!(ledger.balance_of(BASE, pool.account()), pool.base_reserve());
            prop_assert_eq!(ledger.balance_of(TOKEN, pool.account()), pool.paired_reserve());
            prop_assert_eq!(pool.base_reserve().is_zero(), pool.is_empty());
            prop_assert_eq!(pool.paired_reserve().is_zero(), pool.is_empty());
        }
    }
}
