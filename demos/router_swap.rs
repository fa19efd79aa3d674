//! Two pools, one routed swap.
//!
//! Seeds a USDC pool and a DAI pool against the native base asset, then
//! swaps USDC for DAI through the router and prints every hop.
//!
//! ```text
//! RUST_LOG=hydra_dex=debug cargo run --example router_swap
//! ```

use hydra_dex::prelude::*;
use tracing_subscriber::EnvFilter;

fn units(whole: u128) -> Result<Amount> {
    Amount::from_whole(whole, Decimals::LEDGER)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hydra_dex=info")),
        )
        .init();

    let usdc = AssetId::from_bytes([0x01; 32]);
    let dai = AssetId::from_bytes([0x02; 32]);
    let lp = AccountId::from_bytes([0xa1; 32]);
    let trader = AccountId::from_bytes([0xb0; 32]);

    let mut ledger = MemoryLedger::new();
    ledger.issue(usdc, "USD Coin", "USDC", Decimals::LEDGER, lp, units(1_000_000)?)?;
    ledger.issue(dai, "Dai", "DAI", Decimals::LEDGER, lp, units(1_000_000)?)?;
    ledger.mint(AssetId::NATIVE, lp, units(10_000)?)?;
    ledger.transfer(usdc, lp, trader, units(1_000)?)?;

    let mut exchange = Exchange::new(ExchangeConfig::default(), ledger)?;
    for (asset, base, paired) in [(usdc, 1_000, 2_000), (dai, 1_000, 500)] {
        let id = exchange.create_pool(asset)?;
        let pool_account = exchange.pool(id)?.account();
        for a in [AssetId::NATIVE, asset] {
            exchange.ledger_mut().approve(a, lp, pool_account, Amount::MAX)?;
        }
        let shares = exchange.add_liquidity(lp, asset, units(paired)?, units(base)?)?;
        println!("{id}: {base} base / {paired} paired -> {shares} shares");
    }

    let router = exchange.router().account();
    exchange
        .ledger_mut()
        .approve(usdc, trader, router, Amount::MAX)?;

    let plan = exchange.plan(usdc, dai, units(10)?)?;
    for step in plan.steps() {
        println!(
            "  {} {:?}: {} in -> {} out",
            step.pool(),
            step.direction(),
            step.amount_in(),
            step.amount_out()
        );
    }

    let received = exchange.swap_assets(trader, usdc, dai, units(10)?, plan.amount_out(), trader)?;
    println!("received {received} DAI units");
    println!(
        "trader now holds {} USDC / {} DAI",
        exchange.ledger().balance_of(usdc, trader),
        exchange.ledger().balance_of(dai, trader)
    );
    Ok(())
}
