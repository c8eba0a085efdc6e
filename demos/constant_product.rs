//! Multi-pool exchange walkthrough.
//!
//! Creates a token pool and a native-asset pool, provides liquidity,
//! trades against both, and withdraws, printing the settlement legs the
//! host environment would execute.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use alloy_primitives::Address;
use multipool_amm::domain::{Amount, Liquidity, TokenAddress};
use multipool_amm::exchange::{CallContext, Exchange};
use multipool_amm::settlement::Settlement;

fn print_settlement(settlement: &Settlement) {
    for leg in settlement.transfers() {
        println!("    {leg}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Multi-pool Constant Product Exchange ===\n");

    // ── 1. Define assets and actors ─────────────────────────────────────
    let usdc = TokenAddress::new(Address::repeat_byte(0x01));
    let weth = TokenAddress::new(Address::repeat_byte(0x02));
    let alice = Address::repeat_byte(0xa1);
    let bob = Address::repeat_byte(0xb0);

    let mut exchange = Exchange::new();
    println!("Config: {:?}", exchange.config());

    // ── 2. Create pools ─────────────────────────────────────────────────
    let token_pool = exchange.create_pool(weth, usdc, 30)?;
    let native_pool = exchange.create_pool(usdc, TokenAddress::NATIVE, 1_000)?;
    let (_, token0, token1) = exchange.get_pool_id(weth, usdc, 30)?;
    println!("\nToken pool:  {token_pool} ({token0} / {token1}, fee 30)");
    println!("Native pool: {native_pool} (fee 1000)");

    // ── 3. Provide liquidity ────────────────────────────────────────────
    let minted = exchange.add_liquidity(
        &CallContext::new(alice),
        token_pool,
        Amount::from(1_000_000u64),
        Amount::from(1_000_000u64),
        Amount::ZERO,
        Amount::ZERO,
    )?;
    println!("\nAlice minted {} shares", minted.liquidity_minted());
    print_settlement(minted.settlement());

    let funded = CallContext::new(alice).with_value(Amount::from(150_000u64));
    let minted_native = exchange.add_liquidity(
        &funded,
        native_pool,
        Amount::from(100_000u64),
        Amount::from(100_000u64),
        Amount::ZERO,
        Amount::ZERO,
    )?;
    println!(
        "\nAlice minted {} native-pool shares, refund {}",
        minted_native.liquidity_minted(),
        minted_native.settlement().native_refund()
    );
    print_settlement(minted_native.settlement());

    // ── 4. Trade ────────────────────────────────────────────────────────
    let quote = exchange.quote_swap(token_pool, Amount::from(1_000u64), true)?;
    println!("\nQuote: 1000 token0 -> {quote} token1");

    let swapped = exchange.swap(
        &CallContext::new(bob),
        token_pool,
        Amount::from(1_000u64),
        quote,
        true,
    )?;
    println!(
        "Bob swapped {} for {} (fee {})",
        swapped.amount_in(),
        swapped.amount_out(),
        swapped.fee()
    );

    let native_swap = exchange.swap(
        &CallContext::new(bob).with_value(Amount::from(10u64)),
        native_pool,
        Amount::from(10u64),
        Amount::ZERO,
        true,
    )?;
    println!("Bob sold 10 native for {}", native_swap.amount_out());
    print_settlement(native_swap.settlement());

    // ── 5. Rejected trade leaves state untouched ────────────────────────
    let before = exchange.clone();
    match exchange.swap(
        &CallContext::new(bob),
        token_pool,
        Amount::from(1_000u64),
        Amount::from(1_000u64),
        true,
    ) {
        Ok(_) => println!("\nUnexpected fill"),
        Err(err) => println!("\nRejected: {err}"),
    }
    assert_eq!(exchange, before);

    // ── 6. Withdraw ─────────────────────────────────────────────────────
    let owned = exchange.get_position_liquidity(native_pool, alice)?;
    let burned = exchange.remove_liquidity(&CallContext::new(alice), native_pool, owned)?;
    println!(
        "\nAlice burned {} shares for ({}, {})",
        burned.liquidity_burned(),
        burned.amount0(),
        burned.amount1()
    );
    print_settlement(burned.settlement());

    let pool = exchange.pool(native_pool)?;
    println!("Native pool after withdrawal: {pool}");
    assert_eq!(
        exchange.get_position_liquidity(native_pool, alice)?,
        Liquidity::ZERO
    );

    Ok(())
}
