//! Property-based tests using `proptest` for pool and exchange invariants.
//!
//! 1. **Invariant preservation**: `reserve0 × reserve1` never decreases
//!    across a swap.
//! 2. **Swap reversibility**: a round trip A→B→A returns at most the input.
//! 3. **Pool id symmetry**: argument order never changes the pool id.
//! 4. **Share conservation**: owner balances plus the locked minimum add up
//!    to the pool's share supply.
//! 5. **Atomicity**: a rejected operation leaves the exchange untouched.
//! 6. **Native equivalence**: native pools price exactly like token pools.
//! 7. **Liquidity conservation**: add then remove returns at most the
//!    deposit.

use alloy_primitives::{Address, U256};
use proptest::prelude::*;

use crate::domain::{
    Amount, FeeTier, Liquidity, LiquidityChange, PoolId, SwapDirection, SwapSpec, TokenAddress,
};
use crate::exchange::{CallContext, Exchange};
use crate::pools::ConstantProductPool;
use crate::settlement::TransferMode;
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok(byte: u8) -> TokenAddress {
    TokenAddress::new(Address::repeat_byte(byte))
}

fn seeded_pool(r0: u64, r1: u64, fee: u32) -> ConstantProductPool {
    let Ok(tier) = FeeTier::parts_per_10k(fee) else {
        panic!("valid fee");
    };
    let Ok((id, pair)) = PoolId::compute(tok(1), tok(2), fee) else {
        panic!("valid pair");
    };
    let mut pool = ConstantProductPool::new(id, pair, tier, Liquidity::from(1_000u64));
    let Ok(change) = LiquidityChange::add(
        Amount::from(r0),
        Amount::from(r1),
        Amount::ZERO,
        Amount::ZERO,
    ) else {
        panic!("valid change");
    };
    let Ok(effects) = pool.quote_liquidity(&change) else {
        panic!("seed deposit");
    };
    pool.apply_liquidity(&effects);
    pool
}

fn seeded_exchange(token_a: TokenAddress, r0: u64, r1: u64, fee: u32) -> (Exchange, PoolId) {
    let mut exchange = Exchange::new();
    let Ok(id) = exchange.create_pool(token_a, tok(2), fee) else {
        panic!("pool created");
    };
    let ctx = CallContext::new(Address::repeat_byte(0xA1)).with_value(Amount::from(r0.max(r1)));
    let Ok(_) = exchange.add_liquidity(
        &ctx,
        id,
        Amount::from(r0),
        Amount::from(r1),
        Amount::ZERO,
        Amount::ZERO,
    ) else {
        panic!("seed deposit");
    };
    (exchange, id)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=10_000_000u64
}

/// Fee numerators over the default 10_000 denominator.
fn fee_strategy() -> impl Strategy<Value = u32> {
    1u32..=1_000u32
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    any::<bool>().prop_map(SwapDirection::from_zero_for_one)
}

// ---------------------------------------------------------------------------
// Property 1: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_product_never_decreases(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        fee in fee_strategy(),
        amount_in in 1u64..=5_000_000u64,
        direction in direction_strategy(),
    ) {
        let mut pool = seeded_pool(r0, r1, fee);
        let before = pool.state().product();
        let Ok(spec) = SwapSpec::exact_in(Amount::from(amount_in), Amount::ZERO, direction) else {
            return Ok(());
        };
        if pool.swap(&spec).is_err() {
            return Ok(());
        }
        let after = pool.state().product();
        prop_assert!(after >= before, "k decreased: {:?} -> {:?}", before, after);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loses_value(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let swap_in = Amount::from((r0 / 1_000).max(1));
        let mut pool = seeded_pool(r0, r1, fee);

        let Ok(there) = SwapSpec::exact_in(swap_in, Amount::ZERO, SwapDirection::ZeroForOne) else {
            return Ok(());
        };
        let Ok(out) = pool.swap(&there) else {
            return Ok(());
        };

        let Ok(back) = SwapSpec::exact_in(out.amount_out(), Amount::ZERO, SwapDirection::OneForZero) else {
            return Ok(());
        };
        let Ok(returned) = pool.swap(&back) else {
            return Ok(());
        };

        prop_assert!(
            returned.amount_out() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            returned.amount_out(), swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Pool Id Symmetry
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_pool_id_symmetric(
        a in any::<[u8; 20]>(),
        b in any::<[u8; 20]>(),
        fee in any::<u32>(),
    ) {
        let a = TokenAddress::new(Address::from(a));
        let b = TokenAddress::new(Address::from(b));
        prop_assume!(a != b);
        let exchange = Exchange::new();
        let forward = exchange.get_pool_id(a, b, fee);
        let backward = exchange.get_pool_id(b, a, fee);
        prop_assert_eq!(&forward, &backward);
        let Ok((_, token0, token1)) = forward else {
            return Err(TestCaseError::fail("distinct tokens must order"));
        };
        prop_assert!(token0 < token1);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Share Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_shares_conserved(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        deposits in prop::collection::vec((1u8..=4u8, 1u64..=1_000_000u64, 1u64..=1_000_000u64), 1..6),
        burn_fraction in 0u64..=100u64,
    ) {
        let (mut exchange, id) = seeded_exchange(tok(1), r0, r1, 30);

        for (who, a0, a1) in &deposits {
            let ctx = CallContext::new(Address::repeat_byte(*who));
            let _ = exchange.add_liquidity(
                &ctx,
                id,
                Amount::from(*a0),
                Amount::from(*a1),
                Amount::ZERO,
                Amount::ZERO,
            );
        }

        let burner = Address::repeat_byte(deposits[0].0);
        let Ok(owned) = exchange.get_position_liquidity(id, burner) else {
            return Err(TestCaseError::fail("pool exists"));
        };
        let burn = owned.get() * U256::from(burn_fraction) / U256::from(100u64);
        let _ = exchange.remove_liquidity(&CallContext::new(burner), id, Liquidity::new(burn));

        let Ok(pool) = exchange.pool(id) else {
            return Err(TestCaseError::fail("pool exists"));
        };
        let Ok(owners) = exchange.ledger().total(id) else {
            return Err(TestCaseError::fail("no overflow"));
        };
        let Some(accounted) = owners.checked_add(&pool.minimum_liquidity()) else {
            return Err(TestCaseError::fail("no overflow"));
        };
        prop_assert_eq!(accounted, pool.total_liquidity());
    }
}

// ---------------------------------------------------------------------------
// Property 5: Atomicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rejected_swap_leaves_state(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount_in in 1u64..=1_000_000u64,
        min_out in 0u64..=10_000_000u64,
        zero_for_one in any::<bool>(),
    ) {
        let (mut exchange, id) = seeded_exchange(tok(1), r0, r1, 30);
        let snapshot = exchange.clone();
        let ctx = CallContext::new(Address::repeat_byte(7));
        let result = exchange.swap(
            &ctx,
            id,
            Amount::from(amount_in),
            Amount::from(min_out),
            zero_for_one,
        );
        if result.is_err() {
            prop_assert_eq!(&exchange, &snapshot);
        }
    }

    #[test]
    fn prop_underfunded_native_deposit_leaves_state(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        a0 in 1u64..=1_000_000u64,
        a1 in 1u64..=1_000_000u64,
    ) {
        let (mut exchange, id) = seeded_exchange(TokenAddress::NATIVE, r0, r1, 30);
        let snapshot = exchange.clone();
        let ctx = CallContext::new(Address::repeat_byte(7));
        let result = exchange.add_liquidity(
            &ctx,
            id,
            Amount::from(a0),
            Amount::from(a1),
            Amount::ZERO,
            Amount::ZERO,
        );
        prop_assert!(result.is_err());
        prop_assert_eq!(&exchange, &snapshot);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Native Equivalence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_native_prices_like_token(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount_in in 1u64..=1_000_000u64,
    ) {
        // Both token(1) and NATIVE sort below token(2), so orientation matches.
        let (mut native, native_id) = seeded_exchange(TokenAddress::NATIVE, r0, r1, 30);
        let (mut token, token_id) = seeded_exchange(tok(1), r0, r1, 30);

        let ctx = CallContext::new(Address::repeat_byte(7)).with_value(Amount::from(amount_in));
        let native_result = native.swap(&ctx, native_id, Amount::from(amount_in), Amount::ZERO, true);
        let token_result = token.swap(&ctx, token_id, Amount::from(amount_in), Amount::ZERO, true);

        match (native_result, token_result) {
            (Ok(n), Ok(t)) => {
                prop_assert_eq!(n.amount_out(), t.amount_out());
                prop_assert_eq!(n.fee(), t.fee());
                let Ok(np) = native.pool(native_id) else {
                    return Err(TestCaseError::fail("pool exists"));
                };
                let Ok(tp) = token.pool(token_id) else {
                    return Err(TestCaseError::fail("pool exists"));
                };
                prop_assert_eq!(np.state(), tp.state());
                prop_assert_eq!(n.settlement().transfers()[0].mode(), TransferMode::Native);
                prop_assert_eq!(t.settlement().transfers()[0].mode(), TransferMode::Token);
            }
            (Err(n), Err(t)) => prop_assert_eq!(n, t),
            (n, t) => {
                return Err(TestCaseError::fail(format!("diverged: {n:?} vs {t:?}")));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 7: Liquidity Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_remove_never_profits(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        a0 in 1_000u64..=1_000_000u64,
        a1 in 1_000u64..=1_000_000u64,
    ) {
        let (mut exchange, id) = seeded_exchange(tok(1), r0, r1, 30);
        let ctx = CallContext::new(Address::repeat_byte(9));
        let Ok(minted) = exchange.add_liquidity(
            &ctx,
            id,
            Amount::from(a0),
            Amount::from(a1),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            return Ok(());
        };
        let Ok(burned) = exchange.remove_liquidity(&ctx, id, minted.liquidity_minted()) else {
            return Ok(());
        };
        prop_assert!(burned.amount0() <= minted.amount0());
        prop_assert!(burned.amount1() <= minted.amount1());
    }
}
