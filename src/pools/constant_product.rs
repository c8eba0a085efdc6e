//! Constant Product pool implementation (Uniswap V2 style).
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves
//! of the two tokens. Fees are deducted from the input amount **before**
//! the pricing formula is applied.
//!
//! # Swap Algorithm (token0 → token1)
//!
//! 1. `net_input = amount_in × (denominator − fee) / denominator`
//! 2. `amount_out = reserve1 − reserve0 × reserve1 / (reserve0 + net_input)`
//! 3. `reserve0 += amount_in` (fee stays in the pool)
//! 4. `reserve1 -= amount_out`
//!
//! A swap that would empty the output reserve, or whose rounding would
//! shrink `reserve0 × reserve1` despite the retained fee, is rejected.
//!
//! # Shares
//!
//! - First deposit: `isqrt(amount0 × amount1) − minimum_liquidity`, with
//!   `minimum_liquidity` shares locked forever.
//! - Later deposits: the desired amounts are trimmed to the current
//!   reserve ratio, then `min(amount0 × L / reserve0, amount1 × L / reserve1)`.
//! - Withdrawals: `amountX = liquidity × reserveX / L`.
//!
//! All division rounds down.
//!
//! # Invariant
//!
//! After every swap, `k_after ≥ k_before` because the fee component
//! increases reserves without a corresponding output.

use core::fmt;

use crate::domain::{
    Amount, ChangeType, FeeTier, Liquidity, LiquidityChange, LiquidityEffects, PoolId, PoolState,
    SwapEffects, SwapSpec, TokenPair,
};
use crate::error::AmmError;
use crate::math::{isqrt, min, mul_div, CheckedArithmetic};
use crate::traits::{LiquidityPool, SwapPool};

/// A Constant Product AMM pool (`x · y = k`).
///
/// Pools start empty; the first deposit sets the price. Every operation
/// is quoted against a snapshot and committed by assigning the quoted
/// [`PoolState`], so a failed quote never leaves a partial update behind.
///
/// # State
///
/// - `reserve0` / `reserve1`: current token balances, fees included
/// - `total_liquidity`: outstanding shares, including the locked minimum
///
/// # Example
///
/// ```rust
/// use alloy_primitives::Address;
/// use multipool_amm::domain::{
///     Amount, FeeTier, LiquidityChange, PoolId, SwapDirection, SwapSpec, TokenAddress,
/// };
/// use multipool_amm::pools::ConstantProductPool;
/// use multipool_amm::traits::{LiquidityPool, SwapPool};
///
/// let a = TokenAddress::new(Address::repeat_byte(1));
/// let b = TokenAddress::new(Address::repeat_byte(2));
/// let (id, pair) = PoolId::compute(a, b, 1_000).expect("distinct");
/// let fee = FeeTier::parts_per_10k(1_000).expect("valid fee");
/// let mut pool = ConstantProductPool::new(id, pair, fee, 1_000u64.into());
///
/// let deposit = LiquidityChange::add(
///     Amount::from(100_000u64),
///     Amount::from(100_000u64),
///     Amount::ZERO,
///     Amount::ZERO,
/// )
/// .expect("non-zero");
/// let minted = pool.quote_liquidity(&deposit).expect("first deposit");
/// pool.apply_liquidity(&minted);
///
/// let spec = SwapSpec::exact_in(Amount::from(10u64), Amount::ZERO, SwapDirection::ZeroForOne)
///     .expect("non-zero");
/// let result = pool.swap(&spec).expect("swap ok");
/// assert_eq!(result.amount_out(), Amount::from(9u64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    id: PoolId,
    token_pair: TokenPair,
    fee_tier: FeeTier,
    minimum_liquidity: Liquidity,
    state: PoolState,
}

impl ConstantProductPool {
    /// Creates an empty pool.
    ///
    /// `minimum_liquidity` shares are locked on the first deposit.
    #[must_use]
    pub const fn new(
        id: PoolId,
        token_pair: TokenPair,
        fee_tier: FeeTier,
        minimum_liquidity: Liquidity,
    ) -> Self {
        Self {
            id,
            token_pair,
            fee_tier,
            minimum_liquidity,
            state: PoolState::EMPTY,
        }
    }

    /// Returns the pool identifier.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Returns the current reserve of token0.
    #[must_use]
    pub const fn reserve0(&self) -> Amount {
        self.state.reserve0()
    }

    /// Returns the current reserve of token1.
    #[must_use]
    pub const fn reserve1(&self) -> Amount {
        self.state.reserve1()
    }

    /// Returns the number of shares locked by the first deposit.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Liquidity {
        self.minimum_liquidity
    }

    /// Computes the exact-in swap output.
    ///
    /// Returns `(amount_out, fee)`.
    fn compute_exact_in(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<(Amount, Amount), AmmError> {
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }

        let (net_input, fee) = self.fee_tier.deduct(amount_in)?;
        let k = reserve_in.safe_mul(&reserve_out)?;
        let denominator = reserve_in.safe_add(&net_input)?;
        let remaining = k
            .checked_div(&denominator)
            .ok_or(AmmError::DivisionByZero)?;
        let amount_out = reserve_out.safe_sub(&remaining)?;

        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        if amount_out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }

        // Overflow of the new product means it exceeds k.
        let new_reserve_in = reserve_in.safe_add(&amount_in)?;
        let new_reserve_out = reserve_out.safe_sub(&amount_out)?;
        if let Some(new_k) = new_reserve_in.checked_mul(&new_reserve_out) {
            if new_k < k {
                return Err(AmmError::InsufficientLiquidity);
            }
        }

        Ok((amount_out, fee))
    }

    /// Trims desired deposit amounts to the current reserve ratio.
    fn optimal_amounts(
        &self,
        amount0_desired: Amount,
        amount1_desired: Amount,
    ) -> Result<(Amount, Amount), AmmError> {
        let (r0, r1) = (self.state.reserve0().get(), self.state.reserve1().get());

        let amount1_optimal = mul_div(amount0_desired.get(), r1, r0)?;
        if amount1_optimal <= amount1_desired.get() {
            return Ok((amount0_desired, Amount::new(amount1_optimal)));
        }

        let amount0_optimal = mul_div(amount1_desired.get(), r0, r1)?;
        Ok((Amount::new(amount0_optimal), amount1_desired))
    }

    fn quote_add(
        &self,
        amount0_desired: Amount,
        amount1_desired: Amount,
        amount0_min: Amount,
        amount1_min: Amount,
    ) -> Result<LiquidityEffects, AmmError> {
        let (amount0, amount1, minted, locked) = if self.state.is_initialized() {
            let (amount0, amount1) = self.optimal_amounts(amount0_desired, amount1_desired)?;
            let total = self.state.total_liquidity().get();
            let share0 = mul_div(amount0.get(), total, self.state.reserve0().get())?;
            let share1 = mul_div(amount1.get(), total, self.state.reserve1().get())?;
            (amount0, amount1, Liquidity::new(min(share0, share1)), Liquidity::ZERO)
        } else {
            let product = amount0_desired.safe_mul(&amount1_desired)?;
            let root = Liquidity::new(isqrt(product.get()));
            if root <= self.minimum_liquidity {
                return Err(AmmError::InsufficientInitialLiquidity);
            }
            let minted = root.safe_sub(&self.minimum_liquidity)?;
            (amount0_desired, amount1_desired, minted, self.minimum_liquidity)
        };

        if amount0 < amount0_min || amount1 < amount1_min {
            return Err(AmmError::InsufficientAmount);
        }
        if minted.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }

        let next = PoolState::new(
            self.state.reserve0().safe_add(&amount0)?,
            self.state.reserve1().safe_add(&amount1)?,
            self.state
                .total_liquidity()
                .safe_add(&minted)?
                .safe_add(&locked)?,
        );

        Ok(LiquidityEffects::new(
            ChangeType::Add,
            amount0,
            amount1,
            minted,
            locked,
            next,
        ))
    }

    fn quote_remove(&self, liquidity: Liquidity) -> Result<LiquidityEffects, AmmError> {
        if liquidity.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }

        let total = self.state.total_liquidity();
        if liquidity > total {
            return Err(AmmError::InsufficientLiquidity);
        }

        let amount0 = Amount::new(mul_div(
            liquidity.get(),
            self.state.reserve0().get(),
            total.get(),
        )?);
        let amount1 = Amount::new(mul_div(
            liquidity.get(),
            self.state.reserve1().get(),
            total.get(),
        )?);

        if amount0.is_zero() || amount1.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }

        let next = PoolState::new(
            self.state.reserve0().safe_sub(&amount0)?,
            self.state.reserve1().safe_sub(&amount1)?,
            total.safe_sub(&liquidity)?,
        );

        Ok(LiquidityEffects::new(
            ChangeType::Remove,
            amount0,
            amount1,
            liquidity,
            Liquidity::ZERO,
            next,
        ))
    }
}

impl SwapPool for ConstantProductPool {
    /// Quotes an exact-input swap.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is zero, or
    ///   the trade would drain the output reserve or shrink the product.
    /// - [`AmmError::InsufficientOutputAmount`] if the output rounds to zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below the minimum.
    /// - [`AmmError::Overflow`] if any arithmetic overflows.
    fn quote_swap(&self, spec: &SwapSpec) -> Result<SwapEffects, AmmError> {
        let direction = spec.direction();
        let (reserve_in, reserve_out) = self.state.oriented(direction);

        let (amount_out, fee) = self.compute_exact_in(spec.amount_in(), reserve_in, reserve_out)?;

        if amount_out < spec.min_amount_out() {
            return Err(AmmError::SlippageExceeded {
                amount_out,
                min_amount_out: spec.min_amount_out(),
            });
        }

        let new_reserve_in = reserve_in.safe_add(&spec.amount_in())?;
        let new_reserve_out = reserve_out.safe_sub(&amount_out)?;
        let total = self.state.total_liquidity();
        let next = if direction.is_zero_for_one() {
            PoolState::new(new_reserve_in, new_reserve_out, total)
        } else {
            PoolState::new(new_reserve_out, new_reserve_in, total)
        };

        Ok(SwapEffects::new(*spec, amount_out, fee, next))
    }

    fn apply_swap(&mut self, effects: &SwapEffects) {
        self.state = effects.next_state();
    }

    fn state(&self) -> PoolState {
        self.state
    }

    fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

impl LiquidityPool for ConstantProductPool {
    /// Quotes a deposit or withdrawal.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInitialLiquidity`] if a first deposit
    ///   does not exceed the locked minimum.
    /// - [`AmmError::InsufficientAmount`] if the trimmed deposit falls below
    ///   either minimum.
    /// - [`AmmError::InsufficientLiquidityMinted`] if a deposit mints nothing.
    /// - [`AmmError::InsufficientLiquidityBurned`] if a withdrawal burns
    ///   nothing or pays out nothing on either side.
    /// - [`AmmError::InsufficientLiquidity`] if a withdrawal exceeds the
    ///   pool's total shares.
    /// - [`AmmError::Overflow`] if any arithmetic overflows.
    fn quote_liquidity(&self, change: &LiquidityChange) -> Result<LiquidityEffects, AmmError> {
        match *change {
            LiquidityChange::Add {
                amount0_desired,
                amount1_desired,
                amount0_min,
                amount1_min,
            } => self.quote_add(amount0_desired, amount1_desired, amount0_min, amount1_min),
            LiquidityChange::Remove { liquidity } => self.quote_remove(liquidity),
        }
    }

    fn apply_liquidity(&mut self, effects: &LiquidityEffects) {
        self.state = effects.next_state();
    }

    fn total_liquidity(&self) -> Liquidity {
        self.state.total_liquidity()
    }
}

impl fmt::Display for ConstantProductPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool({} / {}, fee={}, {})",
            self.token_pair.token0(),
            self.token_pair.token1(),
            self.fee_tier,
            self.state
        )
    }
}
