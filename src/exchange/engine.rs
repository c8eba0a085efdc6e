//! The exchange state container and its operation surface.

use alloy_primitives::{Address, B256};
use tracing::{debug, info, instrument, trace};

use super::{BurnResult, CallContext, MintResult, SwapResult};
use crate::config::EngineConfig;
use crate::domain::{
    position_id, Amount, Liquidity, LiquidityChange, LiquidityEffects, PoolId, Position,
    SwapDirection, SwapEffects, SwapSpec, TokenAddress,
};
use crate::error::AmmError;
use crate::ledger::PositionLedger;
use crate::pools::ConstantProductPool;
use crate::registry::PoolRegistry;
use crate::settlement::Settlement;
use crate::traits::{LiquidityPool, SwapPool};

/// Owns every pool and position and serializes all operations on them.
///
/// Each mutating operation runs in two phases. The compute phase looks the
/// pool up, quotes the change, previews the caller's new position balance
/// and checks the attached native value; it only reads state. The apply
/// phase assigns the quoted pool state and position balance and cannot
/// fail. A rejected call therefore leaves the exchange exactly as it was.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use multipool_amm::domain::{Amount, TokenAddress};
/// use multipool_amm::exchange::{CallContext, Exchange};
///
/// let mut exchange = Exchange::new();
/// let a = TokenAddress::new(Address::repeat_byte(1));
/// let b = TokenAddress::new(Address::repeat_byte(2));
/// let id = exchange.create_pool(a, b, 1_000).expect("new pool");
///
/// let alice = CallContext::new(Address::repeat_byte(0xa1));
/// let minted = exchange
///     .add_liquidity(
///         &alice,
///         id,
///         Amount::from(100_000u64),
///         Amount::from(100_000u64),
///         Amount::ZERO,
///         Amount::ZERO,
///     )
///     .expect("first deposit");
/// assert_eq!(minted.liquidity_minted(), 99_000u64.into());
///
/// let swapped = exchange
///     .swap(&alice, id, Amount::from(10u64), Amount::ZERO, true)
///     .expect("swap");
/// assert_eq!(swapped.amount_out(), Amount::from(9u64));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exchange {
    config: EngineConfig,
    registry: PoolRegistry,
    ledger: PositionLedger,
}

impl Exchange {
    /// Creates an exchange with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an exchange with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
    pub fn with_config(config: EngineConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config,
            registry: PoolRegistry::new(),
            ledger: PositionLedger::new(),
        })
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the pool registry.
    #[must_use]
    pub const fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    /// Returns the position ledger.
    #[must_use]
    pub const fn ledger(&self) -> &PositionLedger {
        &self.ledger
    }

    // -- Queries ---------------------------------------------------------

    /// Derives the id a pool for `(token_a, token_b, fee)` has or would
    /// have, together with the canonical token order.
    ///
    /// The fee is not validated here.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] if `token_a == token_b`.
    pub fn get_pool_id(
        &self,
        token_a: TokenAddress,
        token_b: TokenAddress,
        fee: u32,
    ) -> Result<(PoolId, TokenAddress, TokenAddress), AmmError> {
        let (id, pair) = PoolId::compute(token_a, token_b, fee)?;
        Ok((id, pair.token0(), pair.token1()))
    }

    /// Derives the id of `owner`'s position in `pool_id`.
    #[must_use]
    pub fn get_position_id(&self, pool_id: PoolId, owner: Address) -> B256 {
        position_id(pool_id, owner)
    }

    /// Returns the pool registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolDoesNotExist`] if `id` is unknown.
    pub fn pool(&self, id: PoolId) -> Result<&ConstantProductPool, AmmError> {
        self.registry.get(&id)
    }

    /// Returns the shares `owner` holds in pool `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolDoesNotExist`] if `id` is unknown.
    pub fn get_position_liquidity(&self, id: PoolId, owner: Address) -> Result<Liquidity, AmmError> {
        self.registry.get(&id)?;
        Ok(self.ledger.get(id, owner))
    }

    /// Returns `owner`'s position snapshot in pool `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolDoesNotExist`] if `id` is unknown.
    pub fn position(&self, id: PoolId, owner: Address) -> Result<Position, AmmError> {
        self.registry.get(&id)?;
        Ok(self.ledger.position(id, owner))
    }

    /// Computes the output of an exact-input swap without executing it.
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::swap`], minus the slippage and native-value
    /// checks.
    pub fn quote_swap(
        &self,
        id: PoolId,
        amount_in: Amount,
        zero_for_one: bool,
    ) -> Result<Amount, AmmError> {
        let pool = self.registry.get(&id)?;
        let spec = SwapSpec::exact_in(
            amount_in,
            Amount::ZERO,
            SwapDirection::from_zero_for_one(zero_for_one),
        )?;
        let effects = pool.quote_swap(&spec)?;
        trace!(
            pool = %id,
            amount_in = %amount_in,
            amount_out = %effects.amount_out(),
            zero_for_one,
            "quoted swap"
        );
        Ok(effects.amount_out())
    }

    // -- Pool lifecycle --------------------------------------------------

    /// Registers an empty pool for the unordered pair at `fee`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] unless `0 < fee <= max_fee`.
    /// - [`AmmError::InvalidTokenPair`] if `token_a == token_b`.
    /// - [`AmmError::PoolAlreadyExists`] if the pool is registered.
    #[instrument(level = "debug", skip(self), fields(token_a = %token_a, token_b = %token_b))]
    pub fn create_pool(
        &mut self,
        token_a: TokenAddress,
        token_b: TokenAddress,
        fee: u32,
    ) -> Result<PoolId, AmmError> {
        let result = self.config.fee_tier(fee).and_then(|tier| {
            self.registry
                .create_pool(token_a, token_b, tier, self.config.minimum_liquidity())
        });
        match &result {
            Ok(id) => info!(pool = %id, fee, "created pool"),
            Err(err) => debug!(%err, "create_pool rejected"),
        }
        result
    }

    // -- Liquidity -------------------------------------------------------

    /// Deposits into pool `id` and credits the minted shares to the caller.
    ///
    /// On the first deposit both desired amounts are taken in full and
    /// `minimum_liquidity` shares are locked. Later deposits are trimmed
    /// to the current reserve ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolDoesNotExist`] if `id` is unknown.
    /// - [`AmmError::InvalidAmount`] if a desired amount is zero.
    /// - [`AmmError::InsufficientInitialLiquidity`],
    ///   [`AmmError::InsufficientAmount`],
    ///   [`AmmError::InsufficientLiquidityMinted`] from the pool quote.
    /// - [`AmmError::InsufficientNativeValue`] if a native leg is
    ///   under-funded.
    /// - [`AmmError::Overflow`] if any arithmetic overflows.
    #[instrument(level = "debug", skip(self, ctx), fields(pool = %id, caller = %ctx.caller()))]
    pub fn add_liquidity(
        &mut self,
        ctx: &CallContext,
        id: PoolId,
        amount0_desired: Amount,
        amount1_desired: Amount,
        amount0_min: Amount,
        amount1_min: Amount,
    ) -> Result<MintResult, AmmError> {
        let reject = |err: &AmmError| debug!(%err, "add_liquidity rejected");
        let pool = self.registry.get_mut(&id).inspect_err(reject)?;
        let change = LiquidityChange::add(amount0_desired, amount1_desired, amount0_min, amount1_min)
            .inspect_err(reject)?;
        let (effects, position, settlement) =
            plan_liquidity(pool, &self.ledger, ctx, id, &change).inspect_err(reject)?;

        pool.apply_liquidity(&effects);
        self.ledger.set(id, ctx.caller(), position);

        info!(
            amount0 = %effects.amount0(),
            amount1 = %effects.amount1(),
            minted = %effects.liquidity(),
            locked = %effects.locked(),
            "added liquidity"
        );

        Ok(MintResult::new(
            effects.amount0(),
            effects.amount1(),
            effects.liquidity(),
            settlement,
        ))
    }

    /// Burns `liquidity` of the caller's shares in pool `id` for a
    /// proportional slice of both reserves.
    ///
    /// Any attached native value is refunded.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolDoesNotExist`] if `id` is unknown.
    /// - [`AmmError::InsufficientLiquidityOwned`] if the caller holds fewer
    ///   shares than `liquidity`.
    /// - [`AmmError::InsufficientLiquidityBurned`] if `liquidity` is zero or
    ///   pays out nothing on either side.
    /// - [`AmmError::Overflow`] if any arithmetic overflows.
    #[instrument(level = "debug", skip(self, ctx), fields(pool = %id, caller = %ctx.caller()))]
    pub fn remove_liquidity(
        &mut self,
        ctx: &CallContext,
        id: PoolId,
        liquidity: Liquidity,
    ) -> Result<BurnResult, AmmError> {
        let reject = |err: &AmmError| debug!(%err, "remove_liquidity rejected");
        let pool = self.registry.get_mut(&id).inspect_err(reject)?;
        let change = LiquidityChange::remove(liquidity);
        let (effects, position, settlement) =
            plan_liquidity(pool, &self.ledger, ctx, id, &change).inspect_err(reject)?;

        pool.apply_liquidity(&effects);
        self.ledger.set(id, ctx.caller(), position);

        info!(
            amount0 = %effects.amount0(),
            amount1 = %effects.amount1(),
            burned = %effects.liquidity(),
            "removed liquidity"
        );

        Ok(BurnResult::new(
            effects.amount0(),
            effects.amount1(),
            effects.liquidity(),
            settlement,
        ))
    }

    // -- Swaps -----------------------------------------------------------

    /// Sells exactly `amount_in` into pool `id`.
    ///
    /// `zero_for_one` sells token0 for token1; otherwise token1 for token0.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolDoesNotExist`] if `id` is unknown.
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`],
    ///   [`AmmError::InsufficientOutputAmount`],
    ///   [`AmmError::SlippageExceeded`] from the pool quote.
    /// - [`AmmError::InsufficientNativeValue`] if selling the native asset
    ///   with too little value attached.
    /// - [`AmmError::Overflow`] if any arithmetic overflows.
    #[instrument(level = "debug", skip(self, ctx), fields(pool = %id, caller = %ctx.caller()))]
    pub fn swap(
        &mut self,
        ctx: &CallContext,
        id: PoolId,
        amount_in: Amount,
        min_amount_out: Amount,
        zero_for_one: bool,
    ) -> Result<SwapResult, AmmError> {
        let reject = |err: &AmmError| debug!(%err, "swap rejected");
        let pool = self.registry.get_mut(&id).inspect_err(reject)?;
        let direction = SwapDirection::from_zero_for_one(zero_for_one);
        let spec = SwapSpec::exact_in(amount_in, min_amount_out, direction).inspect_err(reject)?;
        let (effects, settlement) = plan_swap(pool, ctx, &spec).inspect_err(reject)?;

        pool.apply_swap(&effects);

        info!(
            amount_in = %effects.amount_in(),
            amount_out = %effects.amount_out(),
            fee = %effects.fee(),
            zero_for_one,
            "swapped"
        );

        Ok(SwapResult::new(
            effects.amount_in(),
            effects.amount_out(),
            effects.fee(),
            settlement,
        ))
    }
}

/// Compute phase of a deposit or withdrawal: the pool quote, the caller's
/// next position balance and the settlement.
fn plan_liquidity(
    pool: &ConstantProductPool,
    ledger: &PositionLedger,
    ctx: &CallContext,
    id: PoolId,
    change: &LiquidityChange,
) -> Result<(LiquidityEffects, Liquidity, Settlement), AmmError> {
    let pair = pool.token_pair();
    let (effects, position, settlement) = match change {
        LiquidityChange::Add { .. } => {
            let effects = pool.quote_liquidity(change)?;
            let position = ledger.preview_credit(id, ctx.caller(), effects.liquidity())?;
            let settlement = Settlement::new()
                .inbound(pair.token0(), effects.amount0())
                .inbound(pair.token1(), effects.amount1());
            (effects, position, settlement)
        }
        LiquidityChange::Remove { liquidity } => {
            let position = ledger.preview_debit(id, ctx.caller(), *liquidity)?;
            let effects = pool.quote_liquidity(change)?;
            let settlement = Settlement::new()
                .outbound(pair.token0(), effects.amount0())
                .outbound(pair.token1(), effects.amount1());
            (effects, position, settlement)
        }
    };
    Ok((effects, position, settlement.reconcile_native(ctx.value())?))
}

/// Compute phase of a swap: the pool quote and the settlement.
fn plan_swap(
    pool: &ConstantProductPool,
    ctx: &CallContext,
    spec: &SwapSpec,
) -> Result<(SwapEffects, Settlement), AmmError> {
    let effects = pool.quote_swap(spec)?;
    let (token_in, token_out) = pool.token_pair().oriented(spec.direction());
    let settlement = Settlement::new()
        .inbound(token_in, effects.amount_in())
        .outbound(token_out, effects.amount_out())
        .reconcile_native(ctx.value())?;
    Ok((effects, settlement))
}
