//! Core swap pool trait for pricing swaps and querying pool state.
//!
//! [`SwapPool`] is the foundational abstraction every pool implements.
//! A swap runs in two phases:
//!
//! 1. **Quote**: [`SwapPool::quote_swap`] reads the pool, runs every
//!    check, and returns [`SwapEffects`] holding the output amount and
//!    the next pool state.
//! 2. **Apply**: [`SwapPool::apply_swap`] assigns that next state. It
//!    cannot fail.
//!
//! [`SwapPool::swap`] chains the two for callers that have no checks of
//! their own to interleave.
//!
//! # Fee Deduction Invariant
//!
//! All swap implementations **must** deduct fees from the input amount
//! before applying the pricing formula:
//!
//! ```text
//! net_input  = amount_in × (denominator − fee) / denominator
//! amount_out = price_curve(net_input)
//! ```
//!
//! The full `amount_in`, fee included, is added to the input reserve.

use crate::domain::{FeeTier, PoolState, SwapEffects, SwapSpec, TokenPair};
use crate::error::AmmError;

/// Core trait for AMM pools that price swaps.
///
/// # Errors
///
/// Quotes return [`Result<SwapEffects, AmmError>`]. Common error variants:
///
/// - [`AmmError::InsufficientLiquidity`]: a reserve is zero
/// - [`AmmError::InsufficientOutputAmount`]: the input buys nothing
/// - [`AmmError::SlippageExceeded`]: output below the caller's minimum
/// - [`AmmError::Overflow`]: arithmetic overflow during calculation
pub trait SwapPool {
    /// Computes the outcome of `spec` against the current state.
    ///
    /// Pure: the pool is not modified.
    ///
    /// # Errors
    ///
    /// Returns the first check that fails; see the trait-level list.
    fn quote_swap(&self, spec: &SwapSpec) -> Result<SwapEffects, AmmError>;

    /// Commits a quote produced by [`SwapPool::quote_swap`] on this pool.
    ///
    /// Must be called with a quote taken against the current state.
    fn apply_swap(&mut self, effects: &SwapEffects);

    /// Quotes and immediately applies a swap.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::quote_swap`]; on error the pool is unchanged.
    fn swap(&mut self, spec: &SwapSpec) -> Result<SwapEffects, AmmError> {
        let effects = self.quote_swap(spec)?;
        self.apply_swap(&effects);
        Ok(effects)
    }

    /// Returns the current reserves and outstanding shares.
    #[must_use]
    fn state(&self) -> PoolState;

    /// Returns the ordered token pair managed by this pool.
    #[must_use]
    fn token_pair(&self) -> &TokenPair;

    /// Returns the fee tier applied to swaps. Constant for the pool's
    /// lifetime.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;
}
