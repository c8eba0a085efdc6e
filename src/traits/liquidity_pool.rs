//! Liquidity management trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds share minting and burning on top of the core
//! swap functionality provided by [`SwapPool`].
//!
//! # Liquidity Accounting Invariant
//!
//! The total liquidity reported by [`LiquidityPool::total_liquidity`]
//! **only** changes through applied [`LiquidityChange`] quotes. Swaps
//! never alter it. Once a pool is initialized:
//!
//! ```text
//! L = locked_minimum + Σ position[i].liquidity
//! ```
//!
//! Positions themselves live outside the pool; the pool only sees the
//! amount of shares a change mints or burns.

use super::SwapPool;
use crate::domain::{LiquidityChange, LiquidityEffects, Liquidity};
use crate::error::AmmError;

/// Trait for pools that support liquidity provision.
///
/// # Errors
///
/// Quotes return [`Result<LiquidityEffects, AmmError>`]. Common error
/// variants:
///
/// - [`AmmError::InsufficientInitialLiquidity`]: first deposit too small
/// - [`AmmError::InsufficientAmount`]: deposit below the caller's minimums
/// - [`AmmError::InsufficientLiquidityMinted`]: deposit mints no shares
/// - [`AmmError::InsufficientLiquidityBurned`]: withdrawal pays nothing
/// - [`AmmError::Overflow`]: arithmetic overflow during calculation
pub trait LiquidityPool: SwapPool {
    /// Computes the outcome of `change` against the current state.
    ///
    /// Pure: the pool is not modified.
    ///
    /// # Errors
    ///
    /// Returns the first check that fails; see the trait-level list.
    fn quote_liquidity(&self, change: &LiquidityChange) -> Result<LiquidityEffects, AmmError>;

    /// Commits a quote produced by [`LiquidityPool::quote_liquidity`] on
    /// this pool.
    fn apply_liquidity(&mut self, effects: &LiquidityEffects);

    /// Returns all outstanding shares, including the locked minimum.
    #[must_use]
    fn total_liquidity(&self) -> Liquidity;
}
