//! Core trait abstractions for AMM pool operations.
//!
//! This module defines the two traits every pool implementation must
//! satisfy: [`SwapPool`] for pricing and executing swaps, and
//! [`LiquidityPool`] for minting and burning shares.
//!
//! Both traits split each operation into a pure *quote* that validates
//! and computes the outcome, and an infallible *apply* that commits it.

mod liquidity_pool;
mod swap_pool;

pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
