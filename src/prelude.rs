//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use multipool_amm::prelude::*;
//! ```

pub use crate::domain::{
    Amount, FeeTier, Liquidity, PoolId, PoolState, Position, SwapDirection, TokenAddress,
    TokenPair,
};

pub use crate::traits::{LiquidityPool, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::EngineConfig;

pub use crate::error::{AmmError, Result};

pub use crate::exchange::{BurnResult, CallContext, Exchange, MintResult, SwapResult};

pub use crate::pools::ConstantProductPool;

pub use crate::settlement::{Settlement, Transfer, TransferDirection, TransferMode};
