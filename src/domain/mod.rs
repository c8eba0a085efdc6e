//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the value types that model the AMM domain:
//! asset identifiers, amounts, liquidity shares, fee tiers, pool and
//! position identifiers, and the request types for swaps and liquidity
//! changes. All types use newtypes with validated constructors to enforce
//! invariants.

mod amount;
mod effects;
mod fee_tier;
mod liquidity;
mod liquidity_change;
mod pool_id;
mod pool_state;
mod position;
mod swap_spec;
mod token_address;
mod token_pair;

pub use amount::Amount;
pub use effects::{LiquidityEffects, SwapEffects};
pub use fee_tier::{FeeTier, DEFAULT_FEE_DENOMINATOR, MAX_WIRE_FEE};
pub use liquidity::Liquidity;
pub use liquidity_change::{ChangeType, LiquidityChange};
pub use pool_id::{position_id, PoolId};
pub use pool_state::PoolState;
pub use position::Position;
pub use swap_spec::{SwapDirection, SwapSpec};
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;
