//! Engine configuration.
//!
//! [`EngineConfig`] carries the protocol constants that every pool created
//! by an [`Exchange`](crate::exchange::Exchange) inherits: the fee
//! denominator, the fee ceiling, and the minimum-liquidity lock.

mod engine;

pub use engine::EngineConfig;
#[cfg(feature = "serde")]
pub use engine::ConfigError;
