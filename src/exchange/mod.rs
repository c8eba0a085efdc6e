//! The top-level exchange: pools, positions and their operation surface.
//!
//! [`Exchange`] owns the [`PoolRegistry`](crate::registry::PoolRegistry)
//! and the [`PositionLedger`](crate::ledger::PositionLedger). Callers
//! identify themselves and any attached native value with a
//! [`CallContext`]; committed operations return a result carrying the
//! [`Settlement`](crate::settlement::Settlement) the caller must execute.

mod context;
mod engine;
mod results;

pub use context::CallContext;
pub use engine::Exchange;
pub use results::{BurnResult, MintResult, SwapResult};
