//! Settlement legs produced by committed operations.
//!
//! Every operation on the exchange reports the asset movements the caller
//! must carry out once bookkeeping is final. Each leg names the asset, the
//! direction, the amount, and a [`TransferMode`]: the native sentinel
//! moves as attached value, every other asset through its token contract.
//!
//! # Native value
//!
//! A call may attach native value. The compute phase checks that it covers
//! every inbound native leg ([`Settlement::reconcile_native`]); any excess
//! is returned to the caller as an outbound native refund leg.

mod transfer;

pub use transfer::{is_native, Settlement, Transfer, TransferDirection, TransferMode};
