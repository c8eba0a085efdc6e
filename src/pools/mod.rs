//! Pool implementations.
//!
//! Every pool in the engine is a [`ConstantProductPool`]: two reserves,
//! an input-side fee and a share supply. Pools implement
//! [`SwapPool`](crate::traits::SwapPool) and
//! [`LiquidityPool`](crate::traits::LiquidityPool) with a quote/apply
//! split, so the exchange can validate every side effect before it
//! commits any of them.

pub mod constant_product;

pub use constant_product::ConstantProductPool;

#[cfg(test)]
mod proptest_properties;
