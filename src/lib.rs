//! # Multipool AMM
//!
//! Accounting and pricing engine for a registry of constant-product
//! liquidity pools. Each pool holds two assets, charges a fee on the input
//! side of every swap and issues fungible shares to liquidity providers.
//!
//! The engine is a pure state machine: callers pass a [`CallContext`]
//! (caller address plus attached native value) and receive the transfers
//! the surrounding environment must settle. Token movements themselves
//! happen outside this crate.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | yes | Serialize domain types and load [`EngineConfig`] from TOML |
//!
//! # Quick Start
//!
//! ```rust
//! use alloy_primitives::Address;
//! use multipool_amm::prelude::*;
//!
//! let usdc = TokenAddress::new(Address::repeat_byte(1));
//! let weth = TokenAddress::new(Address::repeat_byte(2));
//! let alice = CallContext::new(Address::repeat_byte(0xa1));
//!
//! let mut exchange = Exchange::new();
//! let pool = exchange.create_pool(usdc, weth, 1_000).expect("new pool");
//!
//! let minted = exchange
//!     .add_liquidity(
//!         &alice,
//!         pool,
//!         Amount::from(100_000u64),
//!         Amount::from(100_000u64),
//!         Amount::ZERO,
//!         Amount::ZERO,
//!     )
//!     .expect("first deposit");
//! assert_eq!(minted.liquidity_minted(), Liquidity::from(99_000u64));
//!
//! let swapped = exchange
//!     .swap(&alice, pool, Amount::from(10u64), Amount::ZERO, true)
//!     .expect("swap");
//! assert_eq!(swapped.amount_out(), Amount::from(9u64));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Exchange    │  validates, then commits pool + ledger together
//! └──────┬───────┘
//!        │ quote → apply
//!        ▼
//! ┌──────────────┐   ┌────────────────┐
//! │ PoolRegistry  │   │ PositionLedger │
//! └──────┬───────┘   └────────────────┘
//!        │ SwapPool + LiquidityPool traits
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Amount, Liquidity, PoolId, PoolState, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`PoolId`](domain::PoolId), [`PoolState`](domain::PoolState), etc. |
//! | [`traits`] | Core abstractions: [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool) |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry): pools keyed by id |
//! | [`ledger`] | [`PositionLedger`](ledger::PositionLedger): per-owner share balances |
//! | [`settlement`] | Transfer legs and native-value reconciliation |
//! | [`exchange`] | [`Exchange`](exchange::Exchange): the public operations |
//! | [`config`] | [`EngineConfig`](config::EngineConfig): protocol constants |
//! | [`math`]   | Checked arithmetic, `mul_div`, integer square root |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! [`CallContext`]: exchange::CallContext
//! [`EngineConfig`]: config::EngineConfig

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod settlement;
pub mod traits;
