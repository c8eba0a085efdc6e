//! Pool storage keyed by deterministic identifier.
//!
//! The [`PoolRegistry`] exclusively owns every
//! [`ConstantProductPool`](crate::pools::ConstantProductPool). It enforces
//! that a (pair, fee) combination is registered at most once and turns
//! lookups of unknown identifiers into
//! [`AmmError::PoolDoesNotExist`](crate::error::AmmError::PoolDoesNotExist).
//!
//! # Usage
//!
//! ```rust
//! use alloy_primitives::Address;
//! use multipool_amm::domain::{FeeTier, Liquidity, TokenAddress};
//! use multipool_amm::registry::PoolRegistry;
//! use multipool_amm::traits::SwapPool;
//!
//! let a = TokenAddress::new(Address::repeat_byte(1));
//! let b = TokenAddress::new(Address::repeat_byte(2));
//! let fee = FeeTier::parts_per_10k(1_000).expect("valid fee");
//!
//! let mut registry = PoolRegistry::new();
//! let id = registry
//!     .create_pool(a, b, fee, Liquidity::from(1_000u64))
//!     .expect("new pool");
//! assert_eq!(registry.get(&id).expect("registered").fee_tier(), fee);
//! assert!(registry.create_pool(b, a, fee, Liquidity::from(1_000u64)).is_err());
//! ```

mod pool_registry;

pub use pool_registry::PoolRegistry;
