//! Unified error types for the AMM engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Every variant is detected before any state mutation, so receiving an
//! error guarantees that the exchange state is unchanged.

use crate::domain::{Amount, Liquidity, PoolId};

/// Errors produced by the pool accounting and swap-pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// Both sides of a pair name the same asset.
    #[error("invalid token pair: token addresses must differ")]
    InvalidTokenPair,

    /// The fee is zero or above the configured ceiling.
    #[error("invalid fee {fee}: must be in 1..={max}")]
    InvalidFee {
        /// Fee that was requested.
        fee: u32,
        /// Highest fee the engine accepts.
        max: u32,
    },

    /// A pool with the same `(token0, token1, fee)` triple is registered.
    #[error("pool {0} already exists")]
    PoolAlreadyExists(PoolId),

    /// No pool is registered under the given id.
    #[error("pool {0} does not exist")]
    PoolDoesNotExist(PoolId),

    /// The first deposit does not clear the minimum-liquidity lock.
    #[error("insufficient initial liquidity")]
    InsufficientInitialLiquidity,

    /// A computed deposit amount is below the caller's minimum.
    #[error("insufficient amount: deposit below caller minimum")]
    InsufficientAmount,

    /// A deposit into an initialized pool would mint zero shares.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// The caller tried to withdraw more shares than they own.
    #[error("insufficient liquidity owned: requested {requested}, owned {owned}")]
    InsufficientLiquidityOwned {
        /// Shares the caller asked to burn.
        requested: Liquidity,
        /// Shares the caller actually holds.
        owned: Liquidity,
    },

    /// Burning the requested shares would pay out zero of a token.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// One or both pool reserves are empty.
    #[error("insufficient liquidity in pool reserves")]
    InsufficientLiquidity,

    /// The swap input is too small to buy a single unit of output.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// A zero amount was supplied where a positive one is required.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The swap output is below the caller's minimum.
    #[error("slippage exceeded: output {amount_out} below minimum {min_amount_out}")]
    SlippageExceeded {
        /// Output the pool would pay.
        amount_out: Amount,
        /// Minimum the caller accepts.
        min_amount_out: Amount,
    },

    /// The value attached to the call does not cover the native inbound leg.
    #[error("insufficient native value: required {required}, attached {attached}")]
    InsufficientNativeValue {
        /// Native amount the operation needs.
        required: Amount,
        /// Native amount the caller attached.
        attached: Amount,
    },

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Engine configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;

    #[test]
    fn display_pool_does_not_exist_includes_id() {
        let err = AmmError::PoolDoesNotExist(PoolId::from_digest(B256::ZERO));
        let msg = err.to_string();
        assert!(msg.starts_with("pool 0x0000"));
        assert!(msg.ends_with("does not exist"));
    }

    #[test]
    fn display_slippage() {
        let err = AmmError::SlippageExceeded {
            amount_out: Amount::from(9u64),
            min_amount_out: Amount::from(10u64),
        };
        assert_eq!(
            err.to_string(),
            "slippage exceeded: output 9 below minimum 10"
        );
    }

    #[test]
    fn errors_compare_structurally() {
        assert_eq!(AmmError::InvalidTokenPair, AmmError::InvalidTokenPair);
        assert_ne!(
            AmmError::Overflow("a"),
            AmmError::Underflow("a"),
        );
    }
}
