//! Liquidity deposit and withdrawal requests.

use core::fmt;

use super::{Amount, Liquidity};
use crate::error::AmmError;

/// Descriptor for the type of liquidity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChangeType {
    /// Minting shares against a deposit.
    Add = 0,
    /// Burning shares for a withdrawal.
    Remove = 1,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Add"),
            Self::Remove => write!(f, "Remove"),
        }
    }
}

/// A request to deposit into or withdraw from a pool.
///
/// # Examples
///
/// ```
/// use multipool_amm::domain::{Amount, Liquidity, LiquidityChange};
///
/// let deposit = LiquidityChange::add(
///     Amount::from(100_000u64),
///     Amount::from(100_000u64),
///     Amount::ZERO,
///     Amount::ZERO,
/// );
/// assert!(deposit.is_ok());
///
/// let withdrawal = LiquidityChange::remove(Liquidity::from(99_000u64));
/// assert!(withdrawal.is_remove());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiquidityChange {
    /// Deposit up to the desired amounts, no less than the minimums.
    Add {
        /// Most of token0 the caller is willing to deposit.
        amount0_desired: Amount,
        /// Most of token1 the caller is willing to deposit.
        amount1_desired: Amount,
        /// Least of token0 the caller accepts depositing.
        amount0_min: Amount,
        /// Least of token1 the caller accepts depositing.
        amount1_min: Amount,
    },
    /// Burn shares for a proportional slice of both reserves.
    Remove {
        /// Shares to burn.
        liquidity: Liquidity,
    },
}

impl LiquidityChange {
    /// Creates an `Add` variant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if either desired amount is zero.
    pub fn add(
        amount0_desired: Amount,
        amount1_desired: Amount,
        amount0_min: Amount,
        amount1_min: Amount,
    ) -> Result<Self, AmmError> {
        if amount0_desired.is_zero() || amount1_desired.is_zero() {
            return Err(AmmError::InvalidAmount(
                "desired deposit amounts must be non-zero",
            ));
        }
        Ok(Self::Add {
            amount0_desired,
            amount1_desired,
            amount0_min,
            amount1_min,
        })
    }

    /// Creates a `Remove` variant.
    ///
    /// A zero burn is representable; the pool rejects it when quoting
    /// because it would pay out nothing.
    pub const fn remove(liquidity: Liquidity) -> Self {
        Self::Remove { liquidity }
    }

    /// Returns the [`ChangeType`] descriptor for this variant.
    #[must_use]
    pub const fn change_type(&self) -> ChangeType {
        match self {
            Self::Add { .. } => ChangeType::Add,
            Self::Remove { .. } => ChangeType::Remove,
        }
    }

    /// Returns `true` if this is an `Add` variant.
    #[must_use]
    pub const fn is_add(&self) -> bool {
        matches!(self, Self::Add { .. })
    }

    /// Returns `true` if this is a `Remove` variant.
    #[must_use]
    pub const fn is_remove(&self) -> bool {
        matches!(self, Self::Remove { .. })
    }
}

impl fmt::Display for LiquidityChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add {
                amount0_desired,
                amount1_desired,
                amount0_min,
                amount1_min,
            } => write!(
                f,
                "Add(desired=({amount0_desired}, {amount1_desired}), min=({amount0_min}, {amount1_min}))"
            ),
            Self::Remove { liquidity } => write!(f, "Remove(liquidity={liquidity})"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Add ----------------------------------------------------------------

    #[test]
    fn add_valid() {
        let Ok(c) = LiquidityChange::add(
            Amount::from(100u64),
            Amount::from(200u64),
            Amount::from(90u64),
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert!(c.is_add());
        assert!(!c.is_remove());
        assert_eq!(c.change_type(), ChangeType::Add);
    }

    #[test]
    fn add_zero_token0_rejected() {
        let result =
            LiquidityChange::add(Amount::ZERO, Amount::from(1u64), Amount::ZERO, Amount::ZERO);
        assert!(matches!(result, Err(AmmError::InvalidAmount(_))));
    }

    #[test]
    fn add_zero_token1_rejected() {
        let result =
            LiquidityChange::add(Amount::from(1u64), Amount::ZERO, Amount::ZERO, Amount::ZERO);
        assert!(matches!(result, Err(AmmError::InvalidAmount(_))));
    }

    // -- Remove -------------------------------------------------------------

    #[test]
    fn remove_variant() {
        let c = LiquidityChange::remove(Liquidity::from(5u64));
        assert!(c.is_remove());
        assert_eq!(c.change_type(), ChangeType::Remove);
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display() {
        let Ok(add) = LiquidityChange::add(
            Amount::from(1u64),
            Amount::from(2u64),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(add.to_string(), "Add(desired=(1, 2), min=(0, 0))");
        assert_eq!(
            LiquidityChange::remove(Liquidity::from(7u64)).to_string(),
            "Remove(liquidity=7)"
        );
        assert_eq!(ChangeType::Remove.to_string(), "Remove");
    }
}
