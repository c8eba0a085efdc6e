//! Liquidity share units.

use core::fmt;

use alloy_primitives::U256;

use super::Amount;

/// Liquidity shares of a pool.
///
/// Distinct from [`Amount`] because a share measures proportional
/// ownership of both reserves, not a quantity of one token.
///
/// # Examples
///
/// ```
/// use multipool_amm::domain::Liquidity;
///
/// let a = Liquidity::from(1_000u64);
/// let b = Liquidity::from(2_000u64);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::from(3_000u64)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Liquidity(U256);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Creates a new `Liquidity` from a raw `U256` value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Reinterprets the share count as a token-unit quantity, for use as a
    /// factor in proportion math.
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }
}

impl From<u64> for Liquidity {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for Liquidity {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
