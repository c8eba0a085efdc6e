//! Swap request specification.

use core::fmt;

use super::Amount;
use crate::error::AmmError;

/// Which reserve a swap sells into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Sell token0, receive token1.
    ZeroForOne = 0,
    /// Sell token1, receive token0.
    OneForZero = 1,
}

impl SwapDirection {
    /// Maps the wire-level `zero_for_one` flag to a direction.
    #[must_use]
    pub const fn from_zero_for_one(zero_for_one: bool) -> Self {
        if zero_for_one {
            Self::ZeroForOne
        } else {
            Self::OneForZero
        }
    }

    /// Returns `true` for [`SwapDirection::ZeroForOne`].
    #[must_use]
    pub const fn is_zero_for_one(&self) -> bool {
        matches!(self, Self::ZeroForOne)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroForOne => write!(f, "ZeroForOne"),
            Self::OneForZero => write!(f, "OneForZero"),
        }
    }
}

/// An exact-input swap: sell `amount_in`, receive at least `min_amount_out`.
///
/// # Invariants
///
/// `amount_in` is always non-zero.
///
/// # Examples
///
/// ```
/// use multipool_amm::domain::{Amount, SwapDirection, SwapSpec};
///
/// let spec = SwapSpec::exact_in(Amount::from(10u64), Amount::ZERO, SwapDirection::ZeroForOne);
/// assert!(spec.is_ok());
/// assert!(SwapSpec::exact_in(Amount::ZERO, Amount::ZERO, SwapDirection::ZeroForOne).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapSpec {
    amount_in: Amount,
    min_amount_out: Amount,
    direction: SwapDirection,
}

impl SwapSpec {
    /// Creates an exact-input swap specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if `amount_in` is zero.
    pub fn exact_in(
        amount_in: Amount,
        min_amount_out: Amount,
        direction: SwapDirection,
    ) -> Result<Self, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap input must be non-zero"));
        }
        Ok(Self {
            amount_in,
            min_amount_out,
            direction,
        })
    }

    /// Returns the exact input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the minimum acceptable output.
    pub const fn min_amount_out(&self) -> Amount {
        self.min_amount_out
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(in={}, min_out={})",
            self.direction, self.amount_in, self.min_amount_out
        )
    }
}
