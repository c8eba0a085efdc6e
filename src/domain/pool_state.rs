//! Snapshot of a pool's mutable accounting state.

use core::fmt;

use alloy_primitives::U256;

use super::{Amount, Liquidity, SwapDirection};

/// Reserves and outstanding shares of a pool at one point in time.
///
/// Quotes carry the *next* `PoolState`; applying a quote is a plain
/// assignment, which is what makes every operation all-or-nothing.
///
/// # Examples
///
/// ```
/// use multipool_amm::domain::{Amount, Liquidity, PoolState};
///
/// let state = PoolState::new(
///     Amount::from(100_000u64),
///     Amount::from(100_000u64),
///     Liquidity::from(100_000u64),
/// );
/// assert!(state.is_initialized());
/// assert!(!PoolState::EMPTY.is_initialized());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    reserve0: Amount,
    reserve1: Amount,
    total_liquidity: Liquidity,
}

impl PoolState {
    /// State of a freshly created pool.
    pub const EMPTY: Self = Self {
        reserve0: Amount::ZERO,
        reserve1: Amount::ZERO,
        total_liquidity: Liquidity::ZERO,
    };

    /// Creates a snapshot from raw parts.
    #[must_use]
    pub const fn new(reserve0: Amount, reserve1: Amount, total_liquidity: Liquidity) -> Self {
        Self {
            reserve0,
            reserve1,
            total_liquidity,
        }
    }

    /// Returns the token0 reserve.
    #[must_use]
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Returns the token1 reserve.
    #[must_use]
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Returns all outstanding shares, including the locked minimum.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.total_liquidity
    }

    /// Returns `true` once the first deposit has minted shares.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.total_liquidity.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for a swap in `direction`.
    #[must_use]
    pub const fn oriented(&self, direction: SwapDirection) -> (Amount, Amount) {
        if direction.is_zero_for_one() {
            (self.reserve0, self.reserve1)
        } else {
            (self.reserve1, self.reserve0)
        }
    }

    /// Returns `reserve0 * reserve1`, or `None` if it exceeds 256 bits.
    #[must_use]
    pub fn product(&self) -> Option<U256> {
        self.reserve0.get().checked_mul(self.reserve1.get())
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reserves=({}, {}), liquidity={}",
            self.reserve0, self.reserve1, self.total_liquidity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PoolState {
        PoolState::new(Amount::from(3u64), Amount::from(7u64), Liquidity::from(4u64))
    }

    #[test]
    fn empty_is_default() {
        assert_eq!(PoolState::EMPTY, PoolState::default());
        assert!(PoolState::EMPTY.reserve0().is_zero());
    }

    #[test]
    fn oriented_reserves() {
        let s = state();
        assert_eq!(
            s.oriented(SwapDirection::ZeroForOne),
            (Amount::from(3u64), Amount::from(7u64))
        );
        assert_eq!(
            s.oriented(SwapDirection::OneForZero),
            (Amount::from(7u64), Amount::from(3u64))
        );
    }

    #[test]
    fn product() {
        assert_eq!(state().product(), Some(U256::from(21u64)));
        let huge = PoolState::new(Amount::MAX, Amount::from(2u64), Liquidity::ZERO);
        assert_eq!(huge.product(), None);
    }

    #[test]
    fn display() {
        assert_eq!(state().to_string(), "reserves=(3, 7), liquidity=4");
    }
}
