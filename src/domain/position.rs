//! Liquidity position of one owner in one pool.

use core::fmt;

use alloy_primitives::{Address, B256};

use super::{position_id, Liquidity, PoolId};

/// An owner's share balance in a pool.
///
/// Positions are snapshots handed out by the position ledger; the ledger
/// itself is the only place balances are stored. A zero balance is a valid
/// terminal state.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{Address, B256};
/// use multipool_amm::domain::{Liquidity, PoolId, Position};
///
/// let pool = PoolId::from_digest(B256::ZERO);
/// let pos = Position::new(pool, Address::repeat_byte(1), Liquidity::from(99_000u64));
/// assert!(!pos.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pool_id: PoolId,
    owner: Address,
    liquidity: Liquidity,
}

impl Position {
    /// Creates a position snapshot.
    #[must_use]
    pub const fn new(pool_id: PoolId, owner: Address, liquidity: Liquidity) -> Self {
        Self {
            pool_id,
            owner,
            liquidity,
        }
    }

    /// Returns the pool this position belongs to.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// Returns the position owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the share balance.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Returns `true` if the owner holds no shares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.liquidity.is_zero()
    }

    /// Returns the position's 32-byte identifier.
    #[must_use]
    pub fn id(&self) -> B256 {
        position_id(self.pool_id, self.owner)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position(pool={}, owner={}, liquidity={})",
            self.pool_id, self.owner, self.liquidity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> PoolId {
        PoolId::from_digest(B256::repeat_byte(0x42))
    }

    #[test]
    fn accessors() {
        let owner = Address::repeat_byte(9);
        let pos = Position::new(pool(), owner, Liquidity::from(10u64));
        assert_eq!(pos.pool_id(), pool());
        assert_eq!(pos.owner(), owner);
        assert_eq!(pos.liquidity(), Liquidity::from(10u64));
    }

    #[test]
    fn empty_position() {
        let pos = Position::new(pool(), Address::ZERO, Liquidity::ZERO);
        assert!(pos.is_empty());
    }

    #[test]
    fn id_matches_free_function() {
        let owner = Address::repeat_byte(3);
        let pos = Position::new(pool(), owner, Liquidity::ZERO);
        assert_eq!(pos.id(), position_id(pool(), owner));
    }
}
