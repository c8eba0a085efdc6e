//! Default position ledger implementation.

use std::collections::HashMap;

use alloy_primitives::Address;

use crate::domain::{Liquidity, PoolId, Position};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Share balances keyed by pool, then owner.
///
/// An owner without an entry holds zero shares. Zero balances are kept
/// once written; a position is never deleted.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{Address, B256};
/// use multipool_amm::domain::{Liquidity, PoolId};
/// use multipool_amm::ledger::PositionLedger;
///
/// let pool = PoolId::from_digest(B256::ZERO);
/// let owner = Address::repeat_byte(1);
/// let mut ledger = PositionLedger::new();
///
/// let next = ledger.preview_credit(pool, owner, Liquidity::from(99_000u64)).expect("fits");
/// ledger.set(pool, owner, next);
/// assert_eq!(ledger.get(pool, owner), Liquidity::from(99_000u64));
/// assert!(ledger.preview_debit(pool, owner, Liquidity::from(500_000u64)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionLedger {
    balances: HashMap<PoolId, HashMap<Address, Liquidity>>,
}

impl PositionLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shares `owner` holds in `pool`.
    #[must_use]
    pub fn get(&self, pool: PoolId, owner: Address) -> Liquidity {
        self.balances
            .get(&pool)
            .and_then(|owners| owners.get(&owner))
            .copied()
            .unwrap_or(Liquidity::ZERO)
    }

    /// Returns a snapshot of `owner`'s position in `pool`.
    #[must_use]
    pub fn position(&self, pool: PoolId, owner: Address) -> Position {
        Position::new(pool, owner, self.get(pool, owner))
    }

    /// Computes the balance after crediting `amount`, without writing it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would exceed 256 bits.
    pub fn preview_credit(
        &self,
        pool: PoolId,
        owner: Address,
        amount: Liquidity,
    ) -> Result<Liquidity, AmmError> {
        self.get(pool, owner).safe_add(&amount)
    }

    /// Computes the balance after debiting `amount`, without writing it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLiquidityOwned`] if `owner` holds
    /// fewer than `amount` shares.
    pub fn preview_debit(
        &self,
        pool: PoolId,
        owner: Address,
        amount: Liquidity,
    ) -> Result<Liquidity, AmmError> {
        let owned = self.get(pool, owner);
        owned
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientLiquidityOwned {
                requested: amount,
                owned,
            })
    }

    /// Writes `owner`'s balance in `pool`.
    pub fn set(&mut self, pool: PoolId, owner: Address, balance: Liquidity) {
        self.balances.entry(pool).or_default().insert(owner, balance);
    }

    /// Iterates over every recorded position in `pool`, in no particular
    /// order.
    pub fn positions(&self, pool: PoolId) -> impl Iterator<Item = Position> + '_ {
        self.balances
            .get(&pool)
            .into_iter()
            .flat_map(move |owners| {
                owners
                    .iter()
                    .map(move |(owner, balance)| Position::new(pool, *owner, *balance))
            })
    }

    /// Sums every position balance in `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds 256 bits.
    pub fn total(&self, pool: PoolId) -> Result<Liquidity, AmmError> {
        self.positions(pool)
            .try_fold(Liquidity::ZERO, |acc, p| acc.safe_add(&p.liquidity()))
    }
}
