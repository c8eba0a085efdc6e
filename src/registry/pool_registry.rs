//! Default pool registry implementation.

use std::collections::BTreeMap;

use crate::domain::{FeeTier, Liquidity, PoolId, TokenAddress};
use crate::error::AmmError;
use crate::pools::ConstantProductPool;

/// Map from [`PoolId`] to pool record.
///
/// Pools are never removed: an emptied pool stays registered and its id
/// cannot be reused. Iteration order is by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolRegistry {
    pools: BTreeMap<PoolId, ConstantProductPool>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty pool for the unordered pair and fee tier.
    ///
    /// # Flow
    ///
    /// 1. Canonicalize the pair and derive the id.
    /// 2. Reject the id if it is already registered.
    /// 3. Insert an empty pool locking `minimum_liquidity` on first deposit.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidTokenPair`] if `token_a == token_b`.
    /// - [`AmmError::PoolAlreadyExists`] if the pool is registered.
    pub fn create_pool(
        &mut self,
        token_a: TokenAddress,
        token_b: TokenAddress,
        fee_tier: FeeTier,
        minimum_liquidity: Liquidity,
    ) -> Result<PoolId, AmmError> {
        let (id, pair) = PoolId::compute(token_a, token_b, fee_tier.fee())?;
        if self.pools.contains_key(&id) {
            return Err(AmmError::PoolAlreadyExists(id));
        }
        self.pools.insert(
            id,
            ConstantProductPool::new(id, pair, fee_tier, minimum_liquidity),
        );
        Ok(id)
    }

    /// Returns the pool registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolDoesNotExist`] if `id` is unknown.
    pub fn get(&self, id: &PoolId) -> Result<&ConstantProductPool, AmmError> {
        self.pools.get(id).ok_or(AmmError::PoolDoesNotExist(*id))
    }

    /// Returns the pool registered under `id` for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolDoesNotExist`] if `id` is unknown.
    pub fn get_mut(&mut self, id: &PoolId) -> Result<&mut ConstantProductPool, AmmError> {
        self.pools
            .get_mut(id)
            .ok_or(AmmError::PoolDoesNotExist(*id))
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &PoolId) -> bool {
        self.pools.contains_key(id)
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Iterates over all pools in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&PoolId, &ConstantProductPool)> {
        self.pools.iter()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::PoolState;
    use crate::traits::SwapPool;
    use alloy_primitives::{Address, B256};

    fn tok(byte: u8) -> TokenAddress {
        TokenAddress::new(Address::repeat_byte(byte))
    }

    fn fee(v: u32) -> FeeTier {
        let Ok(t) = FeeTier::parts_per_10k(v) else {
            panic!("valid fee");
        };
        t
    }

    fn lock() -> Liquidity {
        Liquidity::from(1_000u64)
    }

    #[test]
    fn create_registers_empty_pool() {
        let mut registry = PoolRegistry::new();
        let Ok(id) = registry.create_pool(tok(2), tok(1), fee(30), lock()) else {
            panic!("expected Ok");
        };
        let Ok(pool) = registry.get(&id) else {
            panic!("registered");
        };
        assert_eq!(pool.id(), id);
        assert_eq!(pool.token_pair().token0(), tok(1));
        assert_eq!(pool.state(), PoolState::EMPTY);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&id));
    }

    #[test]
    fn duplicate_rejected_in_either_order() {
        let mut registry = PoolRegistry::new();
        let Ok(id) = registry.create_pool(tok(1), tok(2), fee(30), lock()) else {
            panic!("expected Ok");
        };
        assert_eq!(
            registry.create_pool(tok(1), tok(2), fee(30), lock()),
            Err(AmmError::PoolAlreadyExists(id))
        );
        assert_eq!(
            registry.create_pool(tok(2), tok(1), fee(30), lock()),
            Err(AmmError::PoolAlreadyExists(id))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_pair_other_fee_is_distinct() {
        let mut registry = PoolRegistry::new();
        let (Ok(a), Ok(b)) = (
            registry.create_pool(tok(1), tok(2), fee(30), lock()),
            registry.create_pool(tok(1), tok(2), fee(1_000), lock()),
        ) else {
            panic!("expected Ok");
        };
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn identical_tokens_rejected() {
        let mut registry = PoolRegistry::new();
        assert_eq!(
            registry.create_pool(tok(1), tok(1), fee(30), lock()),
            Err(AmmError::InvalidTokenPair)
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_id_rejected() {
        let mut registry = PoolRegistry::new();
        let id = PoolId::from_digest(B256::repeat_byte(7));
        assert_eq!(registry.get(&id).err(), Some(AmmError::PoolDoesNotExist(id)));
        assert_eq!(
            registry.get_mut(&id).err(),
            Some(AmmError::PoolDoesNotExist(id))
        );
    }

    #[test]
    fn iter_visits_all() {
        let mut registry = PoolRegistry::new();
        let Ok(_) = registry.create_pool(tok(1), tok(2), fee(30), lock()) else {
            panic!("expected Ok");
        };
        let Ok(_) = registry.create_pool(TokenAddress::NATIVE, tok(2), fee(30), lock()) else {
            panic!("expected Ok");
        };
        assert_eq!(registry.iter().count(), 2);
    }
}
