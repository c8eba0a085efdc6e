//! Deterministic pool and position identifiers.

use core::fmt;

use alloy_primitives::{keccak256, Address, B256, U256};

use super::{FeeTier, TokenAddress, TokenPair};
use crate::error::AmmError;

/// Identifier of a pool: `keccak256(abi.encode(token0, token1, uint24 fee))`.
///
/// The digest is computed over the canonically ordered pair, so it does not
/// depend on the order in which the caller names the two tokens. Clients can
/// precompute it before submitting a transaction.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use multipool_amm::domain::{PoolId, TokenAddress};
///
/// let a = TokenAddress::new(Address::repeat_byte(1));
/// let b = TokenAddress::new(Address::repeat_byte(2));
///
/// let (id_ab, _) = PoolId::compute(a, b, 1_000).expect("distinct tokens");
/// let (id_ba, _) = PoolId::compute(b, a, 1_000).expect("distinct tokens");
/// assert_eq!(id_ab, id_ba);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PoolId(B256);

impl PoolId {
    /// Wraps a precomputed digest, e.g. one received from a client.
    #[must_use]
    pub const fn from_digest(digest: B256) -> Self {
        Self(digest)
    }

    /// Canonicalizes `(token_a, token_b)` and derives the pool id.
    ///
    /// Returns the id together with the ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] if `token_a == token_b`.
    pub fn compute(
        token_a: TokenAddress,
        token_b: TokenAddress,
        fee: u32,
    ) -> Result<(Self, TokenPair), AmmError> {
        let pair = TokenPair::new(token_a, token_b)?;
        Ok((Self::for_pair(&pair, fee), pair))
    }

    /// Derives the id of an already-ordered pair.
    #[must_use]
    pub fn for_pair(pair: &TokenPair, fee: u32) -> Self {
        let mut encoded = [0u8; 96];
        encoded[..32].copy_from_slice(pair.token0().address().into_word().as_slice());
        encoded[32..64].copy_from_slice(pair.token1().address().into_word().as_slice());
        encoded[64..].copy_from_slice(&U256::from(fee).to_be_bytes::<32>());
        Self(keccak256(encoded))
    }

    /// Derives the id of a pool with the given pair and fee tier.
    #[must_use]
    pub fn for_tier(pair: &TokenPair, fee: &FeeTier) -> Self {
        Self::for_pair(pair, fee.fee())
    }

    /// Returns the raw 32-byte digest.
    #[must_use]
    pub const fn digest(&self) -> B256 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an owner's position in a pool:
/// `keccak256(abi.encode(bytes32 pool_id, address owner))`.
#[must_use]
pub fn position_id(pool_id: PoolId, owner: Address) -> B256 {
    let mut encoded = [0u8; 64];
    encoded[..32].copy_from_slice(pool_id.digest().as_slice());
    encoded[32..].copy_from_slice(owner.into_word().as_slice());
    keccak256(encoded)
}
