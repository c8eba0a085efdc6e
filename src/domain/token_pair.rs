//! Ordered pair of distinct tokens.

use super::{SwapDirection, TokenAddress};
use crate::error::AmmError;

/// An ordered pair of distinct tokens, canonically sorted by address.
///
/// The canonical ordering guarantees `token0 < token1`, so `(A, B)` and
/// `(B, A)` describe the same pair.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use multipool_amm::domain::{TokenAddress, TokenPair};
///
/// let a = TokenAddress::new(Address::repeat_byte(1));
/// let b = TokenAddress::new(Address::repeat_byte(2));
///
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.token0(), a);
/// assert_eq!(pair.token1(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token0: TokenAddress,
    token1: TokenAddress,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] if both tokens are the same.
    pub fn new(token_a: TokenAddress, token_b: TokenAddress) -> Result<Self, AmmError> {
        if token_a == token_b {
            return Err(AmmError::InvalidTokenPair);
        }

        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        Ok(Self { token0, token1 })
    }

    /// Returns the lower-ordered token.
    #[must_use]
    pub const fn token0(&self) -> TokenAddress {
        self.token0
    }

    /// Returns the higher-ordered token.
    #[must_use]
    pub const fn token1(&self) -> TokenAddress {
        self.token1
    }

    /// Returns `(input, output)` tokens for a swap in the given direction.
    #[must_use]
    pub const fn oriented(&self, direction: SwapDirection) -> (TokenAddress, TokenAddress) {
        if direction.is_zero_for_one() {
            (self.token0, self.token1)
        } else {
            (self.token1, self.token0)
        }
    }

    /// Returns `true` if either side is the native-coin sentinel.
    #[must_use]
    pub fn has_native(&self) -> bool {
        // The sentinel sorts lowest, so only token0 can be native.
        self.token0.is_native()
    }
}
