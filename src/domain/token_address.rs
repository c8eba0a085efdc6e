//! Asset identifier, including the native-coin sentinel.

use core::fmt;

use alloy_primitives::Address;

/// A 20-byte asset identifier.
///
/// Token contracts are identified by their address. The all-zero address is
/// reserved as [`TokenAddress::NATIVE`] and denotes the chain's native coin;
/// since ordering is byte-wise, the sentinel always sorts lowest and is
/// therefore `token0` of every pool it belongs to.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use multipool_amm::domain::TokenAddress;
///
/// let token = TokenAddress::new(Address::repeat_byte(1));
/// assert!(!token.is_native());
/// assert!(TokenAddress::NATIVE < token);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TokenAddress(Address);

impl TokenAddress {
    /// The native-coin sentinel (zero address).
    pub const NATIVE: Self = Self(Address::ZERO);

    /// Wraps a raw address.
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Returns the underlying address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }

    /// Returns `true` if this identifier is the native-coin sentinel.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.0 == Address::ZERO
    }
}

impl From<Address> for TokenAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_native() {
            write!(f, "native")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_is_zero_address() {
        assert!(TokenAddress::NATIVE.is_native());
        assert_eq!(TokenAddress::NATIVE.address(), Address::ZERO);
        assert_eq!(TokenAddress::default(), TokenAddress::NATIVE);
    }

    #[test]
    fn ordinary_token_is_not_native() {
        assert!(!TokenAddress::new(Address::repeat_byte(7)).is_native());
    }

    #[test]
    fn native_sorts_lowest() {
        let lowest_token = TokenAddress::new(Address::with_last_byte(1));
        assert!(TokenAddress::NATIVE < lowest_token);
    }

    #[test]
    fn ordering_is_bytewise() {
        let lo = TokenAddress::new(Address::with_last_byte(0xff));
        let hi = TokenAddress::new(Address::repeat_byte(0x01));
        assert!(lo < hi);
    }

    #[test]
    fn display() {
        assert_eq!(TokenAddress::NATIVE.to_string(), "native");
        let t = TokenAddress::new(Address::repeat_byte(0x11));
        assert!(t.to_string().starts_with("0x1111"));
    }
}
