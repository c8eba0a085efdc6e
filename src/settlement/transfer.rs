//! Transfer legs and their aggregation into a settlement.

use core::fmt;

use crate::domain::{Amount, TokenAddress};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Returns `true` if `token` is the native-coin sentinel.
#[must_use]
pub fn is_native(token: TokenAddress) -> bool {
    token.is_native()
}

/// How a leg moves value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferMode {
    /// Value attached to or sent with the call.
    Native,
    /// A token-contract transfer.
    Token,
}

impl TransferMode {
    /// Picks the mode for `asset`.
    #[must_use]
    pub fn for_asset(asset: TokenAddress) -> Self {
        if is_native(asset) {
            Self::Native
        } else {
            Self::Token
        }
    }
}

/// Which way a leg moves value, seen from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferDirection {
    /// Caller pays the exchange.
    In,
    /// Exchange pays the caller.
    Out,
}

/// A single asset movement between the caller and the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transfer {
    asset: TokenAddress,
    direction: TransferDirection,
    amount: Amount,
    mode: TransferMode,
}

impl Transfer {
    /// Creates a leg, deriving its mode from `asset`.
    #[must_use]
    pub fn new(asset: TokenAddress, direction: TransferDirection, amount: Amount) -> Self {
        Self {
            asset,
            direction,
            amount,
            mode: TransferMode::for_asset(asset),
        }
    }

    /// Returns the moved asset.
    #[must_use]
    pub const fn asset(&self) -> TokenAddress {
        self.asset
    }

    /// Returns the direction.
    #[must_use]
    pub const fn direction(&self) -> TransferDirection {
        self.direction
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the transfer mode.
    #[must_use]
    pub const fn mode(&self) -> TransferMode {
        self.mode
    }

    fn is_native_inbound(&self) -> bool {
        self.mode == TransferMode::Native && self.direction == TransferDirection::In
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.direction {
            TransferDirection::In => "in",
            TransferDirection::Out => "out",
        };
        write!(f, "{arrow} {} {}", self.amount, self.asset)
    }
}

/// Ordered list of legs for one committed operation.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use multipool_amm::domain::{Amount, TokenAddress};
/// use multipool_amm::settlement::{Settlement, TransferMode};
///
/// let token = TokenAddress::new(Address::repeat_byte(1));
/// let settlement = Settlement::new()
///     .inbound(TokenAddress::NATIVE, Amount::from(100u64))
///     .inbound(token, Amount::from(200u64))
///     .reconcile_native(Amount::from(150u64))
///     .expect("enough value attached");
///
/// assert_eq!(settlement.native_refund(), Amount::from(50u64));
/// assert_eq!(settlement.transfers()[0].mode(), TransferMode::Native);
/// assert_eq!(settlement.transfers()[1].mode(), TransferMode::Token);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settlement {
    transfers: Vec<Transfer>,
    native_refund: Amount,
}

impl Settlement {
    /// Creates an empty settlement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a caller-to-exchange leg.
    #[must_use]
    pub fn inbound(mut self, asset: TokenAddress, amount: Amount) -> Self {
        self.transfers
            .push(Transfer::new(asset, TransferDirection::In, amount));
        self
    }

    /// Appends an exchange-to-caller leg.
    #[must_use]
    pub fn outbound(mut self, asset: TokenAddress, amount: Amount) -> Self {
        self.transfers
            .push(Transfer::new(asset, TransferDirection::Out, amount));
        self
    }

    /// Sums the inbound native legs.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds 256 bits.
    pub fn required_native_value(&self) -> Result<Amount, AmmError> {
        self.transfers
            .iter()
            .filter(|t| t.is_native_inbound())
            .try_fold(Amount::ZERO, |acc, t| acc.safe_add(&t.amount()))
    }

    /// Checks `attached` against the inbound native legs and appends a
    /// refund leg for any excess.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientNativeValue`] if `attached` is short.
    /// - [`AmmError::Overflow`] if the requirement exceeds 256 bits.
    pub fn reconcile_native(self, attached: Amount) -> Result<Self, AmmError> {
        let required = self.required_native_value()?;
        let Some(excess) = attached.checked_sub(&required) else {
            return Err(AmmError::InsufficientNativeValue { required, attached });
        };
        if excess.is_zero() {
            return Ok(self);
        }
        let mut settled = self.outbound(TokenAddress::NATIVE, excess);
        settled.native_refund = excess;
        Ok(settled)
    }

    /// Returns every leg in execution order.
    #[must_use]
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Returns the attached value handed back to the caller.
    #[must_use]
    pub const fn native_refund(&self) -> Amount {
        self.native_refund
    }

    /// Returns the number of legs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    /// Returns `true` if there is nothing to transfer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}
