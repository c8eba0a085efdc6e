//! Per-call caller context.

use alloy_primitives::Address;

use crate::domain::Amount;

/// Who is calling and how much native value the call carries.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use multipool_amm::domain::Amount;
/// use multipool_amm::exchange::CallContext;
///
/// let ctx = CallContext::new(Address::repeat_byte(1)).with_value(Amount::from(100u64));
/// assert_eq!(ctx.value(), Amount::from(100u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    caller: Address,
    value: Amount,
}

impl CallContext {
    /// Creates a context for `caller` with no attached value.
    #[must_use]
    pub const fn new(caller: Address) -> Self {
        Self {
            caller,
            value: Amount::ZERO,
        }
    }

    /// Attaches native value to the call.
    #[must_use]
    pub const fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }

    /// Returns the calling address.
    #[must_use]
    pub const fn caller(&self) -> Address {
        self.caller
    }

    /// Returns the attached native value.
    #[must_use]
    pub const fn value(&self) -> Amount {
        self.value
    }
}
