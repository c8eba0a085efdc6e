//! Per-pool swap fee.

use core::fmt;

use alloy_primitives::U256;

use super::Amount;
use crate::error::AmmError;

/// Default fee denominator: fees are parts-per-10,000 (1000 = 10%).
pub const DEFAULT_FEE_DENOMINATOR: u32 = 10_000;

/// Largest value a fee can take on the wire (`uint24`).
pub const MAX_WIRE_FEE: u32 = (1 << 24) - 1;

/// The immutable swap fee of a pool, expressed as `fee / denominator`.
///
/// The fee fraction of every swap input stays inside the pool; only the
/// remainder participates in pricing.
///
/// # Invariants
///
/// - `0 < fee < denominator`
///
/// # Examples
///
/// ```
/// use multipool_amm::domain::{Amount, FeeTier};
///
/// let tier = FeeTier::parts_per_10k(1_000).expect("10% is valid");
/// let (net, fee) = tier.deduct(Amount::from(10u64)).expect("no overflow");
/// assert_eq!(net, Amount::from(9u64));
/// assert_eq!(fee, Amount::from(1u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier {
    fee: u32,
    denominator: u32,
}

impl FeeTier {
    /// Creates a fee tier, accepting `fee` in `1..=max_fee`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee` is zero, above `max_fee`,
    /// or not strictly below `denominator`.
    pub fn new(fee: u32, denominator: u32, max_fee: u32) -> Result<Self, AmmError> {
        let max = max_fee.min(denominator.saturating_sub(1));
        if fee == 0 || fee > max {
            return Err(AmmError::InvalidFee { fee, max });
        }
        Ok(Self { fee, denominator })
    }

    /// Creates a parts-per-10,000 fee tier with the widest valid ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] unless `0 < fee < 10_000`.
    pub fn parts_per_10k(fee: u32) -> Result<Self, AmmError> {
        Self::new(fee, DEFAULT_FEE_DENOMINATOR, DEFAULT_FEE_DENOMINATOR - 1)
    }

    /// Returns the fee numerator. This is the value hashed into pool ids.
    #[must_use]
    pub const fn fee(&self) -> u32 {
        self.fee
    }

    /// Returns the fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Splits `amount` into `(amount_after_fee, fee_amount)`.
    ///
    /// `amount_after_fee = amount * (denominator - fee) / denominator`,
    /// rounded down, so the retained fee is rounded up.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate product overflows.
    pub fn deduct(&self, amount: Amount) -> Result<(Amount, Amount), AmmError> {
        let complement = U256::from(self.denominator - self.fee);
        let net = amount
            .get()
            .checked_mul(complement)
            .ok_or(AmmError::Overflow("fee deduction overflow"))?
            / U256::from(self.denominator);
        let net = Amount::new(net);
        let fee = amount
            .checked_sub(&net)
            .ok_or(AmmError::Underflow("fee exceeds input"))?;
        Ok((net, fee))
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.fee, self.denominator)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn tier(fee: u32) -> FeeTier {
        let Ok(t) = FeeTier::parts_per_10k(fee) else {
            panic!("valid fee {fee}");
        };
        t
    }

    #[test]
    fn accessors() {
        let t = tier(30);
        assert_eq!(t.fee(), 30);
        assert_eq!(t.denominator(), DEFAULT_FEE_DENOMINATOR);
    }

    #[test]
    fn zero_fee_rejected() {
        assert_eq!(
            FeeTier::parts_per_10k(0),
            Err(AmmError::InvalidFee { fee: 0, max: 9_999 })
        );
    }

    #[test]
    fn full_fee_rejected() {
        assert!(FeeTier::parts_per_10k(10_000).is_err());
    }

    #[test]
    fn custom_ceiling_enforced() {
        assert!(FeeTier::new(500, 10_000, 500).is_ok());
        assert_eq!(
            FeeTier::new(501, 10_000, 500),
            Err(AmmError::InvalidFee { fee: 501, max: 500 })
        );
    }

    #[test]
    fn ceiling_clamped_below_denominator() {
        assert_eq!(
            FeeTier::new(100, 100, 1_000),
            Err(AmmError::InvalidFee { fee: 100, max: 99 })
        );
    }

    #[test]
    fn deduct_ten_percent_of_ten() {
        let Ok((net, fee)) = tier(1_000).deduct(Amount::from(10u64)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::from(9u64));
        assert_eq!(fee, Amount::from(1u64));
    }

    #[test]
    fn deduct_rounds_net_down() {
        // 15 * 9000 / 10000 = 13.5 -> 13
        let Ok((net, fee)) = tier(1_000).deduct(Amount::from(15u64)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::from(13u64));
        assert_eq!(fee, Amount::from(2u64));
    }

    #[test]
    fn deduct_overflow() {
        assert!(matches!(
            tier(30).deduct(Amount::MAX),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(tier(1_000).to_string(), "1000/10000");
    }
}
