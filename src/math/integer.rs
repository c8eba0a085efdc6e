//! Integer primitives on [`U256`].
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use multipool_amm::math::{isqrt, mul_div};
//!
//! assert_eq!(isqrt(U256::from(10_000_000_000u64)), U256::from(100_000u64));
//! assert_eq!(mul_div(U256::from(7), U256::from(3), U256::from(2)).ok(), Some(U256::from(10)));
//! ```

use alloy_primitives::U256;

use crate::error::AmmError;

/// Computes `a * b / denominator`, rounded down.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if `a * b` does not fit in 256 bits.
#[inline]
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, AmmError> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let product = a
        .checked_mul(b)
        .ok_or(AmmError::Overflow("mul_div product overflow"))?;
    Ok(product / denominator)
}

/// Floor square root via the Babylonian method.
///
/// Returns the largest `z` with `z * z <= y`.
#[must_use]
pub fn isqrt(y: U256) -> U256 {
    let one = U256::from(1u8);
    let two = U256::from(2u8);
    if y > U256::from(3u8) {
        let mut z = y;
        let mut x = y / two + one;
        while x < z {
            z = x;
            x = (y / x + x) / two;
        }
        z
    } else if y.is_zero() {
        U256::ZERO
    } else {
        one
    }
}

/// Returns the smaller of two values.
#[inline]
#[must_use]
pub fn min(a: U256, b: U256) -> U256 {
    if a < b {
        a
    } else {
        b
    }
}
