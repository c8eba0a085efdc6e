//! Arithmetic utilities for pool calculations.
//!
//! Every computation in the engine is exact unsigned 256-bit integer
//! arithmetic. Division always rounds down and every intermediate product
//! is overflow-checked, so the same inputs always produce the same
//! outputs.
//!
//! - [`mul_div`]: `a * b / d` with a checked product.
//! - [`isqrt`]: floor square root.
//! - [`CheckedArithmetic`]: fallible arithmetic on domain newtypes.

mod checked;
mod integer;

pub use checked::CheckedArithmetic;
pub use integer::{isqrt, min, mul_div};
