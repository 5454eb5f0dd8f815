//! Deterministic Gaussian CDF in 18-decimal fixed-point arithmetic.
//! Integer-only math for consensus-critical execution - no floating point.

pub mod error;
pub mod math;

pub use error::GaussianError;
pub use math::fixed_point::{Fixed18, MathError, HALF, ONE, SCALE};
pub use math::gaussian::{cdf, MAX_MEAN, MAX_STD_DEV, MIN_MEAN, MIN_STD_DEV};
