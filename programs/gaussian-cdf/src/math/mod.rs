// Fixed-point math module

pub mod erf;
pub mod fixed_point;
pub mod gaussian;

// Re-export commonly used types and functions
pub use erf::{erfc_scaled, exp_neg, std_normal_cdf, SQRT2, Z_SAT};
pub use fixed_point::{mul_div, Fixed18, MathError, HALF, ONE, SCALE};
pub use gaussian::cdf;
