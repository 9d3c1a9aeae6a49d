//! Standard normal distribution helpers shared by the pricing and sensitivity engines.

use statrs::consts::SQRT_2PI;
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// Standard normal CDF, N(x).
///
/// Evaluated as `0.5 * erfc(-x / sqrt(2))` so the lower tail keeps full
/// relative precision instead of collapsing through `1 - N(-x)`.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal PDF, φ(x).
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}
