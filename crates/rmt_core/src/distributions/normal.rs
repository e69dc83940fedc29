//! Zero-centred normal distribution density.
//!
//! This module provides:
//! - `normal_pdf`: Density of N(0, s²) at a single point
//! - `normal`: Elementwise density over a slice of evaluation points
//!
//! The scale `s` is not validated: `s <= 0` propagates as inf/NaN in the
//! output, exactly as the floating-point formula produces it.

use super::constant;
use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Centred Gaussian probability density function.
///
/// # Mathematical Definition
/// f(z) = 1 / (s * sqrt(2π)) * exp(-z² / (2s²))
///
/// # Arguments
/// * `z` - Evaluation point
/// * `s` - Scale (standard deviation), expected to be strictly positive
///
/// # Examples
/// ```
/// use rmt_core::distributions::normal_pdf;
///
/// // f(0) = 1 / (s * sqrt(2π))
/// let pdf_0 = normal_pdf(0.0_f64, 2.0);
/// assert!((pdf_0 - 0.1994711402).abs() < 1e-9);
/// ```
#[inline]
pub fn normal_pdf<T: Float>(z: T, s: T) -> T {
    let frac_1_sqrt_2pi = constant::<T>(FRAC_1_SQRT_2PI);
    let two = constant::<T>(2.0);

    // -z² / (2s²)
    let exponent = -(z * z) / (two * s * s);

    frac_1_sqrt_2pi / s * exponent.exp()
}

/// Evaluates the centred Gaussian density at every point of `z`.
///
/// The output has the same length and order as `z`.
///
/// # Examples
/// ```
/// use rmt_core::distributions::normal;
///
/// let rho = normal(&[-1.0_f64, 0.0, 1.0], 1.0);
/// assert_eq!(rho.len(), 3);
/// assert_eq!(rho[0], rho[2]);
/// ```
pub fn normal<T: Float>(z: &[T], s: T) -> Vec<T> {
    z.iter().map(|&x| normal_pdf(x, s)).collect()
}
