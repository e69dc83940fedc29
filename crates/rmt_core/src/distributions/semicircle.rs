//! Wigner semicircle law for the Gaussian Orthogonal Ensemble.
//!
//! With off-diagonal entries of variance 1/N the limiting eigenvalue density
//! is supported on `[-SEMICIRCLE_EDGE, SEMICIRCLE_EDGE] = [-2, 2]`:
//!
//! ρ(λ) = sqrt(4 - λ²) / (2π)
//!
//! Outside the support the radicand is negative and the density is NaN.
//! Callers that need a finite curve should restrict themselves to the bulk,
//! see [`crate::spectrum::get_bulk_edge_values`].

use super::constant;
use num_traits::Float;
use std::f64::consts::PI;

/// Half-width of the semicircle support.
pub const SEMICIRCLE_EDGE: f64 = 2.0;

/// Semicircle density at a single point, in the precision of `T`.
///
/// Returns NaN for |λ| > 2.
///
/// # Examples
/// ```
/// use rmt_core::distributions::semicircle_density;
///
/// assert!((semicircle_density(0.0_f64) - 1.0 / std::f64::consts::PI).abs() < 1e-15);
/// assert_eq!(semicircle_density(2.0_f64), 0.0);
/// assert!(semicircle_density(2.5_f64).is_nan());
/// ```
#[inline]
pub fn semicircle_density<T: Float>(l: T) -> T {
    let four = constant::<T>(4.0);
    let two_pi = constant::<T>(2.0 * PI);

    (four - l * l).sqrt() / two_pi
}

/// Evaluates the semicircle density over `l`, narrowed to `f32`.
///
/// The computation runs in the precision of `T` and each value is cast to
/// 32-bit float as the final step.
///
/// # Examples
/// ```
/// use rmt_core::distributions::wigner;
///
/// let rho = wigner(&[-2.0_f64, 0.0, 2.0]);
/// assert_eq!(rho, vec![0.0, std::f32::consts::FRAC_1_PI, 0.0]);
/// ```
pub fn wigner<T: Float>(l: &[T]) -> Vec<f32> {
    l.iter()
        .map(|&x| semicircle_density(x).to_f32().unwrap_or(f32::NAN))
        .collect()
}

/// Cumulative distribution function of the semicircle law.
///
/// # Mathematical Definition
/// F(λ) = 1/2 + λ sqrt(4 - λ²) / (4π) + arcsin(λ / 2) / π, for |λ| <= 2
///
/// Saturates at 0 below the support and 1 above it; NaN stays NaN.
pub fn semicircle_cdf<T: Float>(l: T) -> T {
    let edge = constant::<T>(SEMICIRCLE_EDGE);
    if l.is_nan() {
        return l;
    }
    if l <= -edge {
        return T::zero();
    }
    if l >= edge {
        return T::one();
    }

    let half = constant::<T>(0.5);
    let four = constant::<T>(4.0);
    let pi = constant::<T>(PI);

    half + l * (four - l * l).sqrt() / (four * pi) + (l * half).asin() / pi
}
