//! Closed-form densities used to analyse eigenvalue spectra.
//!
//! - [`normal`]: zero-centred Gaussian density with scale `s`
//! - [`semicircle`]: Wigner semicircle law for the GOE on `[-2, 2]`
//!
//! Scalar kernels are generic over `T: Float` so they work for both
//! `f32` and `f64`; the array forms map them elementwise.

pub mod normal;
pub mod semicircle;

pub use normal::{normal, normal_pdf};
pub use semicircle::{semicircle_cdf, semicircle_density, wigner, SEMICIRCLE_EDGE};

use num_traits::Float;

/// Converts an `f64` literal into `T`, yielding NaN if `T` cannot hold it.
#[inline]
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
