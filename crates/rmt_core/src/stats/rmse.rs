//! Root-mean-square error.

use crate::types::RmtError;
use num_traits::Float;

/// Root-mean-square error between a numerical curve and its expectation.
///
/// # Mathematical Definition
/// RMSE = sqrt( mean( (numerical - expected)² ) )
///
/// The differences are taken in the precision of `T`, accumulated in `f64`
/// and the result is narrowed to `f32`.
///
/// # Errors
/// - `RmtError::DimensionMismatch` if the slices differ in length
/// - `RmtError::EmptyInput` if both slices are empty
///
/// # Examples
/// ```
/// use rmt_core::stats::rmse;
///
/// let err = rmse(&[1.0_f32, 2.0, 3.0], &[1.0, 2.0, 5.0]).unwrap();
/// assert!((err - (4.0_f32 / 3.0).sqrt()).abs() < 1e-6);
///
/// assert!(rmse(&[1.0_f32, 2.0], &[1.0]).is_err());
/// ```
pub fn rmse<T: Float>(numerical: &[T], expected: &[T]) -> Result<f32, RmtError> {
    if numerical.len() != expected.len() {
        return Err(RmtError::DimensionMismatch {
            operation: "rmse",
            expected: numerical.len(),
            actual: expected.len(),
        });
    }
    if numerical.is_empty() {
        return Err(RmtError::EmptyInput { operation: "rmse" });
    }

    let sum_sq: f64 = numerical
        .iter()
        .zip(expected)
        .map(|(&a, &b)| {
            let diff = (a - b).to_f64().unwrap_or(f64::NAN);
            diff * diff
        })
        .sum();

    let mse = sum_sq / numerical.len() as f64;
    Ok(mse.sqrt() as f32)
}
