//! Error types for structured error handling.
//!
//! This module provides:
//! - `RmtError`: Errors from array-level spectrum operations

use thiserror::Error;

/// Random matrix toolkit errors.
///
/// Shape problems and invalid control parameters are reported as errors.
/// Out-of-domain *data* (e.g. evaluating the semicircle at |λ| > 2) is not:
/// those points produce NaN so vectorised workflows stay composable.
///
/// # Variants
/// - `DimensionMismatch`: Array lengths do not line up
/// - `EmptyInput`: Operation needs at least one element
/// - `InvalidParameter`: Scalar argument outside its valid domain
///
/// # Examples
/// ```
/// use rmt_core::RmtError;
///
/// let err = RmtError::DimensionMismatch { operation: "rmse", expected: 3, actual: 2 };
/// assert_eq!(format!("{}", err), "Dimension mismatch in rmse: expected length 3, got 2");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RmtError {
    /// Input arrays have incompatible lengths.
    #[error("Dimension mismatch in {operation}: expected length {expected}, got {actual}")]
    DimensionMismatch {
        /// Name of the failing operation
        operation: &'static str,
        /// Length required by the operation
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Input array is empty.
    #[error("Empty input to {operation}")]
    EmptyInput {
        /// Name of the failing operation
        operation: &'static str,
    },

    /// Invalid scalar parameter.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = RmtError::DimensionMismatch {
            operation: "get_bulk_edge_values",
            expected: 5,
            actual: 4,
        };
        assert_eq!(
            format!("{}", err),
            "Dimension mismatch in get_bulk_edge_values: expected length 5, got 4"
        );
    }

    #[test]
    fn test_empty_input_display() {
        let err = RmtError::EmptyInput { operation: "rmse" };
        assert_eq!(format!("{}", err), "Empty input to rmse");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = RmtError::InvalidParameter {
            name: "bins",
            reason: "must be positive".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid parameter 'bins': must be positive");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = RmtError::EmptyInput { operation: "histogram" };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = RmtError::EmptyInput { operation: "rmse" };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
