//! Error types for GOE sampling.
//!
//! This module defines structured error types for configuration validation
//! and runtime errors in the eigenvalue sampler.

use thiserror::Error;

/// Configuration error for the GOE sampler.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Number of sampling draws is zero.
    #[error("Invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(usize),
    /// Matrix dimension is zero.
    #[error("Invalid matrix size {0}: must be at least 1")]
    InvalidMatrixSize(usize),
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Runtime error raised while sampling eigenvalues.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    /// The sampling shape was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The entry distribution could not be constructed.
    #[error("Invalid entry distribution: {0}")]
    Distribution(String),
}
