//! Gaussian Orthogonal Ensemble sampling.
//!
//! - [`config`]: Validated sampling shape (`n_samples` draws of `N×N` matrices)
//! - [`error`]: Configuration and sampling errors
//! - [`sampler`]: Matrix generation, symmetric eigendecomposition and collection

pub mod config;
pub mod error;
pub mod sampler;

pub use config::{SamplingConfig, SamplingConfigBuilder};
pub use error::{ConfigError, SamplingError};
pub use sampler::{rm_sampling, sample_matrix, EigenvalueSample, GoeSampler};
