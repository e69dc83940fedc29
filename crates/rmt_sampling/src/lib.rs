//! # rmt_sampling: Monte Carlo Sampling of GOE Spectra (Layer 2)
//!
//! Draws real symmetric matrices from the Gaussian Orthogonal Ensemble and
//! collects their eigenvalues, for comparison against the Wigner semicircle
//! provided by [`rmt_core`].
//!
//! ## Module Structure
//!
//! - [`rng`]: Seeded, reproducible random number generator ([`SpectrumRng`])
//! - [`goe`]: Sampling configuration, errors and the eigenvalue sampler
//!
//! ## Randomness
//!
//! Every sampling entry point takes the generator as an explicit `&mut R`
//! argument. Nothing in this crate touches thread-local or process-wide
//! random state, so a seeded generator reproduces a run exactly.
//!
//! ## Logging
//!
//! Sampling runs emit `tracing` events (`debug` per run, `trace` per draw).
//! No subscriber is installed here; binaries and tests choose their own.
//!
//! ## Usage Example
//!
//! ```rust
//! use rmt_core::spectrum::SemicircleFit;
//! use rmt_core::stats::Histogram;
//! use rmt_sampling::{rm_sampling, SpectrumRng};
//!
//! let mut rng = SpectrumRng::from_seed(7);
//! let lambdas = rm_sampling(50, 50, &mut rng).unwrap();
//! assert_eq!(lambdas.len(), 2500);
//!
//! let hist = Histogram::new(&lambdas, 40, Some((-2.5, 2.5)), true).unwrap();
//! let fit = SemicircleFit::from_histogram(&hist).unwrap();
//! assert!(fit.bulk_rmse < 0.1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod goe;
pub mod rng;

pub use goe::{
    rm_sampling, sample_matrix, ConfigError, EigenvalueSample, GoeSampler, SamplingConfig,
    SamplingError,
};
pub use rng::SpectrumRng;
