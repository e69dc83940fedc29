//! # Random Number Generation Infrastructure
//!
//! This module provides the seeded generator used to drive GOE sampling.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded; the seed is retained
//! - **Injection**: [`SpectrumRng`] implements `RngCore`, so it can be passed
//!   wherever a `rand::Rng` is accepted, including [`crate::rm_sampling`]
//!
//! ## Usage Example
//!
//! ```rust
//! use rand::Rng;
//! use rand_distr::StandardNormal;
//! use rmt_sampling::rng::SpectrumRng;
//!
//! let mut rng = SpectrumRng::from_seed(12345);
//!
//! // Any `rand` distribution can draw from it
//! let value: f64 = rng.sample(StandardNormal);
//! assert!(value.is_finite());
//! assert_eq!(rng.seed(), 12345);
//! ```

mod prng;

pub use prng::SpectrumRng;
