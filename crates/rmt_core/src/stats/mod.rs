//! Summary statistics for comparing empirical and theoretical spectra.
//!
//! - [`rmse`]: Root-mean-square error between two equal-length curves
//! - [`histogram`]: Equal-width binning of an eigenvalue sample

pub mod histogram;
pub mod rmse;

pub use histogram::Histogram;
pub use rmse::rmse;
