//! Spectrum analysis against the semicircle law.
//!
//! - [`partition`]: Splits a histogram into bulk (inside `[-2, 2]`) and tail bins
//! - [`fit`]: Bulk RMSE of an empirical density against the semicircle

pub mod fit;
pub mod partition;

pub use fit::SemicircleFit;
pub use partition::{bulk_mask, get_bulk_edge_values, BulkEdgeSplit, SpectrumRegion};
