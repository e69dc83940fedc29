//! # rmt_core: Numerical Foundation for Random Matrix Studies
//!
//! ## Layer 1 (Foundation) Role
//!
//! rmt_core serves as the bottom layer of the workspace, providing:
//! - Centred Gaussian density (`distributions::normal`)
//! - Wigner semicircle density for the GOE (`distributions::semicircle`)
//! - Goodness-of-fit metric and histogramming (`stats`)
//! - Bulk/tail partitioning of a histogrammed spectrum (`spectrum`)
//! - Error types: `RmtError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other rmt_* crates and no random or
//! linear algebra state, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! Monte Carlo sampling of eigenvalues lives in Layer 2 (`rmt_sampling`).
//!
//! ## Usage Examples
//!
//! ```rust
//! use rmt_core::distributions::wigner;
//! use rmt_core::spectrum::get_bulk_edge_values;
//! use rmt_core::stats::rmse;
//!
//! let counts = [0.05_f32, 0.2, 0.3, 0.2];
//! let bins = [-3.0_f32, -1.0, 0.0, 1.0, 3.0];
//!
//! let split = get_bulk_edge_values(&counts, &bins).unwrap();
//! assert_eq!(split.bulk.edges, vec![-1.0, 0.0, 1.0]);
//!
//! let expected = wigner(&split.bulk.edges);
//! let err = rmse(&split.bulk.counts, &expected).unwrap();
//! assert!(err < 0.2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Histogram`, `BulkEdgeSplit` and `SemicircleFit`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod spectrum;
pub mod stats;
pub mod types;

pub use types::RmtError;
