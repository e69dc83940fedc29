//! Shared types for the random matrix toolkit.

pub mod error;

pub use error::RmtError;
