//! Error types for the segmentation core

use thiserror::Error;

/// Errors raised while configuring a segmenter
///
/// Segmentation itself never fails. Failures of the underlying line source
/// are handed back through the iterator unchanged and never wrapped here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Comment marker is empty or contains whitespace
    #[error("invalid comment marker {0:?}: must be non-empty and contain no whitespace")]
    InvalidMarker(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
