//! Error types for tessera-region

use thiserror::Error;

/// Errors that can occur during region scanning
///
/// Only malformed input is reported here. Referencing a region that is no
/// longer live is an internal bug and panics instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// Malformed grid: empty, not square, or with inconsistent row lengths
    #[error("invalid input: {0}")]
    InvalidInput(#[from] tessera_core::Error),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
