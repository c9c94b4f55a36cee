//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Grid construction failed
    #[error("grid error: {0}")]
    Core(#[from] tessera_core::Error),

    /// Random grid options out of range
    #[error("invalid generation options: {0}")]
    InvalidOptions(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
