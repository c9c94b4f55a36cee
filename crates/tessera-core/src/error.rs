//! Error types for tessera-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every variant describes a malformed grid or a malformed access; none of
//! them is raised for well-formed input.

use thiserror::Error;

/// Tessera core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid has no rows (or no columns)
    #[error("empty grid: no cells to process")]
    EmptyGrid,

    /// Row count differs from row width
    #[error("grid is not square: {rows} rows of width {width}")]
    NotSquare { rows: usize, width: usize },

    /// A row length differs from the first row
    #[error("row {row} has length {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Cell coordinates outside the grid
    #[error("cell ({x}, {y}) out of bounds for grid of size {size}")]
    IndexOutOfBounds { x: usize, y: usize, size: usize },

    /// Token that is not a cell value in a text grid
    #[error("parse error on line {line}: invalid cell value '{token}'")]
    Parse { line: usize, token: String },
}

/// Result type alias for tessera core operations
pub type Result<T> = std::result::Result<T, Error>;
