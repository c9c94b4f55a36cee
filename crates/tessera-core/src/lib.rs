//! Tessera Core - Grid data structures for region scanning
//!
//! This crate provides the fundamental data structures shared by the
//! tessera crates:
//!
//! - [`Grid`] - Square, row-major grid of colored cells
//! - [`check_square`] - Shape validation for borrowed row sequences
//! - [`Error`] / [`Result`] - Errors for malformed grids
//!
//! Grids can be written to and read from a whitespace-separated text
//! format through `Display` and `FromStr`.

pub mod error;
pub mod grid;
mod serial;

pub use error::{Error, Result};
pub use grid::{Grid, check_square};
