//! Tessera - Largest connected region scanning for Rust
//!
//! Finds the largest group of same-colored cells in a square grid, where
//! cells connect through their horizontal and vertical neighbors. Among
//! equally large regions the one with the smallest color wins.
//!
//! # Overview
//!
//! - [`Grid`] - Square grid container with a plain text format
//! - [`region`] - Single-pass scanner with O(N) auxiliary memory, scan
//!   statistics, and a flood fill reference
//!
//! # Example
//!
//! ```
//! use tessera::Grid;
//! use tessera::region::grid_largest_region;
//!
//! let grid: Grid<u32> = "2 2 9\n2 9 9\n5 5 9\n".parse().unwrap();
//! assert_eq!(grid_largest_region(&grid).unwrap(), (9, 4));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use tessera_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use tessera_region as region;
