//! tessera-region - Largest connected region scanning
//!
//! This crate finds the largest connected region of a square color grid:
//!
//! - **Region scanning** - Single top-to-bottom pass with O(N) auxiliary
//!   memory, merging and retiring regions as it goes
//! - **Flood fill reference** - Straightforward O(N²)-memory search with the
//!   same result, for cross-checking
//!
//! Cells belong to the same region when they share a color and touch
//! horizontally or vertically. The largest region wins; among regions of
//! equal size, the one with the smallest color wins.
//!
//! # Examples
//!
//! ## Finding the largest region
//!
//! ```
//! use tessera_region::find_largest_region;
//!
//! let grid = vec![
//!     vec![7, 1, 1, 1],
//!     vec![7, 1, 1, 1],
//!     vec![7, 1, 1, 1],
//!     vec![7, 1, 1, 1],
//! ];
//! assert_eq!(find_largest_region(&grid).unwrap(), (1, 12));
//! ```
//!
//! ## Scan statistics
//!
//! ```
//! use tessera_region::scan_regions;
//!
//! let grid = [[1, 0, 1], [1, 0, 1], [1, 1, 1]];
//! let report = scan_regions(&grid).unwrap();
//! assert_eq!(report.largest.count, 7);
//! assert_eq!(report.merges, 1);
//! assert_eq!(report.total_cells, 9);
//! ```

pub mod error;
pub mod floodfill;
mod frontier;
mod label;
mod merge;
mod registry;
pub mod scan;

// Re-export core types
pub use tessera_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use registry::Region;

// Re-export scan types and functions
pub use scan::{
    RegionScanner, ScanReport, find_largest_region, grid_largest_region, scan_regions,
};

pub use floodfill::flood_fill_largest_region;
