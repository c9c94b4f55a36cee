//! tessera-test - Regression test framework for tessera
//!
//! This crate provides a small regression test framework modelled on the
//! C-style `regutils` harness, plus seeded random grid generation:
//!
//! - **Compare** (default): check computed values against expected ones
//! - **Display**: additionally print the grids under test
//! - **Generate**: accepted for compatibility; behaves like compare
//!
//! # Usage
//!
//! ```ignore
//! use tessera_test::RegParams;
//!
//! let mut rp = RegParams::new("scan");
//! rp.compare_values(12.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use tessera_core::Grid;

/// Options for random grid generation
#[derive(Debug, Clone)]
pub struct GridGenOptions {
    /// Side length of the grid
    pub size: usize,
    /// Number of distinct colors; cells take values in `0..colors`
    pub colors: u32,
    /// Seed for the random number generator
    pub seed: u64,
}

impl Default for GridGenOptions {
    fn default() -> Self {
        Self {
            size: 8,
            colors: 3,
            seed: 0,
        }
    }
}

impl GridGenOptions {
    /// Create options for a grid of the given size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Set the number of colors
    pub fn with_colors(mut self, colors: u32) -> Self {
        self.colors = colors;
        self
    }

    /// Set the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generate a random grid
///
/// The same options always produce the same grid.
///
/// # Errors
///
/// Returns an error if `size` or `colors` is zero.
pub fn random_grid(options: &GridGenOptions) -> TestResult<Grid<u32>> {
    if options.colors == 0 {
        return Err(TestError::InvalidOptions(
            "at least one color is required".to_string(),
        ));
    }

    let colors = Uniform::new(0, options.colors)
        .map_err(|e| TestError::InvalidOptions(e.to_string()))?;
    let mut rng = StdRng::seed_from_u64(options.seed);

    Ok(Grid::from_fn(options.size, |_, _| colors.sample(&mut rng))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_grid_is_seeded() {
        let options = GridGenOptions::new(6).with_colors(4).with_seed(42);
        let a = random_grid(&options).unwrap();
        let b = random_grid(&options).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), 6);
        assert!(a.rows().flatten().all(|&c| c < 4));
    }

    #[test]
    fn test_random_grid_rejects_bad_options() {
        assert!(random_grid(&GridGenOptions::new(0)).is_err());
        assert!(random_grid(&GridGenOptions::new(3).with_colors(0)).is_err());
    }
}
