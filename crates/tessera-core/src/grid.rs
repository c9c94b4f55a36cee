//! Grid - Square grid of colored cells
//!
//! `Grid<T>` stores an N×N grid in row-major order. Cell values are
//! arbitrary colors; the scanner only requires them to be ordered.
//!
//! Coordinates follow the image convention: `x` is the column, `y` the row,
//! and `(0, 0)` is the top-left cell.

use crate::error::{Error, Result};

/// Validate that a borrowed row sequence forms a non-empty square grid
///
/// # Arguments
///
/// * `rows` - Rows of the grid, top to bottom
///
/// # Returns
///
/// The side length N of the grid.
///
/// # Errors
///
/// * [`Error::EmptyGrid`] if there are no rows or the rows are empty
/// * [`Error::RaggedRow`] if a row differs in length from the first row
/// * [`Error::NotSquare`] if the row count differs from the row width
pub fn check_square<T, R: AsRef<[T]>>(rows: &[R]) -> Result<usize> {
    let Some(first) = rows.first() else {
        return Err(Error::EmptyGrid);
    };
    let width = first.as_ref().len();
    if width == 0 {
        return Err(Error::EmptyGrid);
    }

    for (row, cells) in rows.iter().enumerate().skip(1) {
        let actual = cells.as_ref().len();
        if actual != width {
            return Err(Error::RaggedRow {
                row,
                expected: width,
                actual,
            });
        }
    }

    if rows.len() != width {
        return Err(Error::NotSquare {
            rows: rows.len(),
            width,
        });
    }

    Ok(width)
}

/// Square grid of colored cells
///
/// A `Grid` is always non-empty and square; every constructor enforces
/// this, so code holding a `Grid` never re-validates its shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a grid from a vector of rows
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`check_square`].
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = check_square(&rows)?;
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { size, cells })
    }

    /// Create a grid by evaluating `f(x, y)` for every cell
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                cells.push(f(x, y));
            }
        }
        Ok(Self { size, cells })
    }

    /// Side length N
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N*N)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells.get(y * self.size + x)
    }

    /// Set the cell at column `x`, row `y`
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        if x >= self.size || y >= self.size {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        self.cells[y * self.size + x] = value;
        Ok(())
    }

    /// Get row `y` as a slice
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.size {
            return None;
        }
        let start = y * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.cells.chunks_exact(self.size)
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`
    pub fn filled(size: usize, value: T) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyGrid);
        }
        Ok(Self {
            size,
            cells: vec![value; size * size],
        })
    }

    /// Copy the grid out as a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}
