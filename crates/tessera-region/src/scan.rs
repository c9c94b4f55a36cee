//! Largest region scanning
//!
//! Finds the largest 4-connected, same-colored region of a grid in one
//! top-to-bottom pass. Only two rows of labels are kept at any time, so the
//! auxiliary memory is O(N) for an N×N grid while the running time stays
//! O(N²).
//!
//! Each row goes through three stages:
//!
//! 1. labeling assigns a region id to every cell
//! 2. merging unions ids that turned out to be one component
//! 3. frontier closing retires regions that can no longer grow
//!
//! Ties between equally large regions go to the smallest color.

use crate::error::{RegionError, RegionResult};
use crate::frontier::{BestRegion, close_all, close_frontier};
use crate::label::{label_first_row, label_row};
use crate::merge::resolve_merges;
use crate::registry::{Region, RegionId, RegionRegistry};
use log::{debug, trace};
use tessera_core::{Error, Grid, check_square};

/// Outcome of a full scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport<T> {
    /// Dominant region: most cells, then smallest color
    pub largest: Region<T>,
    /// Number of rows scanned
    pub rows: usize,
    /// Number of region ids ever allocated
    pub regions_created: usize,
    /// Number of regions absorbed by merges
    pub merges: usize,
    /// Number of regions retired (equals the number of components)
    pub retired: usize,
    /// Largest number of simultaneously live regions
    pub peak_live: usize,
    /// Sum of the counts of all retired regions
    pub total_cells: usize,
}

/// Row-by-row region scanner
///
/// Feed rows top to bottom with [`push_row`](Self::push_row), then call
/// [`finish`](Self::finish). Rows only need to share a width, so the
/// scanner also handles rectangular strips; [`scan_regions`] and
/// [`find_largest_region`] add the square-grid check on top.
///
/// # Examples
///
/// ```
/// use tessera_region::RegionScanner;
///
/// let mut scanner = RegionScanner::new(5).unwrap();
/// scanner.push_row(&[5, 5, 3, 3, 3]).unwrap();
/// let report = scanner.finish().unwrap();
/// assert_eq!((report.largest.color, report.largest.count), (3, 3));
/// ```
#[derive(Debug)]
pub struct RegionScanner<T> {
    width: usize,
    rows: usize,
    registry: RegionRegistry<T>,
    /// Colors of the last row pushed
    above: Vec<T>,
    /// Finalized labels of the last row pushed
    frontier: Vec<RegionId>,
    /// Labels of the row being processed
    pending: Vec<Option<RegionId>>,
    tracker: BestRegion<T>,
    merges: usize,
    peak_live: usize,
}

impl<T: Ord + Clone> RegionScanner<T> {
    /// Create a scanner for rows of `width` cells
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] if `width` is zero.
    pub fn new(width: usize) -> RegionResult<Self> {
        if width == 0 {
            return Err(Error::EmptyGrid.into());
        }
        Ok(Self {
            width,
            rows: 0,
            registry: RegionRegistry::new(),
            above: Vec::with_capacity(width),
            frontier: Vec::with_capacity(width),
            pending: vec![None; width],
            tracker: BestRegion::new(),
            merges: 0,
            peak_live: 0,
        })
    }

    /// Width of the rows this scanner accepts
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows pushed so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Scan the next row
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] if the row length differs from
    /// the scanner width. The scanner state is left untouched in that case.
    pub fn push_row(&mut self, row: &[T]) -> RegionResult<()> {
        if row.len() != self.width {
            return Err(Error::RaggedRow {
                row: self.rows,
                expected: self.width,
                actual: row.len(),
            }
            .into());
        }

        self.pending.fill(None);
        if self.rows == 0 {
            label_first_row(&mut self.registry, row, &mut self.pending);
        } else {
            label_row(
                &mut self.registry,
                &self.above,
                row,
                &self.frontier,
                &mut self.pending,
            );
        }
        self.peak_live = self.peak_live.max(self.registry.len());

        self.frontier.clear();
        for (col, slot) in self.pending.iter().enumerate() {
            let id = slot
                .unwrap_or_else(|| panic!("cell {col} of row {} left unlabeled", self.rows));
            self.frontier.push(id);
        }

        let merged = resolve_merges(&mut self.registry, &mut self.frontier);
        self.merges += merged;
        let retired =
            close_frontier(&mut self.registry, &self.frontier, &mut self.tracker);

        trace!(
            "row {}: {} live regions, {} merged, {} retired, best so far {} cells",
            self.rows,
            self.registry.len(),
            merged,
            retired,
            self.tracker.best().map_or(0, |best| best.count)
        );

        self.above.clear();
        self.above.extend_from_slice(row);
        self.rows += 1;
        Ok(())
    }

    /// Retire the remaining regions and report the result
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] if no row was pushed.
    pub fn finish(mut self) -> RegionResult<ScanReport<T>> {
        close_all(&mut self.registry, &mut self.tracker);

        let retired = self.tracker.retired();
        let total_cells = self.tracker.total_cells();
        let largest = self
            .tracker
            .into_best()
            .ok_or(RegionError::InvalidInput(Error::EmptyGrid))?;

        Ok(ScanReport {
            largest,
            rows: self.rows,
            regions_created: self.registry.created(),
            merges: self.merges,
            retired,
            peak_live: self.peak_live,
            total_cells,
        })
    }
}

fn scan_row_iter<'a, T, I>(width: usize, rows: I) -> RegionResult<ScanReport<T>>
where
    T: Ord + Clone + 'a,
    I: IntoIterator<Item = &'a [T]>,
{
    let mut scanner = RegionScanner::new(width)?;
    for row in rows {
        scanner.push_row(row)?;
    }
    let report = scanner.finish()?;

    debug!(
        "scanned {}x{} grid: {} regions created, {} merged, {} components, peak {} live, largest has {} cells",
        width,
        report.rows,
        report.regions_created,
        report.merges,
        report.retired,
        report.peak_live,
        report.largest.count
    );
    Ok(report)
}

/// Scan a square grid and report the dominant region with scan statistics
///
/// # Arguments
///
/// * `rows` - Rows of the grid, top to bottom; all of length N = row count
///
/// # Errors
///
/// Returns [`RegionError::InvalidInput`] if the grid is empty, not square,
/// or has rows of inconsistent length.
pub fn scan_regions<T, R>(rows: &[R]) -> RegionResult<ScanReport<T>>
where
    T: Ord + Clone,
    R: AsRef<[T]>,
{
    let size = check_square(rows)?;
    scan_row_iter(size, rows.iter().map(|row| row.as_ref()))
}

/// Find the largest connected region of a square grid
///
/// Cells are connected through their four horizontal and vertical
/// neighbors when they share a color. Among regions of equal size the one
/// with the smallest color wins.
///
/// # Returns
///
/// `(color, count)` of the dominant region.
///
/// # Errors
///
/// Returns [`RegionError::InvalidInput`] if the grid is empty, not square,
/// or has rows of inconsistent length.
///
/// # Examples
///
/// ```
/// use tessera_region::find_largest_region;
///
/// let grid = vec![
///     vec![1, 1, 2],
///     vec![3, 1, 2],
///     vec![3, 3, 2],
/// ];
/// assert_eq!(find_largest_region(&grid).unwrap(), (1, 3));
/// ```
pub fn find_largest_region<T, R>(rows: &[R]) -> RegionResult<(T, usize)>
where
    T: Ord + Clone,
    R: AsRef<[T]>,
{
    let report = scan_regions(rows)?;
    Ok((report.largest.color, report.largest.count))
}

/// Find the largest connected region of a [`Grid`]
///
/// Same as [`find_largest_region`]; a `Grid` is square by construction.
pub fn grid_largest_region<T: Ord + Clone>(grid: &Grid<T>) -> RegionResult<(T, usize)> {
    let report = scan_row_iter(grid.size(), grid.rows())?;
    Ok((report.largest.color, report.largest.count))
}
