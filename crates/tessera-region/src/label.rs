//! Row labeling
//!
//! Assigns a region id to every cell of a row. The first row only looks
//! left; later rows look up, then left, then right, and finally allocate
//! new regions for whatever is left unlabeled.
//!
//! Two cells that end up with the same id are always connected. The
//! converse does not hold yet: scan order can leave neighboring cells of
//! one color with different ids, which [`crate::merge`] resolves.

use crate::registry::{RegionId, RegionRegistry};

/// Give `current[col]` the id `id` and count the cell towards it
fn attribute<T>(
    registry: &mut RegionRegistry<T>,
    current: &mut [Option<RegionId>],
    col: usize,
    id: RegionId,
) {
    current[col] = Some(id);
    registry.increment(id);
}

/// Join the left neighbor's region when it has the same color, otherwise
/// start a new region at `col`
fn join_left_or_create<T: Ord + Clone>(
    registry: &mut RegionRegistry<T>,
    row: &[T],
    current: &mut [Option<RegionId>],
    col: usize,
) {
    let left = if col > 0 && row[col] == row[col - 1] {
        current[col - 1]
    } else {
        None
    };
    match left {
        Some(id) => attribute(registry, current, col, id),
        None => current[col] = Some(registry.create(row[col].clone())),
    }
}

/// Label the top row of a grid
///
/// `current` must have the same length as `row`; every slot is overwritten.
pub(crate) fn label_first_row<T: Ord + Clone>(
    registry: &mut RegionRegistry<T>,
    row: &[T],
    current: &mut [Option<RegionId>],
) {
    for col in 0..row.len() {
        join_left_or_create(registry, row, current, col);
    }
}

/// Label a row below an already finalized one
///
/// # Arguments
///
/// * `registry` - Live regions; receives increments and new regions
/// * `above` - Colors of the previous row
/// * `row` - Colors of the row being labeled
/// * `previous` - Finalized ids of the previous row
/// * `current` - Output ids; must be all `None` on entry, all `Some` on exit
pub(crate) fn label_row<T: Ord + Clone>(
    registry: &mut RegionRegistry<T>,
    above: &[T],
    row: &[T],
    previous: &[RegionId],
    current: &mut [Option<RegionId>],
) {
    let width = row.len();
    debug_assert!(current.iter().all(Option::is_none));

    // Vertical continuation
    for col in 0..width {
        if row[col] == above[col] {
            attribute(registry, current, col, previous[col]);
        }
    }

    // Extend runs to the right of a labeled cell
    for col in 1..width {
        if current[col].is_none() && row[col] == row[col - 1] {
            if let Some(left) = current[col - 1] {
                attribute(registry, current, col, left);
            }
        }
    }

    // Extend runs to the left of a labeled cell
    for col in (0..width - 1).rev() {
        if current[col].is_none() && row[col] == row[col + 1] {
            if let Some(right) = current[col + 1] {
                attribute(registry, current, col, right);
            }
        }
    }

    // Runs with no anchor at all start new regions
    for col in 0..width {
        if current[col].is_none() {
            join_left_or_create(registry, row, current, col);
        }
    }
}
