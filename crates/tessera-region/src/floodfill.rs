//! Flood fill reference
//!
//! Finds the largest region by flooding every unvisited cell with a
//! breadth-first search. This needs an N×N visited map, so it uses O(N²)
//! auxiliary memory where [`crate::scan`] needs O(N). It applies the same
//! dominance rule and serves as a cross-check for the scanner.

use crate::error::{RegionError, RegionResult};
use crate::registry::Region;
use std::collections::VecDeque;
use tessera_core::{Error, check_square};

fn cell<T, R: AsRef<[T]>>(rows: &[R], x: usize, y: usize) -> &T {
    &rows[y].as_ref()[x]
}

/// Find the largest connected region of a square grid by flood filling
///
/// # Returns
///
/// `(color, count)` of the dominant region, identical to
/// [`find_largest_region`](crate::find_largest_region).
///
/// # Errors
///
/// Returns [`RegionError::InvalidInput`] if the grid is empty, not square,
/// or has rows of inconsistent length.
pub fn flood_fill_largest_region<T, R>(rows: &[R]) -> RegionResult<(T, usize)>
where
    T: Ord + Clone,
    R: AsRef<[T]>,
{
    let size = check_square(rows)?;

    let mut visited = vec![false; size * size];
    let mut queue = VecDeque::new();
    let mut best: Option<Region<T>> = None;

    for seed_y in 0..size {
        for seed_x in 0..size {
            if visited[seed_y * size + seed_x] {
                continue;
            }

            let color = cell(rows, seed_x, seed_y);
            let mut count = 0usize;
            visited[seed_y * size + seed_x] = true;
            queue.push_back((seed_x, seed_y));

            while let Some((x, y)) = queue.pop_front() {
                count += 1;

                let mut neighbors = [None; 4];
                if x > 0 {
                    neighbors[0] = Some((x - 1, y));
                }
                if x + 1 < size {
                    neighbors[1] = Some((x + 1, y));
                }
                if y > 0 {
                    neighbors[2] = Some((x, y - 1));
                }
                if y + 1 < size {
                    neighbors[3] = Some((x, y + 1));
                }

                for (nx, ny) in neighbors.into_iter().flatten() {
                    let index = ny * size + nx;
                    if !visited[index] && cell(rows, nx, ny) == color {
                        visited[index] = true;
                        queue.push_back((nx, ny));
                    }
                }
            }

            let region = Region::new(color.clone(), count);
            if best.as_ref().is_none_or(|b| region.dominates(b)) {
                best = Some(region);
            }
        }
    }

    best.map(|region| (region.color, region.count))
        .ok_or(RegionError::InvalidInput(Error::EmptyGrid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flood_fill_spiral() {
        let grid = vec![
            vec![1u8, 1, 1, 1, 1],
            vec![0, 0, 0, 0, 1],
            vec![1, 1, 1, 0, 1],
            vec![1, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1],
        ];
        assert_eq!(flood_fill_largest_region(&grid).unwrap(), (1, 17));
    }

    #[test]
    fn test_flood_fill_tie() {
        let grid = vec![vec![6u8, 2], vec![2, 6]];
        assert_eq!(flood_fill_largest_region(&grid).unwrap(), (2, 1));
    }

    #[test]
    fn test_flood_fill_invalid_input() {
        let empty: Vec<Vec<u8>> = Vec::new();
        assert!(flood_fill_largest_region(&empty).is_err());
    }
}
