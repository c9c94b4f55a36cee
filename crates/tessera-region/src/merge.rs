//! Merge resolution
//!
//! After labeling, horizontally adjacent cells of one color may still carry
//! different ids. Such ids belong to the same component: this pass unions
//! them, folds the absorbed counts into the surviving region and rewrites
//! the row so that every run of one color carries one id.
//!
//! The first id met while scanning left to right survives a union.

use crate::registry::{RegionId, RegionRegistry};
use std::collections::HashMap;

/// Follow recorded unions from `id` to its surviving id
fn canonical(unions: &HashMap<RegionId, RegionId>, mut id: RegionId) -> RegionId {
    while let Some(&dest) = unions.get(&id) {
        id = dest;
    }
    id
}

/// Union same-colored neighbors in a fully labeled row
///
/// # Arguments
///
/// * `registry` - Live regions; absorbed regions are removed from it
/// * `labels` - Finalized ids of the row, rewritten in place
///
/// # Returns
///
/// The number of regions absorbed.
pub(crate) fn resolve_merges<T: Ord>(
    registry: &mut RegionRegistry<T>,
    labels: &mut [RegionId],
) -> usize {
    let mut unions: HashMap<RegionId, RegionId> = HashMap::new();

    for pair in labels.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if left == right || registry.get(left).color != registry.get(right).color {
            continue;
        }
        let dest = canonical(&unions, left);
        let src = canonical(&unions, right);
        if dest != src {
            unions.insert(src, dest);
        }
    }

    if unions.is_empty() {
        return 0;
    }

    for &src in unions.keys() {
        registry.absorb(src, canonical(&unions, src));
    }
    for label in labels.iter_mut() {
        *label = canonical(&unions, *label);
    }

    unions.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Region;

    #[test]
    fn test_no_merge_needed() {
        let mut registry = RegionRegistry::new();
        let a = registry.create(1u8);
        let b = registry.create(2u8);
        let mut labels = vec![a, a, b];

        assert_eq!(resolve_merges(&mut registry, &mut labels), 0);
        assert_eq!(labels, vec![a, a, b]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_adjacent_same_color_ids_merge() {
        let mut registry = RegionRegistry::new();
        let a = registry.create(1u8);
        let b = registry.create(1u8);
        registry.increment(b);
        let mut labels = vec![a, b, b];

        assert_eq!(resolve_merges(&mut registry, &mut labels), 1);
        assert_eq!(labels, vec![a, a, a]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(a), &Region::new(1, 3));
    }

    #[test]
    fn test_chained_unions_collapse_transitively() {
        let mut registry = RegionRegistry::new();
        let a = registry.create(4u8);
        let b = registry.create(4u8);
        let c = registry.create(4u8);
        let other = registry.create(0u8);
        let mut labels = vec![a, b, c, b, other];

        assert_eq!(resolve_merges(&mut registry, &mut labels), 2);
        assert_eq!(labels, vec![a, a, a, a, other]);
        assert_eq!(registry.get(a).count, 3);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_different_colors_never_merge() {
        let mut registry = RegionRegistry::new();
        let a = registry.create(3u8);
        let b = registry.create(5u8);
        let mut labels = vec![a, b, a];

        assert_eq!(resolve_merges(&mut registry, &mut labels), 0);
        assert_eq!(labels, vec![a, b, a]);
    }
}
