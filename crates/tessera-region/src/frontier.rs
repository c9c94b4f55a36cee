//! Frontier closing
//!
//! A region with no cell on the most recent row cannot grow any further.
//! Such regions are retired: offered to the best-region tracker and dropped
//! from the registry.

use crate::registry::{Region, RegionId, RegionRegistry};
use std::collections::HashSet;

/// Running best among retired regions
#[derive(Debug)]
pub(crate) struct BestRegion<T> {
    best: Option<Region<T>>,
    retired: usize,
    total_cells: usize,
}

impl<T: Ord> BestRegion<T> {
    pub(crate) fn new() -> Self {
        Self {
            best: None,
            retired: 0,
            total_cells: 0,
        }
    }

    /// Commit a region that will never grow again
    pub(crate) fn offer(&mut self, region: Region<T>) {
        self.retired += 1;
        self.total_cells += region.count;
        if self.best.as_ref().is_none_or(|best| region.dominates(best)) {
            self.best = Some(region);
        }
    }

    pub(crate) fn best(&self) -> Option<&Region<T>> {
        self.best.as_ref()
    }

    pub(crate) fn into_best(self) -> Option<Region<T>> {
        self.best
    }

    /// Number of regions retired so far
    pub(crate) fn retired(&self) -> usize {
        self.retired
    }

    /// Sum of the counts of every retired region
    pub(crate) fn total_cells(&self) -> usize {
        self.total_cells
    }
}

/// Retire every live region that does not appear in `frontier`
///
/// # Returns
///
/// The number of regions retired.
pub(crate) fn close_frontier<T: Ord>(
    registry: &mut RegionRegistry<T>,
    frontier: &[RegionId],
    tracker: &mut BestRegion<T>,
) -> usize {
    let on_frontier: HashSet<RegionId> = frontier.iter().copied().collect();
    let stale: Vec<RegionId> = registry
        .ids()
        .filter(|id| !on_frontier.contains(id))
        .collect();

    for &id in &stale {
        tracker.offer(registry.remove(id));
    }
    stale.len()
}

/// Retire every region still live once the last row is done
pub(crate) fn close_all<T: Ord>(registry: &mut RegionRegistry<T>, tracker: &mut BestRegion<T>) {
    for region in registry.drain() {
        tracker.offer(region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_prefers_larger_then_darker() {
        let mut tracker = BestRegion::new();
        tracker.offer(Region::new(9, 4));
        tracker.offer(Region::new(2, 4));
        tracker.offer(Region::new(5, 3));
        assert_eq!(tracker.best(), Some(&Region::new(2, 4)));
        assert_eq!(tracker.retired(), 3);
        assert_eq!(tracker.total_cells(), 11);

        tracker.offer(Region::new(7, 5));
        assert_eq!(tracker.into_best(), Some(Region::new(7, 5)));
    }

    #[test]
    fn test_close_frontier_keeps_frontier_regions() {
        let mut registry = RegionRegistry::new();
        let kept = registry.create(1u8);
        let gone = registry.create(2u8);
        registry.increment(gone);
        let mut tracker = BestRegion::new();

        assert_eq!(close_frontier(&mut registry, &[kept, kept], &mut tracker), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(kept).count, 1);
        assert_eq!(tracker.best(), Some(&Region::new(2, 2)));

        close_all(&mut registry, &mut tracker);
        assert_eq!(registry.len(), 0);
        assert_eq!(tracker.retired(), 2);
        assert_eq!(tracker.total_cells(), 3);
    }
}
