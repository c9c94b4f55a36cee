//! Region registry
//!
//! Arena of live regions keyed by [`RegionId`]. Label buffers only ever
//! hold ids, so a region reachable from many cells is stored exactly once.
//!
//! Ids are allocated from a counter that only grows. A stale id left over
//! from a retired or absorbed region can therefore never alias a region
//! created later.

use std::collections::HashMap;

/// Opaque identity of a region during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct RegionId(u64);

/// A connected, same-colored set of cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region<T> {
    /// Color shared by every cell of the region
    pub color: T,
    /// Number of cells in the region
    pub count: usize,
}

impl<T: Ord> Region<T> {
    /// Create a region
    pub fn new(color: T, count: usize) -> Self {
        Self { color, count }
    }

    /// Whether this region ranks at least as high as `other`
    ///
    /// Larger regions win; on equal counts the smaller ("darker") color
    /// wins. Identical regions dominate each other.
    pub fn dominates(&self, other: &Self) -> bool {
        self.count > other.count || (self.count == other.count && self.color <= other.color)
    }
}

/// Live regions of an in-progress scan
///
/// Every method taking a [`RegionId`] panics if that id is not live.
#[derive(Debug)]
pub(crate) struct RegionRegistry<T> {
    regions: HashMap<RegionId, Region<T>>,
    next_id: u64,
}

impl<T> RegionRegistry<T> {
    pub(crate) fn new() -> Self {
        Self {
            regions: HashMap::new(),
            next_id: 0,
        }
    }

    /// Allocate a fresh region holding a single cell
    pub(crate) fn create(&mut self, color: T) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.insert(id, Region { color, count: 1 });
        id
    }

    /// Attribute one more cell to `id`
    pub(crate) fn increment(&mut self, id: RegionId) {
        self.entry_mut(id).count += 1;
    }

    /// Move the cells of `src` into `dest` and drop `src`
    pub(crate) fn absorb(&mut self, src: RegionId, dest: RegionId) {
        let absorbed = self.remove(src);
        self.entry_mut(dest).count += absorbed.count;
    }

    pub(crate) fn get(&self, id: RegionId) -> &Region<T> {
        self.regions
            .get(&id)
            .unwrap_or_else(|| panic!("region {id:?} is not live"))
    }

    pub(crate) fn remove(&mut self, id: RegionId) -> Region<T> {
        self.regions
            .remove(&id)
            .unwrap_or_else(|| panic!("region {id:?} is not live"))
    }

    /// Remove every live region
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = Region<T>> + '_ {
        self.regions.drain().map(|(_, region)| region)
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.keys().copied()
    }

    /// Number of live regions
    pub(crate) fn len(&self) -> usize {
        self.regions.len()
    }

    /// Number of regions ever created
    pub(crate) fn created(&self) -> usize {
        self.next_id as usize
    }

    fn entry_mut(&mut self, id: RegionId) -> &mut Region<T> {
        self.regions
            .get_mut(&id)
            .unwrap_or_else(|| panic!("region {id:?} is not live"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominance() {
        let big = Region::new(9, 5);
        let small = Region::new(1, 4);
        assert!(big.dominates(&small));
        assert!(!small.dominates(&big));

        let dark = Region::new(2, 4);
        let light = Region::new(9, 4);
        assert!(dark.dominates(&light));
        assert!(!light.dominates(&dark));
        assert!(dark.dominates(&dark.clone()));
    }

    #[test]
    fn test_create_increment_absorb() {
        let mut registry = RegionRegistry::new();
        let a = registry.create('a');
        let b = registry.create('a');
        assert_ne!(a, b);
        registry.increment(a);
        registry.increment(b);
        registry.increment(b);
        assert_eq!(registry.get(a).count, 2);
        assert_eq!(registry.get(b).count, 3);

        registry.absorb(b, a);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(a), &Region::new('a', 5));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut registry = RegionRegistry::new();
        let first = registry.create(0u8);
        registry.remove(first);
        let second = registry.create(0u8);
        assert_ne!(first, second);
        assert_eq!(registry.created(), 2);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec![second]);
    }

    #[test]
    #[should_panic(expected = "is not live")]
    fn test_removed_region_is_fatal() {
        let mut registry = RegionRegistry::new();
        let id = registry.create(3u8);
        registry.remove(id);
        registry.increment(id);
    }

    #[test]
    fn test_drain_empties_registry() {
        let mut registry = RegionRegistry::new();
        registry.create(1u8);
        registry.create(2u8);
        let mut colors: Vec<u8> = registry.drain().map(|r| r.color).collect();
        colors.sort();
        assert_eq!(colors, vec![1, 2]);
        assert_eq!(registry.len(), 0);
    }
}
