//! Ordered collection of regions with first-match hit testing.
//!
//! Insertion order is hit priority: when regions overlap, the one added first
//! wins regardless of size or nesting. Adding, removing and hit testing all
//! take the same lock, so a hit test observes the collection either before or
//! after a concurrent mutation, never in between.

use crate::region::{Region, RegionId};
use crate::types::PointInt;
use parking_lot::Mutex;
use std::sync::Arc;

/// Thread-safe, insertion-ordered set of regions.
#[derive(Debug, Default)]
pub struct RegionSet {
    regions: Mutex<Vec<Arc<Region>>>,
}

impl RegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a region at the lowest priority and returns the shared handle
    /// stored in the set.
    pub fn add(&self, region: impl Into<Arc<Region>>) -> Arc<Region> {
        let region = region.into();
        self.regions.lock().push(Arc::clone(&region));
        region
    }

    /// Removes this exact region instance. Returns whether it was present.
    pub fn remove(&self, region: &Arc<Region>) -> bool {
        let mut regions = self.regions.lock();
        match regions.iter().position(|r| Arc::ptr_eq(r, region)) {
            Some(index) => {
                regions.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the first region carrying `id`.
    pub fn remove_by_id(&self, id: RegionId) -> Option<Arc<Region>> {
        let mut regions = self.regions.lock();
        let index = regions.iter().position(|r| r.id() == id)?;
        Some(regions.remove(index))
    }

    /// First region, in insertion order, containing `(x, y)`.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<Arc<Region>> {
        self.regions
            .lock()
            .iter()
            .find(|region| region.contains(x, y))
            .cloned()
    }

    /// [`RegionSet::hit_test`] for a point produced by the coordinate mapper.
    pub fn hit_test_point(&self, point: PointInt) -> Option<Arc<Region>> {
        let p = point.to_f32();
        self.hit_test(p.x, p.y)
    }

    pub fn get(&self, id: RegionId) -> Option<Arc<Region>> {
        self.regions.lock().iter().find(|r| r.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.regions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.lock().is_empty()
    }

    /// Copy of the current ordering.
    pub fn snapshot(&self) -> Vec<Arc<Region>> {
        self.regions.lock().clone()
    }

    pub fn clear(&self) {
        self.regions.lock().clear();
    }
}
