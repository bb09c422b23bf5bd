//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing over path bounding boxes so the
//! eraser can prune to nearby candidates before running the precise
//! polyline proximity test. This reduces hit testing from O(n) to O(log n)
//! per query.

use crate::geometry::Point;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing one path's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub path_id: u64,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    /// Bounding box of a polyline. Returns `None` for an empty point list.
    pub fn from_points(path_id: u64, points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut entry = Self {
            path_id,
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for point in &points[1..] {
            entry.grow(*point);
        }
        Some(entry)
    }

    fn grow(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path_id == other.path_id
    }
}

/// R-tree over path bounding boxes.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<u64, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Inserts or replaces the entry for a path.
    pub fn insert(&mut self, path_id: u64, points: &[Point]) {
        let Some(entry) = SpatialEntry::from_points(path_id, points) else {
            return;
        };
        if let Some(old_entry) = self.entries.remove(&path_id) {
            self.tree.remove(&old_entry);
        }
        self.tree.insert(entry);
        self.entries.insert(path_id, entry);
    }

    /// Grows a path's bounding box to cover one appended point. Cheaper
    /// than re-scanning the whole polyline on every move event.
    pub fn extend(&mut self, path_id: u64, point: Point) {
        let Some(old_entry) = self.entries.get(&path_id).copied() else {
            self.insert(path_id, &[point]);
            return;
        };
        let mut entry = old_entry;
        entry.grow(point);
        if entry.envelope() != old_entry.envelope() {
            self.tree.remove(&old_entry);
            self.tree.insert(entry);
            self.entries.insert(path_id, entry);
        }
    }

    pub fn remove(&mut self, path_id: u64) -> bool {
        if let Some(entry) = self.entries.remove(&path_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All paths whose bounding box intersects the given rectangle.
    pub fn query_rect(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<u64> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.path_id)
            .collect()
    }

    /// All paths whose bounding box, inflated by `radius`, contains the
    /// point. Candidates still need the precise polyline test.
    pub fn query_near(&self, point: Point, radius: f64) -> Vec<u64> {
        self.query_rect(
            point.x - radius,
            point.y - radius,
            point.x + radius,
            point.y + radius,
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
