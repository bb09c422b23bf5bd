//! Path storage: stroke building and erasing.
//!
//! Strokes are append-only while being drawn and removed wholesale by the
//! eraser. An R-tree over path bounding boxes prunes eraser queries to
//! nearby candidates before the precise polyline proximity test runs.

use crate::geometry::{self, Point};
use crate::spatial_index::SpatialIndex;
use crate::types::{Color, PathData};
use tracing::debug;

#[derive(Debug, Default)]
pub struct PathStore {
    paths: Vec<PathData>,
    index: SpatialIndex,
    next_id: u64,
}

impl PathStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new stroke at `start` with the given style and returns its
    /// id.
    pub fn begin(&mut self, start: Point, color: Color, stroke_width: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let path = PathData {
            id,
            points: vec![start],
            color,
            stroke_width,
        };
        self.index.insert(id, &path.points);
        self.paths.push(path);
        id
    }

    /// Appends a point to the stroke currently being drawn (the most recent
    /// path). No-op when no stroke exists yet.
    pub fn extend(&mut self, point: Point) {
        let Some(path) = self.paths.last_mut() else {
            return;
        };
        path.points.push(point);
        self.index.extend(path.id, point);
    }

    /// Removes every path whose polyline lies within `radius` of `point`
    /// and returns the removed ids.
    ///
    /// Candidates come from the spatial index; single-point paths have no
    /// segments and are never matched.
    pub fn erase_near(&mut self, point: Point, radius: f64) -> Vec<u64> {
        let candidates = self.index.query_near(point, radius);
        if candidates.is_empty() {
            return Vec::new();
        }

        let removed: Vec<u64> = self
            .paths
            .iter()
            .filter(|path| {
                candidates.contains(&path.id)
                    && geometry::is_near_polyline(point, &path.points, radius)
            })
            .map(|path| path.id)
            .collect();

        if !removed.is_empty() {
            self.paths.retain(|path| !removed.contains(&path.id));
            for id in &removed {
                self.index.remove(*id);
            }
            debug!(count = removed.len(), "erased paths");
        }
        removed
    }

    pub fn paths(&self) -> &[PathData] {
        &self.paths
    }

    pub fn get(&self, id: u64) -> Option<&PathData> {
        self.paths.iter().find(|path| path.id == id)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
