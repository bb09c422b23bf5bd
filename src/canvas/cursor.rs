//! Cursor state: raw screen-space position and its canvas-space image.
//!
//! Both positions are `None` until the first pointer event arrives, which is
//! what actually distinguishes "pointer not seen yet" from "pointer at the
//! origin". The previous raw position is kept for drag-pan deltas.

use crate::canvas::viewport::Viewport;
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    raw: Option<Point>,
    previous_raw: Option<Point>,
    canvas: Option<Point>,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new raw position, remembering the old one for deltas.
    pub fn update_raw(&mut self, point: Point) {
        self.previous_raw = self.raw;
        self.raw = Some(point);
    }

    /// Recomputes the canvas-space position from the raw position under the
    /// viewport's current transform. Call after any event that moves the
    /// cursor or changes the transform.
    pub fn refresh_canvas(&mut self, viewport: &Viewport) {
        self.canvas = self.raw.map(|raw| viewport.screen_to_canvas(raw));
    }

    /// Raw screen-space position, if the pointer has been seen.
    pub fn raw(&self) -> Option<Point> {
        self.raw
    }

    /// Canvas-space position, if the pointer has been seen.
    pub fn canvas(&self) -> Option<Point> {
        self.canvas
    }

    /// Screen-space movement since the previous raw update. Zero until two
    /// positions have been seen.
    pub fn raw_delta(&self) -> Point {
        match (self.previous_raw, self.raw) {
            (Some(previous), Some(current)) => {
                Point::new(current.x - previous.x, current.y - previous.y)
            }
            _ => Point::new(0.0, 0.0),
        }
    }
}
