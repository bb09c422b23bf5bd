//! The canvas transform engine: zoom, pan, and coordinate conversion.
//!
//! [`Viewport`] owns the zoom scalar and the cumulative transform matrix and
//! mutates them together, atomically. The matrix maps canvas space to screen
//! space; `screen_to_canvas` goes the other way through an incrementally
//! maintained closed-form inverse.
//!
//! The zoom scalar is tracked independently rather than re-derived from the
//! matrix, so repeated compositions cannot drift it and it stays exact for
//! display.

use crate::geometry::{Affine, Point};
use crate::settings::Settings;
use tracing::{debug, error};

/// Zoom and pan state for the infinite canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    zoom: f64,
    matrix: Affine,
    inverse: Affine,
    min_zoom: f64,
    max_zoom: f64,
    scroll_multiplier: f64,
}

impl Viewport {
    pub fn new(settings: &Settings) -> Self {
        Self {
            zoom: crate::constants::DEFAULT_ZOOM,
            matrix: Affine::IDENTITY,
            inverse: Affine::IDENTITY,
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            scroll_multiplier: settings.scroll_multiplier,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The canvas-to-screen transform, for rendering canvas content.
    pub fn matrix(&self) -> &Affine {
        &self.matrix
    }

    /// Converts a raw screen-space point to canvas space.
    pub fn screen_to_canvas(&self, point: Point) -> Point {
        self.inverse.apply(point)
    }

    pub fn canvas_to_screen(&self, point: Point) -> Point {
        self.matrix.apply(point)
    }

    /// Handles a wheel event: computes the candidate zoom from the raw
    /// delta, rounds it to two decimals, clamps it to the permitted range,
    /// and applies it anchored at `cursor` (raw screen space).
    ///
    /// Scrolling further against a clamp boundary is skipped entirely so the
    /// matrix is not recomposed with a factor of 1. Returns whether the
    /// transform changed.
    pub fn scroll_wheel_zoom(&mut self, raw_delta: f64, cursor: Point) -> bool {
        let should_zoom_in = self.zoom < self.max_zoom && raw_delta < 0.0;
        let should_zoom_out = self.zoom > self.min_zoom && raw_delta > 0.0;
        if !(should_zoom_in || should_zoom_out) {
            return false;
        }

        let candidate = round_hundredths(self.zoom - self.scroll_multiplier * raw_delta);
        let new_zoom = candidate.clamp(self.min_zoom, self.max_zoom);
        self.apply_zoom(new_zoom, cursor);
        true
    }

    /// Re-zooms to `new_zoom`, keeping the canvas point under `cursor`
    /// (raw screen space) visually fixed.
    ///
    /// The anchor chain `translate(cursor) ∘ scale ∘ translate(-cursor)` is
    /// left-composed onto the existing matrix. The caller is responsible for
    /// recomputing any cached canvas-space cursor afterwards, since the
    /// mapping changed.
    pub fn apply_zoom(&mut self, new_zoom: f64, cursor: Point) {
        if !(new_zoom.is_finite() && new_zoom > 0.0) {
            // Zoom is clamped away from zero upstream; reaching this is a
            // programming error, not a user-facing condition.
            debug_assert!(false, "non-positive zoom {new_zoom} reached the transform engine");
            error!(new_zoom, "rejecting degenerate zoom");
            return;
        }

        let scale_factor = new_zoom / self.zoom;
        self.matrix = Affine::compose(&[
            Affine::translate(cursor.x, cursor.y),
            Affine::scale(scale_factor),
            Affine::translate(-cursor.x, -cursor.y),
            self.matrix,
        ]);
        self.inverse = self.matrix.inverse();
        self.zoom = new_zoom;
        debug!(zoom = self.zoom, "zoom applied");
    }

    /// Pans by a screen-space delta. Zoom is unaffected.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.matrix = Affine::translate(delta_x, delta_y).multiply(&self.matrix);
        self.inverse = self.matrix.inverse();
    }

    /// Restores the identity transform and unit zoom. Both are reset
    /// together; a stale zoom scalar would desynchronize the scroll gate.
    pub fn reset(&mut self) {
        self.matrix = Affine::IDENTITY;
        self.inverse = Affine::IDENTITY;
        self.zoom = crate::constants::DEFAULT_ZOOM;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
