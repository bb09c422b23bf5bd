//! Geometry primitives for the canvas.
//!
//! ## Modules
//!
//! - `matrix` - 2x3 affine transforms (scale, translate, composition, inverse)
//! - `intersection` - point-to-polyline proximity for eraser hit testing

mod intersection;
mod matrix;

pub use intersection::{closest_segment_point, is_near_polyline};
pub use matrix::Affine;

/// A point in either screen or canvas space; which one is by convention of
/// the call site.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point.
    #[inline]
    pub fn dist_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
