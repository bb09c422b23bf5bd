//! Point-to-polyline proximity, used by the eraser.
//!
//! A path is treated as an open chain of line segments between consecutive
//! points. The cursor "hits" the path when it lies strictly within the erase
//! radius of any segment.

use crate::geometry::Point;

/// The closest point to `point` on the segment `(a, b)`.
///
/// Projects `point` onto the infinite line through the segment and clamps
/// the parameter to `[0, 1]`. A zero-length segment falls back to `a`.
pub fn closest_segment_point(a: Point, b: Point, point: Point) -> Point {
    let v = Point::new(b.x - a.x, b.y - a.y);
    let w = Point::new(point.x - a.x, point.y - a.y);
    let norm_squared = v.x * v.x + v.y * v.y;
    if norm_squared == 0.0 {
        return a;
    }

    let t = (v.x * w.x + v.y * w.y) / norm_squared;
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        Point::new(a.x + t * v.x, a.y + t * v.y)
    }
}

/// True when `point` lies strictly within `radius` of any segment of the
/// polyline.
///
/// A polyline with fewer than two points has no segments and never
/// intersects; single-point paths are therefore un-erasable.
pub fn is_near_polyline(point: Point, polyline: &[Point], radius: f64) -> bool {
    polyline.windows(2).any(|segment| {
        let closest = closest_segment_point(segment[0], segment[1], point);
        closest.dist_squared(point) < radius * radius
    })
}
