//! 2x3 affine transforms.
//!
//! The canvas transform is always a composition of uniform scales and
//! translations, stored column-major as `[a, b, c, d, e, f]` with the last
//! row `[0, 0, 1]` implicit:
//!
//! ```text
//! | a  c  e |
//! | b  d  f |
//! | 0  0  1 |
//! ```
//!
//! Because only those two primitives ever enter the composition, the linear
//! part stays diagonal (`b == c == 0`, `a == d`) and the inverse has a
//! closed form.

use crate::geometry::Point;

/// A 2x3 affine matrix acting on column vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    entries: [f64; 6],
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        entries: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub const fn from_entries(entries: [f64; 6]) -> Self {
        Self { entries }
    }

    /// Uniform scale about the origin.
    pub const fn scale(factor: f64) -> Self {
        Self::from_entries([factor, 0.0, 0.0, factor, 0.0, 0.0])
    }

    /// Translation by `(dx, dy)`.
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self::from_entries([1.0, 0.0, 0.0, 1.0, dx, dy])
    }

    /// Column-major entries `[a, b, c, d, e, f]`, e.g. for an SVG
    /// `matrix(...)` transform attribute.
    pub const fn entries(&self) -> [f64; 6] {
        self.entries
    }

    /// Composes `self * other`: the result applies `other` first, then
    /// `self`.
    pub fn multiply(&self, other: &Affine) -> Affine {
        let a = &self.entries;
        let b = &other.entries;
        Affine::from_entries([
            a[0] * b[0] + a[2] * b[1],
            a[1] * b[0] + a[3] * b[1],
            a[0] * b[2] + a[2] * b[3],
            a[1] * b[2] + a[3] * b[3],
            a[0] * b[4] + a[2] * b[5] + a[4],
            a[1] * b[4] + a[3] * b[5] + a[5],
        ])
    }

    /// Right-to-left fold of `multiply`: `compose(&[m1, m2, m3])` applies
    /// `m3` first and `m1` last.
    ///
    /// Panics on an empty slice; a zero-length chain is a caller error.
    pub fn compose(matrices: &[Affine]) -> Affine {
        let (last, rest) = matrices
            .split_last()
            .expect("compose requires at least one matrix");
        rest.iter()
            .rev()
            .fold(*last, |accumulator, current| current.multiply(&accumulator))
    }

    /// Applies the transform to a point.
    pub fn apply(&self, point: Point) -> Point {
        let [a, b, c, d, e, f] = self.entries;
        Point::new(a * point.x + c * point.y + e, b * point.x + d * point.y + f)
    }

    /// True when the linear part is invertible.
    pub fn is_invertible(&self) -> bool {
        let [a, b, c, d, ..] = self.entries;
        (a * d - b * c) != 0.0
    }

    /// Closed-form inverse for scale+translate compositions.
    ///
    /// The linear part is diagonal by construction, so inversion never needs
    /// a general 2x2 fallback. A zero scale reaching this point is a
    /// programming error upstream (zoom is clamped away from zero).
    pub fn inverse(&self) -> Affine {
        let [a, _, _, d, e, f] = self.entries;
        debug_assert!(a != 0.0 && d != 0.0, "degenerate scale in canvas transform");
        Affine::from_entries([1.0 / a, 0.0, 0.0, 1.0 / d, -e / a, -f / d])
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}
