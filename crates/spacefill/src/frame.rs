//! Affine frames: an origin plus two basis vectors.
//!
//! A frame spans the parallelogram `origin + s·i + t·j` for `s, t ∈ [0, 1]`.
//! Each recursive step of a generator derives four child frames from its
//! parent; frames are never mutated.

use crate::point::Point;

/// Position, size and orientation of one subdivision cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Corner the cell is spanned from.
    pub origin: Point,
    /// The I ("horizontal") basis vector.
    pub i: Point,
    /// The J ("vertical") basis vector.
    pub j: Point,
}

impl Frame {
    /// Create a frame from an origin and two basis vectors.
    pub const fn new(origin: Point, i: Point, j: Point) -> Self {
        Self { origin, i, j }
    }

    /// Create a frame from raw components: origin `(x0, y0)`, I-vector
    /// `(xi, yi)` and J-vector `(xj, yj)`.
    pub const fn from_components(x0: f64, y0: f64, xi: f64, yi: f64, xj: f64, yj: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(xi, yi), Point::new(xj, yj))
    }

    /// The unit square anchored at the origin.
    pub const fn unit() -> Self {
        Self::from_components(0.0, 0.0, 1.0, 0.0, 0.0, 1.0)
    }

    /// Midpoint of the parallelogram spanned by the frame.
    pub fn center(&self) -> Point {
        self.origin + (self.i + self.j) / 2.0
    }

    /// The same frame moved by `offset`.
    pub fn translated(&self, offset: Point) -> Self {
        Self::new(self.origin + offset, self.i, self.j)
    }

    /// The frame with both basis vectors multiplied by `k`; the origin stays.
    pub fn scaled(&self, k: f64) -> Self {
        Self::new(self.origin, self.i * k, self.j * k)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center() {
        assert_eq!(Frame::unit().center(), Point::new(0.5, 0.5));

        let f = Frame::from_components(1.0, 2.0, 2.0, 0.0, 0.0, 4.0);
        assert_eq!(f.center(), Point::new(2.0, 4.0));

        // Sheared frames center on the parallelogram midpoint.
        let f = Frame::from_components(0.0, 0.0, 2.0, 2.0, -2.0, 2.0);
        assert_eq!(f.center(), Point::new(0.0, 2.0));
    }

    #[test]
    fn degenerate_frame_collapses_to_origin() {
        let f = Frame::from_components(3.0, -1.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(f.center(), Point::new(3.0, -1.0));
    }

    #[test]
    fn transforms() {
        let f = Frame::unit().translated(Point::new(1.0, 1.0)).scaled(2.0);
        assert_eq!(f.origin, Point::new(1.0, 1.0));
        assert_eq!(f.i, Point::new(2.0, 0.0));
        assert_eq!(f.j, Point::new(0.0, 2.0));
    }
}
