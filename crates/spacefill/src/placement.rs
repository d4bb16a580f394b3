//! Turning a requested point count into a curve order and frame.
//!
//! Callers ask for a number of points, optionally with an explicit fit (the
//! I/J vectors) and offset (the origin). Missing values fall back to a square
//! whose neighbouring points sit one unit apart, with the first cell center of
//! that square on `(0, 0)`.

use crate::{
    curves::point_count,
    error::{Error, Result},
    frame::Frame,
    point::Point,
};

/// Largest order whose point count fits in a `u64`.
pub const MAX_ORDER: u32 = 31;

/// The order `n` such that `4^n == count`.
///
/// Fails with [`Error::NotPowerOfFour`] when no such integer exists, which
/// includes `count == 0`.
pub fn order_for_points(count: u64) -> Result<u32> {
    if count.is_power_of_two() && count.trailing_zeros().is_multiple_of(2) {
        Ok(count.trailing_zeros() / 2)
    } else {
        Err(Error::NotPowerOfFour(count))
    }
}

/// The number of points (`4^order`) in a curve of `order`.
pub fn points_for_order(order: u32) -> Result<u64> {
    point_count(order).ok_or(Error::OrderTooLarge(order))
}

/// Orientation and size of a curve: its I and J basis vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    /// The I ("X") vector.
    pub i: Point,
    /// The J ("Y") vector.
    pub j: Point,
}

impl Fit {
    /// Create a fit from two basis vectors.
    pub const fn new(i: Point, j: Point) -> Self {
        Self { i, j }
    }

    /// Create a fit from `[xi, yi, xj, yj]`.
    pub const fn from_components([xi, yi, xj, yj]: [f64; 4]) -> Self {
        Self::new(Point::new(xi, yi), Point::new(xj, yj))
    }

    /// The default fit for `count` points: an axis-aligned square of side
    /// `√count`, so neighbouring points are one unit apart.
    pub fn square(count: u64) -> Self {
        let side = (count as f64).sqrt();
        Self::from_components([side, 0.0, 0.0, side])
    }

    /// Whether the vectors lie along the coordinate axes.
    pub fn is_axis_aligned(&self) -> bool {
        self.i.y == 0.0 && self.j.x == 0.0
    }

    /// The default offset for this fit and `count` points.
    ///
    /// Axis-aligned fits are shifted back by half a cell so that the corner
    /// cell center lands on `(0, 0)`; any other fit is left at the origin.
    pub fn default_offset(&self, count: u64) -> Point {
        if !self.is_axis_aligned() {
            return Point::ZERO;
        }
        let side = (count as f64).sqrt();
        Point::new(-self.i.x / (2.0 * side), -self.j.y / (2.0 * side))
    }
}

/// A fully resolved curve request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Curve order; the curve has `4^order` points.
    pub order: u32,
    /// Frame the curve fills.
    pub frame: Frame,
}

impl Placement {
    /// Resolve a request for `count` points, filling in the default fit and
    /// offset where none are given.
    pub fn resolve(count: u64, fit: Option<Fit>, offset: Option<Point>) -> Result<Self> {
        let order = order_for_points(count)?;
        let fit = fit.unwrap_or_else(|| Fit::square(count));
        let origin = offset.unwrap_or_else(|| fit.default_offset(count));
        Ok(Self {
            order,
            frame: Frame::new(origin, fit.i, fit.j),
        })
    }

    /// Number of points the placement produces.
    pub fn point_count(&self) -> u64 {
        point_count(self.order).unwrap_or(u64::MAX)
    }
}
