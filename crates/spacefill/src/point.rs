//! Planar point type used by the curve generators.
//!
//! A [`Point`] doubles as a 2D vector: frames store their basis vectors as
//! points, and the arithmetic operators below implement the vector algebra the
//! subdivision rules need.

use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A point (or vector) in the projection plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin / zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Chebyshev (maximum-axis) distance between two points.
    pub fn chebyshev(&self, other: &Self) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Bit patterns of both coordinates, for exact comparisons and hashing.
    pub fn to_bits(self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl Div<f64> for Point {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k)
    }
}

/// Formats as `"x y"`, the whitespace-separated form gnuplot reads.
///
/// Coordinates use the shortest representation that round-trips and always
/// carry a fractional part (`1.0`, not `1`).
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.x, self.y)
    }
}
