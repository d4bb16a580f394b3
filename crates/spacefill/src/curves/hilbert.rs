//! Hilbert curve by recursive frame subdivision.
//!
//! A frame of order `n` is split into four half-size frames of order `n - 1`,
//! visited in the order that traces the characteristic "U": the first child
//! has its axes swapped, the middle two keep the parent's orientation, and the
//! last is swapped and reversed. At order 0 the frame contributes its center.

use std::iter::FusedIterator;

use super::{point_count, size_hint_for};
use crate::{frame::Frame, point::Point};

/// The four child frames of `frame`, in traversal order.
pub fn quadrants(frame: &Frame) -> [Frame; 4] {
    let Frame { origin, i, j } = *frame;
    let half_i = i / 2.0;
    let half_j = j / 2.0;
    [
        Frame::new(origin, half_j, half_i),
        Frame::new(origin + half_i, half_i, half_j),
        Frame::new(origin + half_i + half_j, half_i, half_j),
        Frame::new(origin + half_i + j, -half_j, -half_i),
    ]
}

/// Lazy depth-first traversal yielding the points of a Hilbert curve.
///
/// Holds an explicit stack of pending `(order, frame)` cells, so memory is
/// proportional to the order rather than the number of points.
#[derive(Clone, Debug)]
pub struct HilbertPoints {
    /// Cells still to be visited; the top of the stack is visited next.
    stack: Vec<(u32, Frame)>,
    /// Points left to yield, saturated at `u64::MAX`.
    remaining: u64,
}

impl HilbertPoints {
    /// Start a traversal of `frame` at `order`.
    fn new(order: u32, frame: Frame) -> Self {
        let mut stack = Vec::with_capacity(3 * order as usize + 1);
        stack.push((order, frame));
        Self {
            stack,
            remaining: point_count(order).unwrap_or(u64::MAX),
        }
    }

    /// Number of points not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Iterator for HilbertPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some((order, frame)) = self.stack.pop() {
            if order == 0 {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(frame.center());
            }
            self.stack
                .extend(quadrants(&frame).into_iter().rev().map(|q| (order - 1, q)));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        size_hint_for(self.remaining)
    }
}

impl FusedIterator for HilbertPoints {}

/// Generate the `4^order` points of a Hilbert curve filling `frame`.
///
/// The returned iterator is lazy; call again to restart from the first point.
///
/// ```
/// use spacefill::{curves::hilbert, frame::Frame, point::Point};
///
/// let points: Vec<Point> = hilbert(1, Frame::unit()).collect();
/// assert_eq!(points[0], Point::new(0.25, 0.25));
/// assert_eq!(points.len(), 4);
/// ```
pub fn hilbert(order: u32, frame: Frame) -> HilbertPoints {
    HilbertPoints::new(order, frame)
}

/// Eagerly collect the points of a Hilbert curve.
pub fn hilbert_points(order: u32, frame: Frame) -> Vec<Point> {
    hilbert(order, frame).collect()
}

/// [`hilbert`] taking the frame as raw components: origin `(x0, y0)`,
/// I-vector `(xi, yi)` and J-vector `(xj, yj)`.
pub fn hilbert_from_components(
    order: u32,
    x0: f64,
    y0: f64,
    xi: f64,
    yi: f64,
    xj: f64,
    yj: f64,
) -> HilbertPoints {
    hilbert(order, Frame::from_components(x0, y0, xi, yi, xj, yj))
}
