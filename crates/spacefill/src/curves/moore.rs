//! Moore curve: four Hilbert sub-curves stitched into a closed loop.

use std::{iter::FusedIterator, vec};

use super::{
    hilbert::{HilbertPoints, hilbert},
    point_count, size_hint_for,
};
use crate::{frame::Frame, point::Point};

/// The four Hilbert sub-curve frames of a Moore curve over `frame`, in
/// traversal order.
///
/// The first two quadrants mirror the x-component of I, the last two mirror
/// the y-component of J. The reflections act on components, not on the
/// vectors as a whole, and quadrant 4 reuses the origin of quadrant 2.
pub fn quadrants(frame: &Frame) -> [Frame; 4] {
    let Frame { origin, i, j } = *frame;
    let half_i = i / 2.0;
    let half_j = j / 2.0;
    let mirrored_i = Point::new(-half_i.x, half_i.y);
    let mirrored_j = Point::new(half_j.x, -half_j.y);
    [
        Frame::new(origin + half_i, mirrored_i, half_j),
        Frame::new(origin + half_i + half_j, mirrored_i, half_j),
        Frame::new(origin + half_i + j, half_i, mirrored_j),
        Frame::new(origin + half_i + half_j, half_i, mirrored_j),
    ]
}

/// Lazy iterator over the points of a Moore curve.
#[derive(Clone, Debug)]
pub struct MoorePoints {
    /// Sub-curve currently being traversed.
    current: HilbertPoints,
    /// Frames of the sub-curves not yet started.
    pending: vec::IntoIter<Frame>,
    /// Order of every sub-curve.
    sub_order: u32,
}

impl MoorePoints {
    /// Start a traversal of `frame` at `order`.
    fn new(order: u32, frame: Frame) -> Self {
        match order.checked_sub(1) {
            // Order 0 has no quadrants: a single Hilbert cell gives the center.
            None => Self {
                current: hilbert(0, frame),
                pending: Vec::new().into_iter(),
                sub_order: 0,
            },
            Some(sub_order) => {
                let [first, rest @ ..] = quadrants(&frame);
                Self {
                    current: hilbert(sub_order, first),
                    pending: rest.to_vec().into_iter(),
                    sub_order,
                }
            }
        }
    }

    /// Number of points not yet yielded, saturated at `u64::MAX`.
    pub fn remaining(&self) -> u64 {
        let per_quadrant = point_count(self.sub_order).unwrap_or(u64::MAX);
        (self.pending.len() as u64)
            .saturating_mul(per_quadrant)
            .saturating_add(self.current.remaining())
    }
}

impl Iterator for MoorePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if let Some(p) = self.current.next() {
                return Some(p);
            }
            let frame = self.pending.next()?;
            self.current = hilbert(self.sub_order, frame);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        size_hint_for(self.remaining())
    }
}

impl FusedIterator for MoorePoints {}

/// Generate the `4^order` points of a Moore curve filling `frame`.
///
/// For `order >= 1` the first and last points are one step apart, closing the
/// curve into a loop. Order 0 yields the frame center, exactly like
/// [`hilbert`].
pub fn moore(order: u32, frame: Frame) -> MoorePoints {
    MoorePoints::new(order, frame)
}

/// Eagerly collect the points of a Moore curve.
pub fn moore_points(order: u32, frame: Frame) -> Vec<Point> {
    moore(order, frame).collect()
}

/// [`moore`] taking the frame as raw components: origin `(x0, y0)`,
/// I-vector `(xi, yi)` and J-vector `(xj, yj)`.
pub fn moore_from_components(
    order: u32,
    x0: f64,
    y0: f64,
    xi: f64,
    yi: f64,
    xj: f64,
    yj: f64,
) -> MoorePoints {
    moore(order, Frame::from_components(x0, y0, xi, yi, xj, yj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::hilbert_points;

    fn pts(v: &[(f64, f64)]) -> Vec<Point> {
        v.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn order_zero_matches_hilbert() {
        let f = Frame::from_components(-1.0, 4.0, 2.0, 0.0, 0.0, 6.0);
        assert_eq!(moore_points(0, f), hilbert_points(0, f));
        assert_eq!(moore_points(0, f), vec![Point::new(0.0, 7.0)]);
    }

    #[test]
    fn order_one_unit_square() {
        assert_eq!(
            moore_points(1, Frame::unit()),
            pts(&[(0.25, 0.25), (0.25, 0.75), (0.75, 0.75), (0.75, 0.25)])
        );
    }

    // Pins the component-wise quadrant transforms.
    #[test]
    fn order_two_unit_square() {
        assert_eq!(
            moore_points(2, Frame::unit().scaled(4.0)),
            pts(&[
                (1.5, 0.5),
                (0.5, 0.5),
                (0.5, 1.5),
                (1.5, 1.5),
                (1.5, 2.5),
                (0.5, 2.5),
                (0.5, 3.5),
                (1.5, 3.5),
                (2.5, 3.5),
                (3.5, 3.5),
                (3.5, 2.5),
                (2.5, 2.5),
                (2.5, 1.5),
                (3.5, 1.5),
                (3.5, 0.5),
                (2.5, 0.5),
            ])
        );
    }

    #[test]
    fn quadrant_frames() {
        let q = quadrants(&Frame::from_components(0.0, 0.0, 2.0, 0.0, 0.0, 2.0));
        assert_eq!(q[0], Frame::from_components(1.0, 0.0, -1.0, 0.0, 0.0, 1.0));
        assert_eq!(q[1], Frame::from_components(1.0, 1.0, -1.0, 0.0, 0.0, 1.0));
        assert_eq!(q[2], Frame::from_components(1.0, 2.0, 1.0, 0.0, 0.0, -1.0));
        assert_eq!(q[3], Frame::from_components(1.0, 1.0, 1.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn remaining_counts_down() {
        let mut it = moore(2, Frame::unit());
        assert_eq!(it.remaining(), 16);
        for _ in 0..5 {
            it.next();
        }
        assert_eq!(it.remaining(), 11);
        assert_eq!(it.size_hint(), (11, Some(11)));
        assert_eq!(it.by_ref().count(), 11);
        assert_eq!(it.next(), None);
    }
}
