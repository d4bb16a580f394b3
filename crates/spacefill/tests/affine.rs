//! Property-based tests for the affine behaviour of the generators.
//!
//! Scaling the basis vectors scales every point's offset from the origin, and
//! moving the origin moves every point by the same amount.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use proptest::prelude::*;
use spacefill::{Curve, frame::Frame, placement::points_for_order, point::Point};

/// Absolute/relative tolerance comparison for coordinates.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn frame() -> impl Strategy<Value = Frame> {
    (coord(), coord(), coord(), coord(), coord(), coord())
        .prop_map(|(x0, y0, xi, yi, xj, yj)| Frame::from_components(x0, y0, xi, yi, xj, yj))
}

fn rect() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (coord(), coord(), coord(), coord())
}

fn curve() -> impl Strategy<Value = Curve> {
    prop_oneof![Just(Curve::Hilbert), Just(Curve::Moore)]
}

/// Check that every point of `curve` lies in the parallelogram of `f`.
fn assert_inside(curve: Curve, order: u32, f: Frame) -> Result<(), TestCaseError> {
    let Frame { origin, i, j } = f;
    let det = i.x * j.y - i.y * j.x;
    prop_assume!(det.abs() > 1e-3);
    for p in curve.points(order, f) {
        let d = p - origin;
        let s = (d.x * j.y - d.y * j.x) / det;
        let t = (i.x * d.y - i.y * d.x) / det;
        prop_assert!((-1e-6..=1.0 + 1e-6).contains(&s), "s = {}", s);
        prop_assert!((-1e-6..=1.0 + 1e-6).contains(&t), "t = {}", t);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every order yields exactly 4^order points.
    #[test]
    fn length_is_power_of_four(curve in curve(), order in 0u32..6, f in frame()) {
        let expected = points_for_order(order).expect("small order");
        prop_assert_eq!(curve.points(order, f).count() as u64, expected);
        prop_assert_eq!(curve.points(order, f).remaining(), expected);
    }

    /// Order 0 is the frame center, bit for bit.
    #[test]
    fn order_zero_is_center(curve in curve(), f in frame()) {
        let points = curve.collect_points(0, f);
        prop_assert_eq!(points.len(), 1);
        let Frame { origin, i, j } = f;
        let expected = Point::new(origin.x + (i.x + j.x) / 2.0, origin.y + (i.y + j.y) / 2.0);
        prop_assert_eq!(points[0].to_bits(), expected.to_bits());
    }

    /// Scaling the basis vectors by `k` scales offsets from the origin by `k`.
    #[test]
    fn scaling(curve in curve(), order in 0u32..5, f in frame(), k in -10.0f64..10.0) {
        let base = curve.collect_points(order, f);
        let scaled = curve.collect_points(order, f.scaled(k));
        for (p, q) in base.iter().zip(&scaled) {
            let d = (*p - f.origin) * k;
            let e = *q - f.origin;
            prop_assert!(close(d.x, e.x) && close(d.y, e.y), "{:?} vs {:?}", d, e);
        }
    }

    /// Translating the origin translates every point.
    #[test]
    fn translation(curve in curve(), order in 0u32..5, f in frame(), dx in coord(), dy in coord()) {
        let offset = Point::new(dx, dy);
        let base = curve.collect_points(order, f);
        let moved = curve.collect_points(order, f.translated(offset));
        for (p, q) in base.iter().zip(&moved) {
            let expected = *p + offset;
            prop_assert!(close(expected.x, q.x) && close(expected.y, q.y), "{:?} vs {:?}", expected, q);
        }
    }

    /// Repeated generation is bit-for-bit identical.
    #[test]
    fn deterministic(curve in curve(), order in 0u32..5, f in frame()) {
        let a: Vec<_> = curve.points(order, f).map(Point::to_bits).collect();
        let b: Vec<_> = curve.points(order, f).map(Point::to_bits).collect();
        prop_assert_eq!(a, b);
    }

    /// Hilbert points stay inside the parallelogram spanned by any frame.
    #[test]
    fn hilbert_inside_frame(order in 0u32..5, f in frame()) {
        assert_inside(Curve::Hilbert, order, f)?;
    }

    /// Moore points stay inside axis-aligned frames. Its quadrant reflections
    /// act on single components, so rotated frames are not covered.
    #[test]
    fn moore_inside_axis_aligned_frame(order in 0u32..5, (x0, y0, w, h) in rect()) {
        assert_inside(Curve::Moore, order, Frame::from_components(x0, y0, w, 0.0, 0.0, h))?;
    }
}
