//! Minimal example: print an order-2 Moore curve on a unit grid.

use std::error::Error;

use spacefill::placement::Placement;

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    // 16 points, default square fit: cell centers one unit apart from (0, 0).
    let placement = Placement::resolve(16, None, None)?;
    let curve = spacefill::curve_from_name("moore")?;
    println!("{} curve, {} points", curve.name(), placement.point_count());

    let points = curve.collect_points(placement.order, placement.frame);
    for (label, point) in points.iter().enumerate() {
        println!("{point} {label}");
    }

    let (first, last) = (points[0], points[points.len() - 1]);
    assert_eq!(first.distance(&last), 1.0);
    // snips-end: example

    Ok(())
}
