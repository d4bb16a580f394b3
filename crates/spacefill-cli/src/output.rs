//! Plain-text point output.
//!
//! One point per line as `x y label`, or `x y` when labels are disabled. The
//! label is the zero-based position of the point along the curve.

use std::io::{self, Write};

use spacefill::point::Point;

/// Write `points` to `out`, one per line, returning how many were written.
///
/// Points are consumed lazily, so a streaming generator never needs to be
/// materialized.
pub fn write_points<W, I>(out: &mut W, points: I, labels: bool) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Point>,
{
    let mut written = 0u64;
    for (label, point) in points.into_iter().enumerate() {
        if labels {
            writeln!(out, "{point} {label}")?;
        } else {
            writeln!(out, "{point}")?;
        }
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
