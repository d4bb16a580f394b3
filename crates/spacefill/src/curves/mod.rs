/// Hilbert curve generator.
pub mod hilbert;
/// Moore curve generator, built from Hilbert sub-curves.
pub mod moore;

pub use hilbert::{HilbertPoints, hilbert, hilbert_points};
pub use moore::{MoorePoints, moore, moore_points};

/// Number of points in a curve of `order`, or `None` if it overflows `u64`.
pub const fn point_count(order: u32) -> Option<u64> {
    4u64.checked_pow(order)
}

/// Iterator size hint for `remaining` points; unbounded when it exceeds `usize`.
fn size_hint_for(remaining: u64) -> (usize, Option<usize>) {
    match usize::try_from(remaining) {
        Ok(n) => (n, Some(n)),
        Err(_) => (usize::MAX, None),
    }
}
