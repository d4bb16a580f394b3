//! Core library for generating Hilbert and Moore curve points.
//!
//! Curves are produced by recursive subdivision of a [`frame::Frame`]: an
//! origin plus two basis vectors that place, size and orient the curve in the
//! plane. Generation is lazy; see [`curves::hilbert`] and [`curves::moore`].
//!
//! # Supported Curves
//!
//! - Hilbert
//! - Moore

/// Implementations of the recursive curve generators.
pub mod curves;
/// Error types used across the crate.
pub mod error;
/// Affine frames that position a curve in the plane.
pub mod frame;
/// Point-count validation and default curve placement.
pub mod placement;
/// Planar points and vector arithmetic.
pub mod point;
/// Central registry of curve metadata and dispatch.
pub mod registry;

pub use crate::registry::{Curve, CurvePoints};

/// Look up a curve by its registry key (`"hilbert"` or `"moore"`).
///
/// Returns an error if the name is unknown.
pub fn curve_from_name(name: &str) -> error::Result<Curve> {
    name.parse()
}
