//! Curve registry: names, metadata and dispatch to the generators.

use std::{fmt, iter::FusedIterator, str::FromStr};

use crate::{
    curves::{HilbertPoints, MoorePoints, hilbert, moore},
    error::{Error, Result},
    frame::Frame,
    point::Point,
};

/// The supported curve kinds.
///
/// Discriminants index [`REGISTRY`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Open Hilbert curve.
    #[default]
    Hilbert = 0,
    /// Closed Moore curve.
    Moore = 1,
}

/// Metadata describing a registered curve.
#[derive(Debug, Clone, Copy)]
pub struct CurveEntry {
    /// Registry key, as accepted on the command line.
    pub key: &'static str,
    /// Human-readable name.
    pub display: &'static str,
    /// One-line description.
    pub info: &'static str,
    /// The curve kind.
    pub curve: Curve,
}

/// All registered curves, in discriminant order.
pub const REGISTRY: &[CurveEntry] = &[
    CurveEntry {
        key: "hilbert",
        display: "Hilbert",
        info: "open curve joining two adjacent corners",
        curve: Curve::Hilbert,
    },
    CurveEntry {
        key: "moore",
        display: "Moore",
        info: "closed curve of four Hilbert sub-curves",
        curve: Curve::Moore,
    },
];

/// Registry keys of all supported curves.
pub const CURVE_NAMES: [&str; REGISTRY.len()] = {
    let mut names = [""; REGISTRY.len()];
    let mut i = 0;
    while i < REGISTRY.len() {
        names[i] = REGISTRY[i].key;
        i += 1;
    }
    names
};

impl Curve {
    /// Registry entry for this curve.
    pub const fn entry(self) -> &'static CurveEntry {
        &REGISTRY[self as usize]
    }

    /// Registry key for this curve.
    pub const fn key(self) -> &'static str {
        self.entry().key
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        self.entry().display
    }

    /// Short description of the curve.
    pub const fn info(self) -> &'static str {
        self.entry().info
    }

    /// Lazily generate the `4^order` points of this curve filling `frame`.
    pub fn points(self, order: u32, frame: Frame) -> CurvePoints {
        match self {
            Self::Hilbert => CurvePoints::Hilbert(hilbert(order, frame)),
            Self::Moore => CurvePoints::Moore(moore(order, frame)),
        }
    }

    /// Eagerly collect the points of this curve.
    pub fn collect_points(self, order: u32, frame: Frame) -> Vec<Point> {
        self.points(order, frame).collect()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Curve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        REGISTRY
            .iter()
            .find(|e| e.key.eq_ignore_ascii_case(s.trim()))
            .map(|e| e.curve)
            .ok_or_else(|| Error::UnknownCurve {
                name: s.to_string(),
                valid: CURVE_NAMES.join(", "),
            })
    }
}

/// Points of either curve kind, as returned by [`Curve::points`].
#[derive(Clone, Debug)]
pub enum CurvePoints {
    /// Points of a Hilbert curve.
    Hilbert(HilbertPoints),
    /// Points of a Moore curve.
    Moore(MoorePoints),
}

impl CurvePoints {
    /// Number of points not yet yielded.
    pub fn remaining(&self) -> u64 {
        match self {
            Self::Hilbert(it) => it.remaining(),
            Self::Moore(it) => it.remaining(),
        }
    }
}

impl Iterator for CurvePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self {
            Self::Hilbert(it) => it.next(),
            Self::Moore(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Hilbert(it) => it.size_hint(),
            Self::Moore(it) => it.size_hint(),
        }
    }
}

impl FusedIterator for CurvePoints {}
