//! Error types for curve construction and placement.

use thiserror::Error;

/// Errors raised while validating curve requests.
///
/// Generation itself cannot fail; these cover the inputs that are turned into
/// an order and a frame before generation starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested point count is not `4^n` for any integer `n`.
    #[error("number of points is not a power of 4: {0}")]
    NotPowerOfFour(u64),
    /// The requested order produces more points than can be counted.
    #[error("curve order {0} is too large (maximum {max})", max = crate::placement::MAX_ORDER)]
    OrderTooLarge(u32),
    /// The curve name is not in the registry.
    #[error("unknown curve '{name}' (valid options: {valid})")]
    UnknownCurve {
        /// The name that was requested.
        name: String,
        /// Comma-separated list of valid names.
        valid: String,
    },
}

/// Convenient result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
