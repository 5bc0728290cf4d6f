use thiserror::Error;

use crate::hex::{Direction, Orientation};

/// Convenient result alias for the hexpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Graph queries never return these: a missing endpoint or an unreachable goal
/// is reported as `None` by the search functions.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a cube coordinate does not satisfy `q + r + s = 0`.
    #[error("invalid cube coordinate ({q}, {r}, {s}): q + r + s must be 0")]
    InvalidCoordinate { q: f64, r: f64, s: f64 },

    /// Raised when a map record does not sit on a whole-number hex centre.
    #[error("coordinate ({q}, {r}, {s}) is not a hex centre")]
    OffGridCoordinate { q: f64, r: f64, s: f64 },

    /// Raised when a named direction is missing from the orientation's table.
    #[error("direction {direction} is not valid for {orientation} orientation")]
    InvalidDirection {
        direction: Direction,
        orientation: Orientation,
    },

    /// Raised when a `"q,r,s"` key cannot be parsed back into a coordinate.
    #[error("invalid coordinate key '{key}'; expected \"q,r,s\"")]
    InvalidCoordinateKey { key: String },

    /// Raised when an edge weight is negative or not finite.
    #[error("invalid edge weight {weight}; weights must be finite and non-negative")]
    InvalidWeight { weight: f64 },

    /// Raised when a map document lists the same hex twice.
    #[error("duplicate hex at {key}")]
    DuplicateHex { key: String },

    /// Wrapper for map document (de)serialization errors.
    #[error("malformed map document: {0}")]
    MapFormat(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
