//! Error types for chromaline.

use thiserror::Error;

/// The main error type for chromaline operations.
#[derive(Error, Debug)]
pub enum ChromalineError {
    /// A coordinate argument lies outside the unit interval.
    #[error("{name} = {value} is not valid; {name} must be between 0 and 1")]
    OutOfRange { name: &'static str, value: f64 },

    /// A unit map was evaluated outside its domain.
    #[error("x is {0}, but evaluate(x) requires 0 <= x <= 1")]
    Domain(f64),

    /// Attempted to delete an endpoint or a nonexistent point.
    #[error("cannot delete point {index} of {len}; only interior points are removable")]
    InvalidDeletion { index: usize, len: usize },

    /// A point index was out of bounds.
    #[error("point index {index} out of bounds for {len} points")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Coincident points were given where a segment is required.
    #[error("degenerate segment: endpoints coincide")]
    DegenerateSegment,

    /// The map is not monotonic and onto, so it cannot be transposed.
    #[error("unit map is not invertible")]
    NotInvertible,

    /// A shaping or sampling parameter was rejected.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A point list does not describe a valid unit map.
    #[error("invalid points: {0}")]
    InvalidPoints(String),

    /// No colormap with the given name is known.
    #[error("colormap '{0}' not found")]
    UnknownColormap(String),

    /// A file extension has no associated colormap format.
    #[error("unknown colormap file extension '{0}' (expected .cmap or .json)")]
    UnknownExtension(String),

    /// A colormap table could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for chromaline operations.
pub type Result<T> = std::result::Result<T, ChromalineError>;
