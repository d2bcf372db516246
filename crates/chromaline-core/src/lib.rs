//! Core abstractions for chromaline.
//!
//! This crate provides the unit-interval map that every colormap channel is
//! built from:
//! - [`UnitMap`], a piecewise-linear map of [0, 1] into itself with
//!   evaluation, composition, simplification and reshaping
//! - [`geometry`] helpers for points and line segments
//! - [`Options`] holding the tolerances and shaping parameters
//! - [`ChromalineError`], the error type shared by the workspace

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

mod clean;
mod compose;
pub mod error;
pub mod geometry;
pub mod options;
mod shape;
pub mod unit_map;

pub use error::{ChromalineError, Result};
pub use geometry::{
    closest_point_on_line, linear_interp, point_in_segment, points_close, squared_distance,
    squared_distance_to_line,
};
pub use options::{Options, DEFAULT_TOLERANCE};
pub use unit_map::UnitMap;

// Re-export glam types for convenience
pub use glam::{DVec2, Vec3};
