//! Three-channel colormaps for chromaline.
//!
//! This crate builds on [`chromaline_core::UnitMap`] to provide:
//! - [`Colormap`], a named red/green/blue triple of unit maps with sampling,
//!   luminance and lookup-table generation
//! - [`ColormapRegistry`] with a few built-in presets
//! - segment-triple data ([`SegmentData`]) and the plain-text `.cmap` table
//!   format for exchanging colormaps

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod colormap;
pub mod presets;
pub mod segments;
pub mod table;

pub use colormap::{Channel, Colormap, LuminanceWeights, Rgba8};
pub use presets::ColormapRegistry;
pub use segments::{from_segments, to_segments, SegmentData, SegmentTriple};
pub use table::{parse_table, write_table, TableOptions};
