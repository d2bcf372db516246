//! chromaline: design colormaps from piecewise-linear curves.
//!
//! Every channel of a colormap is a [`UnitMap`], a piecewise-linear map of
//! the unit interval into itself. Unit maps can be edited point by point,
//! composed, simplified and reshaped; a [`Colormap`] ties three of them
//! together and derives luminance curves and lookup tables.
//!
//! # Quick Start
//!
//! ```
//! use chromaline::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     // Bend the red channel down in the middle
//!     let mut red = UnitMap::identity();
//!     red.add_point(0.5, 0.25)?;
//!     assert_eq!(red.evaluate(0.5)?, 0.25);
//!
//!     let cmap = Colormap::from_channels("warm", red, UnitMap::identity(), UnitMap::identity());
//!     let lut = cmap.lookup_table(256)?;
//!     assert_eq!(lut.len(), 256);
//!     Ok(())
//! }
//! ```
//!
//! # Files
//!
//! [`load_colormap`] and the `save_*` functions read and write the `.cmap`
//! text table and segment-triple `.json` files.

mod init;
mod io;

pub use init::init_logging;
pub use io::{
    load_colormap, load_colormap_with, save_segment_json, save_table, save_table_with, FileFormat,
};

// Re-export core types
pub use chromaline_core::{
    error::{ChromalineError, Result},
    geometry::{
        closest_point_on_line, linear_interp, point_in_segment, points_close, squared_distance,
        squared_distance_to_line,
    },
    options::{Options, DEFAULT_TOLERANCE},
    unit_map::UnitMap,
    DVec2, Vec3,
};

// Re-export colormap types
pub use chromaline_colormap::{
    from_segments, parse_table, to_segments, write_table, Channel, Colormap, ColormapRegistry,
    LuminanceWeights, Rgba8, SegmentData, SegmentTriple, TableOptions,
};

/// Returns a copy of a built-in preset colormap.
///
/// See [`ColormapRegistry::names`] for the available presets.
pub fn load_preset(name: &str) -> Result<Colormap> {
    ColormapRegistry::new().load(name)
}
