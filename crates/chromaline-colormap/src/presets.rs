//! Named colormap presets.

use std::collections::HashMap;

use chromaline_core::{ChromalineError, Result};

use crate::colormap::Colormap;
use crate::segments::SegmentData;

/// Registry for looking up colormaps by name.
#[derive(Debug, Default)]
pub struct ColormapRegistry {
    colormaps: HashMap<String, Colormap>,
}

impl ColormapRegistry {
    /// Creates a new registry holding the built-in presets.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // Gray ramp
        self.register_segments(
            "gray",
            &SegmentData::from_arrays(
                &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
                &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
                &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
            ),
        );

        // Black through red and yellow to white
        self.register_segments(
            "hot",
            &SegmentData::from_arrays(
                &[[0.0, 0.0416, 0.0416], [0.365_079, 1.0, 1.0], [1.0, 1.0, 1.0]],
                &[
                    [0.0, 0.0, 0.0],
                    [0.365_079, 0.0, 0.0],
                    [0.746_032, 1.0, 1.0],
                    [1.0, 1.0, 1.0],
                ],
                &[[0.0, 0.0, 0.0], [0.746_032, 0.0, 0.0], [1.0, 1.0, 1.0]],
            ),
        );

        // Cyan to magenta
        self.register_segments(
            "cool",
            &SegmentData::from_arrays(
                &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
                &[[0.0, 1.0, 1.0], [1.0, 0.0, 0.0]],
                &[[0.0, 1.0, 1.0], [1.0, 1.0, 1.0]],
            ),
        );

        // Red to yellow
        self.register_segments(
            "autumn",
            &SegmentData::from_arrays(
                &[[0.0, 1.0, 1.0], [1.0, 1.0, 1.0]],
                &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
                &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            ),
        );

        // Jet
        self.register_segments(
            "jet",
            &SegmentData::from_arrays(
                &[
                    [0.0, 0.0, 0.0],
                    [0.35, 0.0, 0.0],
                    [0.66, 1.0, 1.0],
                    [0.89, 1.0, 1.0],
                    [1.0, 0.5, 0.5],
                ],
                &[
                    [0.0, 0.0, 0.0],
                    [0.125, 0.0, 0.0],
                    [0.375, 1.0, 1.0],
                    [0.64, 1.0, 1.0],
                    [0.91, 0.0, 0.0],
                    [1.0, 0.0, 0.0],
                ],
                &[
                    [0.0, 0.5, 0.5],
                    [0.11, 1.0, 1.0],
                    [0.34, 1.0, 1.0],
                    [0.65, 0.0, 0.0],
                    [1.0, 0.0, 0.0],
                ],
            ),
        );
    }

    fn register_segments(&mut self, name: &str, data: &SegmentData) {
        match Colormap::from_segment_data(name, data) {
            Ok(colormap) => self.register(colormap),
            Err(e) => log::warn!("skipping preset '{name}': {e}"),
        }
    }

    /// Registers a colormap, replacing any with the same name.
    pub fn register(&mut self, colormap: Colormap) {
        self.colormaps.insert(colormap.name().to_string(), colormap);
    }

    /// Gets a colormap by name.
    pub fn get(&self, name: &str) -> Option<&Colormap> {
        self.colormaps.get(name)
    }

    /// Gets a copy of a colormap by name, or an error naming the missing map.
    pub fn load(&self, name: &str) -> Result<Colormap> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ChromalineError::UnknownColormap(name.to_string()))
    }

    /// Returns all colormap names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.colormaps.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
