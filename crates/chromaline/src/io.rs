//! Colormap files.
//!
//! Two formats are understood, picked by file extension:
//! - `.cmap`: the row-interleaved text table
//! - `.json`: segment-triple data, named after the file stem

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::{
    parse_table, write_table, ChromalineError, Colormap, Options, Result, SegmentData,
    TableOptions,
};

/// On-disk colormap format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Text table, `.cmap`.
    Table,
    /// Segment-triple JSON, `.json`.
    SegmentJson,
}

impl FileFormat {
    /// Picks the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "cmap" => Ok(Self::Table),
            "json" => Ok(Self::SegmentJson),
            _ => Err(ChromalineError::UnknownExtension(ext)),
        }
    }
}

/// Loads a colormap with default table settings and tolerances.
pub fn load_colormap(path: impl AsRef<Path>) -> Result<Colormap> {
    load_colormap_with(path, &TableOptions::default(), &Options::default())
}

/// Loads a colormap, dispatching on the file extension.
pub fn load_colormap_with(
    path: impl AsRef<Path>,
    table: &TableOptions,
    options: &Options,
) -> Result<Colormap> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let colormap = match format {
        FileFormat::Table => parse_table(&text, table, options)?,
        FileFormat::SegmentJson => {
            let name = path
                .file_stem()
                .and_then(OsStr::to_str)
                .unwrap_or("Untitled");
            Colormap::from_segment_data(name, &SegmentData::from_json(&text)?)?
        }
    };
    log::info!(
        "loaded colormap '{}' from {}",
        colormap.name(),
        path.display()
    );
    Ok(colormap)
}

/// Writes a colormap as a `.cmap` text table with default settings.
pub fn save_table(path: impl AsRef<Path>, colormap: &Colormap) -> Result<()> {
    save_table_with(path, colormap, &TableOptions::default())
}

/// Writes a colormap as a `.cmap` text table.
pub fn save_table_with(
    path: impl AsRef<Path>,
    colormap: &Colormap,
    table: &TableOptions,
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, write_table(colormap, table)?)?;
    log::info!("saved colormap '{}' to {}", colormap.name(), path.display());
    Ok(())
}

/// Writes a colormap's segment triples as pretty-printed JSON.
pub fn save_segment_json(path: impl AsRef<Path>, colormap: &Colormap) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, colormap.to_segment_data().to_json()?)?;
    log::info!(
        "saved segment data for '{}' to {}",
        colormap.name(),
        path.display()
    );
    Ok(())
}
