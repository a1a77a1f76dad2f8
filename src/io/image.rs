//! Image decoding and encoding at the edges of the pipeline

use crate::io::error::{MosaicError, Result};
use crate::mosaic::PixelGrid;
use std::path::Path;

/// Decode an image file into an RGB pixel grid
///
/// Any format the `image` crate recognizes is accepted; alpha is dropped.
///
/// # Errors
///
/// Returns `ImageLoad` if the file is missing, unreadable or undecodable
pub fn load(path: impl AsRef<Path>) -> Result<PixelGrid> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(PixelGrid::from_rgb_image(&decoded.to_rgb8()))
}

/// Encode a pixel grid to `path`, picking the format from the extension
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The extension names no supported format
/// - The image cannot be written
pub fn save(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    grid.to_rgb_image()
        .save(path)
        .map_err(|e| MosaicError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
