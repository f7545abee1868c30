use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::Result;

/// Decode an image file into RGBA8.
///
/// The conversion happens once up front: inputs without an alpha channel
/// come back fully opaque, so every later stage can assume 4 channels.
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)?.to_rgba8();
    debug!(
        "Opened {:?}: {}x{}",
        path,
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Size of a file in KB, for progress reporting.
pub fn file_size_kb(path: &Path) -> Result<f64> {
    Ok(std::fs::metadata(path)?.len() as f64 / 1024.0)
}
