use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::io::writers::jpeg::write_rgba_as_jpeg;
use crate::io::writers::png::write_rgba_png;
use crate::types::OutputFormat;

/// Serialize a finished canvas to disk in the requested format.
///
/// PNG is the lossless primary format; JPEG is a flattened preview with the
/// alpha channel composited onto white.
pub fn save_icon(
    canvas: &RgbaImage,
    output: &Path,
    format: OutputFormat,
) -> crate::error::Result<()> {
    match format {
        OutputFormat::PNG => {
            write_rgba_png(output, canvas)?;
            info!("save_icon: PNG saved to {:?}", output);
        }
        OutputFormat::JPEG => {
            write_rgba_as_jpeg(output, canvas)?;
            info!("save_icon: JPEG preview saved to {:?}", output);
        }
    }
    Ok(())
}
