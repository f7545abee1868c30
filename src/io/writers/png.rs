use std::io::{BufWriter, Write};
use std::path::Path;

use image::ImageEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, RgbaImage};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Write an RGBA canvas as an optimized PNG.
///
/// Encodes into a temp file in the destination directory and persists it
/// over the target, so an interrupted run never leaves a truncated asset
/// where a good one used to be.
pub fn write_rgba_png(output: &Path, canvas: &RgbaImage) -> Result<()> {
    let parent = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let encoder =
            PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
        encoder.write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )?;
        writer.flush()?;
    }
    tmp.persist(output).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn written_png_decodes_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut canvas = RgbaImage::from_pixel(5, 4, Rgba([0, 0, 0, 0]));
        canvas.put_pixel(2, 1, Rgba([200, 0, 0, 255]));

        write_rgba_png(&path, &canvas).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (5, 4));
        assert_eq!(decoded.get_pixel(2, 1).0, [200, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn overwrite_replaces_the_previous_asset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_rgba_png(&path, &RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]))).unwrap();
        write_rgba_png(&path, &RgbaImage::from_pixel(3, 3, Rgba([4, 5, 6, 255]))).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 3));
        // No stray temp files left behind.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
