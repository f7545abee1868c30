use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbaImage;
use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

pub fn write_rgb_jpeg(output: &Path, cols: u32, rows: u32, rgb_data: &[u8]) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, 100);
    encoder
        .encode(rgb_data, cols as u16, rows as u16, ColorType::Rgb)
        .map_err(Error::external)?;
    Ok(())
}

/// Flatten an RGBA canvas onto white and encode it as an RGB JPEG preview.
/// JPEG has no alpha channel, so transparency is composited away.
pub fn write_rgba_as_jpeg(output: &Path, canvas: &RgbaImage) -> Result<()> {
    let mut rgb_data = Vec::with_capacity((canvas.width() * canvas.height() * 3) as usize);
    for px in canvas.pixels() {
        let [r, g, b, a] = px.0;
        let inv = 255 - a as u16;
        rgb_data.push(((r as u16 * a as u16 + 255 * inv + 127) / 255) as u8);
        rgb_data.push(((g as u16 * a as u16 + 255 * inv + 127) / 255) as u8);
        rgb_data.push(((b as u16 * a as u16 + 255 * inv + 127) / 255) as u8);
    }
    write_rgb_jpeg(output, canvas.width(), canvas.height(), &rgb_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn transparent_pixels_flatten_to_white() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.jpg");
        let canvas = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));

        write_rgba_as_jpeg(&path, &canvas).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn opaque_pixels_keep_their_color_in_the_flatten_pass() {
        // Exercise the compositing arithmetic directly: full alpha passes
        // through, zero alpha becomes white, half alpha lands in between.
        let blend = |c: u8, a: u8| -> u8 {
            let inv = 255 - a as u16;
            ((c as u16 * a as u16 + 255 * inv + 127) / 255) as u8
        };
        assert_eq!(blend(200, 255), 200);
        assert_eq!(blend(42, 0), 255);
        let half = blend(0, 128);
        assert!((126..=128).contains(&half), "got {half}");
    }
}
