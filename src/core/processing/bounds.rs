use ndarray::{ArrayView3, s};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimal axis-aligned rectangle enclosing all pixels with alpha > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBounds {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the bounding box of non-transparent pixels, or `None` for a
/// fully transparent image.
pub fn content_bounds(pixels: &[u8], width: u32, height: u32) -> Result<Option<ContentBounds>> {
    let view: ArrayView3<u8> = ArrayView3::from_shape((height as usize, width as usize, 4), pixels)
        .map_err(|e| Error::Processing(e.to_string()))?;

    let mut min_x = width as usize;
    let mut max_x = 0usize;
    let mut min_y = height as usize;
    let mut max_y = 0usize;
    let mut found = false;

    for (y, row) in view.axis_iter(ndarray::Axis(0)).enumerate() {
        let alpha = row.slice(s![.., 3]);
        let first = match alpha.iter().position(|&a| a > 0) {
            Some(x) => x,
            None => continue,
        };
        // A row with a first opaque pixel always has a last one.
        let last = alpha.iter().rposition(|&a| a > 0).unwrap_or(first);

        min_x = min_x.min(first);
        max_x = max_x.max(last);
        if !found {
            min_y = y;
            found = true;
        }
        max_y = y;
    }

    if !found {
        return Ok(None);
    }

    Ok(Some(ContentBounds {
        left: min_x as u32,
        top: min_y as u32,
        width: (max_x - min_x + 1) as u32,
        height: (max_y - min_y + 1) as u32,
    }))
}

/// Copy out the sub-image covered by `bounds` as a fresh RGBA buffer.
pub fn crop_to_bounds(
    pixels: &[u8],
    width: u32,
    height: u32,
    bounds: ContentBounds,
) -> Result<Vec<u8>> {
    if bounds.left + bounds.width > width || bounds.top + bounds.height > height {
        return Err(Error::Processing(format!(
            "crop bounds {}x{}+{}+{} exceed image {}x{}",
            bounds.width, bounds.height, bounds.left, bounds.top, width, height
        )));
    }

    let row_stride = width as usize * 4;
    let crop_stride = bounds.width as usize * 4;
    let mut cropped = vec![0u8; bounds.height as usize * crop_stride];

    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..bounds.height as usize {
        let src_offset = (bounds.top as usize + row) * row_stride + bounds.left as usize * 4;
        let src_slice = &pixels[src_offset..src_offset + crop_stride];
        let dst_slice = &mut cropped[row * crop_stride..(row + 1) * crop_stride];
        dst_slice.copy_from_slice(src_slice);
    }

    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: u32, height: u32) -> Vec<u8> {
        vec![0u8; (width * height * 4) as usize]
    }

    fn set_pixel(pixels: &mut [u8], width: u32, x: u32, y: u32, rgba: [u8; 4]) {
        let offset = ((y * width + x) * 4) as usize;
        pixels[offset..offset + 4].copy_from_slice(&rgba);
    }

    #[test]
    fn bounds_of_fully_transparent_image_is_none() {
        let pixels = blank(8, 8);
        assert_eq!(content_bounds(&pixels, 8, 8).unwrap(), None);
    }

    #[test]
    fn bounds_ignore_transparent_white() {
        // Classifier output pixels: white with alpha 0 are background.
        let mut pixels = vec![255u8; (8 * 8 * 4) as usize];
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 0;
        }
        set_pixel(&mut pixels, 8, 3, 2, [10, 20, 30, 255]);
        let bounds = content_bounds(&pixels, 8, 8).unwrap().unwrap();
        assert_eq!(
            bounds,
            ContentBounds { left: 3, top: 2, width: 1, height: 1 }
        );
    }

    #[test]
    fn bounds_span_all_opaque_pixels() {
        let mut pixels = blank(10, 6);
        set_pixel(&mut pixels, 10, 2, 1, [1, 2, 3, 128]);
        set_pixel(&mut pixels, 10, 7, 4, [4, 5, 6, 1]);
        let bounds = content_bounds(&pixels, 10, 6).unwrap().unwrap();
        assert_eq!(
            bounds,
            ContentBounds { left: 2, top: 1, width: 6, height: 4 }
        );
    }

    #[test]
    fn crop_extracts_the_exact_rectangle() {
        let mut pixels = blank(4, 4);
        set_pixel(&mut pixels, 4, 1, 1, [9, 9, 9, 255]);
        set_pixel(&mut pixels, 4, 2, 2, [7, 7, 7, 255]);
        let bounds = content_bounds(&pixels, 4, 4).unwrap().unwrap();
        let cropped = crop_to_bounds(&pixels, 4, 4, bounds).unwrap();
        assert_eq!(cropped.len(), (2 * 2 * 4) as usize);
        assert_eq!(&cropped[..4], &[9, 9, 9, 255]);
        assert_eq!(&cropped[12..], &[7, 7, 7, 255]);
    }

    #[test]
    fn crop_rejects_out_of_range_bounds() {
        let pixels = blank(4, 4);
        let bad = ContentBounds { left: 2, top: 0, width: 3, height: 1 };
        assert!(crop_to_bounds(&pixels, 4, 4, bad).is_err());
    }
}
