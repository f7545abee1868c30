use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Scale `cols x rows` to fit within `target_cols x target_rows` preserving
/// aspect ratio. The scale factor is the minimum of the per-axis ratios and
/// the resulting dimensions truncate, never rounding up past the target.
/// Degenerate results are clamped to 1 px.
pub fn fit_dimensions(
    cols: u32,
    rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> (u32, u32) {
    let scale = (target_cols as f64 / cols as f64).min(target_rows as f64 / rows as f64);
    let new_cols = ((cols as f64 * scale) as u32).max(1);
    let new_rows = ((rows as f64 * scale) as u32).max(1);
    (new_cols, new_rows)
}

/// Resample an interleaved RGBA buffer to the target dimensions.
///
/// Uses U8x4 pixels; the resizer multiplies and divides by alpha internally,
/// so transparent background pixels do not bleed color into the content edge.
pub fn resize_rgba(
    data: &[u8],
    cols: u32,
    rows: u32,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    if cols == target_cols && rows == target_rows {
        return Ok(data.to_vec());
    }

    debug!(
        "Resizing content: {}x{} -> {}x{} ({})",
        cols, rows, target_cols, target_rows, filter
    );

    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(cols, rows, data.to_vec(), PixelType::U8x4)
        .map_err(|e| Error::Resize(e.to_string()))?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Resize(e.to_string()))?;

    Ok(dst_image.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_preserves_aspect_ratio_within_a_pixel() {
        let (w, h) = fit_dimensions(300, 200, 540, 540);
        assert_eq!((w, h), (540, 360));
        let before = 300.0 / 200.0;
        let after = w as f64 / h as f64;
        assert!((before - after).abs() * h as f64 <= 1.0);
    }

    #[test]
    fn fit_scales_up_small_content() {
        assert_eq!(fit_dimensions(30, 30, 540, 540), (540, 540));
    }

    #[test]
    fn fit_truncates_fractional_dimensions() {
        // scale = 540/700; 500 * 540 / 700 = 385.71.. -> 385
        assert_eq!(fit_dimensions(700, 500, 540, 540), (540, 385));
    }

    #[test]
    fn fit_never_collapses_to_zero() {
        assert_eq!(fit_dimensions(1000, 1, 100, 100), (100, 1));
    }

    #[test]
    fn resize_is_identity_for_matching_dimensions() {
        let data: Vec<u8> = (0..4 * 4 * 4).map(|i| (i % 251) as u8).collect();
        let out = resize_rgba(&data, 4, 4, 4, 4, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn resize_of_solid_color_stays_solid() {
        let data: Vec<u8> = std::iter::repeat([200u8, 0, 0, 255])
            .take(16 * 16)
            .flatten()
            .collect();
        let out = resize_rgba(&data, 16, 16, 8, 8, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out.len(), 8 * 8 * 4);
        for px in out.chunks_exact(4) {
            assert!((px[0] as i16 - 200).abs() <= 1, "red drifted: {px:?}");
            assert!(px[1] <= 1 && px[2] <= 1, "green/blue drifted: {px:?}");
            assert_eq!(px[3], 255);
        }
    }
}
