use image::RgbaImage;
use tracing::info;

use crate::core::params::ProcessingParams;
use crate::core::processing::bounds::{ContentBounds, content_bounds, crop_to_bounds};
use crate::core::processing::classify::clear_light_background;
use crate::core::processing::compose::center_on_canvas;
use crate::core::processing::resize::{fit_dimensions, resize_rgba};
use crate::error::{Error, Result};

/// What happened to one icon on its way through the pipeline. Feeds the
/// sidecar writer and batch logging.
#[derive(Debug, Clone, Copy)]
pub struct IconStats {
    pub source_width: u32,
    pub source_height: u32,
    pub content: ContentBounds,
    pub scaled_width: u32,
    pub scaled_height: u32,
    /// Background pixels replaced with transparent white
    pub cleared: usize,
    /// Near-transparent pixels forced fully transparent
    pub faded: usize,
}

/// Run one icon through the full preparation pipeline: classify the
/// background, crop to content, scale to the mode's footprint, and center
/// on a transparent square canvas of `params.canvas_size`.
///
/// Returns [`Error::EmptyContent`] when classification leaves no opaque
/// pixel to crop to.
pub fn prepare_icon(image: RgbaImage, params: &ProcessingParams) -> Result<(RgbaImage, IconStats)> {
    if params.canvas_size == 0 {
        return Err(Error::ZeroSize { size: params.canvas_size });
    }

    let (source_width, source_height) = image.dimensions();
    let mut pixels = image.into_raw();

    let threshold = params.effective_threshold();
    let report = clear_light_background(
        &mut pixels,
        source_width,
        source_height,
        threshold,
        params.mode.clears_faint_alpha(),
    )?;

    let content = content_bounds(&pixels, source_width, source_height)?
        .ok_or(Error::EmptyContent)?;
    if (content.width, content.height) != (source_width, source_height) {
        info!(
            "Cropped {}x{} to {}x{}",
            source_width, source_height, content.width, content.height
        );
    }
    let cropped = crop_to_bounds(&pixels, source_width, source_height, content)?;

    let footprint = params.footprint();
    let (scaled_width, scaled_height) =
        fit_dimensions(content.width, content.height, footprint, footprint);
    let scaled = resize_rgba(
        &cropped,
        content.width,
        content.height,
        scaled_width,
        scaled_height,
        params.filter,
    )?;

    let canvas = center_on_canvas(&scaled, scaled_width, scaled_height, params.canvas_size)?;
    let canvas = RgbaImage::from_raw(params.canvas_size, params.canvas_size, canvas)
        .ok_or_else(|| Error::Processing("canvas buffer has unexpected length".to_string()))?;

    Ok((
        canvas,
        IconStats {
            source_width,
            source_height,
            content,
            scaled_width,
            scaled_height,
            cleared: report.cleared,
            faded: report.faded,
        },
    ))
}
