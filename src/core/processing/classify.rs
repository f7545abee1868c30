use ndarray::{ArrayViewMut3, Axis, Zip};
use tracing::debug;

use crate::error::{Error, Result};

/// Pixels with alpha below this are forced fully transparent in aggressive mode.
pub const FAINT_ALPHA: u8 = 50;

/// Counts reported by a classification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyReport {
    /// Pixels replaced with transparent white because all channels exceeded the threshold
    pub cleared: usize,
    /// Pixels whose faint alpha was forced to zero
    pub faded: usize,
}

/// Label every pixel as background or foreground by brightness.
///
/// A pixel whose red, green and blue channels are all strictly greater than
/// `threshold` becomes `(255, 255, 255, 0)`. When `clear_faint` is set, any
/// remaining pixel with alpha below [`FAINT_ALPHA`] has its alpha forced to
/// zero with the color channels untouched. Everything else passes through
/// unchanged. Pixels exactly at the threshold are foreground.
///
/// `pixels` is interleaved RGBA of shape `height * width * 4`.
pub fn clear_light_background(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    threshold: u8,
    clear_faint: bool,
) -> Result<ClassifyReport> {
    let mut view: ArrayViewMut3<u8> =
        ArrayViewMut3::from_shape((height as usize, width as usize, 4), pixels)
            .map_err(|e| Error::Processing(e.to_string()))?;

    let mut report = ClassifyReport::default();
    Zip::from(view.lanes_mut(Axis(2))).for_each(|mut px| {
        if px[0] > threshold && px[1] > threshold && px[2] > threshold {
            px[0] = 255;
            px[1] = 255;
            px[2] = 255;
            px[3] = 0;
            report.cleared += 1;
        } else if clear_faint && px[3] < FAINT_ALPHA {
            px[3] = 0;
            report.faded += 1;
        }
    });

    debug!(
        "Background pass (threshold {}): {} cleared, {} faded",
        threshold, report.cleared, report.faded
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pixels: &mut [u8], threshold: u8, clear_faint: bool) -> ClassifyReport {
        let count = pixels.len() / 4;
        clear_light_background(pixels, count as u32, 1, threshold, clear_faint).unwrap()
    }

    #[test]
    fn light_pixels_become_transparent_white() {
        let mut pixels = vec![240, 236, 250, 255];
        let report = run(&mut pixels, 235, false);
        assert_eq!(pixels, vec![255, 255, 255, 0]);
        assert_eq!(report.cleared, 1);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        // All channels exactly at the threshold: foreground, kept as-is.
        let mut pixels = vec![235, 235, 235, 255];
        let report = run(&mut pixels, 235, false);
        assert_eq!(pixels, vec![235, 235, 235, 255]);
        assert_eq!(report.cleared, 0);
    }

    #[test]
    fn one_dark_channel_keeps_the_pixel() {
        let mut pixels = vec![250, 250, 120, 255];
        run(&mut pixels, 235, false);
        assert_eq!(pixels, vec![250, 250, 120, 255]);
    }

    #[test]
    fn aggressive_forces_faint_alpha_to_zero() {
        let mut pixels = vec![10, 20, 30, 49, 10, 20, 30, 50];
        let report = run(&mut pixels, 200, true);
        assert_eq!(&pixels[..4], &[10, 20, 30, 0]);
        // Alpha exactly at the cutoff is kept.
        assert_eq!(&pixels[4..], &[10, 20, 30, 50]);
        assert_eq!(report.faded, 1);
    }

    #[test]
    fn simple_mode_keeps_faint_pixels() {
        let mut pixels = vec![10, 20, 30, 5];
        let report = run(&mut pixels, 235, false);
        assert_eq!(pixels, vec![10, 20, 30, 5]);
        assert_eq!(report.faded, 0);
    }

    #[test]
    fn mixed_image_counts_both_classes() {
        let mut pixels = vec![
            255, 255, 255, 255, // background
            201, 201, 201, 255, // background at threshold 200
            200, 0, 0, 255, // foreground
            0, 0, 0, 10, // faint
        ];
        let report = run(&mut pixels, 200, true);
        assert_eq!(report, ClassifyReport { cleared: 2, faded: 1 });
        assert_eq!(&pixels[8..12], &[200, 0, 0, 255]);
    }
}
