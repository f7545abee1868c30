use tracing::debug;

use crate::error::{Error, Result};

/// Paste an RGBA buffer centered on a fully transparent square canvas.
///
/// The canvas starts zeroed, so copying the source rows verbatim keeps the
/// source alpha channel as the effective paste mask instead of flattening it.
pub fn center_on_canvas(
    pixels: &[u8],
    cols: u32,
    rows: u32,
    canvas_size: u32,
) -> Result<Vec<u8>> {
    if cols > canvas_size || rows > canvas_size {
        return Err(Error::Processing(format!(
            "content {}x{} does not fit canvas {}x{}",
            cols, rows, canvas_size, canvas_size
        )));
    }

    let offset_x = ((canvas_size - cols) / 2) as usize;
    let offset_y = ((canvas_size - rows) / 2) as usize;
    debug!(
        "Centering {}x{} content on {}x{} canvas at +{}+{}",
        cols, rows, canvas_size, canvas_size, offset_x, offset_y
    );

    let canvas_stride = canvas_size as usize * 4;
    let content_stride = cols as usize * 4;
    let mut canvas = vec![0u8; canvas_size as usize * canvas_stride];

    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows as usize {
        let src_slice = &pixels[row * content_stride..(row + 1) * content_stride];
        let dst_offset = (row + offset_y) * canvas_stride + offset_x * 4;
        let dst_slice = &mut canvas[dst_offset..dst_offset + content_stride];
        dst_slice.copy_from_slice(src_slice);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_has_exact_dimensions_and_transparent_border() {
        let content = vec![9u8; 2 * 2 * 4];
        let canvas = center_on_canvas(&content, 2, 2, 6).unwrap();
        assert_eq!(canvas.len(), 6 * 6 * 4);
        // Top-left corner stays fully transparent.
        assert_eq!(&canvas[..4], &[0, 0, 0, 0]);
        // Center carries the content.
        let center = ((2 * 6 + 2) * 4) as usize;
        assert_eq!(&canvas[center..center + 4], &[9, 9, 9, 9]);
    }

    #[test]
    fn odd_remainders_floor_the_offset() {
        let content = vec![1u8; 3 * 1 * 4];
        let canvas = center_on_canvas(&content, 3, 1, 6).unwrap();
        // offset_x = (6 - 3) / 2 = 1, offset_y = (6 - 1) / 2 = 2
        let first = ((2 * 6 + 1) * 4) as usize;
        assert_eq!(&canvas[first..first + 4], &[1, 1, 1, 1]);
    }

    #[test]
    fn oversized_content_is_rejected() {
        let content = vec![0u8; 8 * 8 * 4];
        assert!(center_on_canvas(&content, 8, 8, 6).is_err());
    }
}
