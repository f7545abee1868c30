//! Placeholder icon tiles for payment methods that ship without artwork:
//! a rounded-rectangle tile in a brand color with an inset border, rendered
//! on a transparent canvas so the tiles compose like processed icons.
use std::collections::BTreeMap;
use std::path::Path;

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tiny_skia::{FillRule, Paint, Path as SkiaPath, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

use crate::error::{Error, Result};

/// Corner radius as a fraction of the tile edge.
const RADIUS_FRAC: f32 = 0.15;
/// Border inset from the tile edge as a fraction of the edge.
const INSET_FRAC: f32 = 0.02;
/// Border stroke width as a fraction of the edge.
const STROKE_FRAC: f32 = 0.03;

/// One placeholder tile description, as found in the JSON manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderSpec {
    /// Tile fill color, `#rrggbb`
    pub fill: String,
    /// Draw the inset white border
    #[serde(default = "default_border")]
    pub border: bool,
}

fn default_border() -> bool {
    true
}

/// Manifest mapping icon name to tile description. A `BTreeMap` keeps
/// generation order deterministic.
pub type PlaceholderManifest = BTreeMap<String, PlaceholderSpec>;

/// Load a placeholder manifest from a JSON file.
pub fn load_manifest(path: &Path) -> Result<PlaceholderManifest> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(Error::external)
}

/// Parse a `#rrggbb` color string.
pub fn parse_hex_color(value: &str) -> Result<[u8; 3]> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(Error::InvalidArgument { arg: "fill", value: value.to_string() });
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| Error::InvalidArgument { arg: "fill", value: value.to_string() })
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

fn rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32) -> Option<SkiaPath> {
    // Cubic Bezier circle-quadrant approximation
    const K: f32 = 0.552_284_8;
    let r = r.min(w / 2.0).min(h / 2.0);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - r + K * r, y, x + w, y + r - K * r, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - r + K * r, x + w - r + K * r, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + r - K * r, y + h, x, y + h - r + K * r, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - K * r, x + r - K * r, y, x + r, y);
    pb.close();
    pb.finish()
}

/// Render one placeholder tile at `size x size` pixels.
pub fn render_placeholder(spec: &PlaceholderSpec, size: u32) -> Result<RgbaImage> {
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }
    let [r, g, b] = parse_hex_color(&spec.fill)?;

    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| Error::Processing(format!("cannot allocate {size}x{size} pixmap")))?;
    let edge = size as f32;
    let radius = edge * RADIUS_FRAC;

    let tile = rounded_rect(0.0, 0.0, edge, edge, radius)
        .ok_or_else(|| Error::Processing("degenerate tile path".to_string()))?;
    let mut paint = Paint::default();
    paint.anti_alias = true;
    paint.set_color_rgba8(r, g, b, 255);
    pixmap.fill_path(&tile, &paint, FillRule::Winding, Transform::identity(), None);

    if spec.border {
        let inset = edge * INSET_FRAC;
        let ring = rounded_rect(
            inset,
            inset,
            edge - 2.0 * inset,
            edge - 2.0 * inset,
            radius - inset,
        )
        .ok_or_else(|| Error::Processing("degenerate border path".to_string()))?;
        let mut border_paint = Paint::default();
        border_paint.anti_alias = true;
        border_paint.set_color_rgba8(255, 255, 255, 255);
        let stroke = Stroke { width: edge * STROKE_FRAC, ..Stroke::default() };
        pixmap.stroke_path(&ring, &border_paint, &stroke, Transform::identity(), None);
    }

    debug!("Rendered placeholder tile {}x{} fill {}", size, size, spec.fill);

    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(size, size, rgba)
        .ok_or_else(|| Error::Processing("pixmap buffer has unexpected length".to_string()))
}
