use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::ProcessingParams;
use crate::core::processing::bounds::ContentBounds;
use crate::core::processing::pipeline::IconStats;
use crate::error::{Error, Result};
use crate::types::{CleanupMode, OutputFormat};

/// Record of how one icon was produced, written next to the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconSidecar {
    pub source: String,
    pub format: OutputFormat,
    pub mode: CleanupMode,
    pub threshold: u8,
    pub canvas_size: u32,
    pub source_width: u32,
    pub source_height: u32,
    pub content: ContentBounds,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub cleared_pixels: usize,
    pub faded_pixels: usize,
    pub processed_at: String,
}

impl IconSidecar {
    pub fn new(source: &Path, params: &ProcessingParams, stats: &IconStats) -> Self {
        Self {
            source: source.display().to_string(),
            format: params.format,
            mode: params.mode,
            threshold: params.effective_threshold(),
            canvas_size: params.canvas_size,
            source_width: stats.source_width,
            source_height: stats.source_height,
            content: stats.content,
            scaled_width: stats.scaled_width,
            scaled_height: stats.scaled_height,
            cleared_pixels: stats.cleared,
            faded_pixels: stats.faded,
            processed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Write the sidecar as pretty JSON at `<output>.json`.
pub fn write_sidecar(output_path: &Path, sidecar: &IconSidecar) -> Result<()> {
    let sidecar_path = output_path.with_extension("json");
    let json_string = serde_json::to_string_pretty(sidecar).map_err(Error::external)?;
    std::fs::write(&sidecar_path, json_string)?;
    info!("Created metadata sidecar: {:?}", sidecar_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_lands_next_to_the_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("paypal.png");
        let stats = IconStats {
            source_width: 640,
            source_height: 480,
            content: ContentBounds { left: 10, top: 20, width: 100, height: 50 },
            scaled_width: 540,
            scaled_height: 270,
            cleared: 1234,
            faded: 7,
        };
        let params = ProcessingParams::default();
        write_sidecar(&output, &IconSidecar::new(&output, &params, &stats)).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("paypal.json")).unwrap();
        let parsed: IconSidecar = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.threshold, 235);
        assert_eq!(parsed.cleared_pixels, 1234);
        assert_eq!(parsed.content.width, 100);
    }
}
