use serde::{Deserialize, Serialize};

use crate::types::{CleanupMode, OutputFormat, ResampleFilter};

/// Canvas edge used when nothing else is configured.
pub const DEFAULT_CANVAS_SIZE: u32 = 600;

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub format: OutputFormat,
    pub mode: CleanupMode,
    /// Brightness cutoff; None uses the mode's default
    pub threshold: Option<u8>,
    /// Output canvas edge in pixels (the canvas is always square)
    pub canvas_size: u32,
    pub filter: ResampleFilter,
    /// If true, copy the source to a `.backup` sibling before overwriting it
    pub backup: bool,
    /// If true, write a JSON sidecar next to each output
    pub sidecar: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::PNG,
            mode: CleanupMode::Simple,
            threshold: None,
            canvas_size: DEFAULT_CANVAS_SIZE,
            filter: ResampleFilter::Lanczos3,
            backup: false,
            sidecar: false,
        }
    }
}

impl ProcessingParams {
    /// The brightness cutoff actually applied: the explicit override if
    /// present, otherwise the mode's default.
    pub fn effective_threshold(&self) -> u8 {
        self.threshold.unwrap_or(self.mode.default_threshold())
    }

    /// Edge of the square footprint the cropped content is scaled to fit
    /// within. Truncates like the original asset scripts.
    pub fn footprint(&self) -> u32 {
        (self.canvas_size as f64 * self.mode.footprint_fraction()) as u32
    }
}
