//! Shared types and enums used across ICONPREP.
//! Includes `CleanupMode`, `OutputFormat` and `ResampleFilter`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How hard the background classifier leans on the input.
///
/// `Simple` only removes near-white pixels and uses the full canvas as the
/// content footprint. `Aggressive` removes all light colors, forces
/// near-transparent pixels fully transparent, and enlarges the content to
/// 90% of the canvas.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum CleanupMode {
    Simple,
    Aggressive,
}

impl CleanupMode {
    /// Brightness cutoff used when no explicit threshold is configured.
    pub fn default_threshold(self) -> u8 {
        match self {
            CleanupMode::Simple => 235,
            CleanupMode::Aggressive => 200,
        }
    }

    /// Fraction of the canvas edge the content is scaled to fit within.
    pub fn footprint_fraction(self) -> f64 {
        match self {
            CleanupMode::Simple => 1.0,
            CleanupMode::Aggressive => 0.9,
        }
    }

    /// Whether pixels with alpha below [`FAINT_ALPHA`](crate::core::processing::classify::FAINT_ALPHA)
    /// are forced fully transparent.
    pub fn clears_faint_alpha(self) -> bool {
        matches!(self, CleanupMode::Aggressive)
    }
}

impl std::fmt::Display for CleanupMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanupMode::Simple => write!(f, "Simple"),
            CleanupMode::Aggressive => write!(f, "Aggressive"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    PNG,
    JPEG, // Lossy, preview only
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PNG => write!(f, "PNG"),
            OutputFormat::JPEG => write!(f, "JPEG"),
        }
    }
}

/// Resampling filter for the content scaling step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "Nearest"),
            ResampleFilter::Bilinear => write!(f, "Bilinear"),
            ResampleFilter::CatmullRom => write!(f, "CatmullRom"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}
