use clap::Parser;
use std::path::PathBuf;

use iconprep::types::OutputFormat;
use iconprep::{CleanupMode, ResampleFilter};

#[derive(Parser)]
#[command(name = "iconprep", version, about = "ICONPREP CLI")]
pub struct CliArgs {
    /// Input PNG file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing PNG icons (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode; defaults to overwriting the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing or generation (batch mode
    /// defaults to rewriting files in place)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (png, or jpeg for a flattened preview)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::PNG)]
    pub format: OutputFormat,

    /// Background cleanup mode (simple or aggressive)
    #[arg(long, value_enum, default_value_t = CleanupMode::Simple)]
    pub mode: CleanupMode,

    /// Brightness cutoff (0-255) above which a pixel counts as background;
    /// defaults to the mode's threshold (235 simple, 200 aggressive)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Canvas edge in pixels; the output is always canvas-size x canvas-size
    #[arg(long, default_value_t = 600)]
    pub canvas_size: u32,

    /// Resampling filter for the content scaling step
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// Copy each source file to a `.backup` sibling before overwriting it
    /// in place (never overwrites an existing backup)
    #[arg(long, default_value_t = false)]
    pub backup: bool,

    /// Write a JSON sidecar describing each processed icon
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Batch mode: abort on the first failing file instead of logging it
    /// and continuing
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Generate placeholder tiles from a manifest instead of processing
    /// existing icons (requires --manifest and --output-dir)
    #[arg(long, default_value_t = false)]
    pub generate: bool,

    /// Placeholder manifest: JSON mapping icon name to tile description
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
