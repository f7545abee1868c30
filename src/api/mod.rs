//! High-level, ergonomic library API: process icons to files or in-memory
//! buffers, batch helpers for directories, and the placeholder generator.
//! Prefer these entrypoints over the low-level processing modules when
//! embedding ICONPREP.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::placeholder::{load_manifest, render_placeholder};
use crate::core::processing::pipeline::{IconStats, prepare_icon};
use crate::core::processing::save::save_icon;
use crate::error::{Error, Result};
use crate::io::backup::ensure_backup;
use crate::io::reader::{file_size_kb, open_rgba};
use crate::io::writers::sidecar::{IconSidecar, write_sidecar};
use crate::types::OutputFormat;

/// Result of in-memory processing
#[derive(Debug, Clone)]
pub struct ProcessedIcon {
    pub width: u32,
    pub height: u32,
    /// Interleaved RGBA, always `width * height * 4` bytes
    pub rgba: Vec<u8>,
    pub stats: IconStats,
}

/// Process one icon to in-memory buffers (no disk writes).
pub fn process_icon_to_buffer(input: &Path, params: &ProcessingParams) -> Result<ProcessedIcon> {
    let image = open_rgba(input)?;
    let (canvas, stats) = prepare_icon(image, params)?;
    let (width, height) = canvas.dimensions();
    Ok(ProcessedIcon { width, height, rgba: canvas.into_raw(), stats })
}

/// Process one icon from `input` and write the result to `output`.
///
/// When the output path is the input path (in-place processing, the usual
/// asset-folder workflow) and `params.backup` is set, the original bytes
/// are copied to a `.backup` sibling first; an existing backup is kept.
pub fn process_icon_to_path(input: &Path, output: &Path, params: &ProcessingParams) -> Result<()> {
    let image = open_rgba(input)?;

    if params.backup && input == output {
        ensure_backup(input)?;
    }

    let (canvas, stats) = prepare_icon(image, params)?;
    save_icon(&canvas, output, params.format)?;

    if params.sidecar {
        write_sidecar(output, &IconSidecar::new(input, params, &stats))?;
    }

    info!(
        "Saved {:?} ({:.1} KB)",
        output,
        file_size_kb(output)?
    );
    Ok(())
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Return an iterator over the PNG files of `input_dir`, sorted by name.
/// Directories, `.backup` copies and other extensions are not candidates.
pub fn iterate_icon_files(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png")) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files.into_iter())
}

/// Output path for one source icon: same file name under `output_dir`, or
/// the source path itself for in-place processing; JPEG previews swap the
/// extension so they never clobber the PNG source.
pub fn output_path_for(
    input: &Path,
    output_dir: Option<&Path>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| Error::InvalidArgument {
        arg: "input",
        value: input.display().to_string(),
    })?;
    let base = match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.to_path_buf(),
    };
    Ok(match format {
        OutputFormat::PNG => base,
        OutputFormat::JPEG => base.with_extension("jpg"),
    })
}

/// Process every PNG in `input_dir`. With `output_dir = None` the files are
/// rewritten in place. If `continue_on_error` is true, per-file errors are
/// logged in the report and processing continues; otherwise the first error
/// is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: Option<&Path>,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(Error::from)?;
    }

    let mut report = BatchReport::default();
    let total_entries = std::fs::read_dir(input_dir).map_err(Error::from)?.count();
    let candidates: Vec<PathBuf> = iterate_icon_files(input_dir)?.collect();
    report.skipped = total_entries.saturating_sub(candidates.len());

    for path in candidates {
        let output_path = output_path_for(&path, output_dir, params.format)?;
        info!("Processing: {:?} -> {:?}", path, output_path);

        match process_icon_to_path(&path, &output_path, params) {
            Ok(()) => report.processed += 1,
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}

/// Render every placeholder tile of a JSON manifest into `output_dir` as
/// `<name>.png`. Invalid entries are logged and counted; generation
/// continues.
pub fn generate_placeholders(
    manifest_path: &Path,
    output_dir: &Path,
    size: u32,
) -> Result<BatchReport> {
    let manifest = load_manifest(manifest_path)?;
    std::fs::create_dir_all(output_dir).map_err(Error::from)?;

    let mut report = BatchReport::default();
    for (name, spec) in &manifest {
        let output_path = output_dir.join(format!("{name}.png"));
        match render_placeholder(spec, size)
            .and_then(|tile| save_icon(&tile, &output_path, OutputFormat::PNG))
        {
            Ok(()) => {
                info!("Created {}.png ({}x{})", name, size, size);
                report.processed += 1;
            }
            Err(e) => {
                warn!("Error generating {}: {}", name, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}
