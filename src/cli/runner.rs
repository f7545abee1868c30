use tracing::info;

use iconprep::ProcessingParams;
use iconprep::api::{
    generate_placeholders, output_path_for, process_directory_to_path, process_icon_to_path,
};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.canvas_size == 0 {
        return Err(AppError::ZeroSize { size: args.canvas_size }.into());
    }

    let params = ProcessingParams {
        format: args.format,
        mode: args.mode,
        threshold: args.threshold,
        canvas_size: args.canvas_size,
        filter: args.filter,
        backup: args.backup,
        sidecar: args.sidecar,
    };

    if args.input.is_some() && args.input_dir.is_some() {
        return Err(AppError::ConflictingInputs.into());
    }

    if args.generate {
        let manifest = args.manifest.ok_or(AppError::MissingArgument {
            arg: "--manifest".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Generating placeholder tiles from {:?}", manifest);
        let report = generate_placeholders(&manifest, &output_dir, args.canvas_size)?;
        info!(
            "Generation complete: {} created, {} errors",
            report.processed, report.errors
        );
    } else if args.input_dir.is_some() {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        match &args.output_dir {
            Some(dir) => info!("Output directory: {:?}", dir),
            None => info!("Rewriting icons in place"),
        }

        let report = process_directory_to_path(
            &input_dir,
            args.output_dir.as_deref(),
            &params,
            !args.strict,
        )?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = match args.output {
            Some(path) => path,
            None => output_path_for(&input, None, args.format).map_err(AppError::from)?,
        };

        process_icon_to_path(&input, &output, &params).map_err(AppError::from)?;
        info!("Successfully processed: {:?} -> {:?}\n", input, output);
    }

    Ok(())
}
