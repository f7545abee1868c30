#![doc = r#"
ICONPREP — a batch processor for mobile app icon assets.

This crate turns raw payment-method logos (PNGs with white or light
backgrounds, arbitrary sizes, inconsistent margins) into clean assets:
background stripped to transparency, content cropped and scaled preserving
aspect ratio, centered on a fixed-size transparent square canvas, and saved
as an optimized PNG. It powers the ICONPREP CLI and can be embedded in
your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. Breaking
changes can occur.

Add dependency
--------------
```toml
[dependencies]
iconprep = "0.1"
```

Quick start: process one icon to a file
---------------------------------------
```rust,no_run
use std::path::Path;
use iconprep::{
    api::process_icon_to_path,
    CleanupMode, OutputFormat, ProcessingParams, ResampleFilter,
};

fn main() -> iconprep::Result<()> {
    let params = ProcessingParams {
        format: OutputFormat::PNG,
        mode: CleanupMode::Aggressive,
        threshold: None,
        canvas_size: 600,
        filter: ResampleFilter::Lanczos3,
        backup: true,
        sidecar: false,
    };

    process_icon_to_path(
        Path::new("assets/payment-methods/paypal.png"),
        Path::new("assets/payment-methods/paypal.png"),
        &params,
    )
}
```

Process in-memory to `ProcessedIcon`
------------------------------------
```rust,no_run
use std::path::Path;
use iconprep::{api::process_icon_to_buffer, ProcessingParams};

fn main() -> iconprep::Result<()> {
    let icon = process_icon_to_buffer(
        Path::new("assets/payment-methods/bizum.png"),
        &ProcessingParams::default(),
    )?;

    // `icon.rgba` holds the composited canvas; `icon.stats` records the
    // content bounds and pixel counts of the cleanup pass.
    assert_eq!(icon.rgba.len() as u32, icon.width * icon.height * 4);
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use iconprep::{api::process_directory_to_path, CleanupMode, ProcessingParams};

fn main() -> iconprep::Result<()> {
    let params = ProcessingParams {
        mode: CleanupMode::Aggressive,
        backup: true,
        ..Default::default()
    };

    // None rewrites the assets in place, honoring the backup flag.
    let report = process_directory_to_path(
        Path::new("assets/payment-methods"),
        None,
        &params,
        true, // continue_on_error
    )?;

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `iconprep::Result<T>`; match on
`iconprep::Error` to handle specific cases, e.g. an icon that is nothing
but background after classification.

```rust,no_run
use std::path::Path;
use iconprep::{api::process_icon_to_path, Error, ProcessingParams};

fn main() {
    let params = ProcessingParams::default();
    match process_icon_to_path(Path::new("blank.png"), Path::new("out.png"), &params) {
        Ok(()) => {}
        Err(Error::EmptyContent) => eprintln!("nothing left after background removal"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `CleanupMode`, `ResampleFilter`).
- [`io`] — PNG reader, backup helper, and output writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{DEFAULT_CANVAS_SIZE, ProcessingParams};
pub use error::{Error, Result};
pub use types::{CleanupMode, OutputFormat, ResampleFilter};

// Processing primitives worth reaching for directly
pub use crate::core::processing::bounds::ContentBounds;
pub use crate::core::processing::classify::{ClassifyReport, FAINT_ALPHA};
pub use crate::core::processing::pipeline::{IconStats, prepare_icon};

// Placeholder generation
pub use crate::core::placeholder::{PlaceholderManifest, PlaceholderSpec};

// High-level API re-exports
pub use api::{
    BatchReport, ProcessedIcon, generate_placeholders, iterate_icon_files, output_path_for,
    process_directory_to_path, process_icon_to_buffer, process_icon_to_path,
};
