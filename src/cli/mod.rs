//! Command Line Interface (CLI) layer for ICONPREP.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file, batch, and
//! placeholder-generation flows. It wires user-provided options to the
//! underlying library functionality exposed via `iconprep::api`.
//!
//! If you are embedding ICONPREP into another application, prefer using
//! the high-level `iconprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
