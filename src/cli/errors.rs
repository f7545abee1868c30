use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Canvas size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("--input and --input-dir are mutually exclusive")]
    ConflictingInputs,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lib(#[from] iconprep::Error),
}
