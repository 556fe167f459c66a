//! Error types for Stitch
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stitch operations
pub type StitchResult<T> = Result<T, StitchError>;

/// Main error type for Stitch operations
#[derive(Error, Debug)]
pub enum StitchError {
    /// Entry document or an included partial could not be read
    #[error("cannot read source {path}: {source}")]
    MissingSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory or document could not be written
    #[error("cannot write {path}: {source}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed `stitch.toml`
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StitchError {
    pub(crate) fn missing_source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StitchError::MissingSource {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn destination_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StitchError::DestinationWrite {
            path: path.into(),
            source,
        }
    }
}
