//! Error types for writing aggregated tables.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create or open the destination.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Existing destination has a different header.
    #[error("{path} has header '{found}', expected '{expected}'")]
    HeaderMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// Failed to build or write the table.
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, OutputError>;
