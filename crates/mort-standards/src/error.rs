#![deny(unsafe_code)]

use std::path::PathBuf;

use mort_model::CodeError;

/// Failures while building a reference table. Any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("missing resource file: {path}")]
    MissingFile { path: PathBuf },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("{path} row {row}: expected at least {expected} columns, found {found}")]
    ShortRow {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{path} row {row}, column {column}: '{value}' is not an integer")]
    InvalidInteger {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
    },

    #[error("{path} row {row}, column {column}: {source}")]
    InvalidCodeSpec {
        path: PathBuf,
        row: usize,
        column: usize,
        #[source]
        source: CodeError,
    },
}

impl StandardsError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
