//! Destinations for aggregated tables.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;

use mort_model::AggregatedTable;
use mort_transform::{OUTPUT_COLUMNS, to_dataframe};

use crate::error::{OutputError, Result};

/// Something an aggregated table can be appended to.
pub trait Sink {
    /// Append all rows of `table`. Returns the number of rows written.
    fn append(&mut self, table: &AggregatedTable) -> Result<usize>;
}

/// Appends aggregated rows to a CSV file.
///
/// The header is written only when the file is new or empty. Unresolved
/// names are written as empty fields.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
    truncate_pending: bool,
}

impl CsvSink {
    /// Sink that keeps existing rows.
    pub fn append_to(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            truncate_pending: false,
        }
    }

    /// Sink that empties the file on its first write, then appends.
    pub fn replace(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            truncate_pending: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&mut self) -> Result<(File, bool)> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.open_error(source))?;
        }
        let truncate = std::mem::take(&mut self.truncate_pending);
        let needs_header = truncate || self.is_empty()?;
        if !needs_header {
            self.check_header()?;
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        let file = options
            .open(&self.path)
            .map_err(|source| self.open_error(source))?;
        Ok((file, needs_header))
    }

    fn is_empty(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(source) => Err(self.open_error(source)),
        }
    }

    fn check_header(&self) -> Result<()> {
        let file = File::open(&self.path).map_err(|source| self.open_error(source))?;
        let mut line = String::new();
        BufReader::new(file)
            .read_line(&mut line)
            .map_err(|source| self.open_error(source))?;
        let found = line.trim_end_matches(['\r', '\n']);
        let expected = OUTPUT_COLUMNS.join(",");
        if found != expected {
            return Err(OutputError::HeaderMismatch {
                path: self.path.clone(),
                expected,
                found: found.to_string(),
            });
        }
        Ok(())
    }

    fn open_error(&self, source: std::io::Error) -> OutputError {
        OutputError::Open {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, err: impl ToString) -> OutputError {
        OutputError::Write {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}

impl Sink for CsvSink {
    fn append(&mut self, table: &AggregatedTable) -> Result<usize> {
        let mut df = to_dataframe(table).map_err(|e| self.write_error(e))?;
        let (mut file, needs_header) = self.open()?;
        CsvWriter::new(&mut file)
            .include_header(needs_header)
            .finish(&mut df)
            .map_err(|e| self.write_error(e))?;
        info!(path = %self.path.display(), rows = df.height(), "appended aggregated rows");
        Ok(df.height())
    }
}

/// Collects tables in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub tables: Vec<AggregatedTable>,
}

impl Sink for MemorySink {
    fn append(&mut self, table: &AggregatedTable) -> Result<usize> {
        self.tables.push(table.clone());
        Ok(table.len())
    }
}
