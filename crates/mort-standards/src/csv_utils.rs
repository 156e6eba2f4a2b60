//! Shared CSV utilities for loading reference tables.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{Result, StandardsError};

/// A reference CSV read into memory: normalized headers plus data rows.
///
/// Rows are kept positional; row numbers reported in errors are 1-based file
/// lines, so the first data row is row 2.
#[derive(Debug, Clone)]
pub struct ResourceRows {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl ResourceRows {
    /// Position of a column by header name (case-insensitive).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Data rows paired with their file line numbers.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &StringRecord)> {
        self.rows.iter().enumerate().map(|(idx, row)| (idx + 2, row))
    }
}

/// Read a reference CSV. The header row is always skipped.
pub fn read_resource(path: &Path) -> Result<ResourceRows> {
    if !path.is_file() {
        return Err(StandardsError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| StandardsError::csv(path, &e))?;

    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, &e))?
        .iter()
        .map(normalize_header)
        .collect();

    let rows = reader
        .records()
        .filter(|record| !matches!(record, Ok(row) if is_blank(row)))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| StandardsError::csv(path, &e))?;

    Ok(ResourceRows { headers, rows })
}

/// Field at `column` exactly as written, failing when the row is too short.
pub fn raw_field<'a>(
    path: &Path,
    row: usize,
    record: &'a StringRecord,
    column: usize,
) -> Result<&'a str> {
    record.get(column).ok_or_else(|| StandardsError::ShortRow {
        path: path.to_path_buf(),
        row,
        expected: column + 1,
        found: record.len(),
    })
}

/// Trimmed field at `column`, failing when the row is too short.
pub fn required_field<'a>(
    path: &Path,
    row: usize,
    record: &'a StringRecord,
    column: usize,
) -> Result<&'a str> {
    raw_field(path, row, record, column).map(str::trim)
}

/// Trimmed field at `column` parsed as an integer.
pub fn integer_field(path: &Path, row: usize, record: &StringRecord, column: usize) -> Result<i64> {
    let value = required_field(path, row, record, column)?;
    value
        .parse::<i64>()
        .map_err(|_| StandardsError::InvalidInteger {
            path: path.to_path_buf(),
            row,
            column: column + 1,
            value: value.to_string(),
        })
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}
