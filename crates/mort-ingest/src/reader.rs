//! Loading WHO mortality extracts (`Morticd10_part*`) into raw records.
//!
//! Only six columns are used; the per-age death columns and the
//! administrative subdivision columns are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use polars::prelude::*;
use tracing::debug;

use mort_model::{Cell, RawMortalityRecord};

use crate::error::{IngestError, Result};

pub const COUNTRY_COLUMN: &str = "Country";
pub const YEAR_COLUMN: &str = "Year";
pub const LIST_COLUMN: &str = "List";
pub const CAUSE_COLUMN: &str = "Cause";
pub const SEX_COLUMN: &str = "Sex";
pub const DEATHS_COLUMN: &str = "Deaths1";

/// Columns a mortality extract must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COUNTRY_COLUMN,
    YEAR_COLUMN,
    LIST_COLUMN,
    CAUSE_COLUMN,
    SEX_COLUMN,
    DEATHS_COLUMN,
];

const INTEGER_COLUMNS: [&str; 4] = [COUNTRY_COLUMN, YEAR_COLUMN, SEX_COLUMN, DEATHS_COLUMN];

/// Always read as text. Extracts are sorted by country, so a `List` or
/// `Cause` column can hold only numbers for thousands of rows before the
/// first `10M` or `A009`.
const TEXT_COLUMNS: [&str; 2] = [LIST_COLUMN, CAUSE_COLUMN];

/// Read a mortality extract into raw records, in file order.
pub fn read_mortality_records(path: &Path) -> Result<Vec<RawMortalityRecord>> {
    let df = read_mortality_frame(path)?;
    let records = records_from_frame(&df, path)?;
    debug!(path = %path.display(), records = records.len(), "read mortality records");
    Ok(records)
}

/// Read a mortality extract into a DataFrame with the column types fixed.
pub fn read_mortality_frame(path: &Path) -> Result<DataFrame> {
    let headers = read_header(path)?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    let hints = Schema::from_iter(
        INTEGER_COLUMNS
            .iter()
            .map(|name| Field::new((*name).into(), DataType::Int64))
            .chain(
                TEXT_COLUMNS
                    .iter()
                    .map(|name| Field::new((*name).into(), DataType::String)),
            ),
    );

    CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(Arc::new(hints)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Convert a loaded frame into records. Row numbers in errors are file lines.
pub fn records_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<RawMortalityRecord>> {
    let countries = integer_values(df, COUNTRY_COLUMN)?;
    let years = integer_values(df, YEAR_COLUMN)?;
    let sexes = integer_values(df, SEX_COLUMN)?;
    let deaths = integer_values(df, DEATHS_COLUMN)?;
    let lists = text_values(df, LIST_COLUMN)?;
    let causes = text_values(df, CAUSE_COLUMN)?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row = idx + 2;
        let required = |values: &[Option<i64>], column: &str| {
            values[idx].ok_or_else(|| IngestError::MissingValue {
                column: column.to_string(),
                row,
                path: path.to_path_buf(),
            })
        };

        let year = required(&years, YEAR_COLUMN)?;
        let year = i32::try_from(year).map_err(|_| IngestError::InvalidValue {
            column: YEAR_COLUMN.to_string(),
            value: year.to_string(),
            row,
            path: path.to_path_buf(),
        })?;
        let death_count = required(&deaths, DEATHS_COLUMN)?;
        if death_count < 0 {
            return Err(IngestError::InvalidValue {
                column: DEATHS_COLUMN.to_string(),
                value: death_count.to_string(),
                row,
                path: path.to_path_buf(),
            });
        }

        records.push(RawMortalityRecord {
            country: required(&countries, COUNTRY_COLUMN)?,
            year,
            list: lists[idx].as_deref().map_or(Cell::Null, Cell::from_text),
            cause: causes[idx].clone().unwrap_or_default(),
            sex: required(&sexes, SEX_COLUMN)?,
            deaths: death_count,
        });
    }
    Ok(records)
}

fn integer_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let column = df.column(name)?.cast(&DataType::Int64)?;
    Ok(column.i64()?.into_iter().collect())
}

fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    Ok(column
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

fn read_header(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut line = String::new();
    let read = BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    if read == 0 || line.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    Ok(line
        .trim_start_matches('\u{feff}')
        .trim_end_matches(['\r', '\n'])
        .split(',')
        .map(|field| field.trim().trim_matches('"').to_string())
        .collect())
}
