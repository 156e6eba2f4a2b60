//! WHO mortality data ingestion.
//!
//! Reads the `Morticd10_part*` extracts with Polars and turns the columns
//! the aggregation needs into [`RawMortalityRecord`]s.
//!
//! ```ignore
//! use std::path::Path;
//! use mort_ingest::read_mortality_records;
//!
//! let records = read_mortality_records(Path::new("data/Morticd10_part1"))?;
//! ```
//!
//! [`RawMortalityRecord`]: mort_model::RawMortalityRecord

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{
    CAUSE_COLUMN, COUNTRY_COLUMN, DEATHS_COLUMN, LIST_COLUMN, REQUIRED_COLUMNS, SEX_COLUMN,
    YEAR_COLUMN, read_mortality_frame, read_mortality_records, records_from_frame,
};
