//! Cause resolution and aggregation for WHO mortality records.
//!
//! - **resolve**: scheme-directed lookup of cause, country and sex names
//! - **aggregate**: grouping by (country, year, cause, sex) and summing deaths
//! - **frame**: conversion of the aggregated table to a DataFrame

pub mod aggregate;
pub mod frame;
pub mod resolve;

pub use aggregate::{AggregationReport, aggregate, aggregate_resolved, aggregate_with_report};
pub use frame::{OUTPUT_COLUMNS, to_dataframe};
pub use resolve::{resolve_cause, resolve_country, resolve_record, resolve_sex};
