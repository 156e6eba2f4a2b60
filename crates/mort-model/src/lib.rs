//! Data model for WHO mortality cause resolution.
//!
//! - [`code`]: ICD-10 three-character codes, ranges and the range expander
//! - [`cell`]: loosely typed values coming out of table loaders
//! - [`scheme`]: the `List` coding schemes and sex codes
//! - [`table`]: typed lookup tables
//! - [`record`]: raw, resolved and aggregated records

pub mod cell;
pub mod code;
pub mod error;
pub mod record;
pub mod scheme;
pub mod table;

pub use cell::Cell;
pub use code::{
    Code, CodeRange, CodeSpec, expand, expand_cell, expand_detailed, expand_detailed_cell,
    split_cell,
};
pub use error::{CodeError, CodeErrorKind, Result};
pub use record::{
    AggregateKey, AggregatedRow, AggregatedTable, RawMortalityRecord, ResolvedMortalityRecord,
};
pub use scheme::{SchemeTag, Sex};
pub use table::{
    CodeTable, CodeTables, CondensedTable, CountryCode, CountryTable, ListNumber, PortugalCode,
    PortugalTable, ThreeCharTable,
};
