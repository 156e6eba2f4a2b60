//! Output sinks for aggregated WHO mortality tables.

pub mod error;
pub mod sink;

pub use error::{OutputError, Result};
pub use sink::{CsvSink, MemorySink, Sink};
