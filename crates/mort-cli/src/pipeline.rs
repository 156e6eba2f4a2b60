//! Per-input processing: load, resolve, aggregate, hand to a sink.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mort_ingest::read_mortality_records;
use mort_model::CodeTables;
use mort_output::Sink;
use mort_standards::{RESOURCES_ENV_VAR, ResourcePaths, load_code_tables, resources_root};
use mort_transform::{AggregationReport, aggregate_with_report};

/// Outcome of one mortality extract.
#[derive(Debug, Clone)]
pub struct InputSummary {
    pub path: PathBuf,
    pub report: AggregationReport,
    pub rows_written: usize,
}

/// Build the reference tables from `resources`, or the default root.
///
/// No reference tables ship with the workspace, so the default root only
/// exists when someone has put the WHO files there.
pub fn load_tables(resources: Option<&Path>) -> Result<CodeTables> {
    let root = resources.map_or_else(resources_root, Path::to_path_buf);
    let paths = ResourcePaths::from_root(&root);
    load_code_tables(&paths).with_context(|| {
        format!(
            "load reference tables from {} (point --resources or {RESOURCES_ENV_VAR} \
             at the directory holding the WHO code lists)",
            root.display()
        )
    })
}

/// Aggregate one extract on its own and append the result to `sink`.
pub fn process_input(
    path: &Path,
    tables: &CodeTables,
    sink: &mut dyn Sink,
) -> Result<InputSummary> {
    let span = info_span!("input", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let records = read_mortality_records(path)
        .with_context(|| format!("read mortality records from {}", path.display()))?;
    let (table, report) = aggregate_with_report(&records, tables);
    let rows_written = sink
        .append(&table)
        .with_context(|| format!("write aggregated rows for {}", path.display()))?;

    info!(
        records = report.records,
        rows = rows_written,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "processed input"
    );
    Ok(InputSummary {
        path: path.to_path_buf(),
        report,
        rows_written,
    })
}
