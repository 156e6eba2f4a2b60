use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{error, info};

use mort_cli::pipeline::{load_tables, process_input};
use mort_model::{CodeSpec, CodeTables};
use mort_output::{CsvSink, MemorySink, Sink};

use crate::cli::{AggregateArgs, ExpandArgs, TablesArgs};
use crate::summary::apply_table_style;
use crate::types::RunResult;

/// Aggregate each input separately and append it to the output.
///
/// Tables are built once. A failing input is reported and skipped.
pub fn run_aggregate(args: &AggregateArgs) -> Result<RunResult> {
    let tables = load_tables(args.resources.as_deref())?;
    let output = if args.dry_run { None } else { args.output.clone() };
    let mut sink: Box<dyn Sink> = match &output {
        Some(path) if args.no_append => Box::new(CsvSink::replace(path)),
        Some(path) => Box::new(CsvSink::append_to(path)),
        None => Box::new(MemorySink::default()),
    };

    let mut result = RunResult {
        output,
        inputs: Vec::with_capacity(args.inputs.len()),
        errors: Vec::new(),
        has_errors: false,
    };
    for path in &args.inputs {
        match process_input(path, &tables, sink.as_mut()) {
            Ok(summary) => result.inputs.push(summary),
            Err(err) => {
                error!(path = %path.display(), error = %format!("{err:#}"), "input failed");
                result.errors.push(format!("{err:#}"));
                result.has_errors = true;
            }
        }
    }
    info!(
        inputs = result.inputs.len(),
        failed = result.errors.len(),
        "aggregation finished"
    );
    Ok(result)
}

pub fn run_expand(args: &ExpandArgs) -> Result<()> {
    let spec: CodeSpec = args
        .spec
        .parse()
        .with_context(|| format!("expand '{}'", args.spec))?;
    let codes: Vec<_> = spec.iter().collect();
    if args.json {
        println!("{}", serde_json::to_string(&codes)?);
    } else {
        let line = codes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("{line}");
    }
    Ok(())
}

pub fn run_tables(args: &TablesArgs) -> Result<()> {
    let tables = load_tables(args.resources.as_deref())?;
    println!("{}", tables_table(&tables));
    Ok(())
}

fn tables_table(tables: &CodeTables) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Table", "Key", "Entries"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "condensed".to_string(),
        "list number (101)".to_string(),
        tables.condensed.len().to_string(),
    ]);
    table.add_row(vec![
        "three-character".to_string(),
        "ICD-10 code (103, 104, 10M)".to_string(),
        tables.three_char.len().to_string(),
    ]);
    table.add_row(vec![
        "Portugal".to_string(),
        "special list code (UE1)".to_string(),
        tables.portugal.len().to_string(),
    ]);
    table.add_row(vec![
        "country".to_string(),
        "country code".to_string(),
        tables.countries.len().to_string(),
    ]);
    table
}
