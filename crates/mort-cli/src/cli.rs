//! CLI argument definitions for `who-mortality`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "who-mortality",
    version,
    about = "Resolve and aggregate WHO ICD-10 mortality records",
    long_about = "Resolve WHO mortality extracts to country, cause and sex names.\n\n\
                  Cause codes are resolved under the record's List scheme \
                  (101, 103, 104, 10M, UE1) and death counts are summed by \
                  country, year, cause and sex."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate mortality extracts and append the result to a CSV file.
    Aggregate(AggregateArgs),

    /// Print the codes of a detailed code list such as "A98-B03, B06-B07".
    Expand(ExpandArgs),

    /// Build the reference tables and print their sizes.
    Tables(TablesArgs),
}

#[derive(Parser)]
pub struct AggregateArgs {
    /// Mortality extracts (`Morticd10_part*`), processed in order.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory holding the WHO code lists. Required unless
    /// $WHO_RESOURCES_DIR is set; no tables ship with the tool.
    #[arg(long = "resources", value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// CSV file the aggregated rows are appended to.
    #[arg(long = "output", value_name = "FILE", required_unless_present = "dry_run")]
    pub output: Option<PathBuf>,

    /// Replace the output file instead of appending to it.
    #[arg(long = "no-append")]
    pub no_append: bool,

    /// Aggregate and report without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ExpandArgs {
    /// Comma-separated codes and ranges.
    #[arg(value_name = "SPEC")]
    pub spec: String,

    /// Print a JSON array instead of a comma-separated line.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TablesArgs {
    /// Directory holding the WHO code lists. Required unless
    /// $WHO_RESOURCES_DIR is set; no tables ship with the tool.
    #[arg(long = "resources", value_name = "DIR")]
    pub resources: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
