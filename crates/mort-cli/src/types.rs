use std::path::PathBuf;

use mort_cli::pipeline::InputSummary;

#[derive(Debug)]
pub struct RunResult {
    /// `None` for a dry run.
    pub output: Option<PathBuf>,
    pub inputs: Vec<InputSummary>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
