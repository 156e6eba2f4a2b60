//! CLI library components for `who-mortality`.

pub mod logging;
pub mod pipeline;
