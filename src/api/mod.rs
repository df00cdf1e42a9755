//! Command layer: typed errors, output formats and the CLI commands

pub mod commands;
pub mod formatting;
pub mod types;

pub use commands::{run_comparison, run_demo, run_sighting};
pub use formatting::{
    format_exponential, formatter_for, CsvFormatter, JsonFormatter, OutputFormatter, TextFormatter,
};
pub use types::{CommandError, CommandResult, OutputFormat};
