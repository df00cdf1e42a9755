//! Common API types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::config::ConfigError;
use crate::validation::error::ValidationError;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Output format for reports and sightings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// printf-style lines
    #[default]
    Text,
    Json,
    Csv,
}

/// Errors surfaced to the command-line user
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// A value failed to parse or lies outside its range
    InvalidParameters(ValidationError),
    /// Configuration file could not be used
    Config(ConfigError),
    /// Neither a comparison nor a sighting was requested
    NothingToDo,
    /// The mode cannot be rendered in this format
    UnsupportedFormat { mode: &'static str, format: OutputFormat },
    /// Rendering the result failed
    Output { details: String },
}

impl From<ValidationError> for CommandError {
    fn from(error: ValidationError) -> Self {
        CommandError::InvalidParameters(error)
    }
}

impl From<ConfigError> for CommandError {
    fn from(error: ConfigError) -> Self {
        CommandError::Config(error)
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(error: serde_json::Error) -> Self {
        CommandError::Output { details: error.to_string() }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidParameters(error) => {
                write!(f, "parameters not parsed correctly: {}", error)
            }
            CommandError::Config(error) => write!(f, "{}", error),
            CommandError::NothingToDo => write!(f, "nothing to do"),
            CommandError::UnsupportedFormat { mode, format } => {
                write!(f, "{} output is not available as {:?}", mode, format)
            }
            CommandError::Output { details } => write!(f, "failed to format output: {}", details),
        }
    }
}

impl std::error::Error for CommandError {}
