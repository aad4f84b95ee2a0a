//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input path does not exist
    InputNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Two input files would be written to the same output file
    OutputCollision {
        /// The contested output path
        output: String,
        /// First input mapped to it
        first: String,
        /// Second input mapped to it
        second: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputNotFound(path) => write!(f, "Input not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputCollision {
                output,
                first,
                second,
            } => write!(
                f,
                "Output collision: {first} and {second} would both be written to {output}"
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
