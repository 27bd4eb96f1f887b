//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found or inaccessible
    FileNotFound(String),
    /// Argument that should look like `KEY=VALUE`
    InvalidKeyValue(String),
    /// Configuration error
    ConfigError(String),
    /// Template could not be loaded or rendered
    TemplateError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidKeyValue(arg) => {
                write!(f, "Invalid KEY=VALUE argument: no '=' found in '{arg}'")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::TemplateError(msg) => write!(f, "Template error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Parse a `KEY=VALUE` argument, splitting on the first `=`
pub fn parse_key_value(arg: &str) -> Result<(String, String), CliError> {
    arg.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| CliError::InvalidKeyValue(arg.to_string()))
}
