//! Configuration loading errors.

use thiserror::Error;

/// Config load error
#[derive(Error, Debug, Clone)]
pub enum ConfigLoadError {
    /// I/O error reading the config file
    #[error("IO error: {0}")]
    Io(String),

    /// YAML parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Values parsed but are inconsistent or out of range
    #[error("Invalid configuration: {0}")]
    Validation(String),
}
