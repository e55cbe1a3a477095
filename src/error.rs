//! Error types for drishti-field

use thiserror::Error;

use crate::config::ConfigLoadError;

/// Drishti error type
#[derive(Error, Debug)]
pub enum DrishtiError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, DrishtiError>;
