//! CLI-specific error types
//!
//! Every CLI error aborts the process with a non-zero exit; main prints the
//! error to stderr.

use thiserror::Error;

use crate::config::ConfigError;
use crate::scan::ScanError;
use crate::store::QueryError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be resolved
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Rows file could not be read
    #[error("data error: {0}")]
    Data(String),

    /// The store rejected the rows file
    #[error("store error: {0}")]
    Store(#[from] QueryError),

    /// The scan aborted
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
}

impl CliError {
    /// Rows-file error
    pub fn data_error(msg: impl Into<String>) -> Self {
        CliError::Data(msg.into())
    }
}
