//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON
    #[error("invalid config JSON in {path}: {source}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An env override could not be parsed
    #[error("invalid {name} override: '{value}' is not a positive integer")]
    InvalidOverride {
        /// Name of the env var
        name: &'static str,
        /// Rejected raw value
        value: String,
    },

    /// chunk_size must be > 0
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,

    /// chunk_size must fit the i64 key domain
    #[error("chunk_size {0} exceeds the i64 key domain")]
    OversizedChunkSize(u64),

    /// table must not be empty
    #[error("table must not be empty")]
    EmptyTable,
}
