//! Scan configuration
//!
//! A single JSON file with defaults and env overrides:
//!
//! - `table`      (default "word", env `KEYWALK_TABLE`)
//! - `chunk_size` (default 5, env `KEYWALK_CHUNK_SIZE`, must be > 0)
//!
//! Configuration is resolved once by the caller and passed into the scan as
//! explicit parameters; nothing reads it ambiently.

mod errors;

pub use errors::{ConfigError, ConfigResult};

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Env var overriding the table name
pub const ENV_TABLE: &str = "KEYWALK_TABLE";
/// Env var overriding the chunk size
pub const ENV_CHUNK_SIZE: &str = "KEYWALK_CHUNK_SIZE";

fn default_table() -> String {
    "word".to_string()
}

fn default_chunk_size() -> u64 {
    5
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Table to scan (optional, default "word")
    #[serde(default = "default_table")]
    pub table: String,

    /// Rows per chunk (optional, default 5, must be > 0)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file, apply env overrides, validate
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ScanConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.finish()
    }

    /// Like `load`, but a missing file falls back to defaults (still
    /// subject to env overrides)
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Self::default().finish()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.chunk_size > i64::MAX as u64 {
            return Err(ConfigError::OversizedChunkSize(self.chunk_size));
        }
        if self.table.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        Ok(())
    }

    fn finish(self) -> ConfigResult<Self> {
        let config = self.overridden_from(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an env-like lookup
    fn overridden_from<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(table) = lookup(ENV_TABLE) {
            self.table = table;
        }
        if let Some(raw) = lookup(ENV_CHUNK_SIZE) {
            self.chunk_size = raw.parse().map_err(|_| ConfigError::InvalidOverride {
                name: ENV_CHUNK_SIZE,
                value: raw,
            })?;
        }
        Ok(self)
    }
}
