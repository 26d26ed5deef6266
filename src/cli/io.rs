//! Rows-file loading for the CLI

use std::fs;
use std::path::Path;

use crate::store::MemoryTable;

use super::errors::{CliError, CliResult};

/// Load a table from a JSON rows file
pub fn load_table(name: &str, path: &Path) -> CliResult<MemoryTable> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::data_error(format!("failed to read {}: {}", path.display(), e)))?;
    Ok(MemoryTable::from_json(name, &content)?)
}
