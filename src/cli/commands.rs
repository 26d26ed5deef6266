//! CLI command implementations
//!
//! Commands are thin: resolve config, load rows, run the scan, log
//! lifecycle events. All scan semantics live in the scan module.

use std::path::Path;

use uuid::Uuid;

use crate::config::ScanConfig;
use crate::observability::{Event, Logger};
use crate::scan::{HandlerError, LogProgress, Scanner};
use crate::store::Row;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::load_table;

/// Parse CLI arguments and dispatch to command implementations
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let result = match cli.command {
        Command::Scan {
            config,
            data,
            chunk_size,
        } => scan(&config, &data, chunk_size),
    };
    if let Err(e) = &result {
        report_failure(e);
    }
    result
}

/// Emit the structured failure line for an aborted command
fn report_failure(error: &CliError) {
    let message = error.to_string();
    Logger::error(Event::ScanFailed, &[("error", message.as_str())]);
}

/// Run one full table scan, logging progress and every row
pub fn scan(config_path: &Path, data_path: &Path, chunk_size: Option<u64>) -> CliResult<()> {
    let mut config = ScanConfig::load_or_default(config_path)?;
    if let Some(chunk_size) = chunk_size {
        config.chunk_size = chunk_size;
    }
    config.validate()?;

    let chunk_size = config.chunk_size.to_string();
    Logger::info(
        Event::ConfigLoaded,
        &[
            ("table", config.table.as_str()),
            ("chunk_size", chunk_size.as_str()),
        ],
    );

    let mut table = load_table(&config.table, data_path)?;
    let row_count = table.len().to_string();
    Logger::info(
        Event::TableLoaded,
        &[
            ("table", config.table.as_str()),
            ("rows", row_count.as_str()),
        ],
    );

    let scan_id = Uuid::new_v4().to_string();
    Logger::info(
        Event::ScanStart,
        &[
            ("scan_id", scan_id.as_str()),
            ("table", config.table.as_str()),
        ],
    );

    let mut handler = |row: &Row| -> Result<(), HandlerError> {
        let body = row.to_value().to_string();
        Logger::info(
            Event::Row,
            &[("row", body.as_str()), ("scan_id", scan_id.as_str())],
        );
        Ok(())
    };
    let mut progress = LogProgress;

    let summary =
        Scanner::new(&mut table, &config.table).run(config.chunk_size, &mut handler, &mut progress)?;

    let pages = summary.pages.to_string();
    let rows = summary.rows.to_string();
    Logger::info(
        Event::ScanComplete,
        &[
            ("pages", pages.as_str()),
            ("rows", rows.as_str()),
            ("scan_id", scan_id.as_str()),
        ],
    );
    Ok(())
}
