//! Observability events for keywalk
//!
//! Every loggable event over a scan's lifetime is named here. Events are
//! explicit and typed; the event name is the first key of every log line.

use std::fmt;

/// Observable events over a scan's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration resolved (file, env overrides, defaults)
    ConfigLoaded,
    /// Table rows loaded into the bundled store
    TableLoaded,
    /// Scan started
    ScanStart,
    /// Range query issued for one chunk
    RangeQuery,
    /// Full-table count query issued for one chunk
    CountQuery,
    /// Progress report for one non-empty chunk
    ScanProgress,
    /// One row handed to the row handler
    Row,
    /// Scan finished after observing an empty chunk
    ScanComplete,
    /// Scan aborted with an error
    ScanFailed,
}

impl Event {
    /// Returns the event name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::TableLoaded => "TABLE_LOADED",
            Event::ScanStart => "SCAN_START",
            Event::RangeQuery => "RANGE_QUERY",
            Event::CountQuery => "COUNT_QUERY",
            Event::ScanProgress => "SCAN_PROGRESS",
            Event::Row => "ROW",
            Event::ScanComplete => "SCAN_COMPLETE",
            Event::ScanFailed => "SCAN_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
