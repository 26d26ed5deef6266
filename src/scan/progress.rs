//! Per-chunk progress reporting
//!
//! One report per non-empty chunk, before its rows are handled. The totals
//! come from the chunk's count query, so a concurrently mutated table shows
//! up in the reported totals.

use crate::observability::{Event, Logger};

/// Progress for one non-empty chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    /// 1-based page number
    pub page_number: u64,
    /// `ceil(total_rows / chunk_size)` at fetch time
    pub total_pages: u64,
    /// Rows in this chunk
    pub rows_in_page: u64,
    /// Full-table row count at fetch time
    pub total_rows: u64,
}

/// Observer for per-chunk progress
pub trait ProgressSink {
    /// Called once per non-empty chunk, before its rows are handled
    fn report(&mut self, progress: &ScanProgress);
}

impl<F> ProgressSink for F
where
    F: FnMut(&ScanProgress),
{
    fn report(&mut self, progress: &ScanProgress) {
        self(progress)
    }
}

/// Progress sink that writes one structured log line per chunk
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&mut self, progress: &ScanProgress) {
        let page = progress.page_number.to_string();
        let total_pages = progress.total_pages.to_string();
        let rows_in_page = progress.rows_in_page.to_string();
        let total_rows = progress.total_rows.to_string();
        Logger::info(
            Event::ScanProgress,
            &[
                ("page", page.as_str()),
                ("total_pages", total_pages.as_str()),
                ("rows_in_page", rows_in_page.as_str()),
                ("total_rows", total_rows.as_str()),
            ],
        );
    }
}
