//! The scan loop
//!
//! Drives `ChunkFetcher` over successive ranges until an empty chunk is
//! observed, reporting progress per chunk and handing every row to the
//! handler in chunk order. A failure at any step aborts the whole scan;
//! nothing is retried or rolled back.

use crate::store::Row;

use super::errors::{HandlerError, ScanError, ScanResult};
use super::fetcher::{ChunkFetcher, TableQuery};
use super::progress::{ProgressSink, ScanProgress};
use super::range::KeyRange;

/// Handles rows one at a time, in chunk order
pub trait RowHandler {
    /// Process a single row; the first failure aborts the scan
    fn handle(&mut self, row: &Row) -> Result<(), HandlerError>;
}

impl<F> RowHandler for F
where
    F: FnMut(&Row) -> Result<(), HandlerError>,
{
    fn handle(&mut self, row: &Row) -> Result<(), HandlerError> {
        self(row)
    }
}

/// Totals for a completed scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Non-empty chunks visited
    pub pages: u64,
    /// Rows handed to the handler
    pub rows: u64,
}

/// Drives the scan over a `TableQuery` store to completion
pub struct Scanner<'a, S: TableQuery> {
    fetcher: ChunkFetcher<'a, S>,
}

impl<'a, S: TableQuery> Scanner<'a, S> {
    /// Creates a scanner over the given store and table
    pub fn new(store: &'a mut S, table: &'a str) -> Self {
        Self {
            fetcher: ChunkFetcher::new(store, table),
        }
    }

    /// Runs the scan to completion, blocking the calling thread.
    ///
    /// `chunk_size` must be greater than zero and fit the i64 key domain;
    /// anything else is rejected before the first query.
    ///
    /// The only termination condition is an empty chunk. A range with zero
    /// matching rows therefore ends the scan even when higher-keyed rows
    /// exist: tables whose id gaps are wider than `chunk_size` are only
    /// partially visited, and rows deleted mid-scan can cut it short.
    ///
    /// Each non-empty chunk is reported to `progress` before its rows are
    /// handed to `handler` sequentially. The first handler or query failure
    /// aborts the scan with the offending range attached.
    pub fn run<H, P>(
        mut self,
        chunk_size: u64,
        handler: &mut H,
        progress: &mut P,
    ) -> ScanResult<ScanSummary>
    where
        H: RowHandler,
        P: ProgressSink,
    {
        if chunk_size == 0 {
            return Err(ScanError::ZeroChunkSize);
        }
        if chunk_size > i64::MAX as u64 {
            return Err(ScanError::OversizedChunkSize(chunk_size));
        }

        let mut range = KeyRange::first(chunk_size);
        let mut page_index: u64 = 0;
        let mut rows_seen: u64 = 0;

        loop {
            let chunk = self.fetcher.fetch(range)?;
            if chunk.is_empty() {
                break;
            }

            progress.report(&ScanProgress {
                page_number: page_index + 1,
                total_pages: chunk.total_pages(chunk_size),
                rows_in_page: chunk.len() as u64,
                total_rows: chunk.total_rows,
            });

            for row in &chunk.rows {
                handler
                    .handle(row)
                    .map_err(|source| ScanError::Handler { range, source })?;
                rows_seen += 1;
            }

            range = range.next(chunk_size);
            page_index += 1;
        }

        Ok(ScanSummary {
            pages: page_index,
            rows: rows_seen,
        })
    }
}
