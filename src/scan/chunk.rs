//! One bounded batch of rows produced by a single range query

use crate::store::Row;

use super::range::KeyRange;

/// One chunk: the rows whose id falls in `range`, plus bookkeeping
///
/// Produced by the fetcher, consumed once by the scan loop, then discarded.
/// Rows keep the store's natural return order; the scan never re-sorts.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Rows in the store's natural return order
    pub rows: Vec<Row>,
    /// The bounds the range query was filtered on
    pub range: KeyRange,
    /// Full-table row count at fetch time
    pub total_rows: u64,
}

impl Chunk {
    /// Number of rows in this chunk
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// An empty chunk terminates the scan
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total pages implied by the count: `ceil(total_rows / chunk_size)`.
    /// `chunk_size` must be > 0.
    pub fn total_pages(&self, chunk_size: u64) -> u64 {
        self.total_rows.div_ceil(chunk_size)
    }
}
