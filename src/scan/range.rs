//! Identifier ranges for keyset pagination
//!
//! A range selects `id > start AND id <= end`. Ranges are immutable: each
//! iteration of the scan constructs a fresh successor instead of mutating
//! the current one.

use std::fmt;

/// Half-open identifier bounds `(start, end]` for one chunk's query filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRange {
    start: i64,
    end: i64,
}

/// Keys are i64; wider chunk sizes saturate instead of wrapping
fn chunk_width(chunk_size: u64) -> i64 {
    i64::try_from(chunk_size).unwrap_or(i64::MAX)
}

impl KeyRange {
    /// Returns the first range of a scan: `(0, chunk_size]`
    pub fn first(chunk_size: u64) -> Self {
        Self {
            start: 0,
            end: chunk_width(chunk_size),
        }
    }

    /// Returns the successor range: `(end, end + chunk_size]`.
    /// The upper bound saturates at the top of the key domain, so a
    /// successor is never inverted.
    pub fn next(&self, chunk_size: u64) -> Self {
        Self {
            start: self.end,
            end: self.end.saturating_add(chunk_width(chunk_size)),
        }
    }

    /// Exclusive lower bound
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Inclusive upper bound
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Returns true if the id falls inside the range
    pub fn contains(&self, id: i64) -> bool {
        id > self.start && id <= self.end
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}]", self.start, self.end)
    }
}
