//! Store error types
//!
//! `QueryError` covers every way a store can reject a query: a table it
//! does not know, a backend failure (connectivity and the like), rows that
//! cannot be decoded, and a count query that returns no value. No retry
//! happens at this layer; errors propagate to the scan.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, QueryError>;

/// Store-level query failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The named table does not exist in this store
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// The backend rejected the query (connectivity loss, type mismatch, ...)
    #[error("backend failure: {0}")]
    Backend(String),

    /// A row could not be decoded into a column map
    #[error("row decode failed: {0}")]
    RowDecode(String),

    /// The count query returned no value
    #[error("count query returned no value for table '{0}'")]
    EmptyCount(String),
}
