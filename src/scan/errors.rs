//! Scan error types
//!
//! Two leaf families: store-level `QueryError` and `HandlerError`. Both are
//! fatal to the scan. The scan annotates them with the range being
//! processed and propagates; nothing is retried or swallowed.

use thiserror::Error;

use crate::store::QueryError;

use super::range::KeyRange;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// A row handler failure
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl HandlerError {
    /// Create a handler error from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a handler error wrapping an underlying cause
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Scan errors, annotated with the range being processed when they occurred
#[derive(Debug, Error)]
pub enum ScanError {
    /// Chunk size is an explicit caller parameter and must be > 0
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    /// Chunk size must fit the i64 key domain
    #[error("chunk size {0} exceeds the i64 key domain")]
    OversizedChunkSize(u64),

    /// The range query failed
    #[error("range query failed on {range}: {source}")]
    Query {
        /// Bounds of the failing range query
        range: KeyRange,
        #[source]
        source: QueryError,
    },

    /// The count query failed
    #[error("count query failed on {range}: {source}")]
    Count {
        /// Range being fetched when the count was issued
        range: KeyRange,
        #[source]
        source: QueryError,
    },

    /// The row handler failed
    #[error("row handler failed on {range}: {source}")]
    Handler {
        /// Range whose rows were being handled
        range: KeyRange,
        #[source]
        source: HandlerError,
    },
}

impl ScanError {
    /// The range being processed when the error occurred, if any
    pub fn range(&self) -> Option<KeyRange> {
        match self {
            ScanError::ZeroChunkSize | ScanError::OversizedChunkSize(_) => None,
            ScanError::Query { range, .. }
            | ScanError::Count { range, .. }
            | ScanError::Handler { range, .. } => Some(*range),
        }
    }
}
