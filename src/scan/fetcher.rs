//! Chunk fetching
//!
//! `ChunkFetcher` issues two read-only queries per chunk: the bounded range
//! query and a full-table count. The count is re-issued every chunk so
//! progress reporting tracks a concurrently mutated table; wasteful on a
//! static table, but it keeps the queries simple.

use crate::observability::{Event, Logger};
use crate::store::{QueryError, Row};

use super::chunk::Chunk;
use super::errors::{ScanError, ScanResult};
use super::range::KeyRange;

/// The query-execution capability a scan runs over
///
/// Implementations should return range rows in ascending key order; the
/// scan does not re-sort.
pub trait TableQuery {
    /// Rows with `id > start AND id <= end` from the named table
    fn select_range(&mut self, table: &str, start: i64, end: i64)
        -> Result<Vec<Row>, QueryError>;

    /// Full-table row count
    fn count_rows(&mut self, table: &str) -> Result<u64, QueryError>;
}

/// Fetches one chunk per range from a `TableQuery` store
pub struct ChunkFetcher<'a, S: TableQuery> {
    store: &'a mut S,
    table: &'a str,
}

impl<'a, S: TableQuery> ChunkFetcher<'a, S> {
    /// Creates a fetcher over the given store and table
    pub fn new(store: &'a mut S, table: &'a str) -> Self {
        Self { store, table }
    }

    /// Executes the range query and the count query for `range`.
    ///
    /// Read-only apart from diagnostic logging of the issued queries.
    /// Errors are annotated with the range and propagate without retry.
    pub fn fetch(&mut self, range: KeyRange) -> ScanResult<Chunk> {
        let start = range.start().to_string();
        let end = range.end().to_string();
        Logger::trace(
            Event::RangeQuery,
            &[
                ("table", self.table),
                ("start", start.as_str()),
                ("end", end.as_str()),
            ],
        );
        let rows = self
            .store
            .select_range(self.table, range.start(), range.end())
            .map_err(|source| ScanError::Query { range, source })?;

        Logger::trace(Event::CountQuery, &[("table", self.table)]);
        let total_rows = self
            .store
            .count_rows(self.table)
            .map_err(|source| ScanError::Count { range, source })?;

        Ok(Chunk {
            rows,
            range,
            total_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTable;
    use serde_json::json;

    /// Store whose count query always fails
    struct BrokenCountStore {
        inner: MemoryTable,
    }

    impl TableQuery for BrokenCountStore {
        fn select_range(
            &mut self,
            table: &str,
            start: i64,
            end: i64,
        ) -> Result<Vec<Row>, QueryError> {
            self.inner.select_range(table, start, end)
        }

        fn count_rows(&mut self, table: &str) -> Result<u64, QueryError> {
            Err(QueryError::EmptyCount(table.to_string()))
        }
    }

    fn seeded_table(n: i64) -> MemoryTable {
        let mut table = MemoryTable::new("word");
        for id in 1..=n {
            table.insert(id, Row::new().with("id", json!(id)));
        }
        table
    }

    #[test]
    fn test_fetch_combines_rows_and_count() {
        let mut store = seeded_table(8);
        let mut fetcher = ChunkFetcher::new(&mut store, "word");

        let chunk = fetcher.fetch(KeyRange::first(3)).unwrap();
        assert_eq!(chunk.len(), 3);
        assert_eq!(chunk.total_rows, 8);
        assert_eq!(chunk.range, KeyRange::first(3));
    }

    #[test]
    fn test_fetch_beyond_table_is_empty_but_counted() {
        let mut store = seeded_table(4);
        let mut fetcher = ChunkFetcher::new(&mut store, "word");

        let range = KeyRange::first(5).next(5); // (5, 10]
        let chunk = fetcher.fetch(range).unwrap();
        assert!(chunk.is_empty());
        assert_eq!(chunk.total_rows, 4);
    }

    #[test]
    fn test_range_query_failure_annotated_with_range() {
        let mut store = seeded_table(4);
        let mut fetcher = ChunkFetcher::new(&mut store, "other");

        let err = fetcher.fetch(KeyRange::first(5)).unwrap_err();
        assert_eq!(err.range(), Some(KeyRange::first(5)));
        assert!(matches!(
            err,
            ScanError::Query {
                source: QueryError::UnknownTable(_),
                ..
            }
        ));
    }

    #[test]
    fn test_count_query_failure_annotated_with_range() {
        let mut store = BrokenCountStore {
            inner: seeded_table(4),
        };
        let mut fetcher = ChunkFetcher::new(&mut store, "word");

        let err = fetcher.fetch(KeyRange::first(5)).unwrap_err();
        assert!(matches!(
            err,
            ScanError::Count {
                source: QueryError::EmptyCount(_),
                ..
            }
        ));
        assert_eq!(err.range(), Some(KeyRange::first(5)));
    }
}
