//! In-memory table keyed by the id column
//!
//! The bundled `TableQuery` implementation: a BTreeMap keyed on `id`, so
//! range queries come back in ascending key order. Rows load from a JSON
//! array of objects, each carrying an integer `id`.

use std::collections::BTreeMap;
use std::ops::Bound;

use serde_json::Value;

use crate::scan::TableQuery;

use super::errors::{QueryError, StoreResult};
use super::row::{Row, KEY_COLUMN};

/// An in-memory table of `(id, row)` pairs
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    name: String,
    rows: BTreeMap<i64, Row>,
}

impl MemoryTable {
    /// Creates an empty table with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
        }
    }

    /// Builds a table from a JSON array of row objects, keyed by each
    /// object's integer `id` column
    pub fn from_json(name: impl Into<String>, json: &str) -> StoreResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| QueryError::RowDecode(e.to_string()))?;
        let Value::Array(items) = value else {
            return Err(QueryError::RowDecode(
                "expected a JSON array of row objects".to_string(),
            ));
        };

        let mut table = Self::new(name);
        for item in items {
            let Value::Object(columns) = item else {
                return Err(QueryError::RowDecode(
                    "expected every row to be a JSON object".to_string(),
                ));
            };
            let row = Row::from_columns(columns);
            let id = row.key().ok_or_else(|| {
                QueryError::RowDecode(format!("row is missing an integer '{}' column", KEY_COLUMN))
            })?;
            table.insert(id, row);
        }
        Ok(table)
    }

    /// Inserts a row under the given key, replacing any existing row
    pub fn insert(&mut self, id: i64, row: Row) {
        self.rows.insert(id, row);
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check_table(&self, table: &str) -> StoreResult<()> {
        if table != self.name {
            return Err(QueryError::UnknownTable(table.to_string()));
        }
        Ok(())
    }
}

impl TableQuery for MemoryTable {
    fn select_range(&mut self, table: &str, start: i64, end: i64) -> StoreResult<Vec<Row>> {
        self.check_table(table)?;
        Ok(self
            .rows
            .range((Bound::Excluded(start), Bound::Included(end)))
            .map(|(_, row)| row.clone())
            .collect())
    }

    fn count_rows(&mut self, table: &str) -> StoreResult<u64> {
        self.check_table(table)?;
        Ok(self.rows.len() as u64)
    }
}
