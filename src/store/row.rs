//! Schema-blind rows
//!
//! A row is an opaque mapping from column name to value. The scan passes
//! rows through to the handler without inspecting their content; only the
//! key column is ever read, and only by stores and loaders.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the monotonic key column every scanned table carries
pub const KEY_COLUMN: &str = "id";

/// One table row: an opaque mapping from column name to JSON value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    columns: Map<String, Value>,
}

impl Row {
    /// Creates an empty row
    pub fn new() -> Self {
        Self {
            columns: Map::new(),
        }
    }

    /// Creates a row from an existing column map
    pub fn from_columns(columns: Map<String, Value>) -> Self {
        Self { columns }
    }

    /// Sets a column value, returning self for chained construction
    pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
        self.columns.insert(column.into(), value);
        self
    }

    /// Reads a column by name
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// The row's key, when the key column holds an integer
    pub fn key(&self) -> Option<i64> {
        self.get(KEY_COLUMN).and_then(Value::as_i64)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the row has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The row as a JSON object (for logging)
    pub fn to_value(&self) -> Value {
        Value::Object(self.columns.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_by_column_name() {
        let row = Row::new()
            .with("id", json!(3))
            .with("word", json!("carrot"));

        assert_eq!(row.get("word"), Some(&json!("carrot")));
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_key_reads_id_column() {
        let row = Row::new().with("id", json!(42)).with("word", json!("x"));
        assert_eq!(row.key(), Some(42));
    }

    #[test]
    fn test_key_missing_or_non_integer() {
        assert_eq!(Row::new().key(), None);

        let row = Row::new().with("id", json!("not-a-number"));
        assert_eq!(row.key(), None);
    }

    #[test]
    fn test_row_decodes_from_plain_json_object() {
        let row: Row = serde_json::from_str(r#"{"id": 7, "word": "grape"}"#).unwrap();
        assert_eq!(row.key(), Some(7));
        assert_eq!(row.get("word"), Some(&json!("grape")));
    }
}
