//! Row representation and the bundled in-memory store
//!
//! Rows are schema-blind column maps; the scan never looks inside them
//! beyond the monotonic key column. `MemoryTable` is the bundled store,
//! keyed on `id` so range queries come back in ascending key order.

mod errors;
mod memory;
mod row;

pub use errors::{QueryError, StoreResult};
pub use memory::MemoryTable;
pub use row::{Row, KEY_COLUMN};
