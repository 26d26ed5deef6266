//! keywalk - a strict, deterministic keyset table scanner
//!
//! Walks a table in fixed-size `(start, end]` id ranges instead of
//! LIMIT/OFFSET pages, reporting progress per chunk and handing every row
//! to an injected handler. The scan ends at the first empty chunk.

pub mod cli;
pub mod config;
pub mod observability;
pub mod scan;
pub mod store;
