//! Observability subsystem for keywalk
//!
//! Provides structured JSON logging for scan lifecycle and query
//! diagnostics.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on the scan
//! 3. No async or background threads
//! 4. Deterministic output

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
