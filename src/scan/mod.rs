//! Keyset scan subsystem
//!
//! The scan walks a table in fixed-size `(start, end]` id ranges:
//!
//! 1. Fetch the chunk for the current range (range query + count query)
//! 2. An empty chunk terminates the scan
//! 3. Report progress for the chunk
//! 4. Hand each row to the handler in chunk order; the first failure aborts
//! 5. Advance the range by the chunk size and repeat
//!
//! Single-threaded and synchronous: one chunk is fully processed before the
//! next is fetched. The empty-chunk rule makes the scan sensitive to id gaps
//! wider than the chunk size (see `Scanner::run`).

mod chunk;
mod errors;
mod fetcher;
mod progress;
mod range;
mod scanner;

pub use chunk::Chunk;
pub use errors::{HandlerError, ScanError, ScanResult};
pub use fetcher::{ChunkFetcher, TableQuery};
pub use progress::{LogProgress, ProgressSink, ScanProgress};
pub use range::KeyRange;
pub use scanner::{RowHandler, ScanSummary, Scanner};
