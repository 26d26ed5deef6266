//! CLI module for keywalk
//!
//! Provides the command-line interface:
//! - scan: load a table from a JSON rows file and scan it to completion

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, scan};
pub use errors::{CliError, CliResult};
pub use io::load_table;
