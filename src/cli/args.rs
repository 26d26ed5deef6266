//! CLI argument definitions using clap
//!
//! Commands:
//! - keywalk scan --config <path> --data <rows.json> [--chunk-size N]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// keywalk - a strict, deterministic keyset table scanner
#[derive(Parser, Debug)]
#[command(name = "keywalk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a table in keyset chunks, logging every row
    Scan {
        /// Path to configuration file
        #[arg(long, default_value = "./keywalk.json")]
        config: PathBuf,

        /// Path to a JSON array of row objects, each with an integer id
        #[arg(long)]
        data: PathBuf,

        /// Override the configured chunk size
        #[arg(long)]
        chunk_size: Option<u64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_args_parse() {
        let cli = Cli::try_parse_from(["keywalk", "scan", "--data", "rows.json"]).unwrap();
        let Command::Scan {
            config,
            data,
            chunk_size,
        } = cli.command;

        assert_eq!(config, PathBuf::from("./keywalk.json"));
        assert_eq!(data, PathBuf::from("rows.json"));
        assert_eq!(chunk_size, None);
    }

    #[test]
    fn test_chunk_size_override_parses() {
        let cli = Cli::try_parse_from([
            "keywalk",
            "scan",
            "--data",
            "rows.json",
            "--chunk-size",
            "20",
        ])
        .unwrap();
        let Command::Scan { chunk_size, .. } = cli.command;
        assert_eq!(chunk_size, Some(20));
    }

    #[test]
    fn test_data_is_required() {
        assert!(Cli::try_parse_from(["keywalk", "scan"]).is_err());
    }
}
