//! CLI argument definitions using clap
//!
//! Commands:
//! - ldbtest <db_path> put <key> <value>
//! - ldbtest <db_path> get <key>
//! - ldbtest <db_path> delete <key>
//! - ldbtest <db_path> scan [start] [end] [limit]
//! - ldbtest <db_path> batch <file>
//! - ldbtest <db_path> stats
//! - ldbtest <db_path> perf [count]
//! - ldbtest <db_path> help

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::ScanRange;

/// ldbtest - test harness for an embedded LSM key-value store
#[derive(Parser, Debug)]
#[command(name = "ldbtest")]
#[command(version, about, long_about = None)]
// The `help` verb is a real command: it opens the store and dispatches like
// every other verb, so clap's auto help subcommand is turned off.
#[command(disable_help_subcommand = true)]
#[command(after_help = "Examples:
  ldbtest ./testdb put hello world
  ldbtest ./testdb get hello
  ldbtest ./testdb scan
  ldbtest ./testdb scan user: user:9999 10
  ldbtest ./testdb perf 1000")]
pub struct Cli {
    /// Path to the database directory (created if missing)
    pub db_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Put a key-value pair
    Put { key: String, value: String },

    /// Get value by key
    Get { key: String },

    /// Delete a key
    Delete { key: String },

    /// Scan records in ascending key order
    Scan {
        /// First key of the range (defaults to the first key in the store)
        start: Option<String>,

        /// Last key of the range, inclusive
        end: Option<String>,

        /// Maximum number of records to print
        #[arg(default_value_t = ScanRange::DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Batch load from a file (one `key value` pair per line)
    Batch { file: PathBuf },

    /// Show store statistics
    Stats,

    /// Run a write/read performance test
    Perf {
        /// Number of operations per phase
        #[arg(default_value_t = 10_000)]
        count: usize,
    },

    /// Show usage
    Help,
}
