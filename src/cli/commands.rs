//! CLI command implementations
//!
//! Every verb maps to exactly one store operation. The store is opened
//! once after argument parsing succeeds, and it is dropped when the
//! dispatched function returns - on success and on every error path alike.

use std::path::Path;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::warn;

use crate::perf;
use crate::store::{ScanRange, Store};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{display_bytes, read_batch_file};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // An explicit --help/--version request is a success path; any
            // other parse failure is a usage error and must exit 1, so the
            // rendered diagnostic is routed through CliError instead of
            // clap's own exit(2).
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                print!("{}", e.render());
                return Ok(());
            }
            return Err(CliError::Usage(e.render().to_string().trim_end().to_string()));
        }
    };

    run_command(&cli.db_path, cli.command)
}

/// Run one command against the store at `db_path`.
///
/// The store is opened unconditionally, `help` included.
pub fn run_command(db_path: &Path, cmd: Command) -> CliResult<()> {
    let store = Store::open(db_path)?;

    match cmd {
        Command::Put { key, value } => put(&store, &key, &value),
        Command::Get { key } => get(&store, &key),
        Command::Delete { key } => delete(&store, &key),
        Command::Scan { start, end, limit } => scan(&store, ScanRange::new(start, end, limit)),
        Command::Batch { file } => batch(&store, &file),
        Command::Stats => stats(&store),
        Command::Perf { count } => perf_test(&store, count),
        Command::Help => help(),
    }
}

/// Write a single key-value pair.
fn put(store: &Store, key: &str, value: &str) -> CliResult<()> {
    store.put(key, value)?;
    println!("Put successful: {} -> {}", key, value);
    Ok(())
}

/// Point lookup. A missing key is a normal outcome, not a failure.
fn get(store: &Store, key: &str) -> CliResult<()> {
    match store.get(key)? {
        Some(value) => println!("{} -> {}", key, display_bytes(&value)),
        None => println!("Key not found: {}", key),
    }
    Ok(())
}

/// Remove a key. Removing an absent key is indistinguishable from removing
/// a present one at this layer.
fn delete(store: &Store, key: &str) -> CliResult<()> {
    store.delete(key)?;
    println!("Delete successful: {}", key);
    Ok(())
}

/// Print records in ascending key order until the range, the limit, or the
/// data runs out. An iterator error is reported after the partial output;
/// records already printed stand.
fn scan(store: &Store, range: ScanRange) -> CliResult<()> {
    println!("Scanning database:");

    let mut count: usize = 0;
    for item in store.scan(range) {
        match item {
            Ok((key, value)) => {
                println!("  {} -> {}", display_bytes(&key), display_bytes(&value));
                count += 1;
            }
            Err(e) => {
                warn!("scan aborted after {} records", count);
                println!("Total {} records scanned.", count);
                return Err(e.into());
            }
        }
    }

    println!("Total {} records scanned.", count);
    Ok(())
}

/// Apply all pairs from the batch file as one atomic write.
///
/// The file is parsed and validated in full before the store is touched,
/// so a malformed line means nothing gets written.
fn batch(store: &Store, file: &Path) -> CliResult<()> {
    let pairs = read_batch_file(file)?;
    store.apply_batch(&pairs)?;
    println!("Batch write successful: {} pairs", pairs.len());
    Ok(())
}

/// Print the store's introspection properties. An absent property prints
/// nothing and is not an error.
fn stats(store: &Store) -> CliResult<()> {
    if let Some(text) = store.property("stats") {
        println!("Database statistics:\n{}", text);
    }
    if let Some(memory) = store.property("approximate-memory-usage") {
        println!("Approximate memory usage: {} bytes", memory);
    }
    Ok(())
}

/// Run the timed write phase and read phase.
fn perf_test(store: &Store, count: usize) -> CliResult<()> {
    println!("Starting performance test with {} operations...", count);
    let report = perf::run(store, count)?;
    print!("{}", report);
    Ok(())
}

/// Print usage text.
fn help() -> CliResult<()> {
    print!("{}", Cli::command().render_help());
    Ok(())
}
