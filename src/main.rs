//! ldbtest CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Initializes logging
//! 2. Parses arguments and dispatches (via cli::run)
//! 3. Prints errors to stderr
//! 4. Exits with non-zero on failure
//!
//! All command logic is delegated to the CLI module.

use ldbtest::cli;

fn main() {
    env_logger::init();

    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
