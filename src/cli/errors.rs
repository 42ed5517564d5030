//! CLI-specific error types
//!
//! Every error here is terminal for the invocation: main prints it to
//! stderr and the process exits 1. A missing key on `get` is not an error
//! and never reaches this type.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the command dispatcher
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing failed; carries the rendered clap diagnostic
    #[error("{0}")]
    Usage(String),

    /// The batch input file could not be read
    #[error("Cannot read batch file {path:?}: {source}")]
    BatchFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A non-blank batch line has no value
    #[error("Malformed batch line {line}: expected `key value`, got {text:?}")]
    BatchLine { line: usize, text: String },

    /// The store rejected an operation
    #[error("{0}")]
    Store(#[from] StoreError),
}
