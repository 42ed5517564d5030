//! Store-level error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the store facade
#[derive(Debug, Error)]
pub enum StoreError {
    /// Engine-level failure (I/O error, corruption, lock contention);
    /// the engine's own error text is surfaced verbatim
    #[error("Store error: {0}")]
    Engine(#[from] fjall::Error),

    /// A key written earlier in this invocation could not be read back
    #[error("Store error: key {0:?} missing after write")]
    MissingKey(String),
}
