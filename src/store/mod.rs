//! Store facade over the embedded engine
//!
//! One `Store` handle exists per invocation: it is opened after argument
//! parsing succeeds and released when it is dropped, which covers every
//! early error return in the dispatcher.
//!
//! The facade exposes exactly the engine contract the harness relies on:
//!
//! - open-or-create by path
//! - point get/put/delete, where a missing key on get is `Ok(None)`
//! - atomic multi-key batches
//! - bounded lazy forward scans
//! - named introspection properties

mod errors;
mod handle;
mod scan;

pub use errors::{StoreError, StoreResult};
pub use handle::Store;
pub use scan::{ScanIter, ScanRange};
