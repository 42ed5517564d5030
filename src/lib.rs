//! ldbtest - command-line test harness for an embedded LSM key-value store
//!
//! The storage engine itself is the external `fjall` crate; this crate is
//! the thin layer that maps one CLI invocation to one store operation.

pub mod cli;
pub mod perf;
pub mod store;
