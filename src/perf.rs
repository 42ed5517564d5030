//! Write/read measurement runner
//!
//! Runs `count` sequential writes over synthetic keys, then `count` point
//! reads of the same keys. Each phase is timed separately with wall-clock
//! time. The first engine failure aborts the run immediately and the
//! remaining phase is skipped.

use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use crate::store::{Store, StoreError, StoreResult};

/// Number of padding bytes appended to each synthetic value.
const VALUE_PADDING: usize = 100;

/// Timing results for one write phase and one read phase.
#[derive(Debug, Clone)]
pub struct PerfReport {
    pub operations: usize,
    pub write_elapsed: Duration,
    pub read_elapsed: Duration,
}

impl PerfReport {
    pub fn write_ops_per_sec(&self) -> f64 {
        ops_per_sec(self.operations, self.write_elapsed)
    }

    pub fn read_ops_per_sec(&self) -> f64 {
        ops_per_sec(self.operations, self.read_elapsed)
    }
}

impl fmt::Display for PerfReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance test results:")?;
        writeln!(
            f,
            "  Write: {} ops in {}ms ({:.0} ops/sec)",
            self.operations,
            self.write_elapsed.as_millis(),
            self.write_ops_per_sec()
        )?;
        writeln!(
            f,
            "  Read:  {} ops in {}ms ({:.0} ops/sec)",
            self.operations,
            self.read_elapsed.as_millis(),
            self.read_ops_per_sec()
        )
    }
}

fn ops_per_sec(operations: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        0.0
    } else {
        operations as f64 / secs
    }
}

/// Key of the i-th synthetic record.
pub fn perf_key(i: usize) -> String {
    format!("perf_key_{}", i)
}

fn perf_value(i: usize) -> String {
    format!("perf_value_{}_{}", i, "x".repeat(VALUE_PADDING))
}

/// Execute the write phase, then the read phase.
///
/// A read observing a missing key means the engine broke its own write
/// contract during this invocation; that is surfaced as a failure.
pub fn run(store: &Store, count: usize) -> StoreResult<PerfReport> {
    let start = Instant::now();
    for i in 0..count {
        store.put(&perf_key(i), &perf_value(i))?;
    }
    let write_elapsed = start.elapsed();
    debug!("write phase: {} ops in {:?}", count, write_elapsed);

    let start = Instant::now();
    for i in 0..count {
        let key = perf_key(i);
        if store.get(&key)?.is_none() {
            return Err(StoreError::MissingKey(key));
        }
    }
    let read_elapsed = start.elapsed();
    debug!("read phase: {} ops in {:?}", count, read_elapsed);

    Ok(PerfReport {
        operations: count,
        write_elapsed,
        read_elapsed,
    })
}
