//! Bounded forward scans
//!
//! A scan starts at the range's start key (or the first key in the store),
//! walks in ascending byte order, and stops at the first key beyond the
//! inclusive end bound or once the record limit is reached, whichever
//! comes first.

use fjall::PartitionHandle;

use super::errors::{StoreError, StoreResult};

/// Bounds for one scan operation.
#[derive(Debug, Clone, Default)]
pub struct ScanRange {
    /// Inclusive start key; `None` starts at the first key.
    pub start: Option<String>,
    /// Inclusive end key (byte-lexicographic); `None` runs to the last key.
    pub end: Option<String>,
    /// Maximum number of records yielded.
    pub limit: usize,
}

impl ScanRange {
    /// Record limit applied when the caller does not give one.
    pub const DEFAULT_LIMIT: usize = 100;

    pub fn new(start: Option<String>, end: Option<String>, limit: usize) -> Self {
        Self { start, end, limit }
    }

    /// Whole-store scan with the default record limit.
    pub fn unbounded() -> Self {
        Self::new(None, None, Self::DEFAULT_LIMIT)
    }
}

/// Lazy iterator over one scan.
///
/// Each step may yield an engine error; the first error terminates the
/// iterator, but records yielded before it stand.
pub struct ScanIter {
    inner: Box<dyn Iterator<Item = fjall::Result<fjall::KvPair>>>,
    end: Option<String>,
    remaining: usize,
    done: bool,
}

impl ScanIter {
    pub(crate) fn new(partition: &PartitionHandle, range: ScanRange) -> Self {
        // Seek to the start key, or to the first key in the store
        let inner: Box<dyn Iterator<Item = fjall::Result<fjall::KvPair>>> = match range.start {
            Some(start) => Box::new(partition.range(start..)),
            None => Box::new(partition.iter()),
        };

        Self {
            inner,
            end: range.end,
            remaining: range.limit,
            done: false,
        }
    }
}

impl Iterator for ScanIter {
    type Item = StoreResult<(Vec<u8>, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.remaining == 0 {
            return None;
        }

        match self.inner.next()? {
            Ok((key, value)) => {
                // Stop at the first key strictly greater than the end
                // bound; the bound itself is included
                if let Some(end) = &self.end {
                    if key.as_ref() > end.as_bytes() {
                        self.done = true;
                        return None;
                    }
                }

                self.remaining -= 1;
                Some(Ok((key.to_vec(), value.to_vec())))
            }
            Err(e) => {
                self.done = true;
                Some(Err(StoreError::Engine(e)))
            }
        }
    }
}
