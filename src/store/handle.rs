//! The store handle
//!
//! Wraps a `fjall::Keyspace` plus the single data partition all harness
//! operations address. Durability is the engine's concern: the keyspace
//! persists its journal when the handle is dropped.

use std::path::Path;

use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle};
use log::{debug, info};

use super::errors::StoreResult;
use super::scan::{ScanIter, ScanRange};

/// Name of the partition all harness operations address.
const DATA_PARTITION: &str = "data";

/// Handle to an open store.
pub struct Store {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl Store {
    /// Open or create a store at `path`.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let keyspace = Config::new(path).open()?;
        let partition =
            keyspace.open_partition(DATA_PARTITION, PartitionCreateOptions::default())?;

        info!("store opened at {}", path.display());

        Ok(Self {
            keyspace,
            partition,
        })
    }

    /// Write a single key-value pair.
    pub fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.partition.insert(key, value)?;
        Ok(())
    }

    /// Point lookup. A missing key is `Ok(None)`, never an error.
    pub fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let value = self.partition.get(key)?;
        Ok(value.map(|v| v.to_vec()))
    }

    /// Remove a key. Removing an absent key succeeds.
    pub fn delete(&self, key: &str) -> StoreResult<()> {
        self.partition.remove(key)?;
        Ok(())
    }

    /// Apply all pairs as one atomic multi-key write.
    pub fn apply_batch(&self, pairs: &[(String, String)]) -> StoreResult<()> {
        let mut batch = self.keyspace.batch();
        for (key, value) in pairs {
            batch.insert(&self.partition, key.as_str(), value.as_str());
        }
        batch.commit()?;

        debug!("committed batch of {} pairs", pairs.len());
        Ok(())
    }

    /// Lazy forward scan over `range`.
    pub fn scan(&self, range: ScanRange) -> ScanIter {
        ScanIter::new(&self.partition, range)
    }

    /// Named introspection query. Unknown names yield `None`; absence of a
    /// property is not an error.
    pub fn property(&self, name: &str) -> Option<String> {
        match name {
            "stats" => Some(self.format_stats()),
            "approximate-memory-usage" => Some(self.keyspace.write_buffer_size().to_string()),
            _ => None,
        }
    }

    /// Aggregate statistics text block for the `stats` property.
    fn format_stats(&self) -> String {
        [
            format!("segments: {}", self.partition.segment_count()),
            format!("approximate records: {}", self.partition.approximate_len()),
            format!("partition disk space: {} bytes", self.partition.disk_space()),
            format!("journals: {}", self.keyspace.journal_count()),
        ]
        .join("\n")
    }
}
