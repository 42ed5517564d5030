//! Command dispatch integration tests
//!
//! Each test drives `run_command` the way main does: one invocation maps
//! to one store operation, the store handle lives for exactly that call,
//! and effects are verified by reopening the store afterwards.

use std::fs;

use tempfile::TempDir;

use ldbtest::cli::{run_command, Command};
use ldbtest::store::{ScanRange, Store};

fn db_path(temp_dir: &TempDir) -> std::path::PathBuf {
    temp_dir.path().join("db")
}

// =============================================================================
// Point operations
// =============================================================================

#[test]
fn test_put_get_delete_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    run_command(
        &path,
        Command::Put {
            key: "hello".to_string(),
            value: "world".to_string(),
        },
    )
    .unwrap();

    // Value visible from a fresh handle
    {
        let store = Store::open(&path).unwrap();
        assert_eq!(store.get("hello").unwrap().as_deref(), Some(&b"world"[..]));
    }

    run_command(
        &path,
        Command::Delete {
            key: "hello".to_string(),
        },
    )
    .unwrap();

    let store = Store::open(&path).unwrap();
    assert!(store.get("hello").unwrap().is_none());
}

#[test]
fn test_overwrite_keeps_latest_value() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    for value in ["first", "second", "third"] {
        run_command(
            &path,
            Command::Put {
                key: "k".to_string(),
                value: value.to_string(),
            },
        )
        .unwrap();
    }

    let store = Store::open(&path).unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"third"[..]));
}

#[test]
fn test_get_on_fresh_store_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    // Not-found is a success path, and the invocation creates the store
    run_command(
        &db_path(&temp_dir),
        Command::Get {
            key: "nothing".to_string(),
        },
    )
    .unwrap();
}

// =============================================================================
// Introspection and usage
// =============================================================================

#[test]
fn test_stats_succeeds_on_populated_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    {
        let store = Store::open(&path).unwrap();
        for i in 0..50 {
            store.put(&format!("key_{i}"), "value").unwrap();
        }
    }

    run_command(&path, Command::Stats).unwrap();
}

#[test]
fn test_help_opens_the_store_then_prints_usage() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    run_command(&path, Command::Help).unwrap();

    // The dispatch opened (and thereby created) the store
    assert!(path.exists());
}

// =============================================================================
// Performance harness
// =============================================================================

#[test]
fn test_perf_writes_then_reads_every_key() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    run_command(&path, Command::Perf { count: 200 }).unwrap();

    let store = Store::open(&path).unwrap();
    for i in 0..200 {
        assert!(
            store.get(&format!("perf_key_{i}")).unwrap().is_some(),
            "perf_key_{i} missing after perf run"
        );
    }

    // Keys outside the measured range were never written
    assert!(store.get("perf_key_200").unwrap().is_none());
}

// =============================================================================
// Scan dispatch
// =============================================================================

#[test]
fn test_scan_command_over_batch_loaded_data() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    let batch_file = temp_dir.path().join("load.txt");
    let mut content = String::new();
    for i in 0..20 {
        content.push_str(&format!("row:{i:02} value_{i}\n"));
    }
    fs::write(&batch_file, content).unwrap();

    run_command(&path, Command::Batch { file: batch_file }).unwrap();
    run_command(
        &path,
        Command::Scan {
            start: Some("row:05".to_string()),
            end: Some("row:10".to_string()),
            limit: ScanRange::DEFAULT_LIMIT,
        },
    )
    .unwrap();

    // Verify the underlying range semantics the command printed
    let store = Store::open(&path).unwrap();
    let range = ScanRange::new(Some("row:05".to_string()), Some("row:10".to_string()), 100);
    let count = store.scan(range).filter(|item| item.is_ok()).count();
    assert_eq!(count, 6);
}
