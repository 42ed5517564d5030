//! Batch-file input and record rendering
//!
//! The batch format is line-oriented: one `key value` pair per line. The
//! key is the first whitespace-delimited token, the value is the remainder
//! of the line (so values may contain spaces). Blank lines are skipped.
//! A non-blank line without a value fails the whole batch before anything
//! is written, preserving the all-or-nothing batch contract.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use super::errors::{CliError, CliResult};

/// Read and parse a batch input file into ordered key-value pairs.
pub fn read_batch_file(path: &Path) -> CliResult<Vec<(String, String)>> {
    let content = fs::read_to_string(path).map_err(|source| CliError::BatchFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_batch_lines(&content)
}

/// Parse newline-delimited `key value` pairs.
///
/// Line numbers in errors are 1-based.
pub fn parse_batch_lines(content: &str) -> CliResult<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(char::is_whitespace) {
            Some((key, rest)) if !rest.trim().is_empty() => {
                pairs.push((key.to_string(), rest.trim().to_string()));
            }
            _ => {
                return Err(CliError::BatchLine {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    Ok(pairs)
}

/// Render an opaque key or value for terminal output.
///
/// Keys and values are byte sequences; the harness treats them as text and
/// falls back to lossy UTF-8 for anything else.
pub fn display_bytes(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
