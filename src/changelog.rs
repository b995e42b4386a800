//! Changelog document insertion
//!
//! The document is rewritten in full; a crash while writing can leave it
//! truncated.

use crate::error::ChangelogError;
use std::fs;
use std::path::Path;

/// Insert `text` into the document at `path` at `offset` bytes
///
/// Each line of `text` already ends with a newline, so `trailing_blank_lines`
/// adds `trailing_blank_lines - 1` extra newlines. An offset past the end of
/// the document appends.
pub fn insert(
    path: &Path,
    text: &str,
    offset: usize,
    trailing_blank_lines: usize,
) -> Result<(), ChangelogError> {
    let existing = fs::read(path).map_err(|e| ChangelogError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let updated = splice(&existing, text, offset, trailing_blank_lines);

    fs::write(path, updated).map_err(|e| ChangelogError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Build the new document without touching the filesystem
pub fn splice(existing: &[u8], text: &str, offset: usize, trailing_blank_lines: usize) -> Vec<u8> {
    let offset = offset.min(existing.len());
    let padding = "\n".repeat(trailing_blank_lines.saturating_sub(1));

    let mut updated = Vec::with_capacity(existing.len() + text.len() + padding.len());
    updated.extend_from_slice(&existing[..offset]);
    updated.extend_from_slice(text.as_bytes());
    updated.extend_from_slice(padding.as_bytes());
    updated.extend_from_slice(&existing[offset..]);
    updated
}
