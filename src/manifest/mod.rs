//! Lockfile snapshots
//!
//! This module provides functionality to:
//! - Parse composer.lock content into a snapshot of pinned revisions
//! - Load a snapshot from a committed revision or the working tree

mod loader;
mod lockfile;

pub use loader::{load_snapshot, LoadedSnapshot};
pub use lockfile::{parse_lockfile, ParsedLockfile, SkippedPackage};
