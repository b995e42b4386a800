//! Core domain models for depchangelog
//!
//! This module contains the fundamental types used throughout the application:
//! - Full-length commit ids
//! - Lockfile snapshots and their package entries
//! - Change records and collected commit history
//! - Recoverable diagnostics

mod change;
mod diagnostic;
mod package;
mod revision;

pub use change::{ChangeRecord, CommitLogEntry, DependencyChanges};
pub use diagnostic::Diagnostic;
pub use package::{ManifestSnapshot, PackageEntry};
pub use revision::{RevisionId, REVISION_LENGTH};
