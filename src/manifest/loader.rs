//! Lockfile snapshot loading
//!
//! Loads the lockfile either as committed at a revision or from the working
//! tree. Any failure degrades to an empty snapshot with a diagnostic.

use super::parse_lockfile;
use crate::diff::DependencyFilter;
use crate::domain::{Diagnostic, ManifestSnapshot, RevisionId};
use crate::git::{self, GitRunner};
use std::path::Path;
use tracing::warn;

/// A loaded snapshot and the problems found while loading it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSnapshot {
    /// The snapshot; empty when loading failed
    pub snapshot: ManifestSnapshot,
    /// Why the snapshot is empty, or which selected packages were left out
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadedSnapshot {
    fn failed(source: String, message: String) -> Self {
        let diagnostic = Diagnostic::InvalidSnapshot { source, message };
        warn!("{}", diagnostic);
        Self {
            snapshot: ManifestSnapshot::empty(),
            diagnostics: vec![diagnostic],
        }
    }
}

/// Load the lockfile at `revision`, or from the working tree when `revision` is None
///
/// Only packages selected by `filter` end up in the snapshot.
pub fn load_snapshot<G: GitRunner + ?Sized>(
    revision: Option<&RevisionId>,
    lock_file: &str,
    repository: &Path,
    filter: &DependencyFilter,
    git: &G,
) -> LoadedSnapshot {
    let (source, content) = match revision {
        Some(rev) => {
            let source = format!("{}:{}", rev, lock_file);
            match git::show_file(git, rev.as_str(), lock_file, repository) {
                Ok(content) => (source, content),
                Err(e) => return LoadedSnapshot::failed(source, e.to_string()),
            }
        }
        None => {
            let path = repository.join(lock_file);
            let source = path.display().to_string();
            match std::fs::read_to_string(&path) {
                Ok(content) => (source, content),
                Err(e) => return LoadedSnapshot::failed(source, e.to_string()),
            }
        }
    };

    let parsed = match parse_lockfile(&content, filter) {
        Ok(parsed) => parsed,
        Err(e) => return LoadedSnapshot::failed(source, e.to_string()),
    };

    let diagnostics = parsed
        .skipped
        .into_iter()
        .map(|skipped| {
            let diagnostic = Diagnostic::UnusableReference {
                source: source.clone(),
                dependency: skipped.name,
                reason: skipped.reason,
            };
            warn!("{}", diagnostic);
            diagnostic
        })
        .collect();

    LoadedSnapshot {
        snapshot: parsed.snapshot,
        diagnostics,
    }
}
