//! composer.lock schema
//!
//! Only the fields the changelog needs are modelled; everything else in the
//! document is ignored. A missing `packages` list or package `name` rejects the
//! whole document. Packages the filter does not select are never inspected
//! further, so metapackages and dist-only packages without a `source` are fine.

use crate::diff::DependencyFilter;
use crate::domain::{ManifestSnapshot, PackageEntry, RevisionId};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct LockFile {
    packages: Vec<LockPackage>,
}

#[derive(Debug, Deserialize)]
struct LockPackage {
    name: String,
    source: Option<LockSource>,
}

#[derive(Debug, Deserialize)]
struct LockSource {
    reference: Option<String>,
}

/// A selected package left out of the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPackage {
    pub name: String,
    pub reason: String,
}

/// Snapshot of the selected packages plus the ones that had to be skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLockfile {
    pub snapshot: ManifestSnapshot,
    pub skipped: Vec<SkippedPackage>,
}

/// Parse lockfile content into a snapshot of the packages `filter` selects
///
/// A selected package without a full commit id as its source reference cannot
/// be traced in history; it is left out and listed in `skipped`.
pub fn parse_lockfile(
    content: &str,
    filter: &DependencyFilter,
) -> Result<ParsedLockfile, serde_json::Error> {
    let lock: LockFile = serde_json::from_str(content)?;

    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for package in lock.packages {
        if !filter.matches(&package.name) {
            continue;
        }

        let Some(reference) = package.source.and_then(|source| source.reference) else {
            skipped.push(SkippedPackage {
                name: package.name,
                reason: "no source reference".to_string(),
            });
            continue;
        };

        match RevisionId::parse(reference) {
            Ok(rev) => entries.push(PackageEntry::new(package.name, rev)),
            Err(e) => skipped.push(SkippedPackage {
                name: package.name,
                reason: e.to_string(),
            }),
        }
    }

    debug!(selected = entries.len(), skipped = skipped.len(), "parsed lockfile");

    Ok(ParsedLockfile {
        snapshot: ManifestSnapshot::from_entries(entries),
        skipped,
    })
}
