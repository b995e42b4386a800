//! Lockfile snapshot structures

use super::RevisionId;
use std::fmt;

/// A dependency pinned to a source revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// Package name, e.g. `ox/ox-foo`
    pub name: String,
    /// Pinned source revision
    pub source_revision: RevisionId,
}

impl PackageEntry {
    /// Creates a new package entry
    pub fn new(name: impl Into<String>, source_revision: RevisionId) -> Self {
        Self {
            name: name.into(),
            source_revision,
        }
    }
}

impl fmt::Display for PackageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.source_revision)
    }
}

/// The packages recorded in a lockfile at one point in time
///
/// Entries keep the lockfile's order and names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSnapshot {
    packages: Vec<PackageEntry>,
}

impl ManifestSnapshot {
    /// Creates an empty snapshot
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a snapshot, keeping the first entry for a duplicated name
    pub fn from_entries(entries: impl IntoIterator<Item = PackageEntry>) -> Self {
        let mut packages: Vec<PackageEntry> = Vec::new();
        for entry in entries {
            if !packages.iter().any(|p| p.name == entry.name) {
                packages.push(entry);
            }
        }
        Self { packages }
    }

    /// Looks up a package by name
    pub fn get(&self, name: &str) -> Option<&PackageEntry> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// Iterates packages in lockfile order
    pub fn iter(&self) -> impl Iterator<Item = &PackageEntry> {
        self.packages.iter()
    }

    /// Returns the number of packages
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if the snapshot has no packages
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
