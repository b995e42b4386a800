//! Lockfile snapshot comparison
//!
//! This module provides:
//! - Name filter configuration for the packages to report on
//! - The differ that turns two snapshots into change records

mod filter;

pub use filter::DependencyFilter;

use crate::domain::{ChangeRecord, ManifestSnapshot};
use tracing::debug;

/// Compare two snapshots and list the selected dependencies whose revision changed
///
/// Records follow the order of `new`. Dependencies missing from `old` get no
/// `from_revision`; dependencies missing from `new` are not reported.
pub fn diff(
    old: &ManifestSnapshot,
    new: &ManifestSnapshot,
    filter: &DependencyFilter,
) -> Vec<ChangeRecord> {
    let mut records = Vec::new();

    for package in new.iter().filter(|p| filter.matches(&p.name)) {
        match old.get(&package.name) {
            None => {
                records.push(ChangeRecord::added(
                    &package.name,
                    package.source_revision.clone(),
                ));
            }
            Some(previous) if previous.source_revision == package.source_revision => {
                debug!(package = %package.name, "unchanged");
            }
            Some(previous) => {
                records.push(ChangeRecord::updated(
                    &package.name,
                    previous.source_revision.clone(),
                    package.source_revision.clone(),
                ));
            }
        }
    }

    records
}
