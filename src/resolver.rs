//! Revision label resolution
//!
//! Maps a branch, tag or commit id to a full 40 character commit id.

use crate::domain::{RevisionId, REVISION_LENGTH};
use crate::error::ResolutionError;
use crate::git::{self, GitRunner};
use std::path::Path;
use tracing::debug;

/// Resolve `label` to a full commit id inside `repository`
///
/// A label that already has the length of a full commit id is returned
/// unchanged without checking that it exists.
pub fn resolve<G: GitRunner + ?Sized>(
    label: &str,
    repository: &Path,
    git: &G,
) -> Result<RevisionId, ResolutionError> {
    if RevisionId::is_full_length(label) {
        return RevisionId::parse(label);
    }

    if let Some(rev) = git::show_ref(git, label, repository)
        .ok()
        .and_then(|output| leading_revision(&output))
    {
        debug!(label, revision = %rev, "resolved reference");
        return Ok(rev);
    }

    // Abbreviated commit ids are not refs
    if let Some(rev) = git::rev_parse_commit(git, label, repository)
        .ok()
        .and_then(|output| leading_revision(&output))
    {
        debug!(label, revision = %rev, "resolved commit");
        return Ok(rev);
    }

    Err(ResolutionError::unresolved(label, repository))
}

/// First 40 characters of the output, if there are that many
fn leading_revision(output: &str) -> Option<RevisionId> {
    let prefix: String = output.trim_start().chars().take(REVISION_LENGTH).collect();
    RevisionId::parse(prefix).ok()
}
