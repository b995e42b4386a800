//! Change records and commit log entries

use super::RevisionId;
use std::fmt;

/// A dependency whose pinned revision moved between two snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Name of the dependency
    pub dependency_name: String,
    /// Previously pinned revision, None if the dependency is new
    pub from_revision: Option<RevisionId>,
    /// Newly pinned revision
    pub to_revision: RevisionId,
}

impl ChangeRecord {
    /// Creates a record for a dependency that moved from one revision to another
    pub fn updated(
        dependency_name: impl Into<String>,
        from_revision: RevisionId,
        to_revision: RevisionId,
    ) -> Self {
        Self {
            dependency_name: dependency_name.into(),
            from_revision: Some(from_revision),
            to_revision,
        }
    }

    /// Creates a record for a dependency without an earlier known state
    pub fn added(dependency_name: impl Into<String>, to_revision: RevisionId) -> Self {
        Self {
            dependency_name: dependency_name.into(),
            from_revision: None,
            to_revision,
        }
    }

    /// Returns true if the dependency did not exist in the old snapshot
    pub fn is_new(&self) -> bool {
        self.from_revision.is_none()
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from_revision {
            Some(from) => write!(f, "{} {}..{}", self.dependency_name, from, self.to_revision),
            None => write!(f, "{} (new) {}", self.dependency_name, self.to_revision),
        }
    }
}

/// One line of a dependency's commit history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitLogEntry {
    /// Commit id
    pub revision_id: RevisionId,
    /// Subject line of the commit
    pub message: String,
}

impl CommitLogEntry {
    /// Creates a new commit log entry
    pub fn new(revision_id: RevisionId, message: impl Into<String>) -> Self {
        Self {
            revision_id,
            message: message.into(),
        }
    }
}

/// Commits collected for one changed dependency, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyChanges {
    /// The change that triggered collection
    pub record: ChangeRecord,
    /// Commits between the two revisions
    pub commits: Vec<CommitLogEntry>,
}

impl DependencyChanges {
    /// Creates a new set of dependency changes
    pub fn new(record: ChangeRecord, commits: Vec<CommitLogEntry>) -> Self {
        Self { record, commits }
    }

    /// Returns true if at least one commit was collected
    pub fn has_commits(&self) -> bool {
        !self.commits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rev(c: char) -> RevisionId {
        RevisionId::parse(c.to_string().repeat(40)).unwrap()
    }

    #[test]
    fn test_added_has_no_from_revision() {
        let record = ChangeRecord::added("ox/ox-foo", rev('b'));
        assert!(record.is_new());
        assert_eq!(record.to_revision, rev('b'));
    }

    #[test]
    fn test_updated() {
        let record = ChangeRecord::updated("ox/ox-foo", rev('a'), rev('b'));
        assert!(!record.is_new());
        assert_eq!(record.from_revision, Some(rev('a')));
    }

    #[test]
    fn test_display_updated() {
        let record = ChangeRecord::updated("ox/ox-foo", rev('a'), rev('b'));
        let display = format!("{}", record);
        assert!(display.starts_with("ox/ox-foo "));
        assert!(display.contains(".."));
    }

    #[test]
    fn test_display_added() {
        let record = ChangeRecord::added("ox/ox-foo", rev('b'));
        assert!(format!("{}", record).contains("(new)"));
    }

    #[test]
    fn test_dependency_changes_has_commits() {
        let record = ChangeRecord::added("ox/ox-foo", rev('b'));
        let empty = DependencyChanges::new(record.clone(), Vec::new());
        assert!(!empty.has_commits());

        let full = DependencyChanges::new(record, vec![CommitLogEntry::new(rev('b'), "Fix")]);
        assert!(full.has_commits());
    }
}
