//! Per-dependency commit history collection

use crate::domain::{CommitLogEntry, Diagnostic, RevisionId, REVISION_LENGTH};
use crate::git::{self, GitRunner};
use std::path::Path;
use tracing::{debug, warn};

/// Commits collected for one dependency and the problems met on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryOutcome {
    /// Commits, newest first as git lists them
    pub commits: Vec<CommitLogEntry>,
    /// Recoverable problems
    pub diagnostics: Vec<Diagnostic>,
}

impl HistoryOutcome {
    fn skipped(diagnostic: Diagnostic) -> Self {
        warn!("{}", diagnostic);
        Self {
            commits: Vec::new(),
            diagnostics: vec![diagnostic],
        }
    }
}

/// List the commits of the checkout at `checkout` between `from` and `to`
///
/// Without `from`, every commit reachable from `to` is listed.
pub fn collect_history<G: GitRunner + ?Sized>(
    git: &G,
    dependency: &str,
    checkout: &Path,
    to: &RevisionId,
    from: Option<&RevisionId>,
) -> HistoryOutcome {
    if !checkout.is_dir() {
        return HistoryOutcome::skipped(Diagnostic::CheckoutMissing {
            dependency: dependency.to_string(),
            directory: checkout.to_path_buf(),
        });
    }

    let output = match git::log_oneline(git, to.as_str(), from.map(RevisionId::as_str), checkout)
    {
        Ok(output) => output,
        Err(e) => {
            return HistoryOutcome::skipped(Diagnostic::HistoryUnavailable {
                dependency: dependency.to_string(),
                message: e.to_string(),
            })
        }
    };

    let mut outcome = HistoryOutcome::default();
    for line in output.trim().lines() {
        match parse_log_line(line) {
            Some(entry) => outcome.commits.push(entry),
            None => {
                let diagnostic = Diagnostic::MalformedLogLine {
                    directory: checkout.to_path_buf(),
                    line: line.to_string(),
                };
                warn!("{}", diagnostic);
                outcome.diagnostics.push(diagnostic);
            }
        }
    }

    debug!(
        dependency,
        commits = outcome.commits.len(),
        "collected history"
    );
    outcome
}

/// Split a `--pretty=oneline` line into the commit id and the trimmed subject
pub fn parse_log_line(line: &str) -> Option<CommitLogEntry> {
    let split = line.char_indices().nth(REVISION_LENGTH).map(|(i, _)| i);
    let (id, message) = match split {
        Some(index) => line.split_at(index),
        None => (line, ""),
    };
    let revision_id = RevisionId::parse(id).ok()?;
    Some(CommitLogEntry::new(revision_id, message.trim()))
}
