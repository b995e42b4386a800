//! Recoverable problems reported during a run

use std::fmt;
use std::path::PathBuf;

/// A recoverable condition; the run continues after recording it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A lockfile snapshot could not be loaded or parsed and was treated as empty
    InvalidSnapshot { source: String, message: String },
    /// A selected lockfile package had no usable commit id and was left out
    UnusableReference {
        source: String,
        dependency: String,
        reason: String,
    },
    /// The local checkout of a dependency does not exist
    CheckoutMissing { dependency: String, directory: PathBuf },
    /// git could not list the history of a dependency
    HistoryUnavailable { dependency: String, message: String },
    /// A history line could not be parsed and was skipped
    MalformedLogLine { directory: PathBuf, line: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidSnapshot { source, message } => {
                write!(f, "invalid lockfile content at {}: {}", source, message)
            }
            Diagnostic::UnusableReference {
                source,
                dependency,
                reason,
            } => write!(f, "skipping {} in {}: {}", dependency, source, reason),
            Diagnostic::CheckoutMissing {
                dependency,
                directory,
            } => write!(
                f,
                "directory \"{}\" for {} not found",
                directory.display(),
                dependency
            ),
            Diagnostic::HistoryUnavailable {
                dependency,
                message,
            } => write!(f, "could not get changes of {}: {}", dependency, message),
            Diagnostic::MalformedLogLine { directory, line } => write!(
                f,
                "could not parse history line {:?} of repository {}",
                line,
                directory.display()
            ),
        }
    }
}
