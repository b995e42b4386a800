//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ResolutionError: Revision labels that cannot be turned into a full commit id
//! - ConfigError: Issues with the configuration file
//! - GitError: Failures invoking the git executable
//! - ChangelogError: Reading or writing the changelog document

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Revision resolution errors
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// git invocation errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog document errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Errors raised while resolving a revision label
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The label did not resolve to a 40 character commit id
    #[error("unable to resolve '{label}' to a commit id in {repository}")]
    Unresolved { label: String, repository: PathBuf },

    /// A value that should be a commit id has the wrong length
    #[error("'{value}' is not a 40 character commit id")]
    InvalidRevision { value: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// A package pattern is not a valid regular expression
    #[error("invalid package pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Errors related to running git
#[derive(Error, Debug)]
pub enum GitError {
    /// The git executable could not be started
    #[error("failed to run git {args} in {dir}: {source}")]
    SpawnFailed {
        args: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// git exited with a non-zero status
    #[error("git {args} failed in {dir}: {stderr}")]
    CommandFailed {
        args: String,
        dir: PathBuf,
        stderr: String,
    },
}

/// Errors related to the changelog document
#[derive(Error, Debug)]
pub enum ChangelogError {
    /// Failed to read the changelog
    #[error("failed to read changelog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the changelog
    #[error("failed to write changelog {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolutionError {
    /// Creates a new Unresolved error
    pub fn unresolved(label: impl Into<String>, repository: impl Into<PathBuf>) -> Self {
        ResolutionError::Unresolved {
            label: label.into(),
            repository: repository.into(),
        }
    }

    /// Creates a new InvalidRevision error
    pub fn invalid_revision(value: impl Into<String>) -> Self {
        ResolutionError::InvalidRevision {
            value: value.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidPattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl GitError {
    /// Creates a new SpawnFailed error
    pub fn spawn_failed(args: &[&str], dir: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GitError::SpawnFailed {
            args: args.join(" "),
            dir: dir.into(),
            source,
        }
    }

    /// Creates a new CommandFailed error
    pub fn command_failed(args: &[&str], dir: impl Into<PathBuf>, stderr: impl Into<String>) -> Self {
        GitError::CommandFailed {
            args: args.join(" "),
            dir: dir.into(),
            stderr: stderr.into(),
        }
    }
}
