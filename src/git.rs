//! git integration
//!
//! This module provides:
//! - A runner trait so the core can be exercised without a git executable
//! - The system runner that spawns `git` inside a given directory
//! - Typed helpers for the queries the changelog pipeline needs

use crate::error::GitError;
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Trait for running git commands
///
/// The working directory is always passed explicitly; implementations must not
/// depend on or change the process working directory.
pub trait GitRunner {
    /// Run git with the given arguments in `working_dir` and return its stdout
    fn run(&self, args: &[&str], working_dir: &Path) -> Result<String, GitError>;
}

/// Git runner that executes the real `git` binary
#[derive(Debug, Default)]
pub struct SystemGit;

impl SystemGit {
    /// Create a new system git runner
    pub fn new() -> Self {
        Self
    }

    fn run_command(&self, args: &[&str], working_dir: &Path) -> std::io::Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(working_dir)
            .output()
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str], working_dir: &Path) -> Result<String, GitError> {
        debug!(dir = %working_dir.display(), "git {}", args.join(" "));

        let output = self
            .run_command(args, working_dir)
            .map_err(|e| GitError::spawn_failed(args, working_dir, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::command_failed(args, working_dir, stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// `git show-ref <label>`
pub fn show_ref<G: GitRunner + ?Sized>(
    git: &G,
    label: &str,
    repository: &Path,
) -> Result<String, GitError> {
    git.run(&["show-ref", label], repository)
}

/// `git rev-parse --verify --quiet <label>^{commit}`
pub fn rev_parse_commit<G: GitRunner + ?Sized>(
    git: &G,
    label: &str,
    repository: &Path,
) -> Result<String, GitError> {
    let commit = format!("{}^{{commit}}", label);
    git.run(&["rev-parse", "--verify", "--quiet", commit.as_str()], repository)
}

/// `git show <revision>:<file>`
pub fn show_file<G: GitRunner + ?Sized>(
    git: &G,
    revision: &str,
    file: &str,
    repository: &Path,
) -> Result<String, GitError> {
    let object = format!("{}:{}", revision, file);
    git.run(&["show", object.as_str()], repository)
}

/// One-line log of `to`, or of the range `from..to` when `from` is given
pub fn log_oneline<G: GitRunner + ?Sized>(
    git: &G,
    to: &str,
    from: Option<&str>,
    repository: &Path,
) -> Result<String, GitError> {
    let range = match from {
        Some(from) => format!("{}..{}", from, to),
        None => to.to_string(),
    };
    git.run(
        &["log", "--pretty=oneline", "--no-decorate", "--no-color", range.as_str()],
        repository,
    )
}

/// Name of the branch currently checked out
pub fn current_branch<G: GitRunner + ?Sized>(
    git: &G,
    repository: &Path,
) -> Result<String, GitError> {
    let output = git.run(&["rev-parse", "--abbrev-ref", "HEAD"], repository)?;
    Ok(output.trim().to_string())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Git runner that answers from a fixed script and records every call
    #[derive(Default)]
    pub struct ScriptedGit {
        responses: HashMap<String, Result<String, String>>,
        pub calls: RefCell<Vec<(String, PathBuf)>>,
    }

    impl ScriptedGit {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, args: &str, stdout: &str) -> Self {
            self.responses
                .insert(args.to_string(), Ok(stdout.to_string()));
            self
        }

        pub fn fail(mut self, args: &str, stderr: &str) -> Self {
            self.responses
                .insert(args.to_string(), Err(stderr.to_string()));
            self
        }
    }

    impl GitRunner for ScriptedGit {
        fn run(&self, args: &[&str], working_dir: &Path) -> Result<String, GitError> {
            let key = args.join(" ");
            self.calls
                .borrow_mut()
                .push((key.clone(), working_dir.to_path_buf()));
            match self.responses.get(&key) {
                Some(Ok(stdout)) => Ok(stdout.clone()),
                Some(Err(stderr)) => Err(GitError::command_failed(args, working_dir, stderr.clone())),
                None => Err(GitError::command_failed(args, working_dir, "unexpected command")),
            }
        }
    }
}
