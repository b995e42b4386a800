//! Changelog generation orchestrator
//!
//! This module provides:
//! - Workflow coordination: resolve → load snapshots → diff → history → format → insert
//! - Dry-run mode support
//! - Collection of recoverable diagnostics while the run continues

use crate::changelog;
use crate::config::Config;
use crate::diff::diff;
use crate::domain::{DependencyChanges, Diagnostic, RevisionId};
use crate::error::AppError;
use crate::git::{self, GitRunner};
use crate::history::collect_history;
use crate::manifest::load_snapshot;
use crate::output::MarkdownFormatter;
use crate::progress::Progress;
use crate::resolver::resolve;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::{debug, info};

/// Orchestrator for coordinating the changelog workflow
pub struct Orchestrator<G: GitRunner> {
    config: Config,
    /// Root of the project repository holding the lockfile
    root: PathBuf,
    git: G,
    dry_run: bool,
    show_progress: bool,
    date: NaiveDate,
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorResult {
    /// Version label used in the section header
    pub version: String,
    /// Rendered markdown section
    pub section: String,
    /// Changed dependencies in lockfile order, with their commits
    pub changes: Vec<DependencyChanges>,
    /// Recoverable problems encountered during the run
    pub diagnostics: Vec<Diagnostic>,
    /// Changelog that was updated; None in dry-run mode
    pub changelog: Option<PathBuf>,
}

impl OrchestratorResult {
    /// Total number of commits listed in the section
    pub fn total_commits(&self) -> usize {
        self.changes.iter().map(|c| c.commits.len()).sum()
    }

    /// Number of dependencies that got a subsection
    pub fn reported_dependencies(&self) -> usize {
        self.changes.iter().filter(|c| c.has_commits()).count()
    }
}

impl<G: GitRunner> Orchestrator<G> {
    /// Create a new orchestrator for the project at `root`
    pub fn new(config: Config, root: impl Into<PathBuf>, git: G) -> Self {
        Self {
            config,
            root: root.into(),
            git,
            dry_run: false,
            show_progress: false,
            date: Local::now().date_naive(),
        }
    }

    /// Print the section instead of writing the changelog
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Show a progress bar while collecting histories
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Use a fixed date in the section header (for testing)
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Generate the changelog section for the changes since `old_label`
    ///
    /// Without `new_label` the working-tree lockfile is compared and the current
    /// branch name becomes the version.
    pub fn run(&self, old_label: &str, new_label: Option<&str>) -> Result<OrchestratorResult, AppError> {
        let filter = self.config.package_filter()?;
        let lock_file = self.config.lock_file.as_str();
        let mut diagnostics = Vec::new();

        // Step 1: Resolve revisions
        let old_rev = resolve(old_label, &self.root, &self.git)?;
        let (version, new_rev): (String, Option<RevisionId>) = match new_label {
            Some(label) => (label.to_string(), Some(resolve(label, &self.root, &self.git)?)),
            None => {
                info!("No new revision provided. Using current state of {}", lock_file);
                (git::current_branch(&self.git, &self.root)?, None)
            }
        };
        debug!(old = %old_rev, new = ?new_rev, version = %version, "resolved revisions");

        // Step 2: Load both snapshots
        let new_snapshot =
            load_snapshot(new_rev.as_ref(), lock_file, &self.root, &filter, &self.git);
        let old_snapshot = load_snapshot(Some(&old_rev), lock_file, &self.root, &filter, &self.git);
        diagnostics.extend(new_snapshot.diagnostics);
        diagnostics.extend(old_snapshot.diagnostics);

        // Step 3: Diff
        let records = diff(&old_snapshot.snapshot, &new_snapshot.snapshot, &filter);
        info!("{} dependencies changed", records.len());

        // Step 4: Collect per-dependency history
        let mut progress = Progress::new(self.show_progress);
        progress.start(records.len() as u64, "Collecting history");

        let mut changes = Vec::with_capacity(records.len());
        for record in records {
            progress.set_message(&record.dependency_name);
            let checkout = self
                .config
                .checkout_path(&self.root, &record.dependency_name);
            let outcome = progress.suspend(|| {
                collect_history(
                    &self.git,
                    &record.dependency_name,
                    &checkout,
                    &record.to_revision,
                    record.from_revision.as_ref(),
                )
            });
            diagnostics.extend(outcome.diagnostics);
            changes.push(DependencyChanges::new(record, outcome.commits));
            progress.inc();
        }
        progress.finish_and_clear();

        // Step 5: Format
        let section =
            MarkdownFormatter::with_date(&self.config, self.date).format(&version, &changes);

        // Step 6: Insert (unless dry-run)
        let changelog = if self.dry_run {
            None
        } else {
            let path = self.config.changelog_path(&self.root);
            changelog::insert(
                &path,
                &section,
                self.config.changelog_offset,
                self.config.trailing_blank_lines,
            )?;
            info!("Updated {}", path.display());
            Some(path)
        };

        Ok(OrchestratorResult {
            version,
            section,
            changes,
            diagnostics,
            changelog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolutionError;
    use crate::git::testing::ScriptedGit;
    use std::fs;

    const OLD: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const NEW: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
    const FOO_OLD: &str = "1111111111111111111111111111111111111111";
    const FOO_NEW: &str = "2222222222222222222222222222222222222222";
    const C1: &str = "3333333333333333333333333333333333333333";

    fn lock(entries: &[(&str, &str)]) -> String {
        let packages: Vec<String> = entries
            .iter()
            .map(|(name, rev)| {
                format!(r#"{{"name": "{}", "source": {{"reference": "{}"}}}}"#, name, rev)
            })
            .collect();
        format!(r#"{{"packages": [{}]}}"#, packages.join(","))
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_unresolvable_old_label_is_fatal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let git = ScriptedGit::new();
        let orchestrator = Orchestrator::new(Config::default(), temp_dir.path(), git);

        let err = orchestrator.run("missing-tag", Some(NEW)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Resolution(ResolutionError::Unresolved { .. })
        ));
    }

    #[test]
    fn test_dry_run_collects_changes_without_writing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("module/Foo")).unwrap();
        fs::write(root.join("CHANGELOG.md"), "# Changelog\n").unwrap();

        let git = ScriptedGit::new()
            .respond(
                &format!("show {}:composer.lock", OLD),
                &lock(&[("ox/ox-foo", FOO_OLD), ("ox/ox-gone", FOO_OLD)]),
            )
            .respond(
                &format!("show {}:composer.lock", NEW),
                &lock(&[("ox/ox-foo", FOO_NEW), ("vendor/other", FOO_NEW)]),
            )
            .respond(
                &format!(
                    "log --pretty=oneline --no-decorate --no-color {}..{}",
                    FOO_OLD, FOO_NEW
                ),
                &format!("{} Fix #9\n", C1),
            );

        let orchestrator = Orchestrator::new(Config::default(), root, git)
            .with_dry_run(true)
            .with_date(date());
        let result = orchestrator.run(OLD, Some(NEW)).unwrap();

        assert_eq!(result.version, NEW);
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.total_commits(), 1);
        assert!(result.changelog.is_none());
        assert!(result.section.starts_with(&format!("##  {} (2026-10-19)\n", NEW)));
        assert!(result.section.contains("### Foo\n"));
        assert_eq!(
            fs::read_to_string(root.join("CHANGELOG.md")).unwrap(),
            "# Changelog\n"
        );
    }

    #[test]
    fn test_working_tree_snapshot_and_branch_version() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("composer.lock"), lock(&[("ox/ox-new", FOO_NEW)])).unwrap();
        fs::write(root.join("CHANGELOG.md"), "").unwrap();

        let git = ScriptedGit::new()
            .respond("show-ref v1.0", &format!("{} refs/tags/v1.0\n", OLD))
            .respond("rev-parse --abbrev-ref HEAD", "develop\n")
            .respond(&format!("show {}:composer.lock", OLD), &lock(&[]));

        let orchestrator = Orchestrator::new(Config::default(), root, git).with_date(date());
        let result = orchestrator.run("v1.0", None).unwrap();

        assert_eq!(result.version, "develop");
        assert_eq!(result.changes.len(), 1);
        assert!(result.changes[0].record.is_new());
        // module/New does not exist
        assert!(matches!(
            result.diagnostics[0],
            Diagnostic::CheckoutMissing { .. }
        ));
        assert_eq!(
            fs::read_to_string(root.join("CHANGELOG.md")).unwrap(),
            "##  develop (2026-10-19)\n"
        );
        assert_eq!(result.changelog, Some(root.join("CHANGELOG.md")));
    }

    #[test]
    fn test_missing_old_lockfile_is_recoverable() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();

        let git = ScriptedGit::new()
            .fail(&format!("show {}:composer.lock", OLD), "fatal: path does not exist")
            .respond(&format!("show {}:composer.lock", NEW), &lock(&[]));

        let orchestrator = Orchestrator::new(Config::default(), root, git).with_dry_run(true);
        let result = orchestrator.run(OLD, Some(NEW)).unwrap();

        assert!(result.changes.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert!(matches!(
            result.diagnostics[0],
            Diagnostic::InvalidSnapshot { .. }
        ));
    }

    #[test]
    fn test_missing_changelog_is_fatal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let git = ScriptedGit::new()
            .respond(&format!("show {}:composer.lock", OLD), &lock(&[]))
            .respond(&format!("show {}:composer.lock", NEW), &lock(&[]));

        let orchestrator = Orchestrator::new(Config::default(), temp_dir.path(), git);
        let err = orchestrator.run(OLD, Some(NEW)).unwrap_err();
        assert!(matches!(err, AppError::Changelog(_)));
    }

    #[test]
    fn test_unusable_old_reference_is_reported() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("module/Foo")).unwrap();

        let old_lock = r#"{"packages": [
            {"name": "ox/ox-foo", "source": {"reference": "1.0.0"}},
            {"name": "acme/meta", "type": "metapackage"}
        ]}"#;
        let git = ScriptedGit::new()
            .respond(&format!("show {}:composer.lock", OLD), old_lock)
            .respond(
                &format!("show {}:composer.lock", NEW),
                &lock(&[("ox/ox-foo", FOO_NEW)]),
            )
            .respond(
                &format!("log --pretty=oneline --no-decorate --no-color {}", FOO_NEW),
                &format!("{} Initial import\n", C1),
            );

        let orchestrator = Orchestrator::new(Config::default(), root, git).with_dry_run(true);
        let result = orchestrator.run(OLD, Some(NEW)).unwrap();

        assert_eq!(result.changes.len(), 1);
        assert!(result.changes[0].record.is_new());
        assert_eq!(result.diagnostics.len(), 1);
        match &result.diagnostics[0] {
            Diagnostic::UnusableReference { dependency, .. } => {
                assert_eq!(dependency, "ox/ox-foo")
            }
            other => panic!("unexpected diagnostic: {:?}", other),
        }
    }
}
