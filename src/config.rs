//! Changelog generator configuration
//!
//! Reads settings from an optional `changelog.toml` in the project root.
//! Every key is optional and falls back to the default shown below:
//!
//! ```toml
//! package_patterns = ["^ox/ox-.*"]
//! lock_file = "composer.lock"
//! changelog = "CHANGELOG.md"
//! modules_dir = "module"
//! name_prefixes = ["ox-"]
//! commit_url = "http://gitlab.example.com/{namespace}/{repository}/commit/{commit}"
//! issue_url = "http://redmine.example.com/issues/{id}"
//! changelog_offset = 0
//! trailing_blank_lines = 1
//! ```

use crate::diff::DependencyFilter;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "changelog.toml";

/// Settings consumed by the changelog pipeline
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Regular expressions selecting the lockfile packages to report on
    pub package_patterns: Vec<String>,
    /// Lockfile path, relative to the repository root
    pub lock_file: String,
    /// Changelog document
    pub changelog: PathBuf,
    /// Directory holding the dependency checkouts
    pub modules_dir: PathBuf,
    /// Prefixes dropped from the package part of a name before building its path
    pub name_prefixes: Vec<String>,
    /// Commit link template with `{namespace}`, `{repository}` and `{commit}`
    pub commit_url: String,
    /// Issue link template with `{id}`
    pub issue_url: String,
    /// Byte offset in the changelog where new sections are inserted
    pub changelog_offset: usize,
    /// Number of blank lines written after an inserted section
    pub trailing_blank_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_patterns: vec!["^ox/ox-.*".to_string()],
            lock_file: "composer.lock".to_string(),
            changelog: PathBuf::from("CHANGELOG.md"),
            modules_dir: PathBuf::from("module"),
            name_prefixes: vec!["ox-".to_string()],
            commit_url: "http://gitlab.example.com/{namespace}/{repository}/commit/{commit}"
                .to_string(),
            issue_url: "http://redmine.example.com/issues/{id}".to_string(),
            changelog_offset: 0,
            trailing_blank_lines: 1,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse configuration from TOML content
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::toml_parse_error(path, e.to_string()))
    }

    /// Read `changelog.toml` from a directory, or use defaults when it is absent
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Compile the package patterns into a filter
    pub fn package_filter(&self) -> Result<DependencyFilter, ConfigError> {
        DependencyFilter::new(&self.package_patterns)
    }

    /// Changelog location for a project root
    pub fn changelog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.changelog)
    }

    /// Local checkout directory of a dependency
    pub fn checkout_path(&self, root: &Path, name: &str) -> PathBuf {
        root.join(&self.modules_dir).join(self.display_path(name))
    }

    /// Display path of a dependency, e.g. `ox/ox-foo-bar` becomes `FooBar`
    pub fn display_path(&self, name: &str) -> String {
        let (_, package) = split_name(name);
        let package = self
            .name_prefixes
            .iter()
            .find_map(|prefix| package.strip_prefix(prefix.as_str()))
            .unwrap_or(package);

        package
            .split(['-', ' '])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect()
    }

    /// Link to a commit in the hosted repository of a dependency
    pub fn commit_url(&self, name: &str, commit: &str) -> String {
        let (namespace, repository) = split_name(name);
        self.commit_url
            .replace("{namespace}", namespace)
            .replace("{repository}", repository)
            .replace("{commit}", commit)
    }

    /// Link to an issue in the tracker
    pub fn issue_url(&self, id: &str) -> String {
        self.issue_url.replace("{id}", id)
    }
}

/// Split `namespace/repository`; a name without a slash has an empty namespace
fn split_name(name: &str) -> (&str, &str) {
    name.split_once('/').unwrap_or(("", name))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
