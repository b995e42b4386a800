//! Markdown changelog section formatter
//!
//! Renders a version header, one subheader per dependency with commits and
//! one bullet per commit:
//!
//! ```text
//! ##  v2.3.0 (2026-10-19)
//! ### Foo
//! - Fix login [#12](http://redmine.example.com/issues/12) ([diff](http://gitlab.example.com/ox/ox-foo/commit/…))
//! ```

use crate::config::Config;
use crate::domain::DependencyChanges;
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Issue references like `#123`
static ISSUE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\d+)").unwrap());

/// Formatter for the markdown changelog section
pub struct MarkdownFormatter<'a> {
    config: &'a Config,
    date: NaiveDate,
}

impl<'a> MarkdownFormatter<'a> {
    /// Create a formatter for sections dated `date`
    pub fn with_date(config: &'a Config, date: NaiveDate) -> Self {
        Self { config, date }
    }

    /// Render the section for `version`
    ///
    /// Dependencies without commits are left out entirely.
    pub fn format(&self, version: &str, changes: &[DependencyChanges]) -> String {
        let mut output = format!("##  {} ({})\n", version, self.date.format("%Y-%m-%d"));

        for change in changes.iter().filter(|c| c.has_commits()) {
            let name = &change.record.dependency_name;
            output.push_str(&format!("### {}\n", self.config.display_path(name)));

            for commit in &change.commits {
                output.push_str(&format!(
                    "- {} ([diff]({}))\n",
                    self.link_issues(&commit.message),
                    self.config.commit_url(name, commit.revision_id.as_str())
                ));
            }
        }

        output
    }

    /// Rewrite `#<digits>` references as links to the issue tracker
    pub fn link_issues(&self, message: &str) -> String {
        ISSUE_RE
            .replace_all(message, |caps: &Captures| {
                format!("[{}]({})", &caps[0], self.config.issue_url(&caps[1]))
            })
            .into_owned()
    }
}
