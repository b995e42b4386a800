//! Dependency name filter
//!
//! This module provides the DependencyFilter struct that selects the
//! lockfile packages a changelog is generated for.

use crate::error::ConfigError;
use regex::Regex;

/// Filter selecting dependencies by name pattern
#[derive(Debug, Clone, Default)]
pub struct DependencyFilter {
    /// Compiled name patterns; a name matching any of them is selected
    patterns: Vec<Regex>,
}

impl DependencyFilter {
    /// Compile a filter from regular expressions
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref())
                    .map_err(|e| ConfigError::invalid_pattern(p.as_ref(), e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Number of patterns in the filter
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the filter has no patterns (and so selects nothing)
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check if a dependency should be reported on
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_nothing() {
        let filter = DependencyFilter::default();
        assert!(filter.is_empty());
        assert!(!filter.matches("ox/ox-foo"));
    }

    #[test]
    fn test_single_pattern() {
        let filter = DependencyFilter::new(&["^ox/ox-.*"]).unwrap();
        assert!(filter.matches("ox/ox-foo"));
        assert!(!filter.matches("symfony/console"));
        assert!(!filter.matches("vendor/ox/ox-foo"));
    }

    #[test]
    fn test_any_pattern_matches() {
        let filter = DependencyFilter::new(&["^ox/", "^acme/"]).unwrap();
        assert_eq!(filter.len(), 2);
        assert!(filter.matches("ox/ox-foo"));
        assert!(filter.matches("acme/widgets"));
        assert!(!filter.matches("laminas/laminas-mvc"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = DependencyFilter::new(&["("]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }
}
