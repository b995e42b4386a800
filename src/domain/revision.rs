//! Commit id value type

use crate::error::ResolutionError;
use std::fmt;

/// Length of a full git commit id
pub const REVISION_LENGTH: usize = 40;

/// A full-length commit id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevisionId(String);

impl RevisionId {
    /// Parse a commit id, accepting only values of exactly 40 characters
    pub fn parse(value: impl Into<String>) -> Result<Self, ResolutionError> {
        let value = value.into();
        if Self::is_full_length(&value) {
            Ok(Self(value))
        } else {
            Err(ResolutionError::invalid_revision(value))
        }
    }

    /// Returns true if the value has the length of a full commit id
    pub fn is_full_length(value: &str) -> bool {
        value.chars().count() == REVISION_LENGTH
    }

    /// Returns the commit id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RevisionId {
    type Error = ResolutionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RevisionId> for String {
    fn from(value: RevisionId) -> Self {
        value.0
    }
}

impl AsRef<str> for RevisionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "0123456789abcdef0123456789abcdef01234567";

    #[test]
    fn test_parse_full_length() {
        let rev = RevisionId::parse(FULL).unwrap();
        assert_eq!(rev.as_str(), FULL);
    }

    #[test]
    fn test_parse_rejects_short() {
        assert!(RevisionId::parse("0123456").is_err());
        assert!(RevisionId::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_long() {
        assert!(RevisionId::parse(format!("{}0", FULL)).is_err());
    }

    #[test]
    fn test_display() {
        let rev = RevisionId::parse(FULL).unwrap();
        assert_eq!(format!("{}", rev), FULL);
    }

    #[test]
    fn test_try_from_string() {
        assert!(RevisionId::try_from("abc".to_string()).is_err());
        let rev = RevisionId::try_from(FULL.to_string()).unwrap();
        assert_eq!(String::from(rev), FULL);
    }
}
