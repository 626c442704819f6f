//! Sanitized security identifiers.

use std::fmt;

/// A security identifier safe for use as a series key and file stem.
///
/// Every character outside `[A-Za-z0-9]` is replaced by `_`, so the
/// identifier of `"ACME Corp."` is `ACME_Corp_`. Ordering is plain string
/// ordering, which fixes chart generation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SecurityId(String);

impl SecurityId {
    /// Sanitizes a raw security name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(
            name.chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect(),
        )
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name shown in chart titles (`_` reverted to spaces).
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0.replace('_', " ")
    }

    /// Returns the file name for an artifact with the given extension.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.0)
    }
}

impl fmt::Display for SecurityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for SecurityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_non_alphanumeric() {
        assert_eq!(SecurityId::from_name("BRK.B").as_str(), "BRK_B");
        assert_eq!(SecurityId::from_name("S&P 500").as_str(), "S_P_500");
        assert_eq!(SecurityId::from_name("ABC123").as_str(), "ABC123");
    }

    #[test]
    fn test_sanitize_non_ascii() {
        // One replacement per character, not per byte.
        assert_eq!(SecurityId::from_name("Café").as_str(), "Caf_");
    }

    #[test]
    fn test_display_name() {
        let id = SecurityId::from_name("First Bank Ltd");
        assert_eq!(id.as_str(), "First_Bank_Ltd");
        assert_eq!(id.display_name(), "First Bank Ltd");
    }

    #[test]
    fn test_file_name() {
        let id = SecurityId::from_name("ABC");
        assert_eq!(id.file_name("png"), "ABC.png");
    }

    #[test]
    fn test_ordering() {
        let mut ids = vec![
            SecurityId::from_name("b"),
            SecurityId::from_name("A"),
            SecurityId::from_name("a"),
        ];
        ids.sort();
        let names: Vec<_> = ids.iter().map(SecurityId::as_str).collect();
        assert_eq!(names, vec!["A", "a", "b"]);
    }
}
