//! Ignore pattern representation and matching.
//!
//! One `IgnorePattern` wraps a single raw ignore-file line. Matching
//! follows the common ignore-file convention for directory suffixes: the
//! pattern is run against `name/` when the entry is a directory and
//! against `name` verbatim otherwise, so a pattern ending in `/` only
//! matches directories. This is a best-effort approximation, not a full
//! gitignore implementation: there is no `!` negation, no `**` glob
//! expansion and no anchoring beyond what the regex engine provides.

use regex::Regex;
use tracing::warn;

/// Capability for deciding whether a name is ignored.
///
/// The regex-backed `IgnorePattern` is one strategy; a glob or full
/// gitignore matcher can implement this without touching the entry
/// filter.
pub trait PatternMatcher {
    fn matches(&self, name: &str, is_directory: bool) -> bool;
}

/// A single ignore-file line, matched literally and as a regex
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    raw: String,
    regex: Option<Regex>,
}

impl IgnorePattern {
    /// Wrap one raw ignore-file line.
    ///
    /// Lines that fail regex compilation degrade to literal-equality
    /// matching only.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let regex = match Regex::new(&raw) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("ignore pattern '{}' is not a valid regex: {}", raw, e);
                None
            }
        };

        Self { raw, regex }
    }

    /// The raw ignore-file line this pattern was built from
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl PatternMatcher for IgnorePattern {
    fn matches(&self, name: &str, is_directory: bool) -> bool {
        if self.raw == name {
            return true;
        }

        let Some(regex) = &self.regex else {
            return false;
        };

        if is_directory {
            regex.is_match(&format!("{}/", name))
        } else {
            regex.is_match(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_equality() {
        let pattern = IgnorePattern::new("dist");
        assert!(pattern.matches("dist", false));
        assert!(pattern.matches("dist", true));
        // the raw text doubles as an unanchored regex, so it also
        // matches as a substring
        assert!(pattern.matches("distance", false));
    }

    #[test]
    fn test_directory_suffix_convention() {
        let pattern = IgnorePattern::new("build/");
        assert!(pattern.matches("build", true));
        assert!(!pattern.matches("build", false));
    }

    #[test]
    fn test_regex_semantics() {
        let pattern = IgnorePattern::new(r"^\.env");
        assert!(pattern.matches(".env", false));
        assert!(pattern.matches(".env.local", false));
        assert!(!pattern.matches("env", false));
    }

    #[test]
    fn test_invalid_regex_degrades_to_literal() {
        let pattern = IgnorePattern::new("foo[");
        assert!(pattern.matches("foo[", false));
        assert!(!pattern.matches("foobar", false));
    }
}
