//! Ignore rules and entry filtering
//!
//! This module decides which source entries take part in a pass. An
//! entry is excluded when its name sits on the fixed blacklist or when
//! any pattern loaded from the source root's ignore file matches it.

use hlsync_core::types::SyncEntry;

pub mod loader;
pub mod pattern;

// Re-export main types
pub use loader::load_ignore_rules;
pub use pattern::{IgnorePattern, PatternMatcher};

/// Names excluded from every pass, regardless of ignore-file contents
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "node_modules",
    ".git",
    ".github",
    ".gradle",
    "package.json",
    ".gitignore",
    ".npmignore",
    ".idea",
];

/// Decide whether an entry is excluded from the pass.
///
/// Matching is a disjunction: the first blacklist hit or pattern match
/// settles the outcome, and pattern order never changes the result.
pub fn should_skip(entry: &SyncEntry, blacklist: &[&str], patterns: &[IgnorePattern]) -> bool {
    if blacklist.contains(&entry.name.as_str()) {
        return true;
    }

    patterns
        .iter()
        .any(|p| p.matches(&entry.name, entry.is_directory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entry(name: &str, is_directory: bool) -> SyncEntry {
        SyncEntry {
            name: name.to_string(),
            source_path: Path::new("/src").join(name),
            dest_path: Path::new("/dst").join(name),
            is_directory,
        }
    }

    #[test]
    fn test_blacklist_always_skips() {
        for name in DEFAULT_BLACKLIST {
            assert!(
                should_skip(&entry(name, false), DEFAULT_BLACKLIST, &[]),
                "expected '{}' to be skipped",
                name
            );
        }
    }

    #[test]
    fn test_blacklist_skips_even_with_empty_patterns() {
        let patterns = vec![IgnorePattern::new("unrelated")];
        assert!(should_skip(
            &entry("node_modules", true),
            DEFAULT_BLACKLIST,
            &patterns
        ));
    }

    #[test]
    fn test_non_matching_entry_is_kept() {
        let patterns = vec![IgnorePattern::new("build/"), IgnorePattern::new("dist")];
        assert!(!should_skip(
            &entry("keep.txt", false),
            DEFAULT_BLACKLIST,
            &patterns
        ));
    }

    #[test]
    fn test_pattern_match_skips() {
        let patterns = vec![IgnorePattern::new("build/")];
        assert!(should_skip(
            &entry("build", true),
            DEFAULT_BLACKLIST,
            &patterns
        ));
        // a plain file named "build" does not match the directory pattern
        assert!(!should_skip(
            &entry("build", false),
            DEFAULT_BLACKLIST,
            &patterns
        ));
    }

    #[test]
    fn test_any_pattern_suffices() {
        let patterns = vec![
            IgnorePattern::new("nope"),
            IgnorePattern::new(r"\.log$"),
            IgnorePattern::new("other"),
        ];
        assert!(should_skip(
            &entry("debug.log", false),
            DEFAULT_BLACKLIST,
            &patterns
        ));
    }
}
