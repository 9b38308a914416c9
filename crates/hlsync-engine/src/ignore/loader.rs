//! Ignore-file loading.
//!
//! Reads the configured ignore file from the source root and turns each
//! line into an `IgnorePattern`. A missing or empty file is a valid
//! degenerate input, never an error.

use std::fs;
use std::path::Path;
use tracing::debug;

use super::IgnorePattern;

/// Load ignore patterns from `<source_root>/<ignore_file>`.
///
/// The whole content is trimmed, split on newlines, and each line
/// trimmed again. Blank lines are dropped: an empty string compiles to a
/// regex that matches every name, which would silently exclude the whole
/// source tree.
pub fn load_ignore_rules(source_root: &Path, ignore_file: &str) -> Vec<IgnorePattern> {
    let path = source_root.join(ignore_file);
    let Ok(content) = fs::read_to_string(&path) else {
        debug!("no ignore file at {}", path.display());
        return Vec::new();
    };

    let patterns: Vec<IgnorePattern> = content
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(IgnorePattern::new)
        .collect();

    debug!(
        "loaded {} ignore pattern(s) from {}",
        patterns.len(),
        path.display()
    );
    patterns
}
