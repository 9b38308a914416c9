//! Path utilities for safe mirroring operations.
//!
//! Provides lexical path normalization and the self-containment guard
//! that stops a pass from hardlinking a directory into itself.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` components lexically.
///
/// Symlinks are not resolved; `..` segments that would climb above the
/// path's root are kept as-is.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else if matches!(parts.last(), Some(Component::RootDir | Component::Prefix(_))) {
                    // `/..` stays at the root
                } else {
                    parts.push(component);
                }
            }
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}

/// Resolve a possibly-relative path against the current working directory
/// and normalize it lexically.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        normalize_path(&base.join(path))
    }
}

/// Check whether `dest` is the same path as `source` or nested inside it.
///
/// Both paths are absolutized and normalized before comparison, and the
/// prefix test is component-wise, so `/a/bc` is not considered inside
/// `/a/b`. A `true` result means the operation is unsafe and the entry
/// must be skipped.
pub fn is_self_contained(source: &Path, dest: &Path) -> bool {
    let source = absolutize(source);
    let dest = absolutize(dest);

    dest == source || dest.starts_with(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(
            normalize_path(Path::new("./src/../lib/file.rs")),
            PathBuf::from("lib/file.rs")
        );
        // climbing above the root is clamped
        assert_eq!(normalize_path(Path::new("/../x")), PathBuf::from("/x"));
        // relative paths keep leading parent components
        assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
    }

    #[test]
    fn test_self_containment_nested() {
        assert!(is_self_contained(Path::new("/a/b"), Path::new("/a/b/c")));
        assert!(is_self_contained(Path::new("/a/b"), Path::new("/a/b")));
        assert!(is_self_contained(
            Path::new("/a/b"),
            Path::new("/a/b/c/d/e")
        ));
    }

    #[test]
    fn test_self_containment_disjoint() {
        assert!(!is_self_contained(Path::new("/a/b"), Path::new("/x/y")));
        // sibling with a common name prefix is not containment
        assert!(!is_self_contained(Path::new("/a/b"), Path::new("/a/bc")));
        // destination above the source is fine
        assert!(!is_self_contained(Path::new("/a/b"), Path::new("/a")));
    }

    #[test]
    fn test_self_containment_sees_through_dot_segments() {
        assert!(is_self_contained(
            Path::new("/a/b"),
            Path::new("/a/./b/../b/c")
        ));
        assert!(!is_self_contained(
            Path::new("/a/b"),
            Path::new("/a/b/../other")
        ));
    }
}
