//! Sync entry type.
//!
//! One `SyncEntry` describes a single top-level child of the source
//! directory. Entries are constructed fresh per run from one directory
//! listing snapshot and are never re-read mid-pass.

use std::path::{Path, PathBuf};

/// One top-level child of the source directory being mirrored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEntry {
    /// Bare file or directory name (no path separators)
    pub name: String,
    /// Full path of the entry inside the source
    pub source_path: PathBuf,
    /// Full path the entry maps to inside the destination
    pub dest_path: PathBuf,
    /// Whether the source entry is a directory, queried at decision time
    pub is_directory: bool,
}

impl SyncEntry {
    /// Build the entry for `name` under the given source and destination roots
    pub fn new(name: String, source_root: &Path, dest_root: &Path) -> Self {
        let source_path = source_root.join(&name);
        let dest_path = dest_root.join(&name);
        let is_directory = source_path.is_dir();

        Self {
            name,
            source_path,
            dest_path,
            is_directory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_entry_paths() {
        let entry = SyncEntry::new(
            "lib".to_string(),
            Path::new("/src"),
            Path::new("/dst"),
        );
        assert_eq!(entry.source_path, PathBuf::from("/src/lib"));
        assert_eq!(entry.dest_path, PathBuf::from("/dst/lib"));
    }

    #[test]
    fn test_entry_detects_directories() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("subdir")).unwrap();
        fs::write(temp.path().join("file.txt"), "x").unwrap();

        let dir_entry = SyncEntry::new("subdir".to_string(), temp.path(), Path::new("/dst"));
        assert!(dir_entry.is_directory);

        let file_entry = SyncEntry::new("file.txt".to_string(), temp.path(), Path::new("/dst"));
        assert!(!file_entry.is_directory);

        let gone_entry = SyncEntry::new("missing".to_string(), temp.path(), Path::new("/dst"));
        assert!(!gone_entry.is_directory);
    }
}
