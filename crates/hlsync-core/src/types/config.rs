//! Run configuration types.
//!
//! A `SyncConfig` is constructed once at the CLI boundary and passed by
//! reference into the engine. Core logic never reads process arguments or
//! other ambient state.

use std::path::{Path, PathBuf};

/// Operating mode for one run, derived once from invocation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Mirror source entries into the destination as hardlinks
    Link,
    /// Remove previously mirrored entries; never creates anything
    Unlink,
}

/// Immutable configuration for a single mirroring pass
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Directory whose top-level children are enumerated
    pub source: PathBuf,
    /// Directory receiving (or losing) the hardlinked entries
    pub dest: PathBuf,
    pub mode: Mode,
    /// File name read from the source root for ignore patterns,
    /// e.g. ".npmignore" or ".gitignore"
    pub ignore_file: String,
}

impl SyncConfig {
    /// Default ignore file consulted in the source root
    pub const DEFAULT_IGNORE_FILE: &'static str = ".npmignore";

    /// Configuration for a link-mode pass from `source` into `dest`
    pub fn link(source: PathBuf, dest: PathBuf) -> Self {
        Self {
            source,
            dest,
            mode: Mode::Link,
            ignore_file: Self::DEFAULT_IGNORE_FILE.to_string(),
        }
    }

    /// Configuration for an unlink-mode pass over `target`.
    ///
    /// Unlink mode operates on a single directory: its entries are
    /// enumerated and their links removed in place, so the target serves
    /// as both source listing and destination.
    pub fn unlink(target: PathBuf) -> Self {
        Self {
            source: target.clone(),
            dest: target,
            mode: Mode::Unlink,
            ignore_file: Self::DEFAULT_IGNORE_FILE.to_string(),
        }
    }

    /// Override which ignore file is read from the source root
    pub fn with_ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_file = name.into();
        self
    }

    /// Path of the ignore file inside the source root
    pub fn ignore_file_path(&self) -> PathBuf {
        self.source.join(&self.ignore_file)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }
}
