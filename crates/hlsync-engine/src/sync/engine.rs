//! Sync engine implementation.
//!
//! The pass is strictly sequential per entry: each destination slot is
//! pre-cleaned, then relinked, to completion before the next entry
//! starts. Only setup failures abort the run; everything after that is
//! isolated per entry so the pass makes maximal forward progress.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use hlsync_core::error::HlsyncError;
use hlsync_core::types::{Mode, SyncConfig, SyncEntry};
use hlsync_core::utils::is_self_contained;

use crate::ignore::{load_ignore_rules, should_skip, DEFAULT_BLACKLIST};
use crate::link::LinkManager;
use crate::EngineResult;

/// Counters for one completed pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub linked: usize,
    pub unlinked: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// One mirroring pass over an immutable configuration
pub struct SyncEngine<'a> {
    config: &'a SyncConfig,
    linker: &'a dyn LinkManager,
}

impl<'a> SyncEngine<'a> {
    pub fn new(config: &'a SyncConfig, linker: &'a dyn LinkManager) -> Self {
        Self { config, linker }
    }

    /// Run the pass.
    ///
    /// Fails fast only on setup preconditions (missing source,
    /// destination directory creation); per-entry failures are counted
    /// in the report and the pass continues.
    pub fn run(&self) -> EngineResult<SyncReport> {
        let source = self.config.source();
        let dest = self.config.dest();

        if !source.exists() {
            return Err(HlsyncError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }

        // Nothing may be created when only removing links
        if self.config.mode == Mode::Link {
            fs::create_dir_all(dest).map_err(|e| HlsyncError::DestDirCreate {
                path: dest.to_path_buf(),
                source: e,
            })?;
        }

        let patterns = load_ignore_rules(source, &self.config.ignore_file);

        // One listing snapshot at the start of the pass; never re-read
        let names = self.list_source(source)?;

        let mut report = SyncReport::default();
        for name in names {
            let entry = SyncEntry::new(name, source, dest);
            self.process_entry(&entry, &patterns, &mut report);
        }

        Ok(report)
    }

    fn list_source(&self, source: &Path) -> EngineResult<Vec<String>> {
        let reader = fs::read_dir(source).map_err(|e| {
            HlsyncError::io(format!("failed to list '{}'", source.display()), e)
        })?;

        let mut names = Vec::new();
        for dir_entry in reader {
            let dir_entry = dir_entry.map_err(|e| {
                HlsyncError::io(format!("failed to list '{}'", source.display()), e)
            })?;
            names.push(dir_entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn process_entry(
        &self,
        entry: &SyncEntry,
        patterns: &[crate::ignore::IgnorePattern],
        report: &mut SyncReport,
    ) {
        if should_skip(entry, DEFAULT_BLACKLIST, patterns) {
            debug!("skipping ignored entry '{}'", entry.name);
            report.skipped += 1;
            return;
        }

        // In unlink mode source and destination are the same directory,
        // so every slot would trip the guard; the guard protects link
        // creation, which unlink mode never performs.
        if self.config.mode == Mode::Link
            && is_self_contained(&entry.source_path, &entry.dest_path)
        {
            warn!(
                "skipping '{}': destination {} is contained in its source",
                entry.name,
                entry.dest_path.display()
            );
            report.skipped += 1;
            return;
        }

        // Idempotent pre-clean; failure here never aborts the run, but a
        // slot that existed and would not go is worth a trace
        if let Err(e) = self.linker.remove_link(&entry.dest_path) {
            debug!("pre-clean of '{}' failed: {}", entry.dest_path.display(), e);
        }

        if self.config.mode == Mode::Unlink {
            info!("unlinking {}", entry.dest_path.display());
            report.unlinked += 1;
            return;
        }

        if let Err(e) = clear_slot(&entry.dest_path) {
            warn!("could not clear '{}': {}", entry.dest_path.display(), e);
            report.failed += 1;
            return;
        }

        info!(
            "hardlinking {} to {}",
            entry.source_path.display(),
            entry.dest_path.display()
        );
        match self.linker.create_link(&entry.source_path, &entry.dest_path) {
            Ok(()) => report.linked += 1,
            Err(e) => {
                warn!("{}", e);
                report.failed += 1;
            }
        }
    }
}

/// Forcibly remove whatever occupies a destination slot, tolerating
/// non-existence
fn clear_slot(path: &Path) -> EngineResult<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(HlsyncError::io(
                format!("failed to inspect '{}'", path.display()),
                e,
            ))
        }
    };

    let removed = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match removed {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(HlsyncError::io(
            format!("failed to clear '{}'", path.display()),
            e,
        )),
    }
}
