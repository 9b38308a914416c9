//! Production link manager.
//!
//! Files are hardlinked through `std::fs::hard_link`. Whole directories
//! cannot be hardlinked portably, so they are delegated to the external
//! `hln` utility as an atomic unit; the engine never descends into
//! directory contents itself.

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use hlsync_core::error::{HlsyncError, SyncResult};

use super::{install, LinkManager, HLN_TOOL};

/// Link manager backed by the standard library and the `hln` tool
#[derive(Debug, Default)]
pub struct SystemLinker;

impl SystemLinker {
    pub fn new() -> Self {
        Self
    }

    fn link_directory(&self, from: &Path, to: &Path) -> SyncResult<()> {
        let output = Command::new(HLN_TOOL)
            .arg(from)
            .arg(to)
            .output()
            .map_err(|e| HlsyncError::LinkFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                message: format!("could not run {}: {}", HLN_TOOL, e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(HlsyncError::LinkFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }

    fn unlink_directory(&self, path: &Path) -> SyncResult<()> {
        let output = Command::new(HLN_TOOL)
            .arg("-u")
            .arg(path)
            .output()
            .map_err(|e| HlsyncError::UnlinkFailed {
                path: path.to_path_buf(),
                message: format!("could not run {}: {}", HLN_TOOL, e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(HlsyncError::UnlinkFailed {
                path: path.to_path_buf(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl LinkManager for SystemLinker {
    fn ensure_available(&self) -> SyncResult<()> {
        install::ensure_installed(HLN_TOOL)
    }

    fn create_link(&self, from: &Path, to: &Path) -> SyncResult<()> {
        if from.is_dir() {
            self.link_directory(from, to)
        } else {
            fs::hard_link(from, to).map_err(|e| HlsyncError::LinkFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                message: e.to_string(),
            })
        }
    }

    fn remove_link(&self, path: &Path) -> SyncResult<()> {
        // symlink_metadata so a dangling symlink still counts as present
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(HlsyncError::UnlinkFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        if meta.is_dir() {
            self.unlink_directory(path)
        } else {
            match fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(HlsyncError::UnlinkFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }),
            }
        }
    }
}
