//! Detection and best-effort installation of the external link utility.
//!
//! Directory hardlinks need the `hln` tool (hardlink-osx). Its absence
//! is not fatal: the caller keeps running and individual directory
//! operations fail on their own.

use std::process::Command;
use tracing::{info, warn};

use hlsync_core::error::{HlsyncError, SyncResult};

/// Name of the external hardlink utility
pub const HLN_TOOL: &str = "hln";

/// Check whether `tool` is reachable on PATH
pub fn is_installed(tool: &str) -> bool {
    which::which(tool).is_ok()
}

/// Ensure `tool` is installed, attempting `brew install hardlink-osx`
/// on macOS when it is missing.
pub fn ensure_installed(tool: &str) -> SyncResult<()> {
    if is_installed(tool) {
        return Ok(());
    }

    if cfg!(target_os = "macos") {
        info!("{} does not exist, installing via brew", tool);
        match Command::new("brew").args(["install", "hardlink-osx"]).output() {
            Ok(output) if output.status.success() && is_installed(tool) => {
                return Ok(());
            }
            Ok(output) => {
                warn!(
                    "brew install hardlink-osx failed: {}",
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
            Err(e) => {
                warn!("could not run brew: {}", e);
            }
        }
    }

    Err(HlsyncError::ToolUnavailable {
        tool: tool.to_string(),
    })
}
