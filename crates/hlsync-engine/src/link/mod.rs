//! Hardlink management
//!
//! The sync engine never touches the hardlink primitives directly; it
//! talks to a `LinkManager`, keeping the engine platform-agnostic and
//! testable with a fake. The production adapter links files through the
//! standard library and delegates whole-directory links to the external
//! `hln` utility.

use std::path::Path;

use hlsync_core::error::SyncResult;

pub mod install;
pub mod system;

// Re-export main types
pub use install::{ensure_installed, is_installed, HLN_TOOL};
pub use system::SystemLinker;

/// Capability interface over OS-level hardlink primitives
pub trait LinkManager {
    /// Detect the external link utility, attempting a best-effort
    /// install when missing. Failure leaves the run in degraded mode;
    /// callers report it and carry on.
    fn ensure_available(&self) -> SyncResult<()>;

    /// Create a hardlink at `to` pointing at `from`, as a single
    /// all-or-nothing unit (directories included)
    fn create_link(&self, from: &Path, to: &Path) -> SyncResult<()>;

    /// Remove the link at `path`; a missing target is success
    fn remove_link(&self, path: &Path) -> SyncResult<()>;
}
