//! Unlink-mode command implementation.
//!
//! Removes previously mirrored entries from the target directory. Never
//! creates the target and never touches the original source data.

use hlsync_core::error::SyncResult;
use hlsync_core::types::SyncConfig;
use hlsync_engine::{LinkManager, SyncEngine, SystemLinker};

use super::CommandContext;

/// Execute an unlink-mode pass
pub fn execute(config: &SyncConfig, ctx: &CommandContext) -> SyncResult<()> {
    ctx.output.step(
        "✂️",
        &format!("Unlinking mirrored entries in {}", config.dest().display()),
    );

    let linker = SystemLinker::new();
    if let Err(e) = linker.ensure_available() {
        ctx.output
            .warn(&format!("{e}; directory entries may fail to unlink"));
    }

    let report = SyncEngine::new(config, &linker).run()?;

    ctx.output.success(&format!(
        "Unlinked {} entries ({} skipped)",
        report.unlinked, report.skipped
    ));

    Ok(())
}
