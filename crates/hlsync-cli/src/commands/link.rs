//! Link-mode command implementation.
//!
//! Mirrors the source's top-level entries into the destination as
//! hardlinks, reporting a summary when the pass completes.

use hlsync_core::error::SyncResult;
use hlsync_core::types::SyncConfig;
use hlsync_engine::{LinkManager, SyncEngine, SystemLinker};

use super::CommandContext;

/// Execute a link-mode pass
pub fn execute(config: &SyncConfig, ctx: &CommandContext) -> SyncResult<()> {
    ctx.output.step(
        "🔗",
        &format!(
            "Mirroring {} into {}",
            config.source().display(),
            config.dest().display()
        ),
    );

    ctx.output
        .info(&format!("Reading ignore patterns from {}", config.ignore_file));

    let linker = SystemLinker::new();
    if let Err(e) = linker.ensure_available() {
        // Degraded mode: file entries still link, directory entries
        // will fail individually
        ctx.output
            .warn(&format!("{e}; directory entries may fail to link"));
    }

    let report = SyncEngine::new(config, &linker).run()?;

    if report.failed > 0 {
        ctx.output
            .error(&format!("{} entries could not be linked", report.failed));
    }
    ctx.output.success(&format!(
        "Linked {} entries ({} skipped)",
        report.linked, report.skipped
    ));

    Ok(())
}
