//! Command implementations and dispatch logic.
//!
//! The run configuration is built once at the boundary; handlers receive
//! it together with a shared `CommandContext` for terminal output.

use tracing::info;

use hlsync_core::error::SyncResult;
use hlsync_core::types::{Mode, SyncConfig};

pub mod link;
pub mod unlink;


use crate::output::OutputHandler;

/// Shared context for all commands
pub struct CommandContext {
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> Self {
        Self {
            output: OutputHandler::new(),
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatch a run to its mode handler
pub fn dispatch(config: SyncConfig, ctx: &CommandContext) -> SyncResult<()> {
    match config.mode {
        Mode::Link => {
            info!(
                "Linking {} into {}",
                config.source().display(),
                config.dest().display()
            );
            link::execute(&config, ctx)
        }
        Mode::Unlink => {
            info!("Unlinking mirrored entries in {}", config.dest().display());
            unlink::execute(&config, ctx)
        }
    }
}
