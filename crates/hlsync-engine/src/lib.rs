//! Hardlink mirroring engine for hlsync
//!
//! This crate provides the synchronization pipeline: loading ignore
//! rules from the source root, deciding per-entry inclusion, guarding
//! against self-referential destinations, and performing idempotent
//! hardlink (re-)creation through a pluggable link manager.

pub mod ignore;
pub mod link;
pub mod sync;

// Re-export main types
pub use ignore::{load_ignore_rules, should_skip, IgnorePattern, PatternMatcher, DEFAULT_BLACKLIST};
pub use link::{LinkManager, SystemLinker};
pub use sync::{SyncEngine, SyncReport};

use hlsync_core::error::HlsyncError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, HlsyncError>;
