//! Synchronization engine
//!
//! Orchestrates one mirroring pass: validate the source, ensure the
//! destination exists (link mode only), load ignore rules, then walk the
//! top-level source entries and clean-then-link each destination slot.

pub mod engine;

// Re-export main types
pub use engine::{SyncEngine, SyncReport};
