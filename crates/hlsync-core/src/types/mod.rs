//! Core data types for hlsync mirroring passes.
//!
//! This module provides the fundamental types used throughout hlsync:
//! - SyncConfig and Mode describing one invocation
//! - SyncEntry describing one top-level source child

pub mod config;
pub mod entry;

// Re-export all public types
pub use config::{Mode, SyncConfig};
pub use entry::SyncEntry;
