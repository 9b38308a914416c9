//! # hlsync-core
//!
//! Core types and utilities shared across all hlsync crates.
//!
//! This crate provides:
//! - SyncConfig, Mode and SyncEntry types describing one mirroring pass
//! - HlsyncError enum for unified error handling
//! - Path utilities for normalization and the self-containment guard
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (SyncConfig, SyncEntry, Mode)
//! - `error`: Error types and result aliases
//! - `utils`: Path normalization and safety checks

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{HlsyncError, SyncResult};
pub use types::{Mode, SyncConfig, SyncEntry};
