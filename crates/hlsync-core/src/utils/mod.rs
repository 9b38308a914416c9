//! Utility functions and helpers.
//!
//! Common functionality used across the hlsync crates.

pub mod path;

// Re-export commonly used utilities
pub use path::{absolutize, is_self_contained, normalize_path};
