//! Error types and result aliases for hlsync operations.
//!
//! Provides a unified error type that covers all error conditions
//! across the hlsync crates with actionable error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all hlsync operations
#[derive(Error, Debug)]
pub enum HlsyncError {
    // Setup errors: these abort the run before any entry is processed
    #[error("source directory '{}' does not exist", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to create destination directory '{}'", .path.display())]
    DestDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Tooling errors: the run continues in degraded mode
    #[error("hardlink utility '{tool}' is not available")]
    ToolUnavailable { tool: String },

    // Entry errors: isolated to a single entry, the pass continues
    #[error("failed to hardlink '{}' to '{}': {message}", .from.display(), .to.display())]
    LinkFailed {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    #[error("failed to remove link at '{}': {message}", .path.display())]
    UnlinkFailed { path: PathBuf, message: String },

    #[error("destination '{}' is contained in source '{}'", .dest.display(), .source_path.display())]
    SelfContained { source_path: PathBuf, dest: PathBuf },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for hlsync operations
pub type SyncResult<T> = Result<T, HlsyncError>;

impl HlsyncError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Check if this error aborts the whole run or only one entry
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            HlsyncError::SourceNotFound { .. } | HlsyncError::DestDirCreate { .. }
        )
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            HlsyncError::SourceNotFound { .. } => {
                Some("Check the path spelling; the source must exist before linking")
            }
            HlsyncError::ToolUnavailable { .. } => {
                Some("Install the 'hln' utility (brew install hardlink-osx) to link directories")
            }
            HlsyncError::LinkFailed { .. } => {
                Some("Hardlinks cannot cross filesystem boundaries; keep source and destination on one device")
            }
            HlsyncError::SelfContained { .. } => {
                Some("Pick a destination outside of the source directory")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_setup_errors_abort() {
        let err = HlsyncError::SourceNotFound {
            path: PathBuf::from("/missing"),
        };
        assert!(err.is_setup());

        let err = HlsyncError::LinkFailed {
            from: PathBuf::from("/a"),
            to: PathBuf::from("/b"),
            message: "cross-device".to_string(),
        };
        assert!(!err.is_setup());
    }

    #[test]
    fn test_suggestions() {
        let err = HlsyncError::SelfContained {
            source_path: Path::new("/a/b").to_path_buf(),
            dest: Path::new("/a/b/c").to_path_buf(),
        };
        assert!(err.suggestion().is_some());

        let err = HlsyncError::io(
            "read failed".to_string(),
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        );
        assert!(err.suggestion().is_none());
    }
}
