//! Error message formatting with actionable suggestions.
//!
//! Renders an `HlsyncError` with its cause chain and, when available, a
//! hint for fixing the problem.

use std::error::Error;

use hlsync_core::error::HlsyncError;

use super::colors::{Color, ColorSupport};

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self {
            colors: ColorSupport::detect(),
        }
    }

    /// Format an error with its cause chain and suggestion
    pub fn format_error(&self, error: &HlsyncError) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.paint(Color::Red, "error"));
        output.push_str(": ");
        output.push_str(&error.to_string());

        let mut source = error.source();
        while let Some(err) = source {
            output.push('\n');
            output.push_str(&self.colors.paint(Color::Dim, "caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            source = err.source();
        }

        if let Some(suggestion) = error.suggestion() {
            output.push('\n');
            output.push_str(&self.colors.paint(Color::Dim, "help"));
            output.push_str(": ");
            output.push_str(suggestion);
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
