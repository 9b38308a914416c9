//! Terminal color support detection and formatting.
//!
//! Honors the NO_COLOR environment variable and only emits escape codes
//! when both stdout and stderr are terminals.

use std::env;
use std::io::{self, IsTerminal};

/// Colors used by the output handler
#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Red,
    Dim,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Red => "\x1b[31m",
            Color::Dim => "\x1b[2m",
        }
    }
}

/// Color support detection and formatting
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect color support automatically
    pub fn detect() -> Self {
        Self {
            enabled: Self::should_use_colors(),
        }
    }

    /// Force disable colors
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    fn should_use_colors() -> bool {
        if env::var("NO_COLOR").is_ok() {
            return false;
        }

        io::stderr().is_terminal() && io::stdout().is_terminal()
    }

    /// Wrap `text` in escape codes for `color` when colors are enabled
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{}{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_paint_is_passthrough() {
        let colors = ColorSupport::disabled();
        assert_eq!(colors.paint(Color::Red, "plain"), "plain");
    }

    #[test]
    fn test_enabled_paint_wraps_with_escape_codes() {
        let colors = ColorSupport { enabled: true };
        let painted = colors.paint(Color::Green, "ok");
        assert!(painted.starts_with("\x1b[32m"));
        assert!(painted.ends_with("\x1b[0m"));
        assert!(painted.contains("ok"));
    }
}
