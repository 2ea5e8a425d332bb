//! CLI presenter for diagnostics

use colored::*;

/// Presenter for CLI output formatting.
///
/// Standard output carries only pasted text, so everything here goes to
/// stderr.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Format a one-line error diagnostic
    pub fn format_error(&self, message: &str) -> String {
        let line = message.lines().next().unwrap_or_default();
        format!("{} {}", "✗".red(), line)
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
