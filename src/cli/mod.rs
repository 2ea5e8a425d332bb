//! CLI layer - Command-line interface
//!
//! Contains argument parsing, diagnostics, signal handling,
//! and the one-shot runner.

pub mod app;
pub mod args;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{
    exit_code_for, run_paste, EXIT_CLIPBOARD_ERROR, EXIT_INTERRUPTED, EXIT_NO_TEXT,
    EXIT_SUCCESS, EXIT_SYSTEM_ERROR,
};
pub use args::{parse_args, Cli, ParsedArgs, PasteOptions};
pub use presenter::Presenter;
pub use signals::InterruptSignal;
