//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod output;

// Re-export common types
pub use clipboard::{ClipboardError, ClipboardProvider, ClipboardSession};
pub use output::{OutputError, OutputSink, SinkKind};
