//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard and standard output.

pub mod clipboard;
pub mod output;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, PlatformClipboard};
pub use output::{open_stdout, ByteStreamSink};
