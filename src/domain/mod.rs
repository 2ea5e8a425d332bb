//! Domain layer - Core text handling
//!
//! Contains value objects and pure transforms over clipboard text.
//! This layer has no dependencies on external systems.

pub mod error;
pub mod line_ending;
pub mod text;

// Re-export common types
pub use error::*;
pub use line_ending::{LineEndingPolicy, Normalize};
pub use text::{ClipboardText, Utf8Encoder};
