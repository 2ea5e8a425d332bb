//! Application layer - Use cases and port interfaces
//!
//! Contains the paste pipeline and trait definitions
//! for clipboard and output access.

pub mod paste;
pub mod ports;
pub mod writer;

// Re-export use cases
pub use paste::{PasteClipboardUseCase, PasteError, PasteInput, PasteOutput, PasteStage};
pub use writer::{ChunkedWriter, DEFAULT_CHUNK_UNITS};
