//! Domain error types

use thiserror::Error;

/// Error when clipboard text cannot be represented as UTF-8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("Invalid UTF-16 in clipboard text: unpaired surrogate 0x{unit:04X}")]
    UnpairedSurrogate { unit: u16 },
}
