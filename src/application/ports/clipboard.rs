//! Clipboard port interface

use thiserror::Error;

use crate::domain::text::ClipboardText;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Failed to open system clipboard: {0}")]
    OpenFailed(String),

    #[error("Clipboard contains non-text data")]
    NoTextData,

    #[error("Unable to get clipboard data: {0}")]
    AccessFailed(String),

    #[error("Failed to close system clipboard: {0}")]
    CloseFailed(String),
}

/// Port for acquiring the shared system clipboard
pub trait ClipboardProvider {
    type Session: ClipboardSession;

    /// Request exclusive ownership of the clipboard.
    ///
    /// A single attempt; contention is reported, never retried.
    fn open(&mut self) -> Result<Self::Session, ClipboardError>;
}

/// Exclusive, short-lived ownership of the clipboard.
///
/// Adapters release the clipboard on drop as well, but callers should
/// call [`close`](ClipboardSession::close) to observe failures.
pub trait ClipboardSession {
    /// Whether a Unicode text format is among the published formats.
    ///
    /// Scans the whole format set; formats are unordered.
    fn has_text_format(&mut self) -> Result<bool, ClipboardError>;

    /// Lock the text payload for reading.
    ///
    /// Fails with [`ClipboardError::NoTextData`] when no text format is
    /// published and [`ClipboardError::AccessFailed`] when the payload
    /// cannot be retrieved or locked.
    fn extract_text(&mut self) -> Result<ClipboardText<'_>, ClipboardError>;

    /// Unlock any extracted text and release the clipboard
    fn close(self) -> Result<(), ClipboardError>;
}
