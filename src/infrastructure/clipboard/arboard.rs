//! Cross-platform clipboard adapter using arboard
//!
//! Works on macOS and Linux (X11/Wayland). arboard opens and releases the
//! platform clipboard internally, so the "lock" here is an owned UTF-16
//! copy taken on first access and dropped on close.

use crate::application::ports::{ClipboardError, ClipboardProvider, ClipboardSession};
use crate::domain::text::ClipboardText;

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardProvider for ArboardClipboard {
    type Session = ArboardSession;

    fn open(&mut self) -> Result<ArboardSession, ClipboardError> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::OpenFailed(e.to_string()))?;
        Ok(ArboardSession {
            clipboard,
            contents: None,
        })
    }
}

/// What a single read of the clipboard produced
enum Contents {
    Text(Vec<u16>),
    NotText,
    Failed(String),
}

/// Open arboard clipboard with the text read at most once
pub struct ArboardSession {
    clipboard: arboard::Clipboard,
    contents: Option<Contents>,
}

impl ArboardSession {
    fn contents(&mut self) -> &Contents {
        let clipboard = &mut self.clipboard;
        self.contents.get_or_insert_with(|| match clipboard.get_text() {
            Ok(text) => Contents::Text(text.encode_utf16().collect()),
            Err(arboard::Error::ContentNotAvailable | arboard::Error::ConversionFailure) => {
                Contents::NotText
            }
            Err(e) => Contents::Failed(e.to_string()),
        })
    }
}

impl ClipboardSession for ArboardSession {
    fn has_text_format(&mut self) -> Result<bool, ClipboardError> {
        match self.contents() {
            Contents::Text(_) => Ok(true),
            Contents::NotText => Ok(false),
            Contents::Failed(msg) => Err(ClipboardError::AccessFailed(msg.clone())),
        }
    }

    fn extract_text(&mut self) -> Result<ClipboardText<'_>, ClipboardError> {
        match self.contents() {
            Contents::Text(units) => Ok(ClipboardText::new(units)),
            Contents::NotText => Err(ClipboardError::NoTextData),
            Contents::Failed(msg) => Err(ClipboardError::AccessFailed(msg.clone())),
        }
    }

    fn close(self) -> Result<(), ClipboardError> {
        drop(self.contents);
        drop(self.clipboard);
        Ok(())
    }
}
