//! Output sink port interface

use std::fmt;

use thiserror::Error;

use crate::domain::error::EncodingError;

/// Output errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Standard output unavailable: {0}")]
    Unavailable(String),

    #[error("Write to standard output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Short write to standard output: {written} of {requested} written")]
    ShortWrite { written: usize, requested: usize },

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Kind of destination standard output is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Interactive console taking wide-character writes
    Console,
    /// File, pipe, or terminal taking UTF-8 bytes
    ByteStream,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => f.write_str("console"),
            Self::ByteStream => f.write_str("byte-stream"),
        }
    }
}

/// Port for the destination of pasted text
pub trait OutputSink {
    /// Which encoding path this sink uses
    fn kind(&self) -> SinkKind;

    /// Write one chunk of UTF-16 code units.
    ///
    /// Writes are not transactional: chunks already written stay written
    /// when a later one fails.
    fn write_units(&mut self, units: &[u16]) -> Result<(), OutputError>;

    /// Flush and verify the stream ended on a complete character
    fn finish(&mut self) -> Result<(), OutputError>;
}

/// Blanket implementation for boxed sink types
impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn kind(&self) -> SinkKind {
        self.as_ref().kind()
    }

    fn write_units(&mut self, units: &[u16]) -> Result<(), OutputError> {
        self.as_mut().write_units(units)
    }

    fn finish(&mut self) -> Result<(), OutputError> {
        self.as_mut().finish()
    }
}
