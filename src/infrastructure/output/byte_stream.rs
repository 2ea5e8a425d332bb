//! UTF-8 byte-stream sink

use std::io::{self, Write};

use crate::application::ports::{OutputError, OutputSink, SinkKind};
use crate::domain::text::Utf8Encoder;

/// Sink for files, pipes and non-Windows terminals.
///
/// Each chunk is re-encoded to UTF-8 before being written.
#[derive(Debug)]
pub struct ByteStreamSink<W: Write> {
    inner: W,
    encoder: Utf8Encoder,
    bytes: Vec<u8>,
}

impl<W: Write> ByteStreamSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            encoder: Utf8Encoder::new(),
            bytes: Vec::new(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputSink for ByteStreamSink<W> {
    fn kind(&self) -> SinkKind {
        SinkKind::ByteStream
    }

    fn write_units(&mut self, units: &[u16]) -> Result<(), OutputError> {
        self.bytes.clear();
        self.encoder.encode(units, &mut self.bytes)?;
        if self.bytes.is_empty() {
            return Ok(());
        }

        self.inner.write_all(&self.bytes).map_err(|e| match e.kind() {
            io::ErrorKind::WriteZero => OutputError::ShortWrite {
                written: 0,
                requested: self.bytes.len(),
            },
            _ => OutputError::Io(e),
        })
    }

    fn finish(&mut self) -> Result<(), OutputError> {
        self.encoder.finish()?;
        self.inner.flush()?;
        Ok(())
    }
}
