//! Chunked writer feeding an output sink

use std::sync::atomic::{AtomicBool, Ordering};

use super::paste::PasteError;
use super::ports::OutputSink;

/// Default chunk size in UTF-16 code units
pub const DEFAULT_CHUNK_UNITS: usize = 1024;

/// Buffers a unit stream into fixed-size chunks and hands each full chunk
/// to the sink before reading further.
///
/// Working memory is one chunk regardless of how long the text is.
pub struct ChunkedWriter {
    buf: Vec<u16>,
    chunk_units: usize,
    chunks_written: usize,
}

impl ChunkedWriter {
    /// Create a writer with the given chunk size (at least one unit)
    pub fn new(chunk_units: usize) -> Self {
        let chunk_units = chunk_units.max(1);
        Self {
            buf: Vec::with_capacity(chunk_units),
            chunk_units,
            chunks_written: 0,
        }
    }

    /// Chunk size in code units
    pub fn chunk_units(&self) -> usize {
        self.chunk_units
    }

    /// Number of chunks handed to a sink so far
    pub fn chunks_written(&self) -> usize {
        self.chunks_written
    }

    /// Stream every unit into `sink`, checking `interrupt` before each chunk.
    ///
    /// Returns the number of units written.
    pub fn write<I, S>(
        &mut self,
        units: I,
        sink: &mut S,
        interrupt: &AtomicBool,
    ) -> Result<usize, PasteError>
    where
        I: IntoIterator<Item = u16>,
        S: OutputSink + ?Sized,
    {
        let mut total = 0;
        self.buf.clear();

        for unit in units {
            self.buf.push(unit);
            if self.buf.len() == self.chunk_units {
                total += self.flush_chunk(sink, interrupt)?;
            }
        }
        if !self.buf.is_empty() {
            total += self.flush_chunk(sink, interrupt)?;
        }

        Ok(total)
    }

    fn flush_chunk<S>(&mut self, sink: &mut S, interrupt: &AtomicBool) -> Result<usize, PasteError>
    where
        S: OutputSink + ?Sized,
    {
        if interrupt.load(Ordering::SeqCst) {
            return Err(PasteError::Interrupted);
        }

        let len = self.buf.len();
        sink.write_units(&self.buf)?;
        self.buf.clear();
        self.chunks_written += 1;
        tracing::trace!(units = len, chunk = self.chunks_written, "chunk written");
        Ok(len)
    }
}

impl Default for ChunkedWriter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_UNITS)
    }
}
