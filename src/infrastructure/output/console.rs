//! Windows console sink using native wide-character writes

use std::io;

use windows_sys::Win32::Foundation::HANDLE;
use windows_sys::Win32::System::Console::WriteConsoleW;

use crate::application::ports::{OutputError, OutputSink, SinkKind};

/// Sink for an interactive Windows console.
///
/// UTF-16 units go straight to `WriteConsoleW`; no re-encoding.
pub struct ConsoleSink {
    handle: HANDLE,
}

impl ConsoleSink {
    /// Wrap a handle already known to be a console
    pub fn new(handle: HANDLE) -> Self {
        Self { handle }
    }
}

impl OutputSink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn write_units(&mut self, units: &[u16]) -> Result<(), OutputError> {
        if units.is_empty() {
            return Ok(());
        }

        let requested = u32::try_from(units.len()).map_err(|_| OutputError::ShortWrite {
            written: 0,
            requested: units.len(),
        })?;
        let mut written: u32 = 0;

        // SAFETY: `units` is valid for `requested` reads and `written` outlives the call.
        let ok = unsafe {
            WriteConsoleW(
                self.handle,
                units.as_ptr().cast(),
                requested,
                &mut written,
                std::ptr::null(),
            )
        };
        if ok == 0 {
            return Err(OutputError::Io(io::Error::last_os_error()));
        }
        if written != requested {
            return Err(OutputError::ShortWrite {
                written: written as usize,
                requested: units.len(),
            });
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), OutputError> {
        // Console writes are unbuffered
        Ok(())
    }
}
