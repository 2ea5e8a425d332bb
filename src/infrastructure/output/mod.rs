//! Output infrastructure module
//!
//! Chooses how standard output is written: native wide-character console
//! writes on a Windows console, UTF-8 bytes everywhere else.

mod byte_stream;
#[cfg(windows)]
mod console;

pub use byte_stream::ByteStreamSink;
#[cfg(windows)]
pub use console::ConsoleSink;

use crate::application::ports::{OutputError, OutputSink};

/// Inspect standard output once and build the matching sink
#[cfg(windows)]
pub fn open_stdout() -> Result<Box<dyn OutputSink>, OutputError> {
    use windows_sys::Win32::Foundation::INVALID_HANDLE_VALUE;
    use windows_sys::Win32::System::Console::{GetConsoleMode, GetStdHandle, STD_OUTPUT_HANDLE};

    // SAFETY: plain query of the process's standard handle.
    let handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) };
    if handle.is_null() || handle == INVALID_HANDLE_VALUE {
        return Err(OutputError::Unavailable(
            std::io::Error::last_os_error().to_string(),
        ));
    }

    let mut mode = 0;
    // SAFETY: handle is a valid standard handle; mode outlives the call.
    let is_console = unsafe { GetConsoleMode(handle, &mut mode) } != 0;
    tracing::debug!(is_console, "standard output opened");

    if is_console {
        Ok(Box::new(ConsoleSink::new(handle)))
    } else {
        Ok(Box::new(ByteStreamSink::new(std::io::stdout().lock())))
    }
}

/// Inspect standard output once and build the matching sink
#[cfg(not(windows))]
pub fn open_stdout() -> Result<Box<dyn OutputSink>, OutputError> {
    use std::io::IsTerminal;
    use std::os::fd::AsFd;

    let stdout = std::io::stdout();
    tracing::debug!(is_terminal = stdout.is_terminal(), "standard output opened");
    Ok(Box::new(descriptor_sink(stdout.as_fd())?))
}

/// Build a byte-stream sink writing through a duplicate of `fd`.
///
/// std's `Stdout` swallows EBADF, so a closed descriptor is caught here
/// instead of losing the text.
#[cfg(not(windows))]
fn descriptor_sink(
    fd: std::os::fd::BorrowedFd<'_>,
) -> Result<ByteStreamSink<std::fs::File>, OutputError> {
    let owned = fd
        .try_clone_to_owned()
        .map_err(|e| OutputError::Unavailable(e.to_string()))?;
    Ok(ByteStreamSink::new(std::fs::File::from(owned)))
}
