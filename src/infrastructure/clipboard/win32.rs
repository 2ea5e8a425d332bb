//! Native Windows clipboard adapter
//!
//! Follows the Win32 protocol directly: `OpenClipboard`, a full
//! `EnumClipboardFormats` scan, `GetClipboardData(CF_UNICODETEXT)` and
//! `GlobalLock`. The lock is released before `CloseClipboard`.

use std::io;
use std::ptr;

use windows_sys::Win32::Foundation::{HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::System::DataExchange::{
    CloseClipboard, EnumClipboardFormats, GetClipboardData, OpenClipboard,
};
use windows_sys::Win32::System::Memory::{GlobalLock, GlobalSize, GlobalUnlock};
use windows_sys::Win32::System::Ole::CF_UNICODETEXT;

use crate::application::ports::{ClipboardError, ClipboardProvider, ClipboardSession};
use crate::domain::text::ClipboardText;

const TEXT_FORMAT: u32 = CF_UNICODETEXT as u32;

/// Windows clipboard adapter
pub struct Win32Clipboard;

impl Win32Clipboard {
    /// Create a new Windows clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardProvider for Win32Clipboard {
    type Session = Win32Session;

    fn open(&mut self) -> Result<Win32Session, ClipboardError> {
        // SAFETY: a null owner window associates the clipboard with this task.
        if unsafe { OpenClipboard(ptr::null_mut()) } == 0 {
            return Err(ClipboardError::OpenFailed(
                io::Error::last_os_error().to_string(),
            ));
        }
        Ok(Win32Session {
            open: true,
            locked: None,
        })
    }
}

/// Open Windows clipboard.
///
/// Closed exactly once: by [`ClipboardSession::close`], or on drop if
/// `close` was never reached.
pub struct Win32Session {
    open: bool,
    /// Handle whose memory is currently locked, with its text view
    locked: Option<(HANDLE, *const u16, usize)>,
}

impl Win32Session {
    fn release(&mut self) -> Result<(), ClipboardError> {
        if let Some((handle, _, _)) = self.locked.take() {
            // SAFETY: handle was locked by this session and not yet unlocked.
            unsafe { GlobalUnlock(handle) };
        }
        if self.open {
            self.open = false;
            // SAFETY: this session opened the clipboard.
            if unsafe { CloseClipboard() } == 0 {
                return Err(ClipboardError::CloseFailed(
                    io::Error::last_os_error().to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl ClipboardSession for Win32Session {
    fn has_text_format(&mut self) -> Result<bool, ClipboardError> {
        let mut format = 0;
        loop {
            // SAFETY: the clipboard is open for this session.
            format = unsafe { EnumClipboardFormats(format) };
            if format == TEXT_FORMAT {
                return Ok(true);
            }
            if format == 0 {
                // Zero means either end of list or failure
                let err = io::Error::last_os_error();
                return match err.raw_os_error() {
                    Some(0) | None => Ok(false),
                    Some(_) => Err(ClipboardError::AccessFailed(err.to_string())),
                };
            }
            tracing::trace!(format, "skipping clipboard format");
        }
    }

    fn extract_text(&mut self) -> Result<ClipboardText<'_>, ClipboardError> {
        if let Some((_, data, len)) = self.locked {
            // SAFETY: still locked; the view borrows this session.
            let units = unsafe { std::slice::from_raw_parts(data, len) };
            return Ok(ClipboardText::from_nul_terminated(units));
        }

        if !self.has_text_format()? {
            return Err(ClipboardError::NoTextData);
        }

        // SAFETY: the clipboard is open and the format was just confirmed.
        let handle = unsafe { GetClipboardData(TEXT_FORMAT) };
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            return Err(ClipboardError::AccessFailed(
                io::Error::last_os_error().to_string(),
            ));
        }

        // SAFETY: handle is a global memory object owned by the clipboard.
        let data = unsafe { GlobalLock(handle) } as *const u16;
        if data.is_null() {
            return Err(ClipboardError::AccessFailed(
                io::Error::last_os_error().to_string(),
            ));
        }

        // SAFETY: handle is valid and locked.
        let len = unsafe { GlobalSize(handle) } / std::mem::size_of::<u16>();
        self.locked = Some((handle, data, len));

        // SAFETY: `len` units lie within the locked allocation, which stays
        // locked until `release`, and `release` needs `&mut self`.
        let units = unsafe { std::slice::from_raw_parts(data, len) };
        Ok(ClipboardText::from_nul_terminated(units))
    }

    fn close(mut self) -> Result<(), ClipboardError> {
        self.release()
    }
}

impl Drop for Win32Session {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!(error = %e, "clipboard release on drop failed");
        }
    }
}
