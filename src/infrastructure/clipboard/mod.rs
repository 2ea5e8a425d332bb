//! Clipboard infrastructure module
//!
//! Provides the native Win32 clipboard on Windows and arboard
//! (macOS, X11, Wayland) everywhere else.

mod arboard;
#[cfg(windows)]
mod win32;

pub use arboard::{ArboardClipboard, ArboardSession};
#[cfg(windows)]
pub use win32::{Win32Clipboard, Win32Session};

/// Clipboard adapter used by the `paste` binary on this platform
#[cfg(windows)]
pub type PlatformClipboard = Win32Clipboard;

/// Clipboard adapter used by the `paste` binary on this platform
#[cfg(not(windows))]
pub type PlatformClipboard = ArboardClipboard;

/// Create the default clipboard adapter for the current platform
pub fn create_clipboard() -> PlatformClipboard {
    PlatformClipboard::new()
}
