//! Clipboard text view and UTF-16 to UTF-8 encoding

use crate::domain::error::EncodingError;

/// Borrowed, read-only view of the clipboard's Unicode text.
///
/// The view lives no longer than the session it was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardText<'a> {
    units: &'a [u16],
}

impl<'a> ClipboardText<'a> {
    /// View the given UTF-16 units in full
    pub const fn new(units: &'a [u16]) -> Self {
        Self { units }
    }

    /// View the units up to (not including) the first NUL
    pub fn from_nul_terminated(units: &'a [u16]) -> Self {
        let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
        Self {
            units: &units[..end],
        }
    }

    /// The raw UTF-16 code units
    pub const fn units(&self) -> &'a [u16] {
        self.units
    }

    /// Length in UTF-16 code units
    pub const fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the view holds no text
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate over the code units by value
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'a, u16>> {
        self.units.iter().copied()
    }
}

const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// Incremental UTF-16 to UTF-8 encoder.
///
/// Text arrives in chunks, and a surrogate pair may straddle two of them:
/// a trailing high surrogate is held back until the next chunk (or
/// [`finish`](Self::finish)) decides whether it was paired.
#[derive(Debug, Default)]
pub struct Utf8Encoder {
    pending_high: Option<u16>,
}

impl Utf8Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode one chunk, appending the UTF-8 bytes to `out`.
    ///
    /// Unpaired surrogates are rejected rather than replaced.
    pub fn encode(&mut self, units: &[u16], out: &mut Vec<u8>) -> Result<(), EncodingError> {
        let (body, carry) = match units.split_last() {
            Some((&last, rest)) if is_high_surrogate(last) => (rest, Some(last)),
            _ => (units, None),
        };

        let stream = self.pending_high.take().into_iter().chain(body.iter().copied());
        let mut buf = [0u8; 4];
        for decoded in char::decode_utf16(stream) {
            let ch = decoded.map_err(|e| EncodingError::UnpairedSurrogate {
                unit: e.unpaired_surrogate(),
            })?;
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }

        self.pending_high = carry;
        Ok(())
    }

    /// Fail if the stream ended on a high surrogate with no partner
    pub fn finish(&mut self) -> Result<(), EncodingError> {
        match self.pending_high.take() {
            Some(unit) => Err(EncodingError::UnpairedSurrogate { unit }),
            None => Ok(()),
        }
    }
}
