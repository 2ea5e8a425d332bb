//! Line-ending policy value object and its lazy normalizer

use std::fmt;

/// Carriage return (U+000D)
pub const CR: u16 = 0x000D;

/// Line feed (U+000A)
pub const LF: u16 = 0x000A;

/// How line endings are rewritten on their way to the output.
/// Selected once at startup and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEndingPolicy {
    /// Pass text through untouched
    #[default]
    AsIs,
    /// Drop every carriage return
    ConvertToLf,
    /// Insert a carriage return before every bare line feed
    ConvertToCrLf,
}

impl LineEndingPolicy {
    /// Wrap a stream of UTF-16 code units in a normalizer for this policy.
    ///
    /// The returned iterator is lazy and single-pass.
    pub fn normalize<I>(self, units: I) -> Normalize<I::IntoIter>
    where
        I: IntoIterator<Item = u16>,
    {
        Normalize {
            inner: units.into_iter(),
            policy: self,
            prev: None,
            pending_lf: false,
        }
    }
}

impl fmt::Display for LineEndingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AsIs => "as-is",
            Self::ConvertToLf => "lf",
            Self::ConvertToCrLf => "crlf",
        };
        f.write_str(name)
    }
}

/// Iterator adapter produced by [`LineEndingPolicy::normalize`]
#[derive(Debug, Clone)]
pub struct Normalize<I> {
    inner: I,
    policy: LineEndingPolicy,
    /// Last unit emitted, used to avoid doubling an existing CR
    prev: Option<u16>,
    /// An LF is owed after an inserted CR
    pending_lf: bool,
}

impl<I> Iterator for Normalize<I>
where
    I: Iterator<Item = u16>,
{
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.pending_lf {
            self.pending_lf = false;
            self.prev = Some(LF);
            return Some(LF);
        }

        loop {
            let unit = self.inner.next()?;
            match self.policy {
                LineEndingPolicy::AsIs => return Some(unit),
                LineEndingPolicy::ConvertToLf => {
                    if unit != CR {
                        return Some(unit);
                    }
                }
                LineEndingPolicy::ConvertToCrLf => {
                    if unit == LF && self.prev != Some(CR) {
                        self.pending_lf = true;
                        self.prev = Some(CR);
                        return Some(CR);
                    }
                    self.prev = Some(unit);
                    return Some(unit);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let owed = usize::from(self.pending_lf);
        match self.policy {
            LineEndingPolicy::AsIs => (lower, upper),
            LineEndingPolicy::ConvertToLf => (0, upper),
            LineEndingPolicy::ConvertToCrLf => (
                lower.saturating_add(owed),
                upper
                    .and_then(|u| u.checked_mul(2))
                    .and_then(|u| u.checked_add(owed)),
            ),
        }
    }
}
