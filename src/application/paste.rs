//! Paste clipboard use case

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::domain::line_ending::LineEndingPolicy;

use super::ports::{
    ClipboardError, ClipboardProvider, ClipboardSession, OutputError, OutputSink, SinkKind,
};
use super::writer::{ChunkedWriter, DEFAULT_CHUNK_UNITS};

/// Errors from the paste use case
#[derive(Debug, Error)]
pub enum PasteError {
    #[error("Failed to open system clipboard: {0}")]
    ClipboardOpenFailed(String),

    #[error("Clipboard contains non-text data")]
    NoTextualData,

    #[error("Unable to get clipboard data: {0}")]
    ClipboardAccessFailed(String),

    #[error("{0}")]
    OutputWriteFailed(#[from] OutputError),

    #[error("Interrupted")]
    Interrupted,
}

impl From<ClipboardError> for PasteError {
    fn from(err: ClipboardError) -> Self {
        match err {
            ClipboardError::OpenFailed(msg) => Self::ClipboardOpenFailed(msg),
            ClipboardError::NoTextData => Self::NoTextualData,
            ClipboardError::AccessFailed(msg) | ClipboardError::CloseFailed(msg) => {
                Self::ClipboardAccessFailed(msg)
            }
        }
    }
}

/// Stages of one paste run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteStage {
    Start,
    ClipboardOpened,
    FormatValidated,
    TextExtracted,
    Streaming,
    ClipboardClosed,
}

/// Input parameters for the paste use case
#[derive(Debug, Clone)]
pub struct PasteInput {
    /// Line-ending rewrite applied on the way out
    pub line_ending: LineEndingPolicy,
    /// Writer chunk size in UTF-16 code units
    pub chunk_units: usize,
}

impl Default for PasteInput {
    fn default() -> Self {
        Self {
            line_ending: LineEndingPolicy::default(),
            chunk_units: DEFAULT_CHUNK_UNITS,
        }
    }
}

/// Output from the paste use case
#[derive(Debug, Clone)]
pub struct PasteOutput {
    /// Code units read from the clipboard
    pub units_read: usize,
    /// Code units handed to the sink after normalization
    pub units_written: usize,
    /// Encoding path the output took
    pub sink_kind: SinkKind,
}

/// One-shot clipboard-to-output use case
pub struct PasteClipboardUseCase<C>
where
    C: ClipboardProvider,
{
    clipboard: C,
    interrupt: Arc<AtomicBool>,
}

impl<C> PasteClipboardUseCase<C>
where
    C: ClipboardProvider,
{
    /// Create a new use case instance observing the given interrupt flag
    pub fn new(clipboard: C, interrupt: Arc<AtomicBool>) -> Self {
        Self {
            clipboard,
            interrupt,
        }
    }

    /// Execute the paste workflow.
    ///
    /// `open_sink` opens the output destination; it is called at most
    /// once, and only after the clipboard text has been extracted. The
    /// clipboard session is closed on every path that opened it.
    pub fn execute<S, F>(
        &mut self,
        input: PasteInput,
        open_sink: F,
    ) -> Result<PasteOutput, PasteError>
    where
        S: OutputSink,
        F: FnOnce() -> Result<S, OutputError>,
    {
        self.check_interrupt(PasteStage::Start)?;

        let mut session = self.clipboard.open()?;
        tracing::debug!(stage = ?PasteStage::ClipboardOpened, "clipboard opened");

        let result = self.stream(&mut session, &input, open_sink);

        match session.close() {
            Ok(()) => tracing::debug!(stage = ?PasteStage::ClipboardClosed, "clipboard closed"),
            Err(e) => tracing::warn!(error = %e, "clipboard close failed"),
        }

        result
    }

    fn stream<S, F>(
        &self,
        session: &mut C::Session,
        input: &PasteInput,
        open_sink: F,
    ) -> Result<PasteOutput, PasteError>
    where
        S: OutputSink,
        F: FnOnce() -> Result<S, OutputError>,
    {
        if !session.has_text_format()? {
            return Err(PasteError::NoTextualData);
        }
        tracing::debug!(stage = ?PasteStage::FormatValidated, "text format present");

        let text = session.extract_text()?;
        tracing::debug!(
            stage = ?PasteStage::TextExtracted,
            units = text.len(),
            "clipboard text locked"
        );

        self.check_interrupt(PasteStage::TextExtracted)?;

        let mut sink = open_sink()?;
        let sink_kind = sink.kind();
        tracing::debug!(
            stage = ?PasteStage::Streaming,
            sink = %sink_kind,
            line_ending = %input.line_ending,
            "streaming clipboard text"
        );

        let mut writer = ChunkedWriter::new(input.chunk_units);
        let units_written =
            writer.write(input.line_ending.normalize(text.iter()), &mut sink, &self.interrupt)?;
        sink.finish()?;
        tracing::debug!(
            chunks = writer.chunks_written(),
            chunk_units = writer.chunk_units(),
            units = units_written,
            "clipboard text written"
        );

        Ok(PasteOutput {
            units_read: text.len(),
            units_written,
            sink_kind,
        })
    }

    fn check_interrupt(&self, stage: PasteStage) -> Result<(), PasteError> {
        if self.interrupt.load(Ordering::SeqCst) {
            tracing::debug!(?stage, "interrupt observed");
            return Err(PasteError::Interrupted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::text::ClipboardText;
    use std::cell::RefCell;
    use std::rc::Rc;

    // Mock implementations for testing
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Open,
        FormatCheck,
        Extract,
        Close,
        SinkOpened,
    }

    type EventLog = Rc<RefCell<Vec<Event>>>;

    #[derive(Clone, Copy)]
    enum Contents {
        Text(&'static str),
        Image,
        Locked,
        Unreadable,
    }

    struct MockClipboard {
        contents: Contents,
        log: EventLog,
    }

    struct MockSession {
        contents: Contents,
        units: Vec<u16>,
        log: EventLog,
    }

    impl ClipboardProvider for MockClipboard {
        type Session = MockSession;

        fn open(&mut self) -> Result<MockSession, ClipboardError> {
            if let Contents::Locked = self.contents {
                return Err(ClipboardError::OpenFailed("held by another process".into()));
            }
            self.log.borrow_mut().push(Event::Open);
            let units = match self.contents {
                Contents::Text(s) => s.encode_utf16().collect(),
                _ => Vec::new(),
            };
            Ok(MockSession {
                contents: self.contents,
                units,
                log: Rc::clone(&self.log),
            })
        }
    }

    impl ClipboardSession for MockSession {
        fn has_text_format(&mut self) -> Result<bool, ClipboardError> {
            self.log.borrow_mut().push(Event::FormatCheck);
            Ok(!matches!(self.contents, Contents::Image))
        }

        fn extract_text(&mut self) -> Result<ClipboardText<'_>, ClipboardError> {
            self.log.borrow_mut().push(Event::Extract);
            match self.contents {
                Contents::Unreadable => Err(ClipboardError::AccessFailed("lock failed".into())),
                _ => Ok(ClipboardText::new(&self.units)),
            }
        }

        fn close(self) -> Result<(), ClipboardError> {
            self.log.borrow_mut().push(Event::Close);
            Ok(())
        }
    }

    struct MockSink {
        out: Rc<RefCell<Vec<u16>>>,
        fail: bool,
    }

    impl OutputSink for MockSink {
        fn kind(&self) -> SinkKind {
            SinkKind::ByteStream
        }

        fn write_units(&mut self, units: &[u16]) -> Result<(), OutputError> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::from(
                    std::io::ErrorKind::BrokenPipe,
                )));
            }
            self.out.borrow_mut().extend_from_slice(units);
            Ok(())
        }

        fn finish(&mut self) -> Result<(), OutputError> {
            Ok(())
        }
    }

    struct Harness {
        log: EventLog,
        out: Rc<RefCell<Vec<u16>>>,
        interrupt: Arc<AtomicBool>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                log: Rc::default(),
                out: Rc::default(),
                interrupt: Arc::new(AtomicBool::new(false)),
            }
        }

        fn run(
            &self,
            contents: Contents,
            input: PasteInput,
            fail_sink: bool,
        ) -> Result<PasteOutput, PasteError> {
            let clipboard = MockClipboard {
                contents,
                log: Rc::clone(&self.log),
            };
            let mut use_case = PasteClipboardUseCase::new(clipboard, Arc::clone(&self.interrupt));
            let log = Rc::clone(&self.log);
            let out = Rc::clone(&self.out);
            use_case.execute(input, move || {
                log.borrow_mut().push(Event::SinkOpened);
                Ok(MockSink { out, fail: fail_sink })
            })
        }

        fn output(&self) -> String {
            String::from_utf16(&self.out.borrow()).unwrap()
        }

        fn events(&self) -> Vec<Event> {
            self.log.borrow().clone()
        }

        fn closes(&self) -> usize {
            self.events().iter().filter(|e| **e == Event::Close).count()
        }
    }

    #[test]
    fn execute_streams_text_and_closes_once() {
        let harness = Harness::new();
        let output = harness
            .run(Contents::Text("a\r\nb\nc\r"), PasteInput::default(), false)
            .unwrap();

        assert_eq!(harness.output(), "a\r\nb\nc\r");
        assert_eq!(output.units_read, 7);
        assert_eq!(output.units_written, 7);
        assert_eq!(output.sink_kind, SinkKind::ByteStream);
        assert_eq!(
            harness.events(),
            vec![
                Event::Open,
                Event::FormatCheck,
                Event::Extract,
                Event::SinkOpened,
                Event::Close
            ]
        );
    }

    #[test]
    fn execute_applies_line_ending_policy() {
        let harness = Harness::new();
        let input = PasteInput {
            line_ending: LineEndingPolicy::ConvertToCrLf,
            chunk_units: 2,
        };
        let output = harness.run(Contents::Text("a\r\nb\nc\r"), input, false).unwrap();

        assert_eq!(harness.output(), "a\r\nb\r\nc\r");
        assert_eq!(output.units_written, 8);
    }

    #[test]
    fn empty_clipboard_text_succeeds_with_no_output() {
        let harness = Harness::new();
        let output = harness.run(Contents::Text(""), PasteInput::default(), false).unwrap();

        assert_eq!(output.units_written, 0);
        assert!(harness.output().is_empty());
        assert_eq!(harness.closes(), 1);
    }

    #[test]
    fn non_text_clipboard_closes_without_probing_output() {
        let harness = Harness::new();
        let err = harness.run(Contents::Image, PasteInput::default(), false).unwrap_err();

        assert!(matches!(err, PasteError::NoTextualData));
        assert_eq!(
            harness.events(),
            vec![Event::Open, Event::FormatCheck, Event::Close]
        );
    }

    #[test]
    fn open_failure_never_closes() {
        let harness = Harness::new();
        let err = harness.run(Contents::Locked, PasteInput::default(), false).unwrap_err();

        assert!(matches!(err, PasteError::ClipboardOpenFailed(_)));
        assert!(harness.events().is_empty());
    }

    #[test]
    fn access_failure_still_closes() {
        let harness = Harness::new();
        let err = harness.run(Contents::Unreadable, PasteInput::default(), false).unwrap_err();

        assert!(matches!(err, PasteError::ClipboardAccessFailed(_)));
        assert_eq!(harness.closes(), 1);
        assert!(!harness.events().contains(&Event::SinkOpened));
    }

    #[test]
    fn write_failure_still_closes() {
        let harness = Harness::new();
        let err = harness.run(Contents::Text("data"), PasteInput::default(), true).unwrap_err();

        assert!(matches!(err, PasteError::OutputWriteFailed(_)));
        assert_eq!(harness.closes(), 1);
    }

    #[test]
    fn interrupt_before_start_skips_clipboard() {
        let harness = Harness::new();
        harness.interrupt.store(true, Ordering::SeqCst);
        let err = harness.run(Contents::Text("data"), PasteInput::default(), false).unwrap_err();

        assert!(matches!(err, PasteError::Interrupted));
        assert!(harness.events().is_empty());
    }

    #[test]
    fn clipboard_errors_map_to_paste_errors() {
        assert!(matches!(
            PasteError::from(ClipboardError::NoTextData),
            PasteError::NoTextualData
        ));
        assert!(matches!(
            PasteError::from(ClipboardError::OpenFailed("x".into())),
            PasteError::ClipboardOpenFailed(_)
        ));
        assert!(matches!(
            PasteError::from(ClipboardError::AccessFailed("x".into())),
            PasteError::ClipboardAccessFailed(_)
        ));
    }
}
