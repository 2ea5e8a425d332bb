//! Main app runner for one-shot paste

use std::process::ExitCode;
use std::time::Duration;

use crate::application::{PasteClipboardUseCase, PasteError, PasteInput};
use crate::infrastructure::{create_clipboard, open_stdout};

use super::args::PasteOptions;
use super::presenter::Presenter;
use super::signals::InterruptSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_CLIPBOARD_ERROR: u8 = 1;
pub const EXIT_NO_TEXT: u8 = 2;
pub const EXIT_SYSTEM_ERROR: u8 = 3;
pub const EXIT_INTERRUPTED: u8 = 4;

/// How long an interrupted run may spend releasing the clipboard
pub const INTERRUPT_GRACE: Duration = Duration::from_millis(250);

/// Map a pipeline failure to its process exit code
pub fn exit_code_for(err: &PasteError) -> u8 {
    match err {
        PasteError::ClipboardOpenFailed(_) | PasteError::ClipboardAccessFailed(_) => {
            EXIT_CLIPBOARD_ERROR
        }
        PasteError::NoTextualData => EXIT_NO_TEXT,
        PasteError::OutputWriteFailed(_) => EXIT_SYSTEM_ERROR,
        PasteError::Interrupted => EXIT_INTERRUPTED,
    }
}

/// Run the one-shot paste
pub async fn run_paste(options: PasteOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Setup signal handler
    let interrupt = InterruptSignal::new();
    if let Err(e) = interrupt.setup().await {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_SYSTEM_ERROR);
    }

    let input = PasteInput::from(options);
    let flag = interrupt.flag();

    // Clipboard and console calls block, so the pipeline runs off the runtime
    let mut task = tokio::task::spawn_blocking(move || {
        let mut use_case = PasteClipboardUseCase::new(create_clipboard(), flag);
        use_case.execute(input, open_stdout)
    });

    let result = tokio::select! {
        joined = &mut task => match joined {
            Ok(result) => result,
            Err(e) => {
                presenter.error(&format!("Paste task failed: {}", e));
                return ExitCode::from(EXIT_SYSTEM_ERROR);
            }
        },
        () = interrupt.wait() => {
            // Give the pipeline a chance to release the clipboard, then leave
            // without waiting on a call that may never return.
            let _ = tokio::time::timeout(INTERRUPT_GRACE, &mut task).await;
            presenter.error(&PasteError::Interrupted.to_string());
            std::process::exit(i32::from(EXIT_INTERRUPTED));
        }
    };

    match result {
        Ok(output) => {
            tracing::debug!(
                units_read = output.units_read,
                units_written = output.units_written,
                sink = %output.sink_kind,
                "paste complete"
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(exit_code_for(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::OutputError;

    #[test]
    fn exit_codes_are_distinct_per_failure_class() {
        assert_eq!(
            exit_code_for(&PasteError::ClipboardOpenFailed("busy".into())),
            EXIT_CLIPBOARD_ERROR
        );
        assert_eq!(
            exit_code_for(&PasteError::ClipboardAccessFailed("lock".into())),
            EXIT_CLIPBOARD_ERROR
        );
        assert_eq!(exit_code_for(&PasteError::NoTextualData), EXIT_NO_TEXT);
        assert_eq!(
            exit_code_for(&PasteError::OutputWriteFailed(OutputError::ShortWrite {
                written: 1,
                requested: 2
            })),
            EXIT_SYSTEM_ERROR
        );
        assert_eq!(exit_code_for(&PasteError::Interrupted), EXIT_INTERRUPTED);
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(EXIT_SUCCESS, 0);
        assert_eq!(EXIT_CLIPBOARD_ERROR, 1);
        assert_eq!(EXIT_NO_TEXT, 2);
        assert_eq!(EXIT_SYSTEM_ERROR, 3);
        assert_eq!(EXIT_INTERRUPTED, 4);
    }
}
