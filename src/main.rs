//! paste CLI entry point

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use clip_paste::cli::{parse_args, run_paste, ParsedArgs, Presenter, EXIT_SYSTEM_ERROR};

/// Environment variable holding the diagnostics filter
const LOG_ENV: &str = "PASTE_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Silent unless asked; stderr is reserved for the failure line
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match parse_args(std::env::args_os()) {
        ParsedArgs::Exit(info) => match info.print() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                Presenter::new().error(&format!("Failed to write help: {}", e));
                ExitCode::from(EXIT_SYSTEM_ERROR)
            }
        },
        ParsedArgs::Paste(options) => run_paste(options).await,
    }
}
