//! CLI argument definitions using Clap

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use crate::application::{PasteInput, DEFAULT_CHUNK_UNITS};
use crate::domain::line_ending::LineEndingPolicy;

/// paste - write the clipboard's text to standard output
#[derive(Parser, Debug)]
#[command(name = "paste")]
#[command(version)]
#[command(about = "Write the system clipboard's text to standard output")]
#[command(long_about = None)]
pub struct Cli {
    /// Convert line endings to LF
    #[arg(long, conflicts_with = "crlf")]
    pub lf: bool,

    /// Convert line endings to CRLF
    #[arg(long)]
    pub crlf: bool,
}

impl Cli {
    /// Line-ending policy selected by the flags
    pub fn line_ending(&self) -> LineEndingPolicy {
        if self.lf {
            LineEndingPolicy::ConvertToLf
        } else if self.crlf {
            LineEndingPolicy::ConvertToCrLf
        } else {
            LineEndingPolicy::AsIs
        }
    }
}

/// Parsed paste options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteOptions {
    pub line_ending: LineEndingPolicy,
    pub chunk_units: usize,
}

impl Default for PasteOptions {
    fn default() -> Self {
        Self {
            line_ending: LineEndingPolicy::AsIs,
            chunk_units: DEFAULT_CHUNK_UNITS,
        }
    }
}

impl From<PasteOptions> for PasteInput {
    fn from(options: PasteOptions) -> Self {
        PasteInput {
            line_ending: options.line_ending,
            chunk_units: options.chunk_units,
        }
    }
}

/// Outcome of argument parsing
#[derive(Debug)]
pub enum ParsedArgs {
    /// Paste with these options
    Paste(PasteOptions),
    /// Help or version was requested; print it and exit successfully
    Exit(clap::Error),
}

/// Parse the command line.
///
/// Long options match case-insensitively. Anything other than a single
/// recognized option (unknown flags, extra words, `--lf --crlf`) falls
/// back to pasting as-is rather than failing.
pub fn parse_args<I, T>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = args.into_iter().map(|arg| fold_long_option(arg.into()));

    match Cli::try_parse_from(args) {
        Ok(cli) => ParsedArgs::Paste(PasteOptions {
            line_ending: cli.line_ending(),
            ..Default::default()
        }),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            ParsedArgs::Exit(e)
        }
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "ignoring unrecognized arguments");
            ParsedArgs::Paste(PasteOptions::default())
        }
    }
}

fn fold_long_option(arg: OsString) -> OsString {
    match arg.to_str() {
        Some(s) if s.starts_with("--") => s.to_ascii_lowercase().into(),
        _ => arg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn policy(args: &[&str]) -> LineEndingPolicy {
        match parse_args(args.iter().copied()) {
            ParsedArgs::Paste(options) => options.line_ending,
            ParsedArgs::Exit(e) => panic!("Expected paste options, got {:?}", e.kind()),
        }
    }

    #[test]
    fn no_arguments_pastes_as_is() {
        assert_eq!(policy(&["paste"]), LineEndingPolicy::AsIs);
    }

    #[test]
    fn lf_flag() {
        assert_eq!(policy(&["paste", "--lf"]), LineEndingPolicy::ConvertToLf);
    }

    #[test]
    fn crlf_flag() {
        assert_eq!(policy(&["paste", "--crlf"]), LineEndingPolicy::ConvertToCrLf);
    }

    #[test]
    fn flags_are_case_insensitive() {
        assert_eq!(policy(&["paste", "--LF"]), LineEndingPolicy::ConvertToLf);
        assert_eq!(policy(&["paste", "--CrLf"]), LineEndingPolicy::ConvertToCrLf);
    }

    #[test]
    fn unknown_flag_is_ignored() {
        assert_eq!(policy(&["paste", "--unix"]), LineEndingPolicy::AsIs);
        assert_eq!(policy(&["paste", "stray"]), LineEndingPolicy::AsIs);
    }

    #[test]
    fn more_than_one_argument_pastes_as_is() {
        assert_eq!(policy(&["paste", "--lf", "--crlf"]), LineEndingPolicy::AsIs);
        assert_eq!(policy(&["paste", "--lf", "extra"]), LineEndingPolicy::AsIs);
    }

    #[test]
    fn help_requests_exit() {
        for flag in ["--help", "-h"] {
            match parse_args(["paste", flag]) {
                ParsedArgs::Exit(e) => assert_eq!(e.kind(), ErrorKind::DisplayHelp),
                ParsedArgs::Paste(_) => panic!("Expected help for {}", flag),
            }
        }
    }

    #[test]
    fn version_requests_exit() {
        match parse_args(["paste", "--version"]) {
            ParsedArgs::Exit(e) => assert_eq!(e.kind(), ErrorKind::DisplayVersion),
            ParsedArgs::Paste(_) => panic!("Expected version"),
        }
    }

    #[test]
    fn options_convert_to_input() {
        let input = PasteInput::from(PasteOptions {
            line_ending: LineEndingPolicy::ConvertToLf,
            chunk_units: 16,
        });
        assert_eq!(input.line_ending, LineEndingPolicy::ConvertToLf);
        assert_eq!(input.chunk_units, 16);
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
