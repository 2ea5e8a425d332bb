//! clip-paste - write the system clipboard's text to standard output
//!
//! This crate reads the clipboard's Unicode text and streams it to stdout,
//! optionally rewriting line endings to LF or CRLF.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Line-ending normalization, the clipboard text view, UTF-8 encoding
//! - **Application**: The paste use case, chunked writer, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Win32 clipboard, arboard, stdout sinks)
//! - **CLI**: Argument parsing, diagnostics, and interrupt handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
