//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Malformed report lines are not errors: the parser records them as
//! [`Diagnostic`](crate::parser::Diagnostic)s and keeps going.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a report from being parsed at all
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open report {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read report: {0}")]
    Read(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
