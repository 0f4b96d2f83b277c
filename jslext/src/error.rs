//! Error handling module for the jslext CLI.
//!
//! Scan problems are never errors here; they arrive as warning diagnostics
//! and only become a [`JslextError::Diagnostics`] under `--strict`.

use jslex_report::ReportError;
use thiserror::Error;

/// Main error type for the jslext CLI application.
#[derive(Error, Debug)]
pub enum JslextError {
    /// Error when the configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command-line input is rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Warnings were raised while scanning and strict mode is on.
    #[error("Scan diagnostics: {0}")]
    Diagnostics(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised by a report renderer.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Result type alias using JslextError.
pub type Result<T> = std::result::Result<T, JslextError>;
