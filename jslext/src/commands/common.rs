//! Common types and utilities for jslext commands.
//!
//! Reading and scanning input files is shared by every command that takes
//! `<FILE>...`, so it lives here together with the output helpers.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use jslex_lex::{tokenize_with_diagnostics, ScanOutput};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{JslextError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Output formats for commands that can emit JSON.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

// ============================================================================
// Scanning
// ============================================================================

/// Settings shared by the file-scanning commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    /// Worker threads used when several files are given.
    pub jobs: usize,
    /// Fail when any warning is raised.
    pub strict: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            jobs: 1,
            strict: false,
        }
    }
}

/// One input file and the result of scanning it.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Tokens and warnings.
    pub output: ScanOutput,
}

/// Reads and scans one file.
pub fn scan_file(path: &Path) -> Result<ScannedFile> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        JslextError::FileOperation(format!(
            "{} {}: {}",
            error_messages::CANNOT_READ,
            path.display(),
            e
        ))
    })?;
    let output = tokenize_with_diagnostics(&source);
    tracing::debug!(
        path = %path.display(),
        tokens = output.tokens.len(),
        "scanned file"
    );
    Ok(ScannedFile {
        path: path.to_path_buf(),
        output,
    })
}

/// Scans every file on a pool of `settings.jobs` threads.
///
/// Results come back in argument order. The first unreadable file aborts
/// the run.
pub fn scan_files(paths: &[PathBuf], settings: &ScanSettings) -> Result<Vec<ScannedFile>> {
    if paths.is_empty() {
        return Err(JslextError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    if paths.len() == 1 {
        return Ok(vec![scan_file(&paths[0])?]);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.jobs)
        .build()
        .map_err(|e| JslextError::Config(format!("{}: {}", error_messages::POOL_FAILED, e)))?;

    tracing::debug!(files = paths.len(), jobs = settings.jobs, "scanning in parallel");
    pool.install(|| paths.par_iter().map(|path| scan_file(path)).collect())
}

/// Logs every diagnostic and applies the strict policy.
pub fn check_diagnostics(files: &[ScannedFile], settings: &ScanSettings) -> Result<()> {
    let mut warnings = 0;
    for file in files {
        for diagnostic in &file.output.diagnostics {
            tracing::warn!("{}: {}", file.path.display(), diagnostic);
            if diagnostic.level.is_warning() {
                warnings += 1;
            }
        }
    }

    if settings.strict && warnings > 0 {
        return Err(JslextError::Diagnostics(format!(
            "{} {}",
            warnings,
            error_messages::WARNINGS_RAISED
        )));
    }
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

/// Joins per-file sections, adding `==> path <==` headers when there are
/// several.
pub fn join_sections<'a, I>(sections: I) -> String
where
    I: IntoIterator<Item = (&'a Path, String)>,
{
    let sections: Vec<_> = sections.into_iter().collect();
    if sections.len() == 1 {
        return sections.into_iter().map(|(_, body)| body).collect();
    }

    let mut out = String::new();
    for (index, (path, body)) in sections.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "==> {} <==", path.display());
        out.push_str(body);
    }
    out
}

// ============================================================================
// Error Messages
// ============================================================================

/// Error message constants.
pub mod error_messages {
    /// No input files were given.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// No lexemes were given to classify.
    pub const NO_LEXEMES: &str = "No lexemes specified";

    /// An input file could not be read.
    pub const CANNOT_READ: &str = "cannot read";

    /// The worker pool could not be started.
    pub const POOL_FAILED: &str = "failed to start worker pool";

    /// Strict mode rejected the scan.
    pub const WARNINGS_RAISED: &str = "warning(s) raised in strict mode";
}
