//! Summary command implementation.
//!
//! Counts tokens per class. With several files each file gets its own block
//! and a combined total follows.

use std::fmt::Write;
use std::path::PathBuf;

use jslex_report::{render_counts_json, to_json, KindCounts};
use serde::Serialize;

use crate::commands::common::{
    check_diagnostics, join_sections, scan_files, OutputFormat, ScanSettings, ScannedFile,
};
use crate::error::Result;

/// Arguments for the summary command.
#[derive(Debug, Clone)]
pub struct SummaryArgs {
    /// Input files, printed in this order.
    pub files: Vec<PathBuf>,
    /// Text or JSON.
    pub format: OutputFormat,
    /// Threading and strictness.
    pub settings: ScanSettings,
}

#[derive(Serialize)]
struct FileCounts {
    path: String,
    counts: KindCounts,
}

#[derive(Serialize)]
struct SummaryReport {
    files: Vec<FileCounts>,
    total: KindCounts,
}

/// Run the summary command.
pub fn run_summary(args: SummaryArgs) -> Result<()> {
    let files = scan_files(&args.files, &args.settings)?;
    print!("{}", render(&files, args.format)?);
    check_diagnostics(&files, &args.settings)
}

/// Renders per-file counts, plus a total when there are several files.
pub fn render(files: &[ScannedFile], format: OutputFormat) -> Result<String> {
    let per_file: Vec<_> = files
        .iter()
        .map(|file| (file, KindCounts::from_tokens(&file.output.tokens)))
        .collect();
    let mut total = KindCounts::default();
    for (_, counts) in &per_file {
        total.merge(counts);
    }

    match format {
        OutputFormat::Text => {
            let mut out = join_sections(
                per_file
                    .iter()
                    .map(|(file, counts)| (file.path.as_path(), counts.render())),
            );
            if per_file.len() > 1 {
                let _ = write!(out, "\n==> total <==\n{}", total.render());
            }
            Ok(out)
        }
        OutputFormat::Json if per_file.len() == 1 => Ok(render_counts_json(&total)? + "\n"),
        OutputFormat::Json => {
            let report = SummaryReport {
                files: per_file
                    .into_iter()
                    .map(|(file, counts)| FileCounts {
                        path: file.path.display().to_string(),
                        counts,
                    })
                    .collect(),
                total,
            };
            Ok(to_json(&report)? + "\n")
        }
    }
}
