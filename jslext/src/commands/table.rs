//! Table command implementation.
//!
//! Prints the `Lexeme | Type` table for each input file, or the tokens as
//! JSON.

use std::path::PathBuf;

use jslex_lex::Token;
use jslex_report::{render_json, to_json, LexemeTable, TableStyle};
use serde::Serialize;

use crate::commands::common::{
    check_diagnostics, join_sections, scan_files, OutputFormat, ScanSettings, ScannedFile,
};
use crate::error::Result;

/// Arguments for the table command.
#[derive(Debug, Clone)]
pub struct TableArgs {
    /// Input files, printed in this order.
    pub files: Vec<PathBuf>,
    /// Text table or JSON.
    pub format: OutputFormat,
    /// Column widths for the text table.
    pub style: TableStyle,
    /// Threading and strictness.
    pub settings: ScanSettings,
}

#[derive(Serialize)]
struct FileTokens<'a> {
    path: String,
    tokens: &'a [Token],
}

/// Run the table command.
pub fn run_table(args: TableArgs) -> Result<()> {
    let files = scan_files(&args.files, &args.settings)?;
    print!("{}", render(&files, args.format, &args.style)?);
    check_diagnostics(&files, &args.settings)
}

/// Renders the scanned files in the requested format.
///
/// A single file in JSON is a bare token array; several files become an
/// array of `{ "path", "tokens" }` objects.
pub fn render(files: &[ScannedFile], format: OutputFormat, style: &TableStyle) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(join_sections(files.iter().map(|file| {
            let table = LexemeTable::from_tokens(&file.output.tokens);
            (file.path.as_path(), table.render(style))
        }))),
        OutputFormat::Json if files.len() == 1 => {
            Ok(render_json(&files[0].output.tokens)? + "\n")
        }
        OutputFormat::Json => {
            let entries: Vec<_> = files
                .iter()
                .map(|file| FileTokens {
                    path: file.path.display().to_string(),
                    tokens: &file.output.tokens,
                })
                .collect();
            Ok(to_json(&entries)? + "\n")
        }
    }
}
