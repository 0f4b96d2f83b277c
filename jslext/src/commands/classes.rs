//! Classes command implementation.

use std::path::PathBuf;

use jslex_report::{group_by_kind, render_groups};

use crate::commands::common::{
    check_diagnostics, join_sections, scan_files, ScanSettings, ScannedFile,
};
use crate::error::Result;

/// Arguments for the classes command.
#[derive(Debug, Clone)]
pub struct ClassesArgs {
    /// Input files, printed in this order.
    pub files: Vec<PathBuf>,
    /// Threading and strictness.
    pub settings: ScanSettings,
}

/// Run the classes command.
pub fn run_classes(args: ClassesArgs) -> Result<()> {
    let files = scan_files(&args.files, &args.settings)?;
    print!("{}", render(&files));
    check_diagnostics(&files, &args.settings)
}

/// Lists each file's lexemes grouped by class.
pub fn render(files: &[ScannedFile]) -> String {
    join_sections(files.iter().map(|file| {
        let groups = group_by_kind(&file.output.tokens);
        (file.path.as_path(), render_groups(&groups))
    }))
}
