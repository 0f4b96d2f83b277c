//! Classify command implementation.
//!
//! Runs the classifier alone, one argument at a time, without scanning.

use std::fmt::Write;

use jslex_lex::classify;

use crate::commands::common::error_messages;
use crate::error::{JslextError, Result};

/// Arguments for the classify command.
#[derive(Debug, Clone, Default)]
pub struct ClassifyArgs {
    /// Lexemes to classify.
    pub lexemes: Vec<String>,
}

/// Run the classify command.
pub fn run_classify(args: ClassifyArgs) -> Result<()> {
    if args.lexemes.is_empty() {
        return Err(JslextError::Validation(
            error_messages::NO_LEXEMES.to_string(),
        ));
    }
    print!("{}", render(&args.lexemes));
    Ok(())
}

/// Renders `<lexeme>\t<KIND>` per lexeme.
pub fn render(lexemes: &[String]) -> String {
    let mut out = String::new();
    for lexeme in lexemes {
        let _ = writeln!(out, "{}\t{}", lexeme, classify(lexeme).name());
    }
    out
}
