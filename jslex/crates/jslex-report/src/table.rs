//! Lexeme table rendering.

use std::fmt::Write;

use jslex_lex::{Token, TokenKind};
use serde::{Deserialize, Serialize};

/// Column widths for [`LexemeTable::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Width of the lexeme column.
    pub lexeme_width: usize,
    /// Width of the type column.
    pub kind_width: usize,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            lexeme_width: 10,
            kind_width: 25,
        }
    }
}

impl TableStyle {
    /// Total width of one row, borders included.
    pub fn row_width(&self) -> usize {
        self.lexeme_width + self.kind_width + 7
    }
}

/// One row of a [`LexemeTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexemeRow {
    /// The lexeme text.
    pub lexeme: String,
    /// Its class.
    pub kind: TokenKind,
}

/// The tokens of one scan as `(lexeme, kind)` rows in source order.
///
/// # Example
///
/// ```
/// use jslex_lex::tokenize;
/// use jslex_report::{LexemeTable, TableStyle};
///
/// let table = LexemeTable::from_tokens(&tokenize("x"));
/// let text = table.render(&TableStyle::default());
/// assert!(text.contains("|          x |                IDENTIFIER |"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexemeTable {
    rows: Vec<LexemeRow>,
}

impl LexemeTable {
    /// Builds the table from scanned tokens.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let rows = tokens
            .iter()
            .map(|t| LexemeRow {
                lexeme: t.text.clone(),
                kind: t.kind,
            })
            .collect();
        Self { rows }
    }

    /// Returns the rows in source order.
    pub fn rows(&self) -> &[LexemeRow] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table as boxed text.
    pub fn render(&self, style: &TableStyle) -> String {
        let rule = "-".repeat(style.row_width());
        let lw = style.lexeme_width;
        let kw = style.kind_width;

        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Lexeme Table:");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "| {:^lw$} | {:^kw$} |", "Lexeme", "Type");
        let _ = writeln!(out, "{rule}");
        for row in &self.rows {
            let _ = writeln!(out, "| {:>lw$} | {:>kw$} |", row.lexeme, row.kind.name());
        }
        let _ = writeln!(out, "{rule}");
        out
    }
}
