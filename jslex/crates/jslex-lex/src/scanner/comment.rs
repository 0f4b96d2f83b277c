//! Comment scanning.
//!
//! Comments are kept as tokens. A line comment stops in front of the line
//! break; a block comment includes its closing `*/`. Block comments do not
//! nest.

use jslex_util::{DiagnosticBuilder, DiagnosticCode, SourceSnippet};

use super::{ScanMode, Scanner};
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Consumes a line comment up to, but not including, `\n` or `\r`.
    pub(super) fn scan_line_comment(&mut self) {
        while let Some(c) = self.cursor.current_char() {
            if c == '\n' || c == '\r' {
                self.emit_pending(TokenKind::Comment);
                self.enter(ScanMode::Normal);
                return;
            }
            self.cursor.advance();
        }
    }

    /// Consumes a block comment through its closing `*/`.
    pub(super) fn scan_block_comment(&mut self) {
        while !self.cursor.is_at_end() {
            if self.cursor.starts_with("*/") {
                self.cursor.advance_n(2);
                self.emit_pending(TokenKind::Comment);
                self.enter(ScanMode::Normal);
                return;
            }
            self.cursor.advance();
        }
    }

    /// Emits a block comment that was still open at end of input as
    /// `Unknown` and reports it.
    pub(super) fn unterminated_block_comment(&mut self) {
        let span = self.pending_span();
        let snippet = SourceSnippet::from_source(self.cursor.source(), span)
            .map(|s| s.with_label("comment starts here"));

        DiagnosticBuilder::warning("unterminated block comment")
            .code(DiagnosticCode::W_UNTERMINATED_BLOCK_COMMENT)
            .span(span)
            .maybe_snippet(snippet)
            .help("close the comment with `*/`")
            .emit(self.handler);

        self.emit_pending(TokenKind::Unknown);
    }
}
