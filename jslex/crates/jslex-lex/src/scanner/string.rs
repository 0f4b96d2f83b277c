//! String literal scanning.
//!
//! A string runs from its opening quote to the next occurrence of the same
//! quote. Backslashes get no special treatment, so `"a\"` is a complete
//! literal.

use jslex_util::{DiagnosticBuilder, DiagnosticCode, SourceSnippet};

use super::{ScanMode, Scanner};
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Consumes characters up to and including the closing `quote`.
    ///
    /// If input ends first the mode is left as `InString` for the
    /// end-of-input handling to pick up.
    pub(super) fn scan_string(&mut self, quote: char) {
        while let Some(c) = self.cursor.advance() {
            if c == quote {
                self.emit_pending(TokenKind::StringConstant);
                self.enter(ScanMode::Normal);
                return;
            }
        }
    }

    /// Emits a string that was still open at end of input as `Unknown` and
    /// reports it.
    pub(super) fn unterminated_string(&mut self, quote: char) {
        let span = self.pending_span();
        let snippet = SourceSnippet::from_source(self.cursor.source(), span)
            .map(|s| s.with_label("string starts here"));

        DiagnosticBuilder::warning("unterminated string literal")
            .code(DiagnosticCode::W_UNTERMINATED_STRING)
            .span(span)
            .maybe_snippet(snippet)
            .help(format!("close the literal with a matching {quote}"))
            .emit(self.handler);

        self.emit_pending(TokenKind::Unknown);
    }
}

#[cfg(test)]
mod tests {
    use jslex_util::{Handler, Span};

    use crate::{Scanner, Token, TokenKind};

    fn lex_strings(source: &str) -> (Vec<Token>, Handler) {
        let mut handler = Handler::new();
        let tokens = Scanner::new(source, &mut handler).tokenize();
        (tokens, handler)
    }

    #[test]
    fn test_string_keeps_delimiters_inside() {
        let (tokens, handler) = lex_strings("let s = \"a,b;c\"");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3].text, "\"a,b;c\"");
        assert_eq!(tokens[3].kind, TokenKind::StringConstant);
        assert!(handler.is_empty());
    }

    #[test]
    fn test_single_quotes() {
        let (tokens, _) = lex_strings("'it\"s'");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::StringConstant);
    }

    #[test]
    fn test_other_quote_does_not_close() {
        let (tokens, _) = lex_strings("\"don't\"");
        assert_eq!(tokens[0].text, "\"don't\"");
    }

    #[test]
    fn test_empty_string() {
        let (tokens, _) = lex_strings("''");
        assert_eq!(tokens[0].text, "''");
        assert_eq!(tokens[0].kind, TokenKind::StringConstant);
    }

    #[test]
    fn test_backslash_does_not_escape() {
        let (tokens, _) = lex_strings(r#""a\"b""#);
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec![r#""a\""#, "b", "\""]);
        assert_eq!(tokens[0].kind, TokenKind::StringConstant);
        assert_eq!(tokens[2].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_string_spans_lines() {
        let (tokens, _) = lex_strings("'a\nb' c");
        assert_eq!(tokens[0].text, "'a\nb'");
        assert_eq!(tokens[1].span.line, 2);
        assert_eq!(tokens[1].span.column, 4);
    }

    #[test]
    fn test_adjacent_strings() {
        let (tokens, _) = lex_strings("'a''b'");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::StringConstant));
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, handler) = lex_strings("x = \"oops");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].text, "\"oops");
        assert_eq!(tokens[2].kind, TokenKind::Unknown);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(jslex_util::DiagnosticCode::W_UNTERMINATED_STRING));
        assert_eq!(diags[0].span, Span::new(4, 9, 1, 5));
        assert_eq!(diags[0].snippets[0].line, "x = \"oops");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_lone_quote() {
        let (tokens, handler) = lex_strings("'");
        assert_eq!(tokens[0].text, "'");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(handler.warning_count(), 1);
    }
}
