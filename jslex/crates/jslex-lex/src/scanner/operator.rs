//! Operator and delimiter scanning.
//!
//! At each character the scanner looks at up to three characters of input
//! and takes the longest prefix found in the operator or delimiter table, so
//! `===` is one token rather than `==` followed by `=`.

use super::Scanner;
use crate::classify::classify;

impl<'a> Scanner<'a> {
    /// Emits the `len`-byte operator or delimiter at the cursor.
    ///
    /// The caller has already flushed the pending lexeme.
    pub(super) fn scan_symbol(&mut self, len: usize) {
        let start = self.cursor.snapshot();
        // Table entries are ASCII, so bytes and characters coincide.
        self.cursor.advance_n(len);
        let kind = classify(self.cursor.slice_from(start.position));
        self.emit_from(start, kind);
    }
}

#[cfg(test)]
mod tests {
    use jslex_util::Handler;

    use crate::{Scanner, TokenKind};

    fn lex_ops(source: &str) -> Vec<(TokenKind, String)> {
        let mut handler = Handler::new();
        Scanner::new(source, &mut handler)
            .map(|t| (t.kind, t.text))
            .collect()
    }

    fn texts(source: &str) -> Vec<String> {
        lex_ops(source).into_iter().map(|(_, text)| text).collect()
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(lex_ops("==="), vec![(TokenKind::Operator, "===".to_string())]);
        assert_eq!(texts("!=="), vec!["!=="]);
        assert_eq!(texts(">>>"), vec![">>>"]);
        assert_eq!(texts(">>"), vec![">>"]);
    }

    #[test]
    fn test_longest_match_then_rest() {
        assert_eq!(texts("===="), vec!["===", "="]);
        assert_eq!(texts(">>>="), vec![">>>", "="]);
        assert_eq!(texts("+++"), vec!["++", "+"]);
        assert_eq!(texts("<<="), vec!["<<", "="]);
    }

    #[test]
    fn test_operators_without_single_char_prefix() {
        assert_eq!(texts("a&&b"), vec!["a", "&&", "b"]);
        assert_eq!(texts("a||b"), vec!["a", "||", "b"]);
        assert_eq!(texts("x&=1"), vec!["x", "&=", "1"]);
        assert_eq!(texts("o?.p"), vec!["o", "?.", "p"]);
    }

    #[test]
    fn test_lone_prefix_chars_extend_buffer() {
        assert_eq!(
            lex_ops("a&b"),
            vec![(TokenKind::Unknown, "a&b".to_string())]
        );
        assert_eq!(texts("a ? b : c"), vec!["a", "?", "b", ":", "c"]);
    }

    #[test]
    fn test_operator_flushes_buffer() {
        assert_eq!(
            lex_ops("x=42;"),
            vec![
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Operator, "=".to_string()),
                (TokenKind::NumericConstant, "42".to_string()),
                (TokenKind::Delimiter, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_arrow_function() {
        assert_eq!(
            texts("(a,b)=>a+b"),
            vec!["(", "a", ",", "b", ")", "=>", "a", "+", "b"]
        );
    }

    #[test]
    fn test_delimiters_are_single() {
        let tokens = lex_ops("((]]");
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().all(|(k, _)| *k == TokenKind::Delimiter));
    }

    #[test]
    fn test_minus_before_number() {
        assert_eq!(
            lex_ops("-1"),
            vec![
                (TokenKind::Operator, "-".to_string()),
                (TokenKind::NumericConstant, "1".to_string()),
            ]
        );
    }
}
