//! Property-based tests for the classifier and scanner.

use jslex_lex::tables::{KEYWORDS, OPERATORS};
use jslex_lex::{classify, tokenize, Token, TokenKind};
use proptest::prelude::*;
use proptest::sample::select;

/// Source-like text built from the characters that drive the scanner.
fn source_like() -> impl Strategy<Value = String> {
    "[a-z0-9_ \\t\\r\\n'\"/*+=<>!.;,(){}\\[\\]?&|^%-]{0,120}"
}

/// Checks that tokens cover the source in order and that everything
/// between them is whitespace.
fn assert_tiles_source(source: &str, tokens: &[Token]) {
    let mut offset = 0;
    for token in tokens {
        assert!(token.span.start >= offset, "overlapping token {token}");
        let gap = &source[offset..token.span.start];
        assert!(gap.chars().all(char::is_whitespace), "non-whitespace gap {gap:?}");
        assert_eq!(&source[token.span.start..token.span.end], token.text);
        offset = token.span.end;
    }
    assert!(source[offset..].chars().all(char::is_whitespace));
}

proptest! {
    #[test]
    fn classify_is_total_and_idempotent(input in any::<String>()) {
        let first = classify(&input);
        prop_assert!(TokenKind::ALL.contains(&first));
        prop_assert_eq!(classify(&input), first);
    }

    #[test]
    fn keywords_win_over_identifiers(kw in select(KEYWORDS)) {
        prop_assert_eq!(classify(kw), TokenKind::Keyword);
    }

    #[test]
    fn identifier_grammar(input in "[A-Za-z_][A-Za-z0-9_]{0,30}") {
        let expected = if KEYWORDS.contains(&input.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        prop_assert_eq!(classify(&input), expected);
    }

    #[test]
    fn decimal_numbers(int in "[0-9]{0,8}", frac in "[0-9]{1,8}") {
        let lexeme = format!("{int}.{frac}");
        prop_assert_eq!(classify(&lexeme), TokenKind::NumericConstant);
        let trailing = format!("{frac}.");
        prop_assert_eq!(classify(&trailing), TokenKind::Unknown);
    }

    #[test]
    fn hex_numbers(digits in "[0-9a-fA-F]{1,12}") {
        let tokens = tokenize(&format!("0x{digits}"));
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::NumericConstant);
    }

    #[test]
    fn quoted_text_is_one_string(body in "[^\"]{0,60}") {
        let source = format!("\"{body}\"");
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::StringConstant);
        prop_assert_eq!(&tokens[0].text, &source);
    }

    #[test]
    fn operators_scan_as_single_tokens(op in select(OPERATORS)) {
        let source = format!("a {op} b");
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens[1].text.as_str(), op);
        prop_assert_eq!(tokens[1].kind, TokenKind::Operator);
    }

    #[test]
    fn tokens_tile_source_like_text(source in source_like()) {
        assert_tiles_source(&source, &tokenize(&source));
    }

    #[test]
    fn tokens_tile_arbitrary_text(source in any::<String>()) {
        assert_tiles_source(&source, &tokenize(&source));
    }

    #[test]
    fn ordinary_tokens_agree_with_classifier(source in source_like()) {
        for token in tokenize(&source) {
            let starts_special = token.text.starts_with(['"', '\''])
                || token.text.starts_with("//")
                || token.text.starts_with("/*");
            if !starts_special {
                prop_assert_eq!(token.kind, classify(&token.text));
            }
        }
    }

    #[test]
    fn whitespace_never_in_ordinary_tokens(source in source_like()) {
        for token in tokenize(&source) {
            if matches!(token.kind, TokenKind::Keyword | TokenKind::Identifier | TokenKind::NumericConstant | TokenKind::Operator | TokenKind::Delimiter) {
                prop_assert!(!token.text.chars().any(char::is_whitespace));
            }
        }
    }
}
