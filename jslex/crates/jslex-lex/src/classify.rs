//! Lexeme classification.
//!
//! [`classify`] maps a complete lexeme to exactly one [`TokenKind`]. The
//! rules are tried in a fixed order and the first one that accepts the
//! whole lexeme wins:
//!
//! 1. keyword table
//! 2. identifier grammar `[A-Za-z_][A-Za-z0-9_]*`
//! 3. string grammar `"[^"]*"` or `'[^']*'`
//! 4. numeric grammar `[0-9]*\.[0-9]+`, `[0-9]+` or `0x[0-9A-Fa-f]+`
//! 5. operator table
//! 6. delimiter table
//!
//! Anything else is [`TokenKind::Unknown`]. Since keywords also satisfy the
//! identifier grammar, the order is what keeps `if` a keyword.

use crate::tables;
use crate::token::TokenKind;

/// Classifies a complete lexeme.
///
/// Total and pure: every input yields exactly one kind.
///
/// # Example
///
/// ```
/// use jslex_lex::{classify, TokenKind};
///
/// assert_eq!(classify("if"), TokenKind::Keyword);
/// assert_eq!(classify("iffy"), TokenKind::Identifier);
/// assert_eq!(classify("0xFF"), TokenKind::NumericConstant);
/// assert_eq!(classify("3."), TokenKind::Unknown);
/// ```
pub fn classify(lexeme: &str) -> TokenKind {
    if is_keyword(lexeme) {
        TokenKind::Keyword
    } else if is_identifier(lexeme) {
        TokenKind::Identifier
    } else if is_string_constant(lexeme) {
        TokenKind::StringConstant
    } else if is_numeric_constant(lexeme) {
        TokenKind::NumericConstant
    } else if is_operator(lexeme) {
        TokenKind::Operator
    } else if is_delimiter(lexeme) {
        TokenKind::Delimiter
    } else {
        TokenKind::Unknown
    }
}

/// Exact, case-sensitive keyword table lookup.
#[inline]
pub fn is_keyword(lexeme: &str) -> bool {
    tables::is_keyword(lexeme)
}

/// Matches `[A-Za-z_][A-Za-z0-9_]*` against the whole lexeme.
pub fn is_identifier(lexeme: &str) -> bool {
    let mut bytes = lexeme.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        },
        _ => false,
    }
}

/// Matches a quoted literal: the same quote at both ends and no further
/// occurrence of that quote in between.
///
/// Escapes are not recognized, so `"a\"b"` does not match.
pub fn is_string_constant(lexeme: &str) -> bool {
    let quote = match lexeme.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return false,
    };
    lexeme.len() >= 2
        && lexeme.ends_with(quote)
        && !lexeme[1..lexeme.len() - 1].contains(quote)
}

/// Matches `[0-9]*\.[0-9]+`, `[0-9]+` or `0x[0-9A-Fa-f]+`.
///
/// A trailing point (`3.`) is rejected and a leading one (`.5`) accepted.
/// Only a lowercase `x` introduces a hexadecimal number.
pub fn is_numeric_constant(lexeme: &str) -> bool {
    if let Some(hex) = lexeme.strip_prefix("0x") {
        if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return true;
        }
    }

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match lexeme.split_once('.') {
        Some((int, frac)) => !frac.is_empty() && all_digits(int) && all_digits(frac),
        None => !lexeme.is_empty() && all_digits(lexeme),
    }
}

/// Exact operator table lookup.
#[inline]
pub fn is_operator(lexeme: &str) -> bool {
    tables::is_operator(lexeme)
}

/// Exact delimiter table lookup.
#[inline]
pub fn is_delimiter(lexeme: &str) -> bool {
    tables::is_delimiter(lexeme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword() {
        for kw in ["var", "const", "function", "finally", "await"] {
            assert!(is_keyword(kw), "{kw}");
        }
        assert!(!is_keyword("Function"));
        assert!(!is_keyword("fn"));
        assert!(!is_keyword(""));
    }

    #[test]
    fn test_identifier() {
        for id in ["x", "_", "_private", "camelCase", "snake_case_2", "A1"] {
            assert!(is_identifier(id), "{id}");
        }
        for not_id in ["", "1abc", "a-b", "a.b", "$x", "é", "a b"] {
            assert!(!is_identifier(not_id), "{not_id}");
        }
    }

    #[test]
    fn test_string_constant() {
        for s in ["\"\"", "''", "\"a,b;c\"", "'it\"s'", "\"x'y\""] {
            assert!(is_string_constant(s), "{s}");
        }
        for not_s in ["\"", "'", "\"abc", "abc\"", "\"a'", "'a\"", "\"a\"b\"", "x"] {
            assert!(!is_string_constant(not_s), "{not_s}");
        }
    }

    #[test]
    fn test_numeric_constant() {
        for n in ["0", "42", "007", "3.14", ".5", "0.0", "0xFF", "0xdeadBEEF", "0x0"] {
            assert!(is_numeric_constant(n), "{n}");
        }
        for not_n in ["", ".", "3.", "1.2.3", "0x", "0XFF", "0xG", "1e10", "-1", "12a"] {
            assert!(!is_numeric_constant(not_n), "{not_n}");
        }
    }

    #[test]
    fn test_operator_and_delimiter() {
        assert!(is_operator("?."));
        assert!(is_operator("!=="));
        assert!(!is_operator("?"));
        assert!(!is_operator(";"));
        assert!(is_delimiter(";"));
        assert!(!is_delimiter("+"));
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(classify("if"), TokenKind::Keyword);
        assert_eq!(classify("return"), TokenKind::Keyword);
        assert_eq!(classify("returned"), TokenKind::Identifier);
        assert_eq!(classify("'x'"), TokenKind::StringConstant);
        assert_eq!(classify("42"), TokenKind::NumericConstant);
        assert_eq!(classify("3.14"), TokenKind::NumericConstant);
        assert_eq!(classify(".5"), TokenKind::NumericConstant);
        assert_eq!(classify("==="), TokenKind::Operator);
        assert_eq!(classify("("), TokenKind::Delimiter);
    }

    #[test]
    fn test_classify_unknown() {
        for u in ["", "3.", "a.b", "#", "@foo", "\"open", "/* open", "?"] {
            assert_eq!(classify(u), TokenKind::Unknown, "{u}");
        }
    }

    #[test]
    fn test_bare_hex_prefix() {
        // `0x` is neither numeric nor an identifier
        assert_eq!(classify("0x"), TokenKind::Unknown);
        assert_eq!(classify("x0"), TokenKind::Identifier);
    }
}
