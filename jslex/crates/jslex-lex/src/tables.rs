//! Lexical tables.
//!
//! The keyword, operator and delimiter lists are fixed at compile time. The
//! hash sets built from them are created on first use and only ever read
//! afterwards, so they can be shared freely between threads.

use rustc_hash::FxHashSet;

/// Reserved words, matched case-sensitively.
pub const KEYWORDS: &[&str] = &[
    "var", "let", "const", "function", "return", "if", "else", "for", "while", "switch", "case",
    "default", "break", "continue", "try", "catch", "throw", "finally", "async", "await",
];

/// Operators, from one to three characters long.
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "&&", "||", "==", "!=", "===", "!==", "<", ">", "<=", ">=", "!",
    "++", "--", "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", ">>>", "?.",
    "=>",
];

/// Single-character delimiters.
pub const DELIMITERS: &[&str] = &[",", ";", "{", "}", "(", ")", "[", "]"];

/// Length in characters of the longest operator or delimiter.
pub const MAX_SYMBOL_LEN: usize = 3;

lazy_static::lazy_static! {
    static ref KEYWORD_SET: FxHashSet<&'static str> = KEYWORDS.iter().copied().collect();
    static ref OPERATOR_SET: FxHashSet<&'static str> = OPERATORS.iter().copied().collect();
    static ref DELIMITER_SET: FxHashSet<&'static str> = DELIMITERS.iter().copied().collect();
}

/// Returns true if `text` is in the keyword table.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    KEYWORD_SET.contains(text)
}

/// Returns true if `text` is in the operator table.
#[inline]
pub fn is_operator(text: &str) -> bool {
    OPERATOR_SET.contains(text)
}

/// Returns true if `text` is in the delimiter table.
#[inline]
pub fn is_delimiter(text: &str) -> bool {
    DELIMITER_SET.contains(text)
}

/// Returns true if `text` is an operator or a delimiter.
#[inline]
pub fn is_symbol(text: &str) -> bool {
    is_operator(text) || is_delimiter(text)
}

/// Finds the longest operator or delimiter at the start of `rest`.
///
/// Returns the byte length of the match. Every table entry is ASCII, so a
/// prefix that would split a multi-byte character can never match.
///
/// # Example
///
/// ```
/// use jslex_lex::tables::longest_symbol_prefix;
///
/// assert_eq!(longest_symbol_prefix("===x"), Some(3));
/// assert_eq!(longest_symbol_prefix("?.b"), Some(2));
/// assert_eq!(longest_symbol_prefix("?x"), None);
/// ```
pub fn longest_symbol_prefix(rest: &str) -> Option<usize> {
    (1..=MAX_SYMBOL_LEN)
        .rev()
        .find(|&len| rest.get(..len).is_some_and(is_symbol))
}
