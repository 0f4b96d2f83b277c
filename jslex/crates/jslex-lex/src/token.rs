//! Token definitions.
//!
//! A [`Token`] is a lexeme paired with its [`TokenKind`] and the [`Span`] it
//! was read from. Tokens are created once by the scanner and never mutated.

use std::fmt;

use jslex_util::Span;
use serde::Serialize;

/// The class a lexeme belongs to.
///
/// The declaration order is also the order used whenever tokens are grouped
/// for reporting, so `Keyword < Identifier < ... < Unknown`.
///
/// # Example
///
/// ```
/// use jslex_lex::TokenKind;
///
/// assert_eq!(TokenKind::StringConstant.name(), "STRING_CONSTANT");
/// assert!(TokenKind::Keyword < TokenKind::Unknown);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Reserved word such as `function` or `return`
    Keyword,
    /// `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword
    Identifier,
    /// Quoted text, quotes included
    StringConstant,
    /// Decimal or `0x` hexadecimal number
    NumericConstant,
    /// Entry of the operator table
    Operator,
    /// One of `, ; { } ( ) [ ]`
    Delimiter,
    /// `// ...` or `/* ... */`
    Comment,
    /// Anything no other rule accepts
    Unknown,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::StringConstant,
        TokenKind::NumericConstant,
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::Comment,
        TokenKind::Unknown,
    ];

    /// The upper-case name shown in reports.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::StringConstant => "STRING_CONSTANT",
            TokenKind::NumericConstant => "NUMERIC_CONSTANT",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Comment => "COMMENT",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Looks a kind up by its report name.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The exact source text of the lexeme.
    pub text: String,
    /// The class assigned to the lexeme.
    pub kind: TokenKind,
    /// Where the lexeme was found.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(text: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Self {
            text: text.into(),
            kind,
            span,
        }
    }

    /// Returns the lexeme text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the token has the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.text, self.span)
    }
}
