//! jslex-lex - Lexical analyzer for a JavaScript-like language
//!
//! This crate turns source text into an ordered sequence of classified
//! lexemes. It has two parts:
//!
//! - the **classifier** ([`classify()`]), a pure function from a complete
//!   lexeme to its [`TokenKind`];
//! - the **scanner** ([`Scanner`]), which walks the text once, finds lexeme
//!   boundaries and asks the classifier about ordinary lexemes.
//!
//! The crate performs no I/O. Reading files and printing tables live in the
//! `jslex-report` crate and the `jslext` tool.
//!
//! # Example Usage
//!
//! ```
//! use jslex_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("let s = \"a,b;c\"; // done");
//!
//! let summary: Vec<_> = tokens.iter().map(|t| (t.text.as_str(), t.kind)).collect();
//! assert_eq!(
//!     summary,
//!     [
//!         ("let", TokenKind::Keyword),
//!         ("s", TokenKind::Identifier),
//!         ("=", TokenKind::Operator),
//!         ("\"a,b;c\"", TokenKind::StringConstant),
//!         (";", TokenKind::Delimiter),
//!         ("// done", TokenKind::Comment),
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - `Token` and `TokenKind`
//! - [`tables`] - keyword, operator and delimiter tables
//! - [`classify`] - the classifier and its per-kind predicates
//! - [`cursor`] - character cursor for source traversal
//! - [`scanner`] - the scanning state machine
//!
//! # Scanning Rules
//!
//! In `Normal` mode each character is handled as follows:
//!
//! - **Whitespace** ends the pending lexeme and is dropped.
//! - **`"` or `'`** ends the pending lexeme and starts a string, which runs
//!   to the next identical quote. There are no escapes.
//! - **`//`** starts a comment that ends before the next `\n` or `\r`.
//! - **`/*`** starts a comment that ends after the next `*/`.
//! - **Operators and delimiters** end the pending lexeme and become tokens
//!   of their own, longest table match first.
//! - **Anything else** is appended to the pending lexeme.
//!
//! A string or block comment still open at end of input is emitted as
//! [`TokenKind::Unknown`] and reported as a warning (`W0101` / `W0102`).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod scanner;
pub mod tables;
pub mod token;

mod edge_cases;

pub use classify::{
    classify, is_delimiter, is_identifier, is_keyword, is_numeric_constant, is_operator,
    is_string_constant,
};
pub use cursor::Cursor;
pub use scanner::{ScanMode, Scanner};
pub use token::{Token, TokenKind};

use jslex_util::{Diagnostic, Handler};

static_assertions::assert_impl_all!(Token: Send, Sync);
static_assertions::assert_impl_all!(TokenKind: Send, Sync, Copy);

/// Tokens together with the diagnostics raised while scanning them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// Warnings about unterminated strings and block comments.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutput {
    /// Returns true if any warning was raised.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_warning())
    }
}

/// Tokenizes `source`, discarding diagnostics.
///
/// Each call owns its scanner state, so independent inputs can be tokenized
/// on separate threads without coordination.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut handler = Handler::new();
    Scanner::new(source, &mut handler).tokenize()
}

/// Tokenizes `source` and keeps the diagnostics.
///
/// ```
/// use jslex_lex::{tokenize_with_diagnostics, TokenKind};
///
/// let output = tokenize_with_diagnostics("/* open");
/// assert_eq!(output.tokens[0].kind, TokenKind::Unknown);
/// assert!(output.has_warnings());
/// ```
pub fn tokenize_with_diagnostics(source: &str) -> ScanOutput {
    let mut handler = Handler::new();
    let tokens = Scanner::new(source, &mut handler).tokenize();
    ScanOutput {
        tokens,
        diagnostics: handler.into_diagnostics(),
    }
}
