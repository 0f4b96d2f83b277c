//! Scanner module.
//!
//! The scanner is split into focused components:
//! - `core` - the `Scanner` struct, the `Normal`-mode dispatch and end of input
//! - `string` - quoted literals
//! - `comment` - line and block comments
//! - `operator` - longest-match operator and delimiter tokens

mod comment;
mod core;
mod operator;
mod string;

pub use self::core::Scanner;

use std::fmt;

/// What the scanner is in the middle of reading.
///
/// A scan starts and ends in `Normal`. The other modes are entered on an
/// opening quote or comment marker and left again on the matching
/// terminator, or forcibly at end of input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanMode {
    /// Between lexemes, or accumulating an ordinary lexeme.
    #[default]
    Normal,
    /// Inside a string opened by the given quote character.
    InString(char),
    /// Inside a `//` comment.
    InLineComment,
    /// Inside a `/* */` comment.
    InBlockComment,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Normal => write!(f, "normal"),
            ScanMode::InString(q) => write!(f, "string({q})"),
            ScanMode::InLineComment => write!(f, "line comment"),
            ScanMode::InBlockComment => write!(f, "block comment"),
        }
    }
}
