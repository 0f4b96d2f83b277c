//! Diagnostic codes for categorizing scanner warnings and errors.
//!
//! # Examples
//!
//! ```
//! use jslex_util::DiagnosticCode;
//!
//! let code = DiagnosticCode::W_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "W");
//! assert_eq!(code.as_str(), "W0101");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}`, with the number padded to
/// four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("W" for warnings)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
    /// Short machine-friendly name
    pub name: &'static str,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32, name: &'static str) -> Self {
        Self {
            prefix,
            number,
            name,
        }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the short name, e.g. `unterminated_string`
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the full code string (e.g. "W0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // SCANNER WARNINGS (W01xx)
    // =========================================================================

    /// W0101: a string literal was still open at end of input
    pub const W_UNTERMINATED_STRING: Self = Self::new("W", 101, "unterminated_string");
    /// W0102: a block comment was still open at end of input
    pub const W_UNTERMINATED_BLOCK_COMMENT: Self =
        Self::new("W", 102, "unterminated_block_comment");
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({}{:04})", self.prefix, self.number)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
