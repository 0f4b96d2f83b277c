//! Span module - Source location tracking.
//!
//! A [`Span`] records where a lexeme came from: its byte range in the
//! source plus the 1-based line and column of its first character.
//!
//! # Examples
//!
//! ```
//! use jslex_util::Span;
//!
//! let source = "let x = 42;";
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.slice(source).unwrap(), "x");
//! ```

use serde::Serialize;

use crate::error::{SpanError, SpanResult};

/// Source location span
///
/// `start..end` is a byte range into the scanned text. `line` and `column`
/// describe the position of `start` and are 1-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no location
    ///
    /// ```
    /// use jslex_util::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// ```
    /// use jslex_util::Span;
    ///
    /// assert_eq!(Span::new(10, 20, 1, 5).len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns the text covered by this span.
    ///
    /// Fails when the span is reversed, reaches past the end of `source`,
    /// or cuts through a multi-byte character.
    ///
    /// ```
    /// use jslex_util::{Span, SpanError};
    ///
    /// let span = Span::new(2, 9, 1, 3);
    /// assert!(matches!(span.slice("abc"), Err(SpanError::OutOfBounds { .. })));
    /// ```
    pub fn slice<'s>(&self, source: &'s str) -> SpanResult<&'s str> {
        if self.start > self.end {
            return Err(SpanError::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > source.len() {
            return Err(SpanError::OutOfBounds {
                source_len: source.len(),
                span_start: self.start,
                span_end: self.end,
            });
        }
        source
            .get(self.start..self.end)
            .ok_or(SpanError::NotCharBoundary {
                start: self.start,
                end: self.end,
            })
    }

    /// Returns the full source line on which this span starts, without its
    /// line terminator.
    pub fn line_text<'s>(&self, source: &'s str) -> SpanResult<&'s str> {
        if self.start > source.len() {
            return Err(SpanError::OutOfBounds {
                source_len: source.len(),
                span_start: self.start,
                span_end: self.end,
            });
        }
        let head = source.get(..self.start).ok_or(SpanError::NotCharBoundary {
            start: self.start,
            end: self.end,
        })?;
        let line_start = head.rfind('\n').map_or(0, |i| i + 1);
        let tail = &source[line_start..];
        let line_end = tail.find(['\n', '\r']).unwrap_or(tail.len());
        Ok(&tail[..line_end])
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
