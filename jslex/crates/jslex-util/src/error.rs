//! Core error types for jslex-util.

use thiserror::Error;

/// Error type for resolving a [`Span`](crate::Span) against source text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// The span ends before it starts.
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// The span reaches past the end of the source.
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    OutOfBounds {
        source_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// One of the span ends falls inside a multi-byte character.
    #[error("Span {start}..{end} does not lie on character boundaries")]
    NotCharBoundary { start: usize, end: usize },
}

/// Result type alias for span operations.
pub type SpanResult<T> = std::result::Result<T, SpanError>;
