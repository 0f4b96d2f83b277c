//! jslex-util - Foundation types shared by the jslex crates.
//!
//! This crate holds the pieces every phase needs but none of them owns:
//!
//! - [`span`] - byte ranges with line/column information
//! - [`diagnostic`] - warnings and errors collected while scanning
//! - [`error`] - error types for the fallible helpers in this crate
//!
//! # Example
//!
//! ```
//! use jslex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::warning("unterminated string literal")
//!     .code(DiagnosticCode::W_UNTERMINATED_STRING)
//!     .span(Span::new(4, 9, 1, 5))
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert!(!handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SpanError, SpanResult};
pub use span::Span;

static_assertions::assert_impl_all!(Span: Send, Sync, Copy);
static_assertions::assert_impl_all!(Diagnostic: Send, Sync);
