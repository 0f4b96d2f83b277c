//! jslex-report - Presentation of scanned tokens.
//!
//! These are the consumers of the token sequence produced by `jslex-lex`:
//!
//! - [`LexemeTable`] - the boxed `Lexeme | Type` table
//! - [`group_by_kind`] / [`render_groups`] - tokens listed per class
//! - [`KindCounts`] - per-class totals
//! - [`render_json`] - machine-readable output
//!
//! Nothing here feeds back into scanning; every function takes a finished
//! token slice.

#![warn(missing_docs)]

pub mod error;
pub mod groups;
pub mod json;
pub mod summary;
pub mod table;

pub use error::{ReportError, Result};
pub use groups::{group_by_kind, render_groups};
pub use json::{render_counts_json, render_json, to_json};
pub use summary::KindCounts;
pub use table::{LexemeRow, LexemeTable, TableStyle};
