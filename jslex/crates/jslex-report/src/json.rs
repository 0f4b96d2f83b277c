//! JSON rendering.

use jslex_lex::Token;
use serde::Serialize;

use crate::error::Result;
use crate::summary::KindCounts;

/// Renders tokens as a pretty-printed JSON array.
///
/// Each element has `text`, `kind` and `span` fields; `kind` uses the
/// upper-case report name.
///
/// ```
/// use jslex_lex::tokenize;
///
/// let json = jslex_report::render_json(&tokenize("x")).unwrap();
/// assert!(json.contains("\"kind\": \"IDENTIFIER\""));
/// ```
pub fn render_json(tokens: &[Token]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

/// Serializes any report value as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Renders per-kind counts as a JSON object keyed by kind name.
pub fn render_counts_json(counts: &KindCounts) -> Result<String> {
    to_json(counts)
}
