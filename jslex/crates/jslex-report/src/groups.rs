//! Grouping tokens by class.

use std::fmt::Write;

use indexmap::IndexMap;
use jslex_lex::{Token, TokenKind};

/// Groups lexemes by kind.
///
/// Kinds come out in declaration order and only if they occur; lexemes keep
/// their source order within a group.
///
/// ```
/// use jslex_lex::{tokenize, TokenKind};
/// use jslex_report::group_by_kind;
///
/// let tokens = tokenize("x = y;");
/// let groups = group_by_kind(&tokens);
/// assert_eq!(groups[0], (TokenKind::Identifier, vec!["x", "y"]));
/// ```
pub fn group_by_kind(tokens: &[Token]) -> Vec<(TokenKind, Vec<&str>)> {
    let mut groups: IndexMap<TokenKind, Vec<&str>> = IndexMap::new();
    for token in tokens {
        groups.entry(token.kind).or_default().push(token.text.as_str());
    }
    groups.sort_keys();
    groups.into_iter().collect()
}

/// Renders groups as `Type: KIND:` headings followed by indented lexemes.
pub fn render_groups(groups: &[(TokenKind, Vec<&str>)]) -> String {
    let mut out = String::new();
    for (kind, lexemes) in groups {
        let _ = writeln!(out, "Type: {kind}:");
        for lexeme in lexemes {
            let _ = writeln!(out, "  {lexeme}");
        }
        out.push('\n');
    }
    out
}
