//! Per-kind token counts.

use std::fmt::Write;

use jslex_lex::{Token, TokenKind};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of tokens of each kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KindCounts {
    counts: [usize; 8],
}

impl KindCounts {
    /// Counts the kinds of `tokens`.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts = Self::default();
        for token in tokens {
            counts.counts[token.kind as usize] += 1;
        }
        counts
    }

    /// Returns the count for one kind.
    pub fn get(&self, kind: TokenKind) -> usize {
        self.counts[kind as usize]
    }

    /// Returns the total number of tokens.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterates over every kind with its count, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        TokenKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Adds another set of counts to this one.
    pub fn merge(&mut self, other: &KindCounts) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }

    /// Renders one `KIND count` line per kind that occurred, then a total.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (kind, count) in self.iter().filter(|(_, n)| *n > 0) {
            let _ = writeln!(out, "{:<18}{count}", kind.name());
        }
        let _ = writeln!(out, "{:<18}{}", "TOTAL", self.total());
        out
    }
}

impl Serialize for KindCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TokenKind::ALL.len()))?;
        for (kind, count) in self.iter() {
            map.serialize_entry(kind.name(), &count)?;
        }
        map.end()
    }
}
