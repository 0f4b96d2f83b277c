//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, the `Normal`-mode dispatch and
//! the end-of-input flush.

use std::collections::VecDeque;

use jslex_util::{Handler, Span};

use super::ScanMode;
use crate::classify::classify;
use crate::cursor::{Cursor, CursorSnapshot};
use crate::tables;
use crate::token::{Token, TokenKind};

/// Scanner for JavaScript-like source text.
///
/// The scanner walks the source left to right, accumulating a pending lexeme
/// and flushing it as a classified [`Token`] whenever whitespace, a quote, a
/// comment marker or an operator/delimiter ends it. Conditions worth telling
/// the caller about are reported to the [`Handler`]; scanning itself never
/// fails.
///
/// # Example
///
/// ```
/// use jslex_lex::{Scanner, TokenKind};
/// use jslex_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = Scanner::new("foo(bar)", &mut handler).tokenize();
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Identifier,
///         TokenKind::Delimiter,
///         TokenKind::Identifier,
///         TokenKind::Delimiter,
///     ]
/// );
/// assert!(handler.is_empty());
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Receives warnings about unterminated literals and comments.
    pub(super) handler: &'a mut Handler,

    /// Current scanning mode.
    mode: ScanMode,

    /// Start of the lexeme being accumulated, if any.
    pending: Option<CursorSnapshot>,

    /// Tokens completed but not yet handed out.
    ready: VecDeque<Token>,

    /// Number of tokens produced so far.
    emitted: usize,

    /// Set once end of input has been handled.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source text.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            mode: ScanMode::Normal,
            pending: None,
            ready: VecDeque::new(),
            emitted: 0,
            finished: false,
        }
    }

    /// Scans the whole input and returns the tokens in source order.
    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            if self.cursor.is_at_end() {
                self.finish();
            } else {
                self.step();
            }
        }
    }

    /// Returns the current scanning mode.
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Advances the scan by one unit of work in the current mode.
    fn step(&mut self) {
        match self.mode {
            ScanMode::Normal => self.scan_normal(),
            ScanMode::InString(quote) => self.scan_string(quote),
            ScanMode::InLineComment => self.scan_line_comment(),
            ScanMode::InBlockComment => self.scan_block_comment(),
        }
    }

    /// Handles one character in `Normal` mode.
    fn scan_normal(&mut self) {
        let Some(c) = self.cursor.current_char() else {
            return;
        };

        if c.is_whitespace() {
            self.flush();
            self.cursor.advance();
            return;
        }

        if c == '"' || c == '\'' {
            self.flush();
            self.enter(ScanMode::InString(c));
            self.cursor.advance();
            return;
        }

        if c == '/' {
            let comment = match self.cursor.peek_char(1) {
                Some('/') => Some(ScanMode::InLineComment),
                Some('*') => Some(ScanMode::InBlockComment),
                _ => None,
            };
            if let Some(mode) = comment {
                self.flush();
                self.enter(mode);
                self.cursor.advance_n(2);
                return;
            }
        }

        if let Some(len) = tables::longest_symbol_prefix(self.cursor.remaining()) {
            self.flush();
            self.scan_symbol(len);
            return;
        }

        if self.pending.is_none() {
            self.pending = Some(self.cursor.snapshot());
        }
        self.cursor.advance();
    }

    /// Handles end of input according to the mode the scan stopped in.
    fn finish(&mut self) {
        match self.mode {
            ScanMode::Normal => self.flush(),
            ScanMode::InLineComment => self.emit_pending(TokenKind::Comment),
            ScanMode::InString(quote) => self.unterminated_string(quote),
            ScanMode::InBlockComment => self.unterminated_block_comment(),
        }
        self.enter(ScanMode::Normal);
        self.finished = true;

        tracing::debug!(
            tokens = self.emitted,
            warnings = self.handler.warning_count(),
            bytes = self.cursor.position(),
            "scan finished"
        );
    }

    /// Switches to `mode`. Entering a non-`Normal` mode starts a new pending
    /// lexeme at the cursor.
    pub(super) fn enter(&mut self, mode: ScanMode) {
        if mode != ScanMode::Normal {
            self.pending = Some(self.cursor.snapshot());
        }
        if mode != self.mode {
            tracing::trace!(
                from = %self.mode,
                to = %mode,
                line = self.cursor.line(),
                column = self.cursor.column(),
                "scanner mode change"
            );
            self.mode = mode;
        }
    }

    /// Emits the pending lexeme, if any, with the kind the classifier gives it.
    pub(super) fn flush(&mut self) {
        if let Some(start) = self.pending {
            let kind = classify(self.cursor.slice_from(start.position));
            self.emit_pending(kind);
        }
    }

    /// Emits the pending lexeme, if any, with a fixed kind.
    pub(super) fn emit_pending(&mut self, kind: TokenKind) {
        if let Some(start) = self.pending.take() {
            self.emit_from(start, kind);
        }
    }

    /// Emits the text between `start` and the cursor as one token.
    pub(super) fn emit_from(&mut self, start: CursorSnapshot, kind: TokenKind) {
        let text = self.cursor.slice_from(start.position);
        let span = self.span_from(start);
        self.ready.push_back(Token::new(text, kind, span));
        self.emitted += 1;
    }

    /// Returns the span from `start` to the cursor.
    pub(super) fn span_from(&self, start: CursorSnapshot) -> Span {
        Span::new(start.position, self.cursor.position(), start.line, start.column)
    }

    /// Returns the span of the pending lexeme, or an empty span at the cursor.
    pub(super) fn pending_span(&self) -> Span {
        let start = self.pending.unwrap_or_else(|| self.cursor.snapshot());
        self.span_from(start)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
