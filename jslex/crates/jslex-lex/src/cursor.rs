//! Character cursor for traversing source text.
//!
//! The cursor walks the source one `char` at a time and keeps the byte
//! offset, line and column of the next character to be read. End of input
//! is reported as `None` rather than a sentinel character, so a literal NUL
//! in the source is still an ordinary character.

/// A cursor over source text.
///
/// # Example
///
/// ```
/// use jslex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.current_char(), Some('l'));
/// assert_eq!(cursor.advance(), Some('l'));
/// assert_eq!(cursor.current_char(), Some('e'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// ```
    /// use jslex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("/*");
    /// assert_eq!(cursor.peek_char(1), Some('*'));
    /// assert_eq!(cursor.peek_char(2), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    /// Consumes one character and returns it.
    ///
    /// Updates line and column tracking. Returns `None` and does nothing
    /// when already at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes up to `count` characters.
    ///
    /// ```
    /// use jslex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abcdef");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current_char(), Some('d'));
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns true if the unread input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from byte `start` up to the cursor.
    ///
    /// `start` must be a position previously reported by this cursor.
    ///
    /// ```
    /// use jslex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unread part of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Records the current position so a lexeme can later be cut from it.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
