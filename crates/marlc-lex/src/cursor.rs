//! Character cursor for traversing source code.
//!
//! The cursor owns the byte position and 1-based line/column counters for
//! one scan of one input. It handles UTF-8 correctly and exposes byte-level
//! helpers for the ASCII-only parts of the grammar.

use marlc_util::Location;

/// A cursor over source text.
///
/// Columns count characters, so multi-byte content inside strings and
/// comments still produces accurate positions in error messages.
///
/// # Example
///
/// ```
/// use marlc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("local x");
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'o');
/// ```
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
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character at the given byte offset from the current
    /// position, or `'\0'` past the end.
    ///
    /// Offsets are in bytes, so this is only meaningful when the lookahead
    /// region is known to be ASCII (operators, digits, quotes).
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Advances past the current character, updating line/column tracking.
    ///
    /// Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Advances by `count` characters, stopping at end of input.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances by `count` bytes. Callers use this only for runs known to
    /// be ASCII, where bytes and characters coincide.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        let remaining = self.source.len() - self.position;
        let advance = count.min(remaining);

        let start = self.position;
        let end = self.position + advance;
        for i in start..end {
            if self.source.as_bytes()[i] == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.position += advance;
    }

    /// Returns true if the cursor has consumed all input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the expected character if it is next, returning whether it
    /// was consumed. Never matches at end of input.
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current position as a [`Location`].
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source slice from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed remainder of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
