//! Character cursor for traversing source code.
//!
//! Maintains position state while scanning source text, tracking byte
//! offset and (line, column) as it goes, with an ASCII fast path and a
//! UTF-8 slow path. Matchers borrow a `&mut Cursor` rather than re-slicing
//! the source on every step.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use lumac_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 42;");
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor starting at `(line 1, column 1)`.
    pub fn new(source: &'a str) -> Self {
        Self::with_start(source, 1, 1)
    }

    /// Creates a new cursor whose first character is reported at
    /// `(start_line, start_column)`. Used when lexing an interpolation
    /// fragment that begins partway through the enclosing source.
    pub fn with_start(source: &'a str, start_line: u32, start_column: u32) -> Self {
        Self {
            source,
            position: 0,
            line: start_line,
            column: start_column,
        }
    }

    /// Returns the current character, or `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    #[inline]
    pub fn is_ascii(&self) -> bool {
        if self.position >= self.source.len() {
            return true;
        }
        self.source.as_bytes()[self.position] < 128
    }

    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }
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

    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips ASCII/Unicode whitespace. Does not skip comments, and does
    /// not skip newlines differently from other whitespace — the
    /// indentation engine (`indent.rs`) is the one place that cares about
    /// newlines, and it matches them with its own pattern before this is
    /// ever called.
    pub fn skip_inline_whitespace(&mut self) {
        while !self.is_at_end() && matches!(self.current_char(), ' ' | '\t') {
            self.advance();
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    pub position: usize,
    pub line: u32,
    pub column: u32,
}
