//! Turns a `(start snapshot, current cursor)` pair into the [`Span`] a
//! token is tagged with.
//!
//! The driver takes a [`CursorSnapshot`] before dispatching to a matcher
//! and asks this module for the finished span once the matcher returns
//! how many bytes it consumed. Keeping the conversion in one place means
//! every matcher reports a span the same way, rather than each one
//! building a `Span` by hand from whatever fields it happens to have
//! sitting around.

use lumac_util::{FileId, Span};

use crate::cursor::{Cursor, CursorSnapshot};

/// Builds the span covering `[start, cursor.position())`, with
/// `first_line`/`first_column` taken from `start` and `last_line`/
/// `last_column` from the cursor's current position.
pub fn span_from(file: FileId, start: CursorSnapshot, cursor: &Cursor) -> Span {
    Span::new(
        start.position,
        cursor.position(),
        start.line,
        start.column,
        cursor.line(),
        cursor.column(),
    )
    .with_file(file)
}

/// Builds a zero-width span at the cursor's current position, for
/// synthetic tokens (`INDENT`, `OUTDENT`, `TERMINATOR`) that have no
/// source text of their own but still need a position to point at.
pub fn span_here(file: FileId, cursor: &Cursor) -> Span {
    Span::point(cursor.position(), cursor.line(), cursor.column()).with_file(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_from_covers_consumed_range() {
        let mut cursor = Cursor::new("hello world");
        let start = cursor.snapshot();
        cursor.advance_n(5);
        let span = span_from(FileId::new(0), start, &cursor);
        assert_eq!(span.first_column, 1);
        assert_eq!(span.last_column, 6);
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 5);
    }

    #[test]
    fn span_here_is_zero_width() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance_n(3);
        let span = span_here(FileId::new(0), &cursor);
        assert_eq!(span.start, span.end);
        assert_eq!(span.first_line, span.last_line);
    }
}
