//! Comment matcher: `#` line comments and `###...###` block comments
//! (herecomments).
//!
//! Comments never produce a token — they're consumed and discarded like
//! inline whitespace. Only the byte count they occupy matters, so the
//! driver's column tracking stays correct for whatever follows.

use crate::driver::Lexer;
use crate::error::LexResult;

pub(crate) fn match_comment(lexer: &mut Lexer) -> LexResult<usize> {
    if lexer.cursor.current_char() != '#' {
        return Ok(0);
    }

    let start = lexer.cursor.position();

    if lexer.cursor.peek_char(1) == '#' && lexer.cursor.peek_char(2) == '#' {
        lexer.cursor.advance_n(3);
        loop {
            if lexer.cursor.is_at_end() {
                break;
            }
            if lexer.cursor.current_char() == '#'
                && lexer.cursor.peek_char(1) == '#'
                && lexer.cursor.peek_char(2) == '#'
            {
                lexer.cursor.advance_n(3);
                break;
            }
            lexer.cursor.advance();
        }
        return Ok(lexer.cursor.position() - start);
    }

    while !lexer.cursor.is_at_end() && lexer.cursor.current_char() != '\n' {
        lexer.cursor.advance();
    }
    Ok(lexer.cursor.position() - start)
}
