//! Backtick-delimited embedded-JavaScript passthrough: `` `...` ``.
//!
//! The contents are opaque to this lexer — they're handed to the
//! downstream code generator as-is, with only a doubled backtick
//! (`` `` ``) recognized as an escaped literal backtick.

use lumac_util::Symbol;

use crate::driver::Lexer;
use crate::error::{LexError, LexResult};
use crate::token::{Tag, Token};

pub(crate) fn match_embedded_js(lexer: &mut Lexer) -> LexResult<usize> {
    if lexer.cursor.current_char() != '`' {
        return Ok(0);
    }

    let start = lexer.cursor.snapshot();
    lexer.cursor.advance();
    let body_start = lexer.cursor.position();

    loop {
        if lexer.cursor.is_at_end() {
            let span = lexer.span_from(start);
            return Err(LexError::UnterminatedString { span });
        }
        if lexer.cursor.current_char() == '`' {
            if lexer.cursor.peek_char(1) == '`' {
                lexer.cursor.advance_n(2);
                continue;
            }
            break;
        }
        lexer.cursor.advance();
    }

    let body = lexer.cursor.source()[body_start..lexer.cursor.position()].replace("``", "`");
    lexer.cursor.advance();

    let span = lexer.span_from(start);
    lexer
        .tokens
        .push(Token::new(Tag::Js, Symbol::intern(&body), span));
    Ok(lexer.cursor.position() - start.position)
}
