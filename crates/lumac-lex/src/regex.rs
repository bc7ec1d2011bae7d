//! Regex literal matcher, and the division-vs-regex disambiguation that
//! has to happen before it runs.
//!
//! `/` is ambiguous: `a / b` is division, `/a/` is a regex literal. The
//! driver decides which by asking `tables::is_not_regex_position` about
//! the *previous* token — anything that could plausibly be the right-hand
//! side of a binary operator (an identifier, a number, a closing
//! bracket...) means `/` has to be division, since no expression can
//! start with a bare `/`. Only once the driver has ruled division out
//! does it call into this matcher at all.

use lumac_util::Symbol;

use crate::driver::Lexer;
use crate::error::{LexError, LexResult};
use crate::tables::is_not_regex_position;
use crate::token::{Tag, Token};

pub(crate) fn match_regex(lexer: &mut Lexer) -> LexResult<usize> {
    if lexer.cursor.current_char() != '/' {
        return Ok(0);
    }
    if let Some(prev) = lexer.tokens.last() {
        if is_not_regex_position(prev.tag, prev.reserved) {
            return Ok(0);
        }
    }
    let start = lexer.cursor.snapshot();
    let heregex = lexer.cursor.peek_char(1) == '/' && lexer.cursor.peek_char(2) == '/';

    if !heregex && lexer.cursor.peek_char(1) == '/' {
        // `//` is the empty regex, which this grammar doesn't allow —
        // it falls through to the operator matcher as floor-division.
        return Ok(0);
    }
    if !heregex && lexer.cursor.peek_char(1) == '*' {
        let span = lexer.span_from(start);
        return Err(LexError::IllegalRegex {
            reason: "a regex body cannot start with `/*`".into(),
            span,
        });
    }
    let delim_len = if heregex { 3 } else { 1 };
    lexer.cursor.advance_n(delim_len);

    let body_start = lexer.cursor.position();
    loop {
        if lexer.cursor.is_at_end() {
            let span = lexer.span_from(start);
            return Err(LexError::IllegalRegex {
                reason: "unterminated regex literal".into(),
                span,
            });
        }
        let c = lexer.cursor.current_char();
        if c == '\\' {
            lexer.cursor.advance_n(2);
            continue;
        }
        if c == '[' {
            // character class: `/` is literal until the matching `]`
            lexer.cursor.advance();
            while !lexer.cursor.is_at_end() && lexer.cursor.current_char() != ']' {
                if lexer.cursor.current_char() == '\\' {
                    lexer.cursor.advance();
                }
                lexer.cursor.advance();
            }
            continue;
        }
        if !heregex && c == '/' {
            break;
        }
        if heregex && c == '/' && lexer.cursor.peek_char(1) == '/' && lexer.cursor.peek_char(2) == '/' {
            break;
        }
        if !heregex && c == '\n' {
            let span = lexer.span_from(start);
            return Err(LexError::IllegalRegex {
                reason: "regex literal cannot contain a newline".into(),
                span,
            });
        }
        lexer.cursor.advance();
    }
    let body_end = lexer.cursor.position();
    lexer.cursor.advance_n(delim_len);

    while lexer.cursor.current_char().is_ascii_alphabetic() {
        lexer.cursor.advance();
    }

    let text = lexer.cursor.slice_from(start.position);
    let _ = body_end;
    let span = lexer.span_from(start);
    lexer
        .tokens
        .push(Token::new(Tag::Regex, Symbol::intern(text), span));
    Ok(lexer.cursor.position() - start.position)
}
