//! Number literal matcher.
//!
//! Like the identifier matcher, this one doesn't evaluate the literal —
//! it just recognizes its extent, leaving the parse to whatever stage
//! actually needs a numeric value. Handles decimal, `0x`/`0b`/`0o`
//! integers, and floats with an optional exponent, and normalizes digit-
//! group underscores away everywhere.
//!
//! Octal and binary literals are additionally normalized to canonical hex
//! (`0o17` becomes `0xf`, `0b1010` becomes `0xa`) so everything downstream
//! only ever has to parse one integer radix; a hex literal's digits are
//! left exactly as written (`0xFF` stays `0xFF`), since there's no second
//! radix to collapse into. An uppercase radix prefix (`0B`/`0O`/`0X`), an
//! uppercase exponent marker, or an old-style leading-zero octal (`0777`
//! without an explicit `0o`) are all rejected rather than silently
//! accepted — the syntax has exactly one spelling for each of these.

use lumac_util::Symbol;

use crate::driver::Lexer;
use crate::error::{LexError, LexResult};
use crate::token::{Tag, Token};
use crate::unicode::is_digit_in_base;

pub(crate) fn match_number(lexer: &mut Lexer) -> LexResult<usize> {
    let c = lexer.cursor.current_char();
    if !c.is_ascii_digit() {
        return Ok(0);
    }

    let start = lexer.cursor.snapshot();

    if c == '0' && matches!(lexer.cursor.peek_char(1), 'x' | 'X' | 'b' | 'B' | 'o' | 'O') {
        return match_radix_prefixed(lexer, start);
    }

    if c == '0' && lexer.cursor.peek_char(1).is_ascii_digit() {
        if let Some(err) = check_legacy_octal(lexer, start)? {
            return Err(err);
        }
    }

    consume_digits_and_separators(lexer, 10);

    if lexer.cursor.current_char() == '.' && lexer.cursor.peek_char(1).is_ascii_digit() {
        lexer.cursor.advance();
        consume_digits_and_separators(lexer, 10);
    }

    if lexer.cursor.current_char() == 'E' {
        let span = lexer.span_from(start);
        return Err(LexError::MalformedNumber {
            reason: "exponent marker must be lowercase `e`".into(),
            span,
        });
    }

    if lexer.cursor.current_char() == 'e' {
        let exp_start = lexer.cursor.snapshot();
        lexer.cursor.advance();
        if matches!(lexer.cursor.current_char(), '+' | '-') {
            lexer.cursor.advance();
        }
        let digits_start = lexer.cursor.position();
        consume_digits_and_separators(lexer, 10);
        if lexer.cursor.position() == digits_start {
            let span = lexer.span_from(exp_start);
            return Err(LexError::MalformedNumber {
                reason: "no digits in exponent".into(),
                span,
            });
        }
    }

    let text = lexer.cursor.slice_from(start.position).replace('_', "");
    let span = lexer.span_from(start);
    lexer
        .tokens
        .push(Token::new(Tag::Number, Symbol::intern(&text), span));
    Ok(lexer.cursor.position() - start.position)
}

fn match_radix_prefixed(
    lexer: &mut Lexer,
    start: crate::cursor::CursorSnapshot,
) -> LexResult<usize> {
    let prefix = lexer.cursor.peek_char(1);
    if prefix.is_ascii_uppercase() {
        lexer.cursor.advance_n(2);
        let span = lexer.span_from(start);
        return Err(LexError::MalformedNumber {
            reason: format!("radix prefix must be lowercase: write `0{}`", prefix.to_ascii_lowercase()),
            span,
        });
    }

    let (base, is_hex) = match prefix {
        'b' => (2, false),
        'o' => (8, false),
        'x' => (16, true),
        _ => unreachable!(),
    };
    lexer.cursor.advance_n(2);
    let digits_start = lexer.cursor.position();
    consume_digits_and_separators(lexer, base);
    if lexer.cursor.position() == digits_start {
        let span = lexer.span_from(start);
        return Err(LexError::MalformedNumber {
            reason: format!("no digits after base-{base} prefix"),
            span,
        });
    }

    let digits = lexer.cursor.slice_from(digits_start).replace('_', "");
    let span = lexer.span_from(start);
    let text = if is_hex {
        format!("0x{digits}")
    } else {
        let value = u64::from_str_radix(&digits, base).map_err(|_| LexError::MalformedNumber {
            reason: "numeric literal out of range".into(),
            span,
        })?;
        format!("0x{value:x}")
    };
    lexer
        .tokens
        .push(Token::new(Tag::Number, Symbol::intern(&text), span));
    Ok(lexer.cursor.position() - start.position)
}

/// `0` directly followed by another digit is only legal when it turns out
/// to be the integer part of a float (`0123.45`); otherwise it's an
/// old-style octal literal, which this syntax requires spelling as `0o...`
/// instead.
fn check_legacy_octal(
    lexer: &Lexer,
    start: crate::cursor::CursorSnapshot,
) -> LexResult<Option<LexError>> {
    let mut offset = 1;
    let mut has_invalid_octal_digit = false;
    while lexer.cursor.peek_char(offset).is_ascii_digit() {
        if matches!(lexer.cursor.peek_char(offset), '8' | '9') {
            has_invalid_octal_digit = true;
        }
        offset += 1;
    }
    let is_float_continuation = lexer.cursor.peek_char(offset) == '.'
        && lexer.cursor.peek_char(offset + 1).is_ascii_digit();
    if is_float_continuation {
        return Ok(None);
    }

    let span = lexer.span_from(start);
    Ok(Some(if has_invalid_octal_digit {
        LexError::MalformedNumber {
            reason: "leading zero followed by an invalid octal digit".into(),
            span,
        }
    } else {
        LexError::MalformedNumber {
            reason: "legacy octal literal must be prefixed with `0o`".into(),
            span,
        }
    }))
}

fn consume_digits_and_separators(lexer: &mut Lexer, base: u32) {
    loop {
        let c = lexer.cursor.current_char();
        if is_digit_in_base(c, base) {
            lexer.cursor.advance();
        } else if c == '_' && is_digit_in_base(lexer.cursor.peek_char(1), base) {
            lexer.cursor.advance();
        } else {
            break;
        }
    }
}
