//! Quoted string matcher: single-quoted literals (no interpolation,
//! minimal escaping) and double-quoted / heredoc literals (full escape
//! processing, handed to `interpolate.rs` once the balanced body is
//! found).
//!
//! Finding the balanced body is kept separate from interpreting it
//! (escapes, interpolation) because both single- and double-quoted
//! strings need the same "don't stop at an escaped quote" scan, and a
//! triple-quoted heredoc needs the same scan with a three-character
//! delimiter instead of one.
//!
//! A triple-quoted body additionally goes through [`dedent_heredoc`]
//! before escape/interpolation processing: a leading newline right after
//! the opening delimiter is dropped, then every line is stripped of the
//! minimum leading whitespace common to all of its non-blank lines, so a
//! heredoc written indented to match the surrounding code doesn't carry
//! that indentation into its value.

use lumac_util::Symbol;

use crate::driver::Lexer;
use crate::error::{LexError, LexResult};
use crate::interpolate::interpolate_string;
use crate::token::{Tag, Token};
use crate::unicode::{codepoint_to_char, parse_hex_byte, parse_hex_codepoint};

pub(crate) fn match_string(lexer: &mut Lexer) -> LexResult<usize> {
    let c = lexer.cursor.current_char();
    if c != '\'' && c != '"' {
        return Ok(0);
    }

    let start = lexer.cursor.snapshot();
    let triple = lexer.cursor.peek_char(1) == c && lexer.cursor.peek_char(2) == c;
    let delim_len = if triple { 3 } else { 1 };
    lexer.cursor.advance_n(delim_len);

    let body_start = lexer.cursor.position();
    balanced_body(lexer, c, triple)?;
    let body_end_before_delim = lexer.cursor.position();
    if lexer.cursor.is_at_end() && !ends_with_delim(lexer, c, triple, body_end_before_delim) {
        let span = lexer.span_from(start);
        return Err(LexError::UnterminatedString { span });
    }
    let raw_body = lexer
        .cursor
        .source()
        .get(body_start..body_end_before_delim)
        .unwrap_or("");
    let owned_body;
    let body = if triple {
        owned_body = dedent_heredoc(raw_body);
        owned_body.as_str()
    } else {
        raw_body
    };
    lexer.cursor.advance_n(delim_len);

    let span = lexer.span_from(start);

    if c == '\'' {
        let unescaped = unescape_simple(body)?;
        lexer
            .tokens
            .push(Token::new(Tag::String, Symbol::intern(&unescaped), span));
    } else {
        interpolate_string(lexer, body, start, triple)?;
    }

    Ok(lexer.cursor.position() - start.position)
}

/// Heredoc post-processing: drop a single leading newline, then strip the
/// minimum leading whitespace common to every non-blank line. Column
/// offsets inside a dedented heredoc's `#{...}` interpolations are
/// computed against the dedented text, not the original source columns —
/// a known span-fidelity gap for this one case.
fn dedent_heredoc(body: &str) -> String {
    let body = body.strip_prefix('\n').unwrap_or(body);
    let lines: Vec<&str> = body.split('\n').collect();
    let min_indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|l| {
            if l.trim().is_empty() {
                l.trim_start_matches([' ', '\t'])
            } else {
                &l[min_indent.min(l.len())..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Advances the cursor to just before the closing delimiter, respecting
/// `\`-escaped quote characters. Does not consume the delimiter itself.
fn balanced_body(lexer: &mut Lexer, quote: char, triple: bool) -> LexResult<()> {
    loop {
        if lexer.cursor.is_at_end() {
            return Ok(());
        }
        let ch = lexer.cursor.current_char();
        if ch == '\\' {
            lexer.cursor.advance_n(2);
            continue;
        }
        if ch == quote {
            if !triple {
                return Ok(());
            }
            if lexer.cursor.peek_char(1) == quote && lexer.cursor.peek_char(2) == quote {
                return Ok(());
            }
        }
        lexer.cursor.advance();
    }
}

fn ends_with_delim(lexer: &Lexer, quote: char, triple: bool, pos: usize) -> bool {
    let rest = &lexer.cursor.source()[pos..];
    if triple {
        rest.starts_with(&quote.to_string().repeat(3))
    } else {
        rest.starts_with(quote)
    }
}

/// Escape handling for single-quoted strings: only `\'` and `\\` are
/// meaningful, everything else (including a bare `\n`) passes through
/// literally, matching the "minimal escaping" contract of a non-
/// interpolated literal.
fn unescape_simple(body: &str) -> LexResult<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('\'') => {
                    out.push('\'');
                    chars.next();
                }
                Some('\\') => {
                    out.push('\\');
                    chars.next();
                }
                _ => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

/// Full escape processing for a double-quoted-string segment (used both
/// for a plain double-quoted literal and for each literal segment between
/// interpolations). Shared by `interpolate.rs`.
pub(crate) fn unescape_full(body: &str) -> Result<String, String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => {
                if matches!(chars.peek(), Some('0'..='7')) {
                    return Err("octal escape sequences are not allowed".into());
                }
                out.push('\0');
            }
            Some(d @ '1'..='7') => {
                let _ = d;
                return Err("octal escape sequences are not allowed".into());
            }
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('#') => out.push('#'),
            Some('\'') => out.push('\''),
            Some('\n') => {
                while matches!(chars.peek(), Some(' ') | Some('\t')) {
                    chars.next();
                }
            }
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                let byte = parse_hex_byte(&hex).ok_or_else(|| format!("invalid \\x escape: {hex}"))?;
                out.push(byte as char);
            }
            Some('u') => {
                let hex = if chars.peek() == Some(&'{') {
                    chars.next();
                    let mut s = String::new();
                    while let Some(&c) = chars.peek() {
                        if c == '}' {
                            chars.next();
                            break;
                        }
                        s.push(c);
                        chars.next();
                    }
                    s
                } else {
                    chars.by_ref().take(4).collect()
                };
                let codepoint = parse_hex_codepoint(&hex)
                    .ok_or_else(|| format!("invalid \\u escape: {hex}"))?;
                let resolved = codepoint_to_char(codepoint)
                    .ok_or_else(|| format!("\\u{{{hex}}} is not a valid scalar value"))?;
                out.push(resolved);
            }
            Some(other) => out.push(other),
            None => return Err("trailing backslash at end of string".into()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Lexer;
    use lumac_util::FileId;

    fn lex_one(source: &str) -> Token {
        let mut lexer = Lexer::new(source, FileId::DUMMY);
        match_string(&mut lexer).unwrap();
        lexer.tokens.remove(0)
    }

    #[test]
    fn single_quoted_keeps_backslash_n_literal() {
        let tok = lex_one(r"'a\nb'");
        assert_eq!(tok.value_str(), r"a\nb");
    }

    #[test]
    fn single_quoted_escapes_quote_and_backslash() {
        let tok = lex_one(r"'it\'s \\ok'");
        assert_eq!(tok.value_str(), r"it's \ok");
    }

    #[test]
    fn double_quoted_without_interpolation_is_plain_string() {
        let tok = lex_one(r#""hello\nworld""#);
        assert!(tok.is(Tag::String));
        assert_eq!(tok.value_str(), "hello\nworld");
    }

    #[test]
    fn unterminated_single_quoted_string_errors() {
        let mut lexer = Lexer::new("'never closes", FileId::DUMMY);
        assert!(match_string(&mut lexer).is_err());
    }

    #[test]
    fn unescape_full_decodes_hex_and_unicode_escapes() {
        assert_eq!(unescape_full(r"\x41").unwrap(), "A");
        assert_eq!(unescape_full(r"\u{1F600}").unwrap(), "😀");
    }

    #[test]
    fn bare_null_escape_is_allowed() {
        assert_eq!(unescape_full(r"\0").unwrap(), "\0");
    }

    #[test]
    fn octal_escape_after_null_is_rejected() {
        assert!(unescape_full(r"\05").is_err());
    }

    #[test]
    fn single_digit_octal_escape_is_rejected() {
        assert!(unescape_full(r"\5").is_err());
    }

    #[test]
    fn digit_eight_and_nine_are_not_octal_and_pass_through() {
        assert_eq!(unescape_full(r"\8").unwrap(), "8");
        assert_eq!(unescape_full(r"\9").unwrap(), "9");
    }

    #[test]
    fn not_a_quote_is_not_a_match() {
        let mut lexer = Lexer::new("hello", FileId::DUMMY);
        assert_eq!(match_string(&mut lexer).unwrap(), 0);
    }

    #[test]
    fn heredoc_strips_leading_newline_and_common_indent() {
        let tok = lex_one("'''\n  one\n  two\n  '''");
        assert_eq!(tok.value_str(), "one\ntwo\n");
    }

    #[test]
    fn heredoc_with_uneven_indent_dedents_by_the_minimum() {
        let tok = lex_one("'''\n    one\n  two\n  '''");
        assert_eq!(tok.value_str(), "  one\ntwo\n");
    }
}
