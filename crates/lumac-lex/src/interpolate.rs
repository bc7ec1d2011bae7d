//! Splits a double-quoted or heredoc string body on `#{...}` and lexes
//! each embedded expression as its own fragment.
//!
//! The nested lex is a pure function: fragment text in, token list out,
//! with no access to the enclosing lexer's indentation or bracket state.
//! An interpolation is always a single expression, so there's nothing for
//! it to inherit — and keeping it a pure function means `match_string`
//! never has to think about what the fragment might do to the outer
//! scan's `ends` stack.
//!
//! Brace matching inside `#{...}` is depth-counting only: a `}` that
//! appears inside a nested string or regex literal within the
//! interpolation is not specially recognized. A correctly-balanced
//! expression is by far the common case and the one this tracks; a
//! pathological one (a string literal containing an unbalanced `}`
//! inside an interpolation) is left for a future revision.

use lumac_util::{FileId, Symbol};

use crate::cursor::Cursor;
use crate::driver::Lexer;
use crate::error::{LexError, LexResult};
use crate::strings::unescape_full;
use crate::token::{Tag, Token};

pub(crate) fn interpolate_string(
    lexer: &mut Lexer,
    body: &str,
    open_start: crate::cursor::CursorSnapshot,
    triple: bool,
) -> LexResult<()> {
    let delim_len = if triple { 3 } else { 1 };
    let mut scan = Cursor::with_start(body, open_start.line, open_start.column + delim_len as u32);

    let mut literal_start = 0usize;
    let mut pieces: Vec<StringPiece> = Vec::new();

    loop {
        if scan.is_at_end() {
            pieces.push(StringPiece::Literal(body[literal_start..].to_string()));
            break;
        }
        if scan.current_char() == '#' && scan.peek_char(1) == '{' {
            pieces.push(StringPiece::Literal(
                body[literal_start..scan.position()].to_string(),
            ));
            scan.advance_n(2);

            let expr_start_pos = scan.position();
            let expr_line = scan.line();
            let expr_column = scan.column();
            let mut depth = 1i32;
            while !scan.is_at_end() && depth > 0 {
                match scan.current_char() {
                    '{' => {
                        depth += 1;
                        scan.advance();
                    }
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                        scan.advance();
                    }
                    _ => scan.advance(),
                }
            }
            if depth != 0 {
                let span = lexer.span_from(open_start);
                return Err(LexError::UnterminatedString { span });
            }
            let expr_text = &body[expr_start_pos..scan.position()];
            let tokens = lex_fragment(expr_text, lexer.file, expr_line, expr_column)?;
            pieces.push(StringPiece::Expr(tokens));

            scan.advance(); // consume '}'
            literal_start = scan.position();
        } else {
            scan.advance();
        }
    }

    let span = lexer.span_from(open_start);
    emit_pieces(lexer, pieces, span)
}

enum StringPiece {
    Literal(String),
    Expr(Vec<Token>),
}

fn emit_pieces(lexer: &mut Lexer, pieces: Vec<StringPiece>, span: lumac_util::Span) -> LexResult<()> {
    let has_interpolation = pieces.iter().any(|p| matches!(p, StringPiece::Expr(_)));

    if !has_interpolation {
        let text = match pieces.into_iter().next() {
            Some(StringPiece::Literal(s)) => s,
            _ => String::new(),
        };
        let unescaped = unescape_full(&text).map_err(|_| LexError::IllegalEscape { span })?;
        lexer
            .tokens
            .push(Token::new(Tag::String, Symbol::intern(&unescaped), span));
        return Ok(());
    }

    let last_index = pieces.len() - 1;
    for (i, piece) in pieces.into_iter().enumerate() {
        match piece {
            StringPiece::Literal(text) => {
                let unescaped =
                    unescape_full(&text).map_err(|_| LexError::IllegalEscape { span })?;
                let tag = if i == 0 {
                    Tag::StringStart
                } else if i == last_index {
                    Tag::StringEnd
                } else {
                    Tag::String
                };
                lexer
                    .tokens
                    .push(Token::new(tag, Symbol::intern(&unescaped), span));
            }
            StringPiece::Expr(tokens) => {
                lexer.tokens.extend(tokens);
            }
        }
    }
    Ok(())
}

#[tracing::instrument(level = "trace", skip(source, file))]
fn lex_fragment(source: &str, file: FileId, line: u32, column: u32) -> LexResult<Vec<Token>> {
    let mut nested = Lexer::new_at(source, file, line, column);
    nested.run()?;
    Ok(nested.tokens)
}
