//! Operator, punctuation, and bracket matcher — the catch-all that runs
//! after every more specific matcher has passed. Tries multi-character
//! operators longest-first so `**=` isn't read as `*` followed by `*=`.
//!
//! Brackets get special treatment: `(` and `[` are reclassified
//! (`CALL_START`/`PARAM_START`, `INDEX_START`) depending on what token
//! precedes them, and every opener is pushed onto the pair stack so its
//! matching closer comes back tagged the same way.

use lumac_util::Symbol;

use crate::driver::Lexer;
use crate::error::{LexError, LexResult};
use crate::pairs::EndMarker;
use crate::tables::{classify_operator, is_callable, is_indexable};
use crate::token::{Tag, Token};

/// Multi-character operators, longest first so the scan never has to
/// backtrack.
const OPERATORS: &[&str] = &[
    "?::", "?.", "**=", ">>>=", "<<=", ">>=", "&&=", "||=", "//=", "%%=", "**", ">>>", "<<", ">>",
    "//", "%%", "==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "?=", "&=", "|=",
    "^=", "->", "=>", "::", "..", "...", "?",
];

pub(crate) fn match_operator(lexer: &mut Lexer) -> LexResult<usize> {
    let c = lexer.cursor.current_char();
    if c == '\0' {
        return Ok(0);
    }

    let start = lexer.cursor.snapshot();

    if let Some(op) = longest_operator_match(lexer) {
        lexer.cursor.advance_n(op.len());
        let span = lexer.span_from(start);
        lexer
            .tokens
            .push(Token::new(classify_operator(op), Symbol::intern(op), span));
        if op == "->" || op == "=>" {
            tag_parameters(lexer);
        }
        return Ok(lexer.cursor.position() - start.position);
    }

    match c {
        '(' => open_bracket(lexer, start, reclassify_paren(lexer)),
        '[' => open_bracket(lexer, start, reclassify_bracket(lexer)),
        '{' => open_bracket(lexer, start, EndMarker::Brace),
        ')' | ']' | '}' => close_bracket(lexer, start, c),
        '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '&' | '|' | '^' | '~' | '@' | ','
        | ';' | ':' | '.' => {
            if c == ';' {
                lexer.seen_for = false;
            }
            lexer.cursor.advance();
            let span = lexer.span_from(start);
            let text = c.to_string();
            lexer
                .tokens
                .push(Token::new(classify_operator(&text), Symbol::intern(&text), span));
            Ok(lexer.cursor.position() - start.position)
        }
        _ => {
            lexer.cursor.advance();
            let span = lexer.span_from(start);
            Err(LexError::UnexpectedChar { ch: c, span })
        }
    }
}

fn longest_operator_match(lexer: &Lexer) -> Option<&'static str> {
    OPERATORS
        .iter()
        .copied()
        .filter(|op| lexer.cursor.remaining().starts_with(op))
        .max_by_key(|op| op.len())
}

fn reclassify_paren(lexer: &Lexer) -> EndMarker {
    match lexer.tokens.last() {
        Some(prev) if is_param_position(prev) => EndMarker::Param,
        Some(prev) if is_callable(prev.tag, prev.reserved) => EndMarker::Call,
        _ => EndMarker::Paren,
    }
}

/// A `(` opens a parameter list only right after `->` / `=>`, never after
/// an arbitrary identifier (that's a call).
fn is_param_position(prev: &Token) -> bool {
    prev.is(Tag::Literal) && matches!(prev.value_str(), "->" | "=>")
}

/// Retroactively rewrites a `(...)` pair that turns out to have been a
/// parameter list, now that `->`/`=>` has shown up right after its closing
/// paren. At the time `(` and `)` were lexed there was nothing before the
/// `(` to say so (an ordinary `square = (x) -> ...`), so this walks
/// backward from the just-lexed arrow over the immediately preceding
/// close-paren-like token, tracking nesting depth until it finds the
/// outermost unmatched opener, and relabels that pair `PARAM_START`/
/// `PARAM_END` in place.
fn tag_parameters(lexer: &mut Lexer) {
    let arrow_idx = lexer.tokens.len() - 1;
    if arrow_idx == 0 {
        return;
    }
    let close_idx = arrow_idx - 1;
    if !is_close_paren(&lexer.tokens[close_idx]) {
        return;
    }

    let mut depth: i32 = 0;
    let mut i = close_idx + 1;
    while i > 0 {
        i -= 1;
        if is_close_paren(&lexer.tokens[i]) {
            depth += 1;
        } else if is_open_paren(&lexer.tokens[i]) {
            depth -= 1;
            if depth == 0 {
                lexer.tokens[i].tag = Tag::ParamStart;
                lexer.tokens[i].value = Symbol::intern("");
                lexer.tokens[close_idx].tag = Tag::ParamEnd;
                lexer.tokens[close_idx].value = Symbol::intern("");
                return;
            }
        }
    }
}

fn is_close_paren(tok: &Token) -> bool {
    tok.is(Tag::CallEnd) || (tok.is(Tag::Literal) && tok.value_str() == ")")
}

fn is_open_paren(tok: &Token) -> bool {
    tok.is(Tag::CallStart) || (tok.is(Tag::Literal) && tok.value_str() == "(")
}

fn reclassify_bracket(lexer: &Lexer) -> EndMarker {
    match lexer.tokens.last() {
        Some(prev) if is_indexable(prev.tag, prev.reserved) => EndMarker::Index,
        _ => EndMarker::Bracket,
    }
}

fn open_bracket(
    lexer: &mut Lexer,
    start: crate::cursor::CursorSnapshot,
    marker: EndMarker,
) -> LexResult<usize> {
    lexer.cursor.advance();
    let span = lexer.span_from(start);
    let tag = match marker {
        EndMarker::Call => Tag::CallStart,
        EndMarker::Param => Tag::ParamStart,
        EndMarker::Index => Tag::IndexStart,
        _ => Tag::Literal,
    };
    let value = match tag {
        Tag::Literal => lexer.cursor.source()[start.position..lexer.cursor.position()].to_string(),
        _ => String::new(),
    };
    lexer.tokens.push(Token::new(tag, Symbol::intern(&value), span));
    lexer.ends.push(marker);
    Ok(lexer.cursor.position() - start.position)
}

fn close_bracket(
    lexer: &mut Lexer,
    start: crate::cursor::CursorSnapshot,
    ch: char,
) -> LexResult<usize> {
    let marker = match lexer.ends.pop_matching(ch) {
        Some(marker) => marker,
        None => {
            lexer.cursor.advance();
            let span = lexer.span_from(start);
            return Err(LexError::UnmatchedCloser { ch, span });
        }
    };
    lexer.cursor.advance();
    let span = lexer.span_from(start);
    let tag = marker.close_tag();
    let value = if tag == Tag::Literal {
        ch.to_string()
    } else {
        String::new()
    };
    lexer.tokens.push(Token::new(tag, Symbol::intern(&value), span));
    Ok(lexer.cursor.position() - start.position)
}
