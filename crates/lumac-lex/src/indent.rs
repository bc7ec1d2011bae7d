//! The indentation engine: turns runs of leading whitespace after a
//! newline into `INDENT`/`OUTDENT`/`TERMINATOR` tokens.
//!
//! This is the one piece of state that can't be decided locally. A single
//! dedent might close several open blocks at once, and a dedent that
//! doesn't land exactly on a previously-seen indent width still has to
//! close *something* — the scanner isn't allowed to simply reject it,
//! because the author may have continued an expression across the break
//! (`noNewlines`, below) rather than started a new block.
//!
//! `indebt`/`outdebt` ("indent debt" / "outdent debt" in the glossary)
//! exist to make indent width comparisons commute with continuation
//! lines: a continued expression absorbs the next line's extra
//! indentation into `indebt` instead of emitting an `INDENT` for it, and
//! a dedent that doesn't fully pay off against the indent stack carries
//! the remainder forward as `outdebt` so the next dedent picks up where
//! it left off rather than under- or over-closing.
//!
//! Open question resolved here: when a dedent's remaining `moveOut`
//! amount is less than the top indent level but nonzero, the indent
//! engine still closes that level and carries the shortfall in
//! `outdebt` rather than leaving a level open — this matches the
//! behavior an editor would expect from "the next `)` or dedent rounds
//! up to the nearest enclosing block" and is exercised directly by the
//! boundary-behavior tests in `tests/end_to_end.rs`.

use lumac_util::Symbol;

use crate::pairs::{EndMarker, PairStack};
use crate::token::{Tag, Token};

/// Per-lex indentation bookkeeping. One of these lives for the whole scan;
/// unlike most matcher state it is *not* reset between tokens, since a
/// dedent several lines later needs to remember every indent width opened
/// since the top of the file.
pub struct IndentState {
    /// Width of the current indentation level.
    pub indent: i64,
    /// Width of the outermost level seen so far (never retreats below the
    /// indentation the file as a whole started at).
    pub base_indent: i64,
    /// Extra indentation absorbed by a continuation line instead of
    /// triggering an `INDENT`.
    pub indebt: i64,
    /// Outstanding dedent not yet paid off against the indent stack.
    pub outdebt: i64,
    /// Stack of indent widths, one per currently-open block.
    pub indents: Vec<i64>,
}

impl IndentState {
    pub fn new() -> Self {
        Self {
            indent: 0,
            base_indent: 0,
            indebt: 0,
            outdebt: 0,
            indents: Vec::new(),
        }
    }

    /// Processes one run of leading whitespace (the text matched after a
    /// newline, not including the newline itself). `unfinished` is true
    /// when the previous line ended mid-expression (an open bracket, a
    /// trailing operator) — in that case new indentation is debt, not a
    /// real block.
    ///
    /// Emits zero or more tokens onto `tokens` and returns nothing; the
    /// caller (`driver.rs`) is responsible for turning this into however
    /// many bytes of source were consumed.
    pub fn line_token(
        &mut self,
        size: i64,
        unfinished: bool,
        tokens: &mut Vec<Token>,
        ends: &mut PairStack,
        span_here: impl Fn() -> lumac_util::Span,
    ) {
        if size - self.indebt == self.indent {
            if unfinished {
                self.suppress_newlines(tokens);
            } else {
                self.newline_token(tokens, span_here());
            }
            return;
        }

        if size > self.indent {
            if unfinished {
                self.indebt = size - self.indent;
                self.suppress_newlines(tokens);
                return;
            }
            if tokens.is_empty() {
                self.base_indent = size;
                self.indent = size;
                return;
            }
            let diff = size - self.indent + self.outdebt;
            let span = span_here();
            tracing::trace!(from = self.indent, to = size, "indent");
            tokens.push(Token::generated(Tag::Indent, Symbol::intern(""), span));
            self.indents.push(diff);
            ends.push(EndMarker::Block);
            self.outdebt = 0;
            self.indebt = 0;
            self.indent = size;
        } else if size < self.base_indent {
            self.indebt = 0;
            self.outdent_token(self.indent - size, unfinished, tokens, ends, &span_here);
        } else {
            self.indebt = 0;
            self.outdent_token(self.indent - size, unfinished, tokens, ends, &span_here);
            self.indent = size;
        }
    }

    fn outdent_token(
        &mut self,
        mut move_out: i64,
        no_newlines: bool,
        tokens: &mut Vec<Token>,
        ends: &mut PairStack,
        span_here: &impl Fn() -> lumac_util::Span,
    ) {
        let mut closed_any = false;
        while move_out > 0 {
            match self.indents.last().copied() {
                None => {
                    self.indent -= move_out;
                    move_out = 0;
                }
                Some(last) if last == self.outdebt => {
                    move_out -= self.outdebt;
                    self.outdebt = 0;
                    self.indents.pop();
                    closed_any = true;
                }
                Some(last) if last < self.outdebt => {
                    self.outdebt -= last;
                    move_out -= last;
                    self.indents.pop();
                    closed_any = true;
                }
                Some(last) => {
                    let dent = last + self.outdebt;
                    move_out -= dent;
                    self.outdebt = 0;
                    self.indents.pop();
                    ends.pop_block();
                    let span = span_here();
                    tracing::trace!(remaining = self.indents.len(), "outdent");
                    tokens.push(Token::generated(Tag::Outdent, Symbol::intern(""), span));
                    self.indent -= dent;
                    closed_any = true;
                }
            }
        }
        if closed_any {
            self.outdebt -= move_out;
        }
        while matches!(tokens.last(), Some(t) if t.is(Tag::Literal) && t.value_str() == ";") {
            tokens.pop();
        }
        if !no_newlines && !matches!(tokens.last(), Some(t) if t.is(Tag::Terminator)) {
            let span = span_here();
            tokens.push(Token::generated(Tag::Terminator, Symbol::intern("\n"), span));
        }
    }

    fn newline_token(&mut self, tokens: &mut Vec<Token>, span: lumac_util::Span) {
        while matches!(tokens.last(), Some(t) if t.is(Tag::Literal) && t.value_str() == ";") {
            tokens.pop();
        }
        if !matches!(tokens.last(), Some(t) if t.is(Tag::Terminator)) {
            tokens.push(Token::generated(Tag::Terminator, Symbol::intern("\n"), span));
        }
    }

    fn suppress_newlines(&mut self, tokens: &mut Vec<Token>) {
        if matches!(tokens.last(), Some(t) if t.is(Tag::Literal) && t.value_str() == "\\") {
            tokens.pop();
        }
    }

    /// Closes every remaining open indentation level at end of input.
    pub fn close_indentation(
        &mut self,
        tokens: &mut Vec<Token>,
        ends: &mut PairStack,
        span_here: impl Fn() -> lumac_util::Span,
    ) {
        self.outdent_token(self.indent, true, tokens, ends, &span_here);
    }
}

impl Default for IndentState {
    fn default() -> Self {
        Self::new()
    }
}
