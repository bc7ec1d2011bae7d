//! The dispatch loop: ties the cursor, the matchers, the indentation
//! engine, and the pair stack together into the `tokenize` entry point.
//!
//! Each pass through the loop: resolve any pending line breaks into
//! `INDENT`/`OUTDENT`/`TERMINATOR` tokens, skip inline whitespace, then
//! try each matcher in a fixed precedence order until one reports it
//! consumed something. The order itself encodes the grammar's
//! ambiguities — identifiers have to run before keywords could be
//! mistaken for anything else, comments before an operator matcher might
//! see `#` as "unexpected character", strings and numbers before the
//! operator matcher could claim a leading `.` or digit, and regex after
//! everything that could end an expression (division) has had a chance
//! to claim `/` first.

use lumac_util::{FileId, Span};

use crate::clean::clean;
use crate::comment::match_comment;
use crate::cursor::Cursor;
use crate::embedded_js::match_embedded_js;
use crate::error::{LexError, LexResult};
use crate::identifier::match_identifier;
use crate::indent::IndentState;
use crate::location::{span_from, span_here};
use crate::number::match_number;
use crate::operator::match_operator;
use crate::options::LexOptions;
use crate::pairs::{EndMarker, PairStack};
use crate::regex::match_regex;
use crate::strings::match_string;
use crate::tables::is_reserved_word;
use crate::token::{Tag, Token};

type Matcher = fn(&mut Lexer) -> LexResult<usize>;

/// Fixed precedence order the driver tries each matcher in. See module
/// docs for why the order matters. "Heredoc" and "string" are one
/// matcher (`match_string` recognizes both single- and triple-quote
/// delimiters); "whitespace" and "line" are handled directly by the loop
/// rather than through this array, since they don't produce a token from
/// a fixed starting character the way the others do.
const MATCHERS: &[Matcher] = &[
    match_identifier,
    match_comment,
    match_string,
    match_number,
    match_regex,
    match_embedded_js,
    match_operator,
];

/// Hook for a later compilation stage to post-process the token stream
/// before it's returned — reordering for disambiguation beyond what this
/// lexer does, e.g. CoffeeScript's "rewriter" pass. Implementing one is
/// out of scope here; this trait exists so `tokenize` has somewhere to
/// plug it in without the lexer itself needing to know about it.
pub trait Rewrite {
    fn rewrite(&self, tokens: Vec<Token>) -> Vec<Token>;
}

pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) tokens: Vec<Token>,
    pub(crate) ends: PairStack,
    pub(crate) indent: IndentState,
    pub(crate) file: FileId,
    /// Set when a `for` keyword has been lexed and not yet followed by its
    /// `in`/`of`, cleared at the start of every line and on `;`. Lets the
    /// identifier matcher tell `for x in y` from `for x of y` without
    /// re-scanning the line.
    pub(crate) seen_for: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: FileId) -> Self {
        Self::new_at(source, file, 1, 1)
    }

    pub(crate) fn new_at(source: &'a str, file: FileId, line: u32, column: u32) -> Self {
        Self {
            cursor: Cursor::with_start(source, line, column),
            tokens: Vec::new(),
            ends: PairStack::new(),
            indent: IndentState::new(),
            file,
            seen_for: false,
        }
    }

    pub(crate) fn span_from(&self, start: crate::cursor::CursorSnapshot) -> Span {
        span_from(self.file, start, &self.cursor)
    }

    /// Runs the dispatch loop to completion, appending tokens to
    /// `self.tokens` and closing any indentation still open at EOF.
    ///
    /// A source file behaves as though it ends with a trailing newline
    /// even when it doesn't: the final line still gets a chance to close
    /// open blocks and emit its own `TERMINATOR`, it just does so at EOF
    /// instead of at a literal `\n`. Empty input is the one exception —
    /// there's no "last line" to close, so nothing is emitted.
    #[tracing::instrument(level = "trace", skip_all)]
    pub(crate) fn run(&mut self) -> LexResult<()> {
        loop {
            if self.handle_newline()? {
                continue;
            }

            let before_ws = self.cursor.position();
            self.cursor.skip_inline_whitespace();
            let had_space = self.cursor.position() > before_ws;

            if self.cursor.is_at_end() {
                if !self.tokens.is_empty() {
                    self.seen_for = false;
                    let unfinished = self.is_unfinished();
                    let file = self.file;
                    let cursor = &self.cursor;
                    self.indent.line_token(0, unfinished, &mut self.tokens, &mut self.ends, || {
                        span_here(file, cursor)
                    });
                }
                break;
            }

            let tokens_before = self.tokens.len();
            let mut consumed = 0usize;
            for matcher in MATCHERS {
                consumed = matcher(self)?;
                if consumed > 0 {
                    break;
                }
            }

            if consumed == 0 {
                let ch = self.cursor.current_char();
                let span = span_here(self.file, &self.cursor);
                return Err(LexError::UnexpectedChar { ch, span });
            }

            if let Some(first) = self.tokens.get_mut(tokens_before) {
                first.spaced = had_space;
            }
        }

        let file = self.file;
        let cursor = &self.cursor;
        self.indent.close_indentation(&mut self.tokens, &mut self.ends, || {
            span_here(file, cursor)
        });
        Ok(())
    }

    /// If the cursor sits on a `\n`, consumes the whole run of blank
    /// lines and trailing indentation (mirroring the "one or more
    /// newlines, then the indentation of the last of them" shape of a
    /// multi-dedent), and feeds the final line's indent width to the
    /// indentation engine. Returns whether it did anything, so the main
    /// loop knows to re-check for EOF / more newlines before dispatching
    /// a matcher.
    fn handle_newline(&mut self) -> LexResult<bool> {
        if self.cursor.current_char() != '\n' {
            return Ok(false);
        }
        loop {
            self.cursor.advance();
            let line_start = self.cursor.position();
            while matches!(self.cursor.current_char(), ' ' | '\t') {
                self.cursor.advance();
            }
            if self.cursor.current_char() == '\n' {
                continue;
            }
            let size = (self.cursor.position() - line_start) as i64;
            self.seen_for = false;
            let unfinished = self.is_unfinished();
            let file = self.file;
            let cursor = &self.cursor;
            self.indent
                .line_token(size, unfinished, &mut self.tokens, &mut self.ends, || {
                    span_here(file, cursor)
                });
            return Ok(true);
        }
    }

    /// Whether the line just ended mid-expression: either an open
    /// bracket is still unclosed, or the last token is one that can't end
    /// an expression on its own — a dangling operator or a keyword that
    /// still expects something after it.
    fn is_unfinished(&self) -> bool {
        if let Some(top) = self.ends.top() {
            if top != EndMarker::Block {
                return true;
            }
        }
        matches!(
            self.tokens.last(),
            Some(t) if is_continuation_tag(t.tag)
                || (t.is(Tag::Literal) && is_continuation_operator(t.value_str()))
        )
    }
}

/// Literal spellings that leave the line mid-expression when they're the
/// last token before a newline. `->`/`=>` are deliberately excluded: a
/// trailing arrow is not an incomplete expression, it's the normal way
/// this grammar opens a function body, and the indented lines that
/// follow it must still produce a real `INDENT`. `**` sits here rather
/// than under [`is_continuation_tag`]'s MATH family — it's tagged its own
/// way, not folded into MATH.
fn is_continuation_operator(text: &str) -> bool {
    matches!(text, "." | "?." | "::" | "?::" | "+" | "-" | "**")
}

/// Tag families that leave the line mid-expression on their own, without
/// needing a text match — a dangling `!`, a comparison, a relation, and
/// so on all still expect an operand.
fn is_continuation_tag(tag: Tag) -> bool {
    matches!(
        tag,
        Tag::Unary
            | Tag::Math
            | Tag::UnaryMath
            | Tag::Shift
            | Tag::Relation
            | Tag::Compare
            | Tag::Logic
    )
}

/// Lexes `source` into a complete token stream.
///
/// Before scanning starts, `source` runs through [`clean`]: a leading
/// byte-order mark is stripped, carriage returns are deleted, trailing
/// whitespace is trimmed off every line, and — when `options.literate` is
/// set — lines that aren't indented code are blanked out as prose. If the
/// cleaned source begins with whitespace, a synthetic leading newline is
/// inserted and the reported start line walked back by one to compensate,
/// so diagnostics still land on the real first line of the original text.
///
/// `options.line`/`options.column` let a caller lex a fragment that
/// doesn't start at the top of a file (used internally for string
/// interpolation; also useful for embedding this lexer in a larger
/// pipeline). `rewrite`, if given, gets a chance to post-process the
/// finished token stream before it's returned.
#[tracing::instrument(level = "trace", skip_all, fields(literate = options.literate))]
pub fn tokenize(
    source: &str,
    options: LexOptions,
    rewrite: Option<&dyn Rewrite>,
) -> LexResult<Vec<Token>> {
    let cleaned = clean(source, options.literate);
    let start_line = (i64::from(options.line) + cleaned.line_shift).max(0) as u32;
    let mut lexer = Lexer::new_at(&cleaned.source, FileId::DUMMY, start_line, options.column);
    lexer.run()?;
    let tokens = lexer.tokens;
    tracing::trace!(count = tokens.len(), "lex pass complete");
    Ok(match rewrite {
        Some(r) => r.rewrite(tokens),
        None => tokens,
    })
}

/// Words reserved regardless of context — re-exported here so a caller
/// doesn't need to import `tables` directly for this one common check.
pub fn is_reserved(word: &str) -> bool {
    is_reserved_word(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(source: &str) -> Vec<Tag> {
        tokenize(source, LexOptions::default(), None)
            .unwrap()
            .into_iter()
            .map(|t| t.tag)
            .collect()
    }

    #[test]
    fn simple_assignment_produces_identifier_operator_number() {
        let tags = tags("x = 1");
        assert_eq!(
            tags,
            vec![Tag::Identifier, Tag::Literal, Tag::Number, Tag::Terminator]
        );
    }

    #[test]
    fn indented_block_emits_indent_and_outdent() {
        let source = "if x\n  y\nz";
        let tags = tags(source);
        assert!(tags.contains(&Tag::Indent));
        assert!(tags.contains(&Tag::Outdent));
    }

    #[test]
    fn same_level_lines_get_a_terminator_between_them() {
        let source = "x\ny";
        let tags = tags(source);
        assert_eq!(
            tags,
            vec![
                Tag::Identifier,
                Tag::Terminator,
                Tag::Identifier,
                Tag::Terminator
            ]
        );
    }

    #[test]
    fn call_parens_are_tagged_call_start_and_call_end() {
        let tags = tags("f(x)");
        assert_eq!(
            tags,
            vec![
                Tag::Identifier,
                Tag::CallStart,
                Tag::Identifier,
                Tag::CallEnd,
                Tag::Terminator
            ]
        );
    }

    #[test]
    fn bare_division_after_identifier_is_not_a_regex() {
        let tags = tags("a / b");
        assert_eq!(
            tags,
            vec![Tag::Identifier, Tag::Math, Tag::Identifier, Tag::Terminator]
        );
    }

    #[test]
    fn leading_slash_is_a_regex() {
        let tags = tags("/abc/");
        assert_eq!(tags, vec![Tag::Regex, Tag::Terminator]);
    }

    #[test]
    fn unmatched_closing_paren_is_an_error() {
        let result = tokenize(")", LexOptions::default(), None);
        assert!(result.is_err());
    }

    #[test]
    fn unclosed_block_at_eof_is_closed_automatically() {
        let source = "if x\n  y";
        let tokens = tokenize(source, LexOptions::default(), None).unwrap();
        assert!(tokens.iter().any(|t| t.is(Tag::Outdent)));
        assert!(tokens.last().unwrap().is(Tag::Terminator));
    }

    #[test]
    fn empty_input_emits_no_tokens() {
        let tokens = tokenize("", LexOptions::default(), None).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn leading_bom_is_stripped() {
        let tags = tags("\u{feff}x = 1");
        assert_eq!(
            tags,
            vec![Tag::Identifier, Tag::Literal, Tag::Number, Tag::Terminator]
        );
    }

    #[test]
    fn source_beginning_with_whitespace_still_lexes_its_first_line() {
        let tokens = tokenize("  x = 1", LexOptions::default(), None).unwrap();
        assert!(tokens
            .iter()
            .any(|t| t.is(Tag::Identifier) && t.value_str() == "x"));
    }

    #[test]
    fn literate_option_strips_unindented_prose_before_lexing() {
        let source = "This is prose, not code.\n\n    x = 1\n";
        let tokens = tokenize(source, LexOptions::default().literate(true), None).unwrap();
        assert!(tokens
            .iter()
            .any(|t| t.is(Tag::Identifier) && t.value_str() == "x"));
        assert!(!tokens.iter().any(|t| t.value_str() == "This"));
    }

    #[test]
    fn trailing_operator_leaves_the_line_unfinished() {
        let source = "x = 1 +\n  2";
        let tags = tags(source);
        assert!(!tags.contains(&Tag::Indent));
    }

    #[test]
    fn trailing_compare_tag_leaves_the_line_unfinished() {
        let source = "x = 1 ==\n  2";
        let tags = tags(source);
        assert!(!tags.contains(&Tag::Indent));
    }
}
