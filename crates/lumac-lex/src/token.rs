//! The token the lexer emits: a `(tag, value, span)` triple plus the small
//! set of boolean flags the downstream parser needs to disambiguate things
//! the grammar can't (call vs. grouping parens, spaced vs. glued operators,
//! synthetic vs. source-backed tokens).
//!
//! Most reserved words are **not** a separate tag: `return`, `class`,
//! `while`, and an ordinary identifier all carry [`Tag::Identifier`], with
//! the `reserved` flag on [`Token`] (set by the identifier matcher after a
//! table lookup) distinguishing a keyword from a variable by text, not
//! shape. The handful of keywords and operator families the grammar
//! actually branches on during parsing — `if`/`else`/`then`, `when` vs. a
//! leading `when`, `own`, `break`/`continue`, and the comparison/logic/math
//! operator groups — get their own `Tag` variant instead, matching the
//! closed tag set the scanner is specified against.
//!
//! Punctuation that the grammar never needs to distinguish by family
//! (parens used as plain grouping, `,`, `.`, `=`, `->`) stays under the
//! catch-all [`Tag::Literal`], with the exact spelling in [`Token::value`].

use lumac_util::{Span, Symbol};

/// The coarse category of a token. See the module docs for which keywords
/// and operators get their own variant versus staying under
/// [`Tag::Literal`]/[`Tag::Identifier`] with the exact spelling in
/// [`Token::value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A name: a keyword, a variable, anything the identifier matcher
    /// produced. See the module docs for why keywords live here too.
    Identifier,
    /// An identifier following `.`, `?.`, `::`, `?::`, or an unspaced `@` —
    /// never reclassified as a keyword even if its text matches one
    /// (`foo.class` stays a property access).
    Property,
    Number,
    /// A complete, non-interpolated string, or one interpolation-free
    /// segment of a larger interpolated string.
    String,
    /// Opens an interpolated string (`"...#{`).
    StringStart,
    /// Closes an interpolated string (`}..."`).
    StringEnd,
    /// A complete, non-interpolated regex literal.
    Regex,
    /// Opens an interpolated heregex.
    RegexStart,
    /// Closes an interpolated heregex.
    RegexEnd,
    Comment,
    /// Synthetic statement separator: a significant newline, or `;`.
    Terminator,
    /// Synthetic: indentation increased.
    Indent,
    /// Synthetic: indentation decreased (one per level closed).
    Outdent,
    /// `(` reclassified as the start of a call's argument list.
    CallStart,
    CallEnd,
    /// `[` reclassified as the start of an index/slice expression.
    IndexStart,
    IndexEnd,
    /// `(` reclassified as the start of a function parameter list.
    ParamStart,
    ParamEnd,
    /// `for x in y` — distinguished from `FOR_OF` during the scan so the
    /// parser never has to re-inspect the keyword that followed `for`.
    ForIn,
    ForOf,
    /// `when` immediately following a `TERMINATOR`/`INDENT`, i.e. the
    /// leading `when` of a `switch` clause rather than a guard inside one.
    LeadingWhen,
    /// A backtick-delimited embedded-JS passthrough block.
    Js,
    /// The `for` keyword itself; tracked as its own tag (not just a
    /// reserved `Identifier`) so `own`'s "previous tag is FOR" rule and
    /// `seenFor` bookkeeping can check it directly.
    For,
    /// `own`, immediately following a `FOR` token (`for own k, v of obj`).
    Own,
    /// `if`, and `unless` (which keeps its own surface text but tags as
    /// `If` the same as `if` — the parser tells them apart by `value`).
    If,
    Else,
    Then,
    /// `when` not immediately following a line break — a guard clause
    /// inside a `switch`, as opposed to [`Tag::LeadingWhen`].
    When,
    /// `break`/`continue`.
    Statement,
    /// `!`, and the `not` alias once rewritten to `!`.
    Unary,
    /// `~`.
    UnaryMath,
    /// `*`, `/`, `%`, `//`, `%%`.
    Math,
    /// `<<`, `>>`, `>>>`.
    Shift,
    /// `==`, `!=`, `<`, `>`, `<=`, `>=`, and the `is`/`isnt` aliases once
    /// rewritten.
    Compare,
    /// `&&`, `||`, `&`, `|`, `^`, and the `and`/`or` aliases once
    /// rewritten.
    Logic,
    /// A compound-assignment operator (`+=`, `||=`, `**=`, …).
    CompoundAssign,
    /// `in`, `of`, `instanceof` used outside a `for`-clause (a membership
    /// test, not a loop binder); `!in`/`!of`/`!instanceof` consolidate a
    /// preceding bare `!` into the token's value and span.
    Relation,
    /// `true`/`false`, and the `yes`/`on`/`no`/`off` aliases once
    /// rewritten.
    Bool,
    /// An operator or punctuation mark with no dedicated family tag; see
    /// type docs.
    Literal,
}

impl Tag {
    /// Tags for tokens the lexer itself inserts rather than copies from
    /// source text (see [`Token::generated`]).
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Tag::Terminator
                | Tag::Indent
                | Tag::Outdent
                | Tag::CallStart
                | Tag::CallEnd
                | Tag::IndexStart
                | Tag::IndexEnd
                | Tag::ParamStart
                | Tag::ParamEnd
        )
    }
}

/// A single lexical token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub tag: Tag,
    /// The token's text, already normalized (alias-substituted keywords,
    /// de-escaped string contents are NOT included here — those live on
    /// the parsed literal downstream; this is the raw-ish source spelling
    /// the lexer itself deals in).
    pub value: Symbol,
    pub span: Span,
    /// `true` when at least one space or tab immediately precedes this
    /// token. Needed to tell `f (x)` (call with a parenthesized argument)
    /// from `f(x)` (call with the grouping folded into the call) and
    /// similar spacing-sensitive calls.
    pub spaced: bool,
    /// `true` when the token directly follows a line break in the source
    /// (before any TERMINATOR bookkeeping collapses it). Some matchers
    /// consult this instead of re-deriving it from spans.
    pub newline_before: bool,
    /// `true` for a token the lexer inserted with no corresponding source
    /// text (INDENT/OUTDENT/TERMINATOR, and CALL_START/PARAM_START pairs
    /// synthesized around an existing paren). Its span is still
    /// meaningful — it points at the source position the insertion
    /// conceptually happened at — but there's no lexeme to show a user.
    pub generated: bool,
    /// `true` when this identifier's text matched a reserved word. See
    /// the module docs: reservedness is a flag, not a separate tag.
    pub reserved: bool,
}

impl Token {
    pub fn new(tag: Tag, value: Symbol, span: Span) -> Self {
        Self {
            tag,
            value,
            span,
            spaced: false,
            newline_before: false,
            generated: false,
            reserved: false,
        }
    }

    /// A token with no backing source text, e.g. a synthesized `OUTDENT`.
    pub fn generated(tag: Tag, value: Symbol, span: Span) -> Self {
        let mut token = Self::new(tag, value, span);
        token.generated = true;
        token
    }

    pub fn spaced(mut self, spaced: bool) -> Self {
        self.spaced = spaced;
        self
    }

    pub fn newline_before(mut self, newline_before: bool) -> Self {
        self.newline_before = newline_before;
        self
    }

    pub fn reserved(mut self, reserved: bool) -> Self {
        self.reserved = reserved;
        self
    }

    pub fn is(&self, tag: Tag) -> bool {
        self.tag == tag
    }

    pub fn value_str(&self) -> &'static str {
        self.value.as_str()
    }
}
