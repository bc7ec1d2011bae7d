//! Static word lists the identifier, regex, and operator matchers consult:
//! reserved words, the small set of word-operators that get rewritten to
//! their symbolic form, and the token classes that change how the next
//! `(`, `[`, or `/` is read.
//!
//! These tables stand in for the pre-registered keyword symbol table the
//! generic interner used to carry — see `lumac_util::symbol::interner` —
//! except here the lookups are language-specific, so they live in the
//! lexer crate and just match against `&str` rather than pre-interned
//! indices. With a word list this small, a linear scan over a `match` is
//! both simpler and no slower than a hash lookup.

use crate::token::Tag;

/// The union of language keywords, word-operator aliases, and
/// future/JS-reserved names — exported so a downstream compiler stage can
/// check a name against the same list the lexer used, without linking
/// against the lexer's internal matcher functions.
pub static RESERVED_WORDS: &[&str] = &[
    "if", "else", "unless", "for", "in", "of", "while", "until", "loop", "break", "continue",
    "switch", "when", "then", "return", "try", "catch", "finally", "throw", "class", "extends",
    "super", "new", "do", "delete", "typeof", "instanceof", "yield", "await", "import", "export",
    "default", "from", "as", "this", "null", "undefined", "true", "false", "yes", "no", "on",
    "off", "and", "or", "not", "is", "isnt", "own",
];

/// Words borrowed from the host language that this language refuses to
/// let through as identifiers even though they're not part of its own
/// grammar — using one is always a hard error (`E_LEXER_RESERVED_WORD`),
/// never just a contextual reclassification.
pub static STRICT_PROSCRIBED: &[&str] = &[
    "case", "function", "var", "void", "with", "const", "let", "enum", "native", "implements",
    "interface", "package", "private", "protected", "public", "static",
];

/// Words with special meaning in the grammar. An identifier matching one
/// of these gets `Token::reserved = true`; it is still tagged
/// `Tag::Identifier` (see `token.rs`).
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// See [`STRICT_PROSCRIBED`].
pub fn is_strict_proscribed(word: &str) -> bool {
    STRICT_PROSCRIBED.contains(&word)
}

/// Word-operators that the identifier matcher rewrites to their symbolic
/// equivalent before the token is emitted, so the parser never has to
/// special-case the spelled-out form. Returns the replacement text, or
/// `None` if `word` isn't one of these.
pub fn word_operator_alias(word: &str) -> Option<&'static str> {
    match word {
        "and" => Some("&&"),
        "or" => Some("||"),
        "is" => Some("=="),
        "isnt" => Some("!="),
        "not" => Some("!"),
        "yes" | "on" => Some("true"),
        "no" | "off" => Some("false"),
        _ => None,
    }
}

/// The tag a word-operator alias carries once rewritten to its symbolic
/// form — `and`/`or` read as LOGIC, `is`/`isnt` as COMPARE, `not` as
/// UNARY, `yes`/`on`/`no`/`off` as BOOL, matching the family the symbolic
/// spelling would get from [`classify_operator`] had it come from source
/// as punctuation instead of a word.
pub fn retag_word_operator(value: &str) -> Option<Tag> {
    match value {
        "!" => Some(Tag::Unary),
        "==" | "!=" => Some(Tag::Compare),
        "&&" | "||" => Some(Tag::Logic),
        "true" | "false" => Some(Tag::Bool),
        _ => None,
    }
}

/// The tag family an operator/punctuation spelling belongs to. Anything
/// not named here (grouping punctuation, `->`/`=>`, `.`/`::`/`?.`/`?::`,
/// `+`/`-`, and `**`, which the grammar treats as its own thing rather
/// than folding into MATH) stays [`Tag::Literal`].
pub fn classify_operator(text: &str) -> Tag {
    match text {
        "!" => Tag::Unary,
        "~" => Tag::UnaryMath,
        "*" | "/" | "%" | "//" | "%%" => Tag::Math,
        "<<" | ">>" | ">>>" => Tag::Shift,
        "==" | "!=" | "<" | ">" | "<=" | ">=" => Tag::Compare,
        "&&" | "||" | "&" | "|" | "^" => Tag::Logic,
        "+=" | "-=" | "*=" | "/=" | "%=" | "?=" | "&=" | "|=" | "^=" | "**=" | ">>>=" | "<<="
        | ">>=" | "&&=" | "||=" | "//=" | "%%=" => Tag::CompoundAssign,
        _ => Tag::Literal,
    }
}

/// Tags after which a following `/` starts a division rather than a regex
/// literal — i.e. tags that can end an expression. Anything not in this
/// set is a position where `/` can only mean "start of a regex", since no
/// expression could plausibly end there.
pub fn is_not_regex_position(tag: Tag, reserved: bool) -> bool {
    if reserved {
        return false;
    }
    matches!(
        tag,
        Tag::Identifier
            | Tag::Number
            | Tag::String
            | Tag::StringEnd
            | Tag::Regex
            | Tag::RegexEnd
            | Tag::CallEnd
            | Tag::IndexEnd
            | Tag::Outdent
            | Tag::Bool
    )
}

/// Tags after which a following `(` opens a call's argument list rather
/// than a grouping parenthesis.
pub fn is_callable(tag: Tag, reserved: bool) -> bool {
    if reserved {
        return false;
    }
    matches!(
        tag,
        Tag::Identifier | Tag::CallEnd | Tag::IndexEnd | Tag::String | Tag::StringEnd
    )
}

/// Tags after which a following `[` opens an index/slice rather than an
/// array literal.
pub fn is_indexable(tag: Tag, reserved: bool) -> bool {
    is_callable(tag, reserved) || matches!(tag, Tag::Number | Tag::Regex | Tag::RegexEnd)
}
