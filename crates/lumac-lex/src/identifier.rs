//! Identifier and keyword matcher.
//!
//! A run of identifier characters is classified in this order:
//! - if it sits in a forced-identifier position — right after `.`, `?.`,
//!   `::`, `?::`, or an unspaced `@` — it's a property name and never
//!   reclassified as a keyword, even if its text matches one (`foo.class`
//!   is not `foo` dot the `class` keyword);
//! - `own` immediately after a `for` keyword is [`Tag::Own`];
//! - a proscribed host-language word (`var`, `function`, …) is a hard
//!   error;
//! - a word-operator alias (`and`, `or`, `is`, `isnt`, `not`, `yes`/`on`,
//!   `no`/`off`) is rewritten to its symbolic form and tagged by the
//!   family that form belongs to;
//! - `for` sets [`Lexer::seen_for`] until a matching `in`/`of` consumes
//!   it;
//! - `in`/`of`/`instanceof` are [`Tag::ForIn`]/[`Tag::ForOf`] when they
//!   close a pending `for`, otherwise [`Tag::Relation`] — a membership
//!   test, with a preceding bare `!` folded into the token as `!in` et
//!   al.;
//! - `when` is [`Tag::LeadingWhen`] right after a `TERMINATOR`/`INDENT`
//!   (the leading clause of a `switch`) or plain [`Tag::When`] otherwise;
//! - `if`/`unless`, `else`, `then`, and `break`/`continue` get their own
//!   dedicated tags;
//! - anything else is [`Tag::Identifier`], with `reserved` set if the
//!   text is a language keyword.

use lumac_util::{Span, Symbol};

use crate::driver::Lexer;
use crate::error::{LexError, LexResult};
use crate::tables::{is_reserved_word, is_strict_proscribed, retag_word_operator, word_operator_alias};
use crate::token::{Tag, Token};
use crate::unicode::{is_ident_continue, is_ident_start};

pub(crate) fn match_identifier(lexer: &mut Lexer) -> LexResult<usize> {
    if !is_ident_start(lexer.cursor.current_char()) {
        return Ok(0);
    }

    let start = lexer.cursor.snapshot();
    while is_ident_continue(lexer.cursor.current_char()) {
        lexer.cursor.advance();
    }
    let text = lexer.cursor.slice_from(start.position);
    let span = lexer.span_from(start);
    let consumed = lexer.cursor.position() - start.position;

    if forced_identifier_position(lexer, start.position) {
        lexer
            .tokens
            .push(Token::new(Tag::Property, Symbol::intern(text), span));
        return Ok(consumed);
    }

    if text == "own" && matches!(lexer.tokens.last(), Some(t) if t.is(Tag::For)) {
        let token = Token::new(Tag::Own, Symbol::intern(text), span).reserved(true);
        lexer.tokens.push(token);
        return Ok(consumed);
    }

    if is_strict_proscribed(text) {
        return Err(LexError::ReservedWord {
            word: text.to_string(),
            span,
        });
    }

    if let Some(alias) = word_operator_alias(text) {
        let tag = retag_word_operator(alias).unwrap_or(Tag::Literal);
        lexer.tokens.push(Token::new(tag, Symbol::intern(alias), span));
        return Ok(consumed);
    }

    if text == "for" {
        let token = Token::new(Tag::For, Symbol::intern(text), span).reserved(true);
        lexer.tokens.push(token);
        lexer.seen_for = true;
        return Ok(consumed);
    }

    if matches!(text, "in" | "of" | "instanceof") {
        lex_relation(lexer, text, span);
        return Ok(consumed);
    }

    if text == "when" {
        let leading = matches!(
            lexer.tokens.last(),
            Some(t) if t.is(Tag::Terminator) || t.is(Tag::Indent)
        );
        let tag = if leading { Tag::LeadingWhen } else { Tag::When };
        let token = Token::new(tag, Symbol::intern(text), span).reserved(true);
        lexer.tokens.push(token);
        return Ok(consumed);
    }

    if text == "if" || text == "unless" {
        let token = Token::new(Tag::If, Symbol::intern(text), span).reserved(true);
        lexer.tokens.push(token);
        return Ok(consumed);
    }

    if text == "else" {
        let token = Token::new(Tag::Else, Symbol::intern(text), span).reserved(true);
        lexer.tokens.push(token);
        return Ok(consumed);
    }

    if text == "then" {
        let token = Token::new(Tag::Then, Symbol::intern(text), span).reserved(true);
        lexer.tokens.push(token);
        return Ok(consumed);
    }

    if text == "break" || text == "continue" {
        let token = Token::new(Tag::Statement, Symbol::intern(text), span).reserved(true);
        lexer.tokens.push(token);
        return Ok(consumed);
    }

    let reserved = is_reserved_word(text);
    let token = Token::new(Tag::Identifier, Symbol::intern(text), span).reserved(reserved);
    lexer.tokens.push(token);
    Ok(consumed)
}

/// True when the position the identifier just scanned opened at is a
/// property-access position: right after `.`/`?.`/`::`/`?::`, or right
/// after an `@` with nothing — not even a space — between the two.
fn forced_identifier_position(lexer: &Lexer, ident_start: usize) -> bool {
    match lexer.tokens.last() {
        Some(t) if t.is(Tag::Literal) && matches!(t.value_str(), "." | "?." | "::" | "?::") => {
            true
        }
        Some(t) if t.is(Tag::Literal) && t.value_str() == "@" && t.span.end == ident_start => true,
        _ => false,
    }
}

/// Classifies a scanned `in`/`of`/`instanceof`: closes a pending `for` as
/// `FOR_IN`/`FOR_OF`, or otherwise tags it `RELATION` — folding a
/// directly preceding bare `!` into the token's value and span so `!in`
/// reads as one membership-negation token instead of two.
fn lex_relation(lexer: &mut Lexer, text: &str, span: Span) {
    if lexer.seen_for && text != "instanceof" {
        lexer.seen_for = false;
        let tag = if text == "in" { Tag::ForIn } else { Tag::ForOf };
        lexer
            .tokens
            .push(Token::new(tag, Symbol::intern(text), span).reserved(true));
        return;
    }

    if let Some(bang) = pop_preceding_bang(lexer) {
        let merged = bang.span.merge(&span);
        let value = format!("!{text}");
        lexer
            .tokens
            .push(Token::new(Tag::Relation, Symbol::intern(&value), merged).reserved(true));
    } else {
        lexer
            .tokens
            .push(Token::new(Tag::Relation, Symbol::intern(text), span).reserved(true));
    }
}

fn pop_preceding_bang(lexer: &mut Lexer) -> Option<Token> {
    match lexer.tokens.last() {
        Some(t) if t.is(Tag::Unary) && t.value_str() == "!" => lexer.tokens.pop(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Lexer;
    use lumac_util::FileId;

    fn lex_one(source: &str) -> Token {
        let mut lexer = Lexer::new(source, FileId::DUMMY);
        match_identifier(&mut lexer).unwrap();
        lexer.tokens.remove(0)
    }

    #[test]
    fn plain_identifier_is_not_reserved() {
        let tok = lex_one("foo_bar");
        assert_eq!(tok.value_str(), "foo_bar");
        assert!(!tok.reserved);
    }

    #[test]
    fn keyword_without_a_dedicated_tag_stays_identifier_with_reserved_flag() {
        let tok = lex_one("return");
        assert!(tok.is(Tag::Identifier));
        assert!(tok.reserved);
    }

    #[test]
    fn if_and_unless_both_tag_as_if() {
        assert!(lex_one("if").is(Tag::If));
        let unless = lex_one("unless");
        assert!(unless.is(Tag::If));
        assert_eq!(unless.value_str(), "unless");
    }

    #[test]
    fn else_and_then_get_dedicated_tags() {
        assert!(lex_one("else").is(Tag::Else));
        assert!(lex_one("then").is(Tag::Then));
    }

    #[test]
    fn break_and_continue_tag_as_statement() {
        assert!(lex_one("break").is(Tag::Statement));
        assert!(lex_one("continue").is(Tag::Statement));
    }

    #[test]
    fn word_operator_aliases_retag_by_family() {
        let and_tok = lex_one("and");
        assert!(and_tok.is(Tag::Logic));
        assert_eq!(and_tok.value_str(), "&&");

        let or_tok = lex_one("or");
        assert!(or_tok.is(Tag::Logic));

        let is_tok = lex_one("is");
        assert!(is_tok.is(Tag::Compare));
        assert_eq!(is_tok.value_str(), "==");

        let isnt_tok = lex_one("isnt");
        assert!(isnt_tok.is(Tag::Compare));

        let not_tok = lex_one("not");
        assert!(not_tok.is(Tag::Unary));
        assert_eq!(not_tok.value_str(), "!");
    }

    #[test]
    fn yes_on_no_off_retag_as_bool() {
        for word in ["yes", "on", "no", "off"] {
            let tok = lex_one(word);
            assert!(tok.is(Tag::Bool));
        }
        assert_eq!(lex_one("yes").value_str(), "true");
        assert_eq!(lex_one("no").value_str(), "false");
    }

    #[test]
    fn strict_proscribed_word_is_a_hard_error() {
        let mut lexer = Lexer::new("var", FileId::DUMMY);
        assert!(match_identifier(&mut lexer).is_err());
    }

    #[test]
    fn property_after_dot_never_reclassified_as_keyword() {
        let mut lexer = Lexer::new("class", FileId::DUMMY);
        lexer.tokens.push(Token::new(
            Tag::Literal,
            Symbol::intern("."),
            lumac_util::Span::DUMMY,
        ));
        match_identifier(&mut lexer).unwrap();
        let tok = lexer.tokens.last().unwrap();
        assert!(tok.is(Tag::Property));
        assert!(!tok.reserved);
    }

    #[test]
    fn property_after_soaked_dot_double_colon_is_also_forced() {
        for punct in ["?.", "::", "?::"] {
            let mut lexer = Lexer::new("class", FileId::DUMMY);
            lexer.tokens.push(Token::new(
                Tag::Literal,
                Symbol::intern(punct),
                lumac_util::Span::DUMMY,
            ));
            match_identifier(&mut lexer).unwrap();
            assert!(lexer.tokens.last().unwrap().is(Tag::Property));
        }
    }

    #[test]
    fn property_after_unspaced_at_is_forced() {
        let mut lexer = Lexer::new("@class", FileId::DUMMY);
        let at_start = lexer.cursor.snapshot();
        lexer.cursor.advance(); // consume '@'
        let at_span = lexer.span_from(at_start);
        lexer
            .tokens
            .push(Token::new(Tag::Literal, Symbol::intern("@"), at_span));
        match_identifier(&mut lexer).unwrap();
        assert!(lexer.tokens.last().unwrap().is(Tag::Property));
    }

    #[test]
    fn spaced_at_does_not_force_identifier_treatment() {
        let mut lexer = Lexer::new("@ class", FileId::DUMMY);
        let at_start = lexer.cursor.snapshot();
        lexer.cursor.advance(); // '@'
        let at_span = lexer.span_from(at_start);
        lexer.cursor.advance(); // space
        lexer
            .tokens
            .push(Token::new(Tag::Literal, Symbol::intern("@"), at_span));
        match_identifier(&mut lexer).unwrap();
        assert!(!lexer.tokens.last().unwrap().is(Tag::Property));
    }

    #[test]
    fn non_identifier_start_is_not_a_match() {
        let mut lexer = Lexer::new("123", FileId::DUMMY);
        assert_eq!(match_identifier(&mut lexer).unwrap(), 0);
    }

    #[test]
    fn for_sets_its_own_tag_and_seen_for() {
        let mut lexer = Lexer::new("for", FileId::DUMMY);
        match_identifier(&mut lexer).unwrap();
        assert!(lexer.tokens.last().unwrap().is(Tag::For));
        assert!(lexer.seen_for);
    }

    #[test]
    fn own_after_for_is_tagged_own() {
        let mut lexer = Lexer::new("for own", FileId::DUMMY);
        match_identifier(&mut lexer).unwrap(); // for
        lexer.cursor.advance(); // space
        match_identifier(&mut lexer).unwrap(); // own
        assert!(lexer.tokens.last().unwrap().is(Tag::Own));
    }

    #[test]
    fn for_in_is_tagged_for_in() {
        let mut lexer = Lexer::new("for x in y", FileId::DUMMY);
        match_identifier(&mut lexer).unwrap(); // for
        assert!(lexer.seen_for);
        lexer.cursor.advance(); // space
        match_identifier(&mut lexer).unwrap(); // x
        lexer.cursor.advance(); // space
        match_identifier(&mut lexer).unwrap(); // in
        let tok = lexer.tokens.last().unwrap();
        assert!(tok.is(Tag::ForIn));
        assert!(!lexer.seen_for);
    }

    #[test]
    fn for_of_is_tagged_for_of() {
        let mut lexer = Lexer::new("for x of y", FileId::DUMMY);
        match_identifier(&mut lexer).unwrap();
        lexer.cursor.advance();
        match_identifier(&mut lexer).unwrap();
        lexer.cursor.advance();
        match_identifier(&mut lexer).unwrap();
        assert!(lexer.tokens.last().unwrap().is(Tag::ForOf));
    }

    #[test]
    fn in_outside_a_for_clause_is_a_relation() {
        let tok = lex_one("in");
        assert!(tok.is(Tag::Relation));
        assert_eq!(tok.value_str(), "in");
    }

    #[test]
    fn instanceof_is_always_a_relation_even_after_for() {
        let mut lexer = Lexer::new("for x instanceof y", FileId::DUMMY);
        match_identifier(&mut lexer).unwrap(); // for
        lexer.cursor.advance();
        match_identifier(&mut lexer).unwrap(); // x
        lexer.cursor.advance();
        match_identifier(&mut lexer).unwrap(); // instanceof
        assert!(lexer.tokens.last().unwrap().is(Tag::Relation));
        assert!(lexer.seen_for);
    }

    #[test]
    fn preceding_bang_is_folded_into_the_relation() {
        let mut lexer = Lexer::new("in", FileId::DUMMY);
        lexer.tokens.push(Token::new(
            Tag::Unary,
            Symbol::intern("!"),
            lumac_util::Span::DUMMY,
        ));
        match_identifier(&mut lexer).unwrap();
        assert_eq!(lexer.tokens.len(), 1);
        let tok = &lexer.tokens[0];
        assert!(tok.is(Tag::Relation));
        assert_eq!(tok.value_str(), "!in");
    }

    #[test]
    fn when_after_terminator_is_leading_when() {
        let mut lexer = Lexer::new("when", FileId::DUMMY);
        lexer.tokens.push(Token::new(
            Tag::Terminator,
            Symbol::intern("\n"),
            lumac_util::Span::DUMMY,
        ));
        match_identifier(&mut lexer).unwrap();
        assert!(lexer.tokens.last().unwrap().is(Tag::LeadingWhen));
    }

    #[test]
    fn when_mid_expression_is_plain_when() {
        let mut lexer = Lexer::new("when", FileId::DUMMY);
        lexer.tokens.push(Token::new(
            Tag::Identifier,
            Symbol::intern("x"),
            lumac_util::Span::DUMMY,
        ));
        match_identifier(&mut lexer).unwrap();
        assert!(lexer.tokens.last().unwrap().is(Tag::When));
    }
}
