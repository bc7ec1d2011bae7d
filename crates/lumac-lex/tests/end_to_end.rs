//! End-to-end scans over small complete programs, checking the full
//! token sequence rather than one matcher in isolation.

use lumac_lex::{tokenize, LexOptions, Tag};

fn run(source: &str) -> Vec<(Tag, &'static str)> {
    tokenize(source, LexOptions::default(), None)
        .unwrap()
        .into_iter()
        .map(|t| (t.tag, t.value_str()))
        .collect()
}

#[test]
fn plain_assignment() {
    let tokens = run("a = 1");
    assert_eq!(
        tokens,
        vec![
            (Tag::Identifier, "a"),
            (Tag::Literal, "="),
            (Tag::Number, "1"),
            (Tag::Terminator, "\n"),
        ]
    );
}

#[test]
fn conditional_expression_with_word_operator_aliases() {
    let tokens = run("if yes then 1 else 2");
    assert_eq!(
        tokens,
        vec![
            (Tag::If, "if"),
            (Tag::Bool, "true"),
            (Tag::Then, "then"),
            (Tag::Number, "1"),
            (Tag::Else, "else"),
            (Tag::Number, "2"),
            (Tag::Terminator, "\n"),
        ]
    );
    let ifs = tokenize("if yes then 1 else 2", LexOptions::default(), None).unwrap();
    assert!(ifs[0].reserved);
    assert!(ifs[2].reserved);
    assert!(ifs[4].reserved);
}

#[test]
fn interpolated_string_splits_into_start_expr_end() {
    let tokens = tokenize(r#""hi #{x}!""#, LexOptions::default(), None).unwrap();
    assert!(tokens[0].is(Tag::StringStart));
    assert_eq!(tokens[0].value_str(), "hi ");
    assert!(tokens[1].is(Tag::Identifier));
    assert_eq!(tokens[1].value_str(), "x");
    assert!(tokens[2].is(Tag::StringEnd));
    assert_eq!(tokens[2].value_str(), "!");
    assert!(tokens[3].is(Tag::Terminator));
}

#[test]
fn indented_for_of_block() {
    let tokens = run("for own k, v of obj\n  k");
    assert_eq!(
        tokens,
        vec![
            (Tag::For, "for"),
            (Tag::Own, "own"),
            (Tag::Identifier, "k"),
            (Tag::Literal, ","),
            (Tag::Identifier, "v"),
            (Tag::ForOf, "of"),
            (Tag::Identifier, "obj"),
            (Tag::Terminator, "\n"),
            (Tag::Indent, ""),
            (Tag::Identifier, "k"),
            (Tag::Outdent, ""),
            (Tag::Terminator, "\n"),
        ]
    );
}

#[test]
fn is_not_aliases_to_equality_and_negation() {
    let tokens = run("x is not y");
    assert_eq!(
        tokens,
        vec![
            (Tag::Identifier, "x"),
            (Tag::Compare, "=="),
            (Tag::Unary, "!"),
            (Tag::Identifier, "y"),
            (Tag::Terminator, "\n"),
        ]
    );
}

#[test]
fn bang_in_consolidates_into_a_single_negated_relation() {
    let tokens = run("a not in b");
    assert_eq!(
        tokens,
        vec![
            (Tag::Identifier, "a"),
            (Tag::Relation, "!in"),
            (Tag::Identifier, "b"),
            (Tag::Terminator, "\n"),
        ]
    );
}

#[test]
fn membership_relation_outside_a_for_clause() {
    let tokens = run("a in b");
    assert_eq!(
        tokens,
        vec![
            (Tag::Identifier, "a"),
            (Tag::Relation, "in"),
            (Tag::Identifier, "b"),
            (Tag::Terminator, "\n"),
        ]
    );
}

#[test]
fn unspaced_slashes_between_identifiers_are_division_not_regex() {
    let tokens = run("a/b/c");
    assert_eq!(
        tokens,
        vec![
            (Tag::Identifier, "a"),
            (Tag::Math, "/"),
            (Tag::Identifier, "b"),
            (Tag::Math, "/"),
            (Tag::Identifier, "c"),
            (Tag::Terminator, "\n"),
        ]
    );
}

#[test]
fn nested_indentation_closes_every_level_at_eof() {
    let source = "if a\n  if b\n    c";
    let tokens = tokenize(source, LexOptions::default(), None).unwrap();
    let outdents = tokens.iter().filter(|t| t.is(Tag::Outdent)).count();
    assert_eq!(outdents, 2);
    assert!(tokens.last().unwrap().is(Tag::Terminator));
}

#[test]
fn class_definition_with_method_and_property_access() {
    let source = "class Greeter\n  hello: (name) ->\n    name.length";
    let tokens = tokenize(source, LexOptions::default(), None).unwrap();
    assert!(tokens.iter().any(|t| t.is(Tag::Identifier) && t.value_str() == "class" && t.reserved));
    assert!(tokens.iter().any(|t| t.is(Tag::Property) && t.value_str() == "length"));
}

#[test]
fn unmatched_bracket_is_a_hard_error() {
    let result = tokenize("a = (1 + 2", LexOptions::default(), None);
    assert!(result.is_err());
}

#[test]
fn malformed_number_is_a_hard_error() {
    let result = tokenize("x = 1e", LexOptions::default(), None);
    assert!(result.is_err());
}
