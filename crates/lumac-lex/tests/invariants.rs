//! Property tests over a small generated-source grammar: balanced
//! brackets and random indentation, checking the structural invariants
//! that have to hold for every successfully-lexed program.

use lumac_lex::{tokenize, LexOptions, Tag};
use proptest::prelude::*;

/// A line of a generated program: an assignment whose right-hand side is
/// either a number, a bare identifier, or a call with a few parenthesized
/// or bracketed arguments — always balanced, since this grammar isn't
/// trying to generate lexer *errors*, just varied-but-valid structure.
fn rhs_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..1000).prop_map(|n| n.to_string()),
        "[a-z][a-z0-9]{0,4}".prop_map(|s| s),
        "[a-z][a-z0-9]{0,4}".prop_flat_map(|name| {
            prop::collection::vec("[a-z][a-z0-9]{0,3}", 0..3)
                .prop_map(move |args| format!("{name}({})", args.join(", ")))
        }),
        prop::collection::vec(1u32..100, 0..3)
            .prop_map(|args| {
                let items: Vec<String> = args.iter().map(|n| n.to_string()).collect();
                format!("[{}]", items.join(", "))
            }),
        ("[a-z][a-z0-9]{0,4}", 0u32..10)
            .prop_map(|(name, index)| format!("{name}[{index}]")),
    ]
}

fn statement_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9]{0,4}", rhs_strategy()).prop_map(|(name, rhs)| format!("{name} = {rhs}"))
}

/// A block: one or more statements, each optionally followed by a nested
/// indented block (an `if` guarding a few more statements). Depth is
/// capped by proptest's own recursion strategy to keep generated programs
/// small.
fn block_strategy(depth: u32) -> impl Strategy<Value = Vec<String>> {
    let leaf = prop::collection::vec(statement_strategy(), 1..4);
    if depth == 0 {
        leaf.boxed()
    } else {
        prop_oneof![
            2 => leaf,
            1 => (statement_strategy(), block_strategy(depth - 1)).prop_map(|(cond, inner)| {
                let mut lines = vec![format!("if {cond}", cond = cond)];
                for line in inner {
                    lines.push(format!("  {line}"));
                }
                lines
            }),
        ]
        .boxed()
    }
}

fn program_strategy() -> impl Strategy<Value = String> {
    block_strategy(2).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn indent_and_outdent_counts_balance(source in program_strategy()) {
        let tokens = tokenize(&source, LexOptions::default(), None).unwrap();
        let indents = tokens.iter().filter(|t| t.is(Tag::Indent)).count();
        let outdents = tokens.iter().filter(|t| t.is(Tag::Outdent)).count();
        prop_assert_eq!(indents, outdents);
    }

    #[test]
    fn every_bracket_family_is_paired(source in program_strategy()) {
        let tokens = tokenize(&source, LexOptions::default(), None).unwrap();
        let count = |tag: Tag| tokens.iter().filter(|t| t.is(tag)).count();
        prop_assert_eq!(count(Tag::CallStart), count(Tag::CallEnd));
        prop_assert_eq!(count(Tag::IndexStart), count(Tag::IndexEnd));
        prop_assert_eq!(count(Tag::ParamStart), count(Tag::ParamEnd));
    }

    #[test]
    fn every_token_has_non_decreasing_span(source in program_strategy()) {
        let tokens = tokenize(&source, LexOptions::default(), None).unwrap();
        for tok in &tokens {
            prop_assert!(tok.span.first_line <= tok.span.last_line);
            if tok.span.first_line == tok.span.last_line {
                prop_assert!(tok.span.first_column <= tok.span.last_column);
            }
        }
    }

    #[test]
    fn ends_in_a_terminator_when_nonempty(source in program_strategy()) {
        let tokens = tokenize(&source, LexOptions::default(), None).unwrap();
        if let Some(last) = tokens.last() {
            prop_assert!(last.is(Tag::Terminator));
        }
    }
}
