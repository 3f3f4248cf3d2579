//! Property tests for block lexing invariants.

use ferroblock::{LexError, Token, tokenize};
use proptest::prelude::*;

fn fence_content(tokens: &[Token]) -> Option<&str> {
    match tokens {
        [Token::Fence { content, .. }] => Some(content),
        _ => None,
    }
}

/// Check that open/close tokens pair up without crossing.
fn is_well_nested(tokens: &[Token]) -> bool {
    let mut stack = Vec::new();
    for token in tokens {
        match token {
            Token::ParagraphOpen
            | Token::ListItemOpen
            | Token::BulletListOpen { .. }
            | Token::OrderedListOpen { .. } => stack.push(token.tag()),
            Token::ParagraphClose => {
                if stack.pop() != Some("paragraph_open") {
                    return false;
                }
            }
            Token::ListItemClose => {
                if stack.pop() != Some("list_item_open") {
                    return false;
                }
            }
            Token::BulletListClose => {
                if stack.pop() != Some("bullet_list_open") {
                    return false;
                }
            }
            Token::OrderedListClose => {
                if stack.pop() != Some("ordered_list_open") {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

proptest! {
    #[test]
    fn closing_fence_must_be_at_least_as_long(
        open in 3usize..8,
        close in 1usize..10,
        body in "[a-z ]{0,10}",
    ) {
        let input = format!("{}\n{}\n{}", "`".repeat(open), body, "`".repeat(close));
        let tokens = tokenize(&input).unwrap();

        let expected = if close >= open {
            format!("{body}\n")
        } else {
            format!("{body}\n{}", "`".repeat(close))
        };
        prop_assert_eq!(fence_content(&tokens), Some(expected.as_str()));
    }

    #[test]
    fn fence_content_is_verbatim(lines in prop::collection::vec("[a-z ]{0,12}", 0..8)) {
        let mut input = String::from("~~~\n");
        let mut expected = String::new();
        for line in &lines {
            input.push_str(line);
            input.push('\n');
            expected.push_str(line);
            expected.push('\n');
        }
        input.push_str("~~~");

        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(fence_content(&tokens), Some(expected.as_str()));
    }

    #[test]
    fn lists_without_blank_lines_are_tight(items in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let input: String = items.iter().map(|item| format!("- {item}\n")).collect();
        let tokens = tokenize(&input).unwrap();

        prop_assert_eq!(&tokens[0], &Token::BulletListOpen { tight: true });
        let count = tokens.iter().filter(|t| **t == Token::ListItemOpen).count();
        prop_assert_eq!(count, items.len());
    }

    #[test]
    fn ordered_start_is_first_marker(first in 0u32..1_000_000, rest in prop::collection::vec(0u32..1000, 0..5)) {
        let mut input = format!("{first}. a\n");
        for n in &rest {
            input.push_str(&format!("{n}. b\n"));
        }
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(&tokens[0], &Token::OrderedListOpen { start: first, tight: true });
    }

    #[test]
    fn arbitrary_input_terminates_well_nested(input in "[-*+ 0-9.)`~#ab\n]{0,200}") {
        match tokenize(&input) {
            Ok(tokens) => prop_assert!(is_well_nested(&tokens), "{:?}", tokens),
            Err(err) => prop_assert!(
                matches!(err, LexError::RecursionLimitExceeded { depth, limit } if depth > limit),
                "{}",
                err
            ),
        }
    }
}
