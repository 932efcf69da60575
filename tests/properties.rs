//! Property-based tests for parsing and matching
//!
//! The `regex` crate serves as the reference matcher: a tree is translated
//! to an anchored pattern over the same alphabet.

use paren_regex::{matches, parse, Node, Regex, StarBound};
use proptest::prelude::*;

fn literal_strategy() -> impl Strategy<Value = Node> {
    prop::char::range('a', 'c').prop_map(Node::literal)
}

/// Trees built from literals, alternations and concatenations only
fn star_free_strategy() -> impl Strategy<Value = Node> {
    literal_strategy().prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Node::alternation(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Node::concatenation(l, r)),
        ]
    })
}

fn tree_strategy() -> impl Strategy<Value = Node> {
    literal_strategy().prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Node::alternation(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Node::concatenation(l, r)),
            inner.prop_map(Node::star),
        ]
    })
}

fn to_regex(node: &Node) -> String {
    match node {
        Node::Literal(c) => c.to_string(),
        Node::Alternation(l, r) => format!("(?:{}|{})", to_regex(l), to_regex(r)),
        Node::Concatenation(l, r) => format!("(?:{}{})", to_regex(l), to_regex(r)),
        Node::Star(body) => format!("(?:{})*", to_regex(body)),
    }
}

fn reference(node: &Node) -> regex::Regex {
    regex::Regex::new(&format!("^(?:{})$", to_regex(node))).unwrap()
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_display_reparses_to_same_tree(tree in tree_strategy()) {
            let pattern = tree.to_string();
            prop_assert_eq!(parse(&pattern), Ok(tree));
        }

        #[test]
        fn test_star_free_agrees_with_reference(tree in star_free_strategy(), input in "[a-c]{0,8}") {
            let expect = reference(&tree).is_match(&input);
            prop_assert_eq!(matches(&tree, &input), expect, "pattern {}", tree);
        }

        #[test]
        fn test_match_implies_reference_match(tree in tree_strategy(), input in "[a-c]{0,8}") {
            if matches(&tree, &input) {
                prop_assert!(reference(&tree).is_match(&input), "pattern {} on {:?}", tree, input);
            }
        }

        #[test]
        fn test_star_bounds_agree(tree in tree_strategy(), input in "[a-c]{0,8}") {
            let progress = Regex::new(&tree.to_string()).unwrap();
            let legacy = progress.clone().with_star_bound(StarBound::InputLength);
            prop_assert_eq!(progress.is_match(&input), legacy.is_match(&input));
        }

        #[test]
        fn test_matching_is_total_and_repeatable(tree in tree_strategy(), input in ".{0,12}") {
            let first = matches(&tree, &input);
            prop_assert_eq!(matches(&tree, &input), first);
        }

        #[test]
        fn test_parse_never_panics(pattern in "[a-c()+*]{0,12}") {
            if let Ok(tree) = parse(&pattern) {
                prop_assert_eq!(parse(&tree.to_string()), Ok(tree));
            }
        }
    }
}
