use paren_regex::{matches, parse, Node, ParseError, Regex};
use rstest::rstest;

fn lit(c: char) -> Node {
    Node::literal(c)
}

#[rstest]
#[case("(a+b)", Node::alternation(lit('a'), lit('b')))]
#[case("(ab)", Node::concatenation(lit('a'), lit('b')))]
#[case("ab*", Node::concatenation(lit('a'), Node::star(lit('b'))))]
#[case("((a+b)*)", Node::star(Node::alternation(lit('a'), lit('b'))))]
#[case("((a+b)+c)", Node::alternation(Node::alternation(lit('a'), lit('b')), lit('c')))]
fn parses_to(#[case] pattern: &str, #[case] expect: Node) {
    assert_eq!(parse(pattern), Ok(expect));
}

#[rstest]
#[case("")]
#[case("(a+b+c)")]
#[case("(a+b)+c")]
#[case("(a+b)*a*")]
#[case("(a+b")]
#[case("(A+b)")]
#[case("a.b")]
#[case("a b")]
#[case(")")]
fn rejects(#[case] pattern: &str) {
    let err: ParseError = parse(pattern).unwrap_err();
    assert!(err.position() <= pattern.chars().count());
}

#[rstest]
#[case("(ab)", "ab", true)]
#[case("(ab)", "a", false)]
#[case("(ab)", "abc", false)]
#[case("((a)*)", "", true)]
#[case("((a)*)", "aaaa", true)]
#[case("((a)*)", "aaab", false)]
#[case("(a+b)", "a", true)]
#[case("(a+b)", "b", true)]
#[case("(a+b)", "c", false)]
#[case("(a+b)*", "", true)]
#[case("((a*)*)", "", true)]
#[case("(ab)", "", false)]
#[case("(a+b)", "", false)]
#[case("(ab)", "1", false)]
fn matches_input(#[case] pattern: &str, #[case] input: &str, #[case] expect: bool) {
    let tree = parse(pattern).unwrap();

    assert_eq!(matches(&tree, input), expect);
    assert_eq!(Regex::new(pattern).unwrap().is_match(input), expect);
}
