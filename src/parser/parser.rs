use tracing::debug;

use super::ast::Node;
use super::error::ParseError;

const META_CHARS: [char; 4] = [
    '+', // alternation
    '*', // star
    '(', ')', // group brackets
];

type Parsed<'a> = Result<(&'a str, Node), ParseError>;

pub struct Parser<'a> {
    pattern: &'a str,
}

impl<'a> Parser<'a> {
    pub fn parse(pattern: &'a str) -> Result<Node, ParseError> {
        let parser = Parser { pattern };

        let result = parser.parse_root();
        match &result {
            Ok(_) => debug!(pattern, "pattern parsed"),
            Err(err) => debug!(pattern, %err, "pattern rejected"),
        }
        result
    }

    fn parse_root(&self) -> Result<Node, ParseError> {
        self.validate()?;

        let (rest, node) = self.parse_expr(self.pattern)?;
        match rest.is_empty() {
            true => Ok(node),
            false => Err(ParseError::TrailingInput {
                rest: rest.to_owned(),
                position: self.position(rest),
            }),
        }
    }

    // After this passes the pattern is pure ASCII, so byte offsets and
    // character offsets coincide.
    fn validate(&self) -> Result<(), ParseError> {
        match self
            .pattern
            .chars()
            .enumerate()
            .find(|(_, c)| !is_letter(*c) && !META_CHARS.contains(c))
        {
            Some((position, ch)) => Err(ParseError::InvalidChar { ch, position }),
            None => Ok(()),
        }
    }

    fn parse_expr(&self, rest: &'a str) -> Parsed<'a> {
        match rest.chars().next() {
            Some('(') => self.parse_group(&rest[1..]),
            Some(c) if is_letter(c) => self.parse_literal(rest),
            Some(ch) => Err(ParseError::UnexpectedChar {
                ch,
                position: self.position(rest),
            }),
            None => Err(ParseError::UnexpectedEnd {
                position: self.position(rest),
            }),
        }
    }

    // `rest` starts just after the opening parenthesis.
    fn parse_group(&self, rest: &'a str) -> Parsed<'a> {
        let (rest, first) = self.parse_expr(rest)?;

        match rest.chars().next() {
            Some('+') => {
                let (rest, second) = self.parse_expr(&rest[1..])?;
                let rest = self.parse_close(rest)?;
                Ok(parse_star(rest, Node::alternation(first, second)))
            }
            Some(')') => Ok(parse_star(&rest[1..], first)),
            Some(_) => {
                let (rest, second) = self.parse_expr(rest)?;
                let rest = self.parse_close(rest)?;
                Ok(parse_star(rest, Node::concatenation(first, second)))
            }
            None => Err(ParseError::ExpectedCloseParen {
                found: None,
                position: self.position(rest),
            }),
        }
    }

    fn parse_close(&self, rest: &'a str) -> Result<&'a str, ParseError> {
        match rest.chars().next() {
            Some(')') => Ok(&rest[1..]),
            found => Err(ParseError::ExpectedCloseParen {
                found,
                position: self.position(rest),
            }),
        }
    }

    // A run of letters is a right-nested concatenation of literals; a
    // trailing '*' binds to the last letter only.
    fn parse_literal(&self, rest: &'a str) -> Parsed<'a> {
        let len = rest.bytes().take_while(u8::is_ascii_lowercase).count();
        let (run, rest) = rest.split_at(len);

        let mut letters = run.chars().rev();
        let last = letters.next().ok_or(ParseError::UnexpectedEnd {
            position: self.position(rest),
        })?;

        let (rest, mut node) = parse_star(rest, Node::literal(last));
        for c in letters {
            node = Node::concatenation(Node::literal(c), node);
        }

        Ok((rest, node))
    }

    fn position(&self, rest: &str) -> usize {
        self.pattern.len() - rest.len()
    }
}

fn parse_star(rest: &str, node: Node) -> (&str, Node) {
    match rest.strip_prefix('*') {
        Some(rest) => (rest, Node::star(node)),
        None => (rest, node),
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}
