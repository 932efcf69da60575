use std::fmt;
use std::mem;

/// A parsed pattern.
///
/// Trees returned by `parse` only hold lowercase ASCII letters in their
/// literals; nodes built by hand are not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(char),                          // a
    Alternation(Box<Node>, Box<Node>),      // (l+r)
    Concatenation(Box<Node>, Box<Node>),    // (lr)
    Star(Box<Node>),                        // s*
}

impl Node {
    pub fn literal(c: char) -> Node {
        Node::Literal(c)
    }

    pub fn alternation(left: Node, right: Node) -> Node {
        Node::Alternation(Box::new(left), Box::new(right))
    }

    pub fn concatenation(left: Node, right: Node) -> Node {
        Node::Concatenation(Box::new(left), Box::new(right))
    }

    pub fn star(body: Node) -> Node {
        Node::Star(Box::new(body))
    }

    /// Pre-order listing of the tree, one node per line, two spaces of
    /// indentation per level.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_(&mut out, 0);
        out
    }

    fn dump_(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }

        match self {
            Node::Literal(c) => {
                out.push_str("Literal: ");
                out.push(*c);
                out.push('\n');
            }
            Node::Alternation(left, right) => {
                out.push_str("Alternation\n");
                left.dump_(out, depth + 1);
                right.dump_(out, depth + 1);
            }
            Node::Concatenation(left, right) => {
                out.push_str("Concatenation\n");
                left.dump_(out, depth + 1);
                right.dump_(out, depth + 1);
            }
            Node::Star(body) => {
                out.push_str("Star\n");
                body.dump_(out, depth + 1);
            }
        }
    }
}

// Renders the canonical fully-parenthesized pattern; parsing it again
// yields the same tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(c) => write!(f, "{}", c),
            Node::Alternation(left, right) => write!(f, "({}+{})", left, right),
            Node::Concatenation(left, right) => write!(f, "({}{})", left, right),
            Node::Star(body) => match body.as_ref() {
                Node::Star(_) => write!(f, "({})*", body),
                _ => write!(f, "{}*", body),
            },
        }
    }
}

// Dropping a long literal run recursively would overflow the stack, so
// composite children are moved onto a heap stack and dropped one by one.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        take_children(self, &mut stack);
        while let Some(mut node) = stack.pop() {
            take_children(&mut node, &mut stack);
        }
    }
}

fn take_children(node: &mut Node, stack: &mut Vec<Node>) {
    match node {
        Node::Literal(_) => {}
        Node::Alternation(left, right) | Node::Concatenation(left, right) => {
            take_child(left, stack);
            take_child(right, stack);
        }
        Node::Star(body) => take_child(body, stack),
    }
}

fn take_child(child: &mut Box<Node>, stack: &mut Vec<Node>) {
    if !matches!(**child, Node::Literal(_)) {
        stack.push(mem::replace(&mut **child, Node::Literal('a')));
    }
}
