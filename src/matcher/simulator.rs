use tracing::trace;

use super::suffix::SuffixSet;
use super::StarBound;
use crate::parser::Node;

/// Walks a tree, carrying the set of suffixes the input can still be in.
pub(crate) struct Simulator {
    bound: StarBound,
}

impl Simulator {
    pub fn new(bound: StarBound) -> Self {
        Simulator { bound }
    }

    pub fn execute(&self, node: &Node, input: &str) -> bool {
        let (rest, _) = self.step(node, &SuffixSet::new(input));
        let matched = rest.contains_empty();

        trace!(input, suffixes = rest.len(), matched, "match decided");
        matched
    }

    /// Feeds `set` through `node`, returning the outgoing suffixes and
    /// whether any derivation through `node` succeeded.
    fn step<'a>(&self, node: &Node, set: &SuffixSet<'a>) -> (SuffixSet<'a>, bool) {
        match node {
            Node::Literal(c) => step_literal(*c, set),
            Node::Alternation(left, right) => {
                let (lhs, lhs_ok) = self.step(left, set);
                let (rhs, rhs_ok) = self.step(right, set);
                (lhs.union(rhs), lhs_ok || rhs_ok)
            }
            // literal runs nest to the right, one level per letter
            Node::Concatenation(left, right) => {
                let (mut mid, mut ok) = self.step(left, set);
                let mut next = &**right;
                while let Node::Concatenation(left, right) = next {
                    let (rest, lhs_ok) = self.step(left, &mid);
                    mid = rest;
                    ok = ok && lhs_ok;
                    next = &**right;
                }

                let (rest, rhs_ok) = self.step(next, &mid);
                (rest, ok && rhs_ok)
            }
            Node::Star(body) => (self.step_star(body, set), true),
        }
    }

    // Each successful iteration keeps only the shortest suffix it produced
    // and feeds the grown working set through the body again.
    fn step_star<'a>(&self, body: &Node, set: &SuffixSet<'a>) -> SuffixSet<'a> {
        let mut working = set.clone();
        let mut budget = match self.bound {
            StarBound::Progress => None,
            StarBound::InputLength => Some(set.longest_char_len()),
        };

        while budget != Some(0) {
            let (out, ok) = self.step(body, &working);
            if !ok {
                break;
            }
            let Some(shortest) = out.shortest() else {
                break;
            };

            // an unchanged working set yields the same output forever
            if !working.insert(shortest) {
                break;
            }
            trace!(working = working.len(), shortest, "star iteration");

            if working.is_end(shortest) {
                break;
            }
            budget = budget.map(|n| n - 1);
        }

        working
    }
}

fn step_literal<'a>(c: char, set: &SuffixSet<'a>) -> (SuffixSet<'a>, bool) {
    let mut out = set.empty();
    for (offset, suffix) in set.iter() {
        if suffix.starts_with(c) {
            out.insert(offset + c.len_utf8());
        }
    }

    let ok = !out.is_empty();
    (out, ok)
}
