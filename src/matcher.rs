use self::simulator::Simulator;
use crate::parser::{self, Node, ParseError};

mod simulator;
mod suffix;


/// When a `Star` stops repeating its body.
///
/// Repetition always ends when the body fails, when the whole input has been
/// consumed, or when an iteration adds no new suffix to the working set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StarBound {
    /// No further cap. The working set can only grow by one suffix per
    /// input character, so repetition still terminates.
    #[default]
    Progress,
    /// Run at most as many iterations as the longest incoming suffix has
    /// characters.
    InputLength,
}

/// Whether `tree` consumes all of `input`.
pub fn matches(tree: &Node, input: &str) -> bool {
    Simulator::new(StarBound::default()).execute(tree, input)
}

/// A parsed pattern, ready to be matched against any number of inputs.
#[derive(Debug, Clone)]
pub struct Regex {
    tree: Node,
    bound: StarBound,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Regex, ParseError> {
        let tree = parser::parse(pattern)?;

        Ok(Regex {
            tree,
            bound: StarBound::default(),
        })
    }

    pub fn with_star_bound(mut self, bound: StarBound) -> Regex {
        self.bound = bound;
        self
    }

    pub fn is_match(&self, input: &str) -> bool {
        Simulator::new(self.bound).execute(&self.tree, input)
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn dump(&self) -> String {
        self.tree.dump()
    }
}
