mod matcher;
mod parser;

pub use matcher::{matches, Regex, StarBound};
pub use parser::{parse, Node, ParseError};
