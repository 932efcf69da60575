// syntax (like BNF)
//
// expr    = group | literal
// group   = '(' expr '+' expr ')' star ?     (alternation)
//         | '(' expr expr ')' star ?         (concatenation)
//         | '(' expr ')' star ?
// literal = letter * letter star ?           (star binds the last letter only)
// star    = '*'
// letter  = 'a' .. 'z'
//
// Every alternation and concatenation must be parenthesized on its own:
// "(a+b+c)" is rejected, "((a+b)+c)" is accepted.

pub mod ast;
mod error;
mod parser;


pub use ast::Node;
pub use error::ParseError;

use parser::Parser;

/// Parses `pattern` into a tree, consuming all of it.
pub fn parse(pattern: &str) -> Result<Node, ParseError> {
    Parser::parse(pattern)
}
