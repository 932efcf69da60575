use thiserror::Error;

/// Failure to parse a pattern. Positions are character offsets into the
/// pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a symbol at {position}, got end of pattern")]
    UnexpectedEnd { position: usize },

    #[error("invalid character '{ch}' at {position}")]
    InvalidChar { ch: char, position: usize },

    #[error("unexpected '{ch}' at {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("expected ')' at {position}, got {}", describe(.found))]
    ExpectedCloseParen { found: Option<char>, position: usize },

    #[error("unparsed input at {position}: {rest}")]
    TrailingInput { rest: String, position: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedEnd { position }
            | ParseError::InvalidChar { position, .. }
            | ParseError::UnexpectedChar { position, .. }
            | ParseError::ExpectedCloseParen { position, .. }
            | ParseError::TrailingInput { position, .. } => *position,
        }
    }
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{}'", c),
        None => "end of pattern".to_owned(),
    }
}
