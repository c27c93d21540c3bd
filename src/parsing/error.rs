//! Parse errors
//!
//! Every structural violation aborts the parse at the first occurrence. Each variant carries
//! the position it was detected at.

use crate::location::Position;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input bytes are not valid UTF-8. Points at the first invalid byte.
    InvalidInput { reason: String, position: Position },
    /// A paragraph marker inside an open fragment.
    UnexpectedParagraphInFragment { position: Position },
    /// A `}` with no open fragment.
    UnmatchedFragmentClose { position: Position },
    /// A second explicit link to the same id.
    DuplicateLinkTarget {
        target: String,
        first: Position,
        position: Position,
    },
    /// End of input with fragments still open.
    UnbalancedFragments { missing: usize, position: Position },
    /// A link whose target encloses the link itself.
    RecursiveFragmentLink { target: String, position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::InvalidInput { position, .. }
            | ParseError::UnexpectedParagraphInFragment { position }
            | ParseError::UnmatchedFragmentClose { position }
            | ParseError::DuplicateLinkTarget { position, .. }
            | ParseError::UnbalancedFragments { position, .. }
            | ParseError::RecursiveFragmentLink { position, .. } => *position,
        }
    }

    pub fn line(&self) -> usize {
        self.position().line
    }

    pub fn column(&self) -> usize {
        self.position().column
    }

    /// The diagnostic message, without position.
    pub fn message(&self) -> String {
        match self {
            ParseError::InvalidInput { reason, .. } => {
                format!("Source must be valid UTF-8 text: {}", reason)
            }
            ParseError::UnexpectedParagraphInFragment { .. } => {
                "Unexpected paragraph in fragment".to_string()
            }
            ParseError::UnmatchedFragmentClose { .. } => "Unexpected fragment closing".to_string(),
            ParseError::DuplicateLinkTarget { target, first, .. } => {
                format!("Fragment \"{}\" was already opened at {}", target, first)
            }
            ParseError::UnbalancedFragments { missing, .. } => format!(
                "Missing {} closing curly bracket{}",
                missing,
                if *missing == 1 { "" } else { "s" }
            ),
            ParseError::RecursiveFragmentLink { target, .. } => {
                format!("Recursive fragment link \"{}\"", target)
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at {}: {}", self.position(), self.message())
    }
}

impl std::error::Error for ParseError {}
