//! Parsing
//!
//!     Parsing turns a source string into a finished [`Document`]:
//!
//!     1. [`tokenize`](crate::lexing::tokenize) the source.
//!     2. Run the [resolver] forward pass: resolve every id, build the event sequence, check
//!        bracket balance and duplicate link targets.
//!     3. Run the [closure](crate::closure) pass: attach descendant sets to every reveal link.
//!
//!     Any violation aborts with a [`ParseError`]; no partial document is ever returned.

pub mod error;
pub(crate) mod resolver;

pub use error::ParseError;

use crate::ast::Document;
use crate::closure::attach_descendants;
use crate::lexing::tokenize;
use crate::location::SourceLocation;
use resolver::Resolver;

/// Parse a source string into a document.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let tokens = tokenize(source);
    let mut events = Resolver::new(&tokens, source).resolve()?;
    attach_descendants(&mut events)?;
    Ok(Document::new(tokens, events))
}

/// Parse raw bytes, which must be UTF-8 text.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document, ParseError> {
    parse(decode(bytes)?)
}

/// Validate that `bytes` is UTF-8 text.
pub(crate) fn decode(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|error| {
        let valid = std::str::from_utf8(&bytes[..error.valid_up_to()]).unwrap_or_default();
        ParseError::InvalidInput {
            reason: error.to_string(),
            position: SourceLocation::new(valid).end(),
        }
    })
}
