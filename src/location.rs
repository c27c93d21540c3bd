//! Source positions
//!
//!     Positions are only used for diagnostics and for the debug attributes of the html output;
//!     they never influence parsing decisions.
//!
//!     Two ways of getting one:
//!
//!     - [`SourceLocation`] precomputes line starts once and maps any byte offset in
//!       O(log n). The resolver uses it for every event it emits.
//!     - [`resolve_position`] works from the token sequence alone, summing the text of all
//!       tokens before the requested one. It is O(n) per call and the resolver never calls it;
//!       it is the plain definition of a token's position, kept public so callers holding only
//!       tokens can locate them and so [`SourceLocation`] can be checked against it.
//!
//!     Lines and columns are 1-based; columns count characters, not bytes.

use crate::lexing::Token;
use serde::Serialize;
use std::fmt;

/// A line/column position in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The `L,C` form used by the `data-source-pos` attribute.
    pub fn to_attr(&self) -> String {
        format!("{},{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets of one source string to positions
#[derive(Debug, Clone)]
pub struct SourceLocation<'s> {
    source: &'s str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'s> SourceLocation<'s> {
    pub fn new(source: &'s str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a position.
    ///
    /// Offsets past the end of the source resolve to the position right after the last
    /// character.
    pub fn position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..byte_offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(byte_offset - line_start);

        Position::new(line + 1, column + 1)
    }

    /// Position right after the last character.
    pub fn end(&self) -> Position {
        self.position(self.source.len())
    }
}

/// Position of the token at `index`, computed from the lengths of the tokens before it.
///
/// An index equal to `tokens.len()` yields the end-of-input position. [`SourceLocation::position`]
/// must return the same value for `tokens[index].span.start`; the unit tests below and the
/// property tests in `tests/properties_proptest.rs` hold it to that.
pub fn resolve_position(tokens: &[Token], index: usize) -> Position {
    let mut line = 1;
    let mut column = 1;

    for token in tokens.iter().take(index) {
        for ch in token.text.chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
    }

    Position::new(line, column)
}
