//! Tokenizer
//!
//! This module turns a source string into the flat token sequence the resolver consumes.
//!
//! Structure:
//!     Tokenization happens in two steps:
//!     1. Splitting. Three structural patterns are applied in a fixed order: bracket delimiters
//!        (`{`, `{name:`, `}`), then paragraph markers (`>name `), then reveal links
//!        (`[caption]#name`). Each pass splits every piece produced by the previous one,
//!        keeping the matched delimiters as pieces of their own and discarding empty pieces.
//!     2. Classification. Each piece is run through the [`Lexeme`] logos grammar; a piece that
//!        is exactly one structural lexeme becomes that marker, anything else is literal text.
//!
//!     The order of the passes is what gives the language its precedence rules: a `>` inside
//!     link brackets starts a paragraph and breaks the link, and braces always win over links.
//!
//!     No pairing of brackets happens here. Tokens only mark lexical boundaries; structural
//!     matching is the resolver's job.
//!
//! Invariant: concatenating the text of all tokens yields the source, byte for byte.

pub mod lexemes;

use lexemes::{Lexeme, LinkParts};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Bracket delimiters: `{`, `{name:` and `}`
static BRACKET_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(?:[A-Za-z0-9\x{C0}-\x{FF}_'\-]+:)?|\}").unwrap());

/// Paragraph markers: `>` + optional name + at most one whitespace character
static PARAGRAPH_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">[A-Za-z0-9\x{C0}-\x{FF}_'\-]*\s?").unwrap());

/// Reveal links: `[caption]` + optional `#name`
static LINK_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\](?:#[A-Za-z0-9\x{C0}-\x{FF}_'\-]+)?").unwrap());

/// The kind of a token, with the names and captions it was written with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Paragraph { name: Option<String> },
    FragmentOpen { name: Option<String> },
    FragmentClose,
    RevealLink {
        caption: String,
        target: Option<String>,
    },
    Text,
}

impl TokenKind {
    pub fn is_text(&self) -> bool {
        matches!(self, TokenKind::Text)
    }
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Paragraph(name) => TokenKind::Paragraph {
                name: non_empty(name),
            },
            Lexeme::FragmentOpen => TokenKind::FragmentOpen { name: None },
            Lexeme::NamedFragmentOpen(name) => TokenKind::FragmentOpen { name: Some(name) },
            Lexeme::FragmentClose => TokenKind::FragmentClose,
            Lexeme::RevealLink(LinkParts { caption, target }) => {
                TokenKind::RevealLink { caption, target }
            }
        }
    }
}

fn non_empty(name: String) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// A classified piece of the source, with its byte span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

/// Tokenize a source string.
///
/// The result is in source order and never contains empty tokens; an empty source yields an
/// empty sequence.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut pieces = vec![source];
    for pattern in [&*BRACKET_SPLIT, &*PARAGRAPH_SPLIT, &*LINK_SPLIT] {
        pieces = split_keeping_delimiters(pieces, pattern);
    }

    let mut offset = 0;
    let tokens: Vec<Token> = pieces
        .into_iter()
        .map(|piece| {
            let span = offset..offset + piece.len();
            offset = span.end;
            let kind = Lexeme::classify(piece)
                .map(TokenKind::from)
                .unwrap_or(TokenKind::Text);
            Token {
                kind,
                text: piece.to_string(),
                span,
            }
        })
        .collect();

    log::debug!(
        "tokenized {} bytes into {} tokens",
        source.len(),
        tokens.len()
    );
    tokens
}

/// Rebuild the source text from a token sequence.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}

/// Split every piece on `pattern`, keeping the matches as their own pieces.
fn split_keeping_delimiters<'s>(pieces: Vec<&'s str>, pattern: &Regex) -> Vec<&'s str> {
    let mut out = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let mut last = 0;
        for found in pattern.find_iter(piece) {
            if found.start() > last {
                out.push(&piece[last..found.start()]);
            }
            out.push(found.as_str());
            last = found.end();
        }
        if last < piece.len() {
            out.push(&piece[last..]);
        }
    }
    out
}
