//! AST for the russiandoll format
//!
//!     The document is not a tree but a flat event sequence (see [event]). Open and close events
//!     pair up the way tags do, and every event carries its nesting chain, which is all the
//!     closure pass and the html serializer need.
//!
//!     A [`Document`] is only ever built by [`crate::parsing::parse`], after the resolver and
//!     the closure pass have both succeeded. It is immutable afterwards.

pub mod event;
pub mod identifier;
pub mod nesting;

pub use event::{Event, EventKind};
pub use identifier::Identifier;
pub use nesting::Nesting;

use crate::lexing::Token;
use serde::Serialize;

/// A compiled document: its tokens and the event sequence built from them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    #[serde(skip)]
    tokens: Vec<Token>,
    events: Vec<Event>,
}

impl Document {
    pub(crate) fn new(tokens: Vec<Token>, events: Vec<Event>) -> Self {
        Self { tokens, events }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn reveal_links(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|event| event.is_reveal_link())
    }

    /// All fragment open events, in document order.
    pub fn fragments(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|event| event.is_fragment_open())
    }

    /// The link that explicitly or implicitly targets `id`, if any.
    pub fn link_to(&self, id: &Identifier) -> Option<&Event> {
        self.reveal_links().find(|event| event.opens() == Some(id))
    }
}
