//! Scope/id resolver and AST builder
//!
//! One forward pass over the tokens. All state lives in a [`Resolver`] owned by a single parse:
//!
//!     nesting         ids of the enclosing paragraph and fragments; shared by every event
//!                     emitted at this level
//!     scope_depth     depth counter keying scoped (all-digit) ids; bumped by every open and
//!                     every paragraph, lowered by every close
//!     scopes          one FIFO queue of pending auto ids per open fragment, plus the root
//!     next_auto       source of auto ids
//!     used            explicit link targets seen so far, with the position of their link
//!
//! Auto ids pair anonymous links with anonymous fragments: `[more]` enqueues a fresh id on the
//! innermost scope and the next `{` of that same scope dequeues the oldest one. Fragments that
//! find the queue empty can never be opened by a link and get an unreferenced id.

use super::error::ParseError;
use crate::ast::{Event, EventKind, Identifier, Nesting};
use crate::inlines::render_inline;
use crate::lexing::{Token, TokenKind};
use crate::location::{Position, SourceLocation};
use std::collections::{HashMap, VecDeque};

pub(crate) struct Resolver<'a> {
    tokens: &'a [Token],
    location: SourceLocation<'a>,
    nesting: Nesting,
    scope_depth: usize,
    scopes: Vec<VecDeque<Identifier>>,
    next_auto: u64,
    next_unreferenced: usize,
    used: HashMap<Identifier, Position>,
    events: Vec<Event>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(tokens: &'a [Token], source: &'a str) -> Self {
        Self {
            tokens,
            location: SourceLocation::new(source),
            nesting: Nesting::new(),
            scope_depth: 0,
            scopes: vec![VecDeque::new()],
            next_auto: 0,
            next_unreferenced: 0,
            used: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Run the forward pass, consuming the resolver.
    pub(crate) fn resolve(mut self) -> Result<Vec<Event>, ParseError> {
        // The root paragraph is implicit and has no id in the nesting chain
        self.emit(
            EventKind::ParagraphOpen {
                opened_by: Identifier::Anonymous,
            },
            Position::default(),
        );

        let tokens = self.tokens;
        for token in tokens {
            let position = self.location.position(token.span.start);
            match &token.kind {
                TokenKind::Paragraph { name } => self.paragraph(name.as_deref(), position)?,
                TokenKind::FragmentOpen { name } => self.fragment_open(name.as_deref(), position),
                TokenKind::FragmentClose => self.fragment_close(position)?,
                TokenKind::RevealLink { caption, target } => {
                    self.reveal_link(caption, target.as_deref(), position)?
                }
                TokenKind::Text => self.text(&token.text, position),
            }
        }

        let end = self.location.end();
        let open_fragments = self.scopes.len() - 1;
        if open_fragments > 0 {
            return Err(ParseError::UnbalancedFragments {
                missing: open_fragments,
                position: end,
            });
        }

        self.nesting = self.nesting.parent();
        self.emit(EventKind::ParagraphClose, end);

        log::debug!("resolved {} events", self.events.len());
        Ok(self.events)
    }

    fn emit(&mut self, kind: EventKind, position: Position) {
        self.events
            .push(Event::new(kind, position, self.nesting.clone()));
    }

    fn paragraph(&mut self, name: Option<&str>, position: Position) -> Result<(), ParseError> {
        if self.scopes.len() > 1 {
            return Err(ParseError::UnexpectedParagraphInFragment { position });
        }

        self.nesting = self.nesting.parent();
        self.emit(EventKind::ParagraphClose, position);

        let id = match name {
            Some(name) => Identifier::Named(name.to_string()),
            None => Identifier::Anonymous,
        };
        log::trace!("{}: paragraph {:?}", position, id);

        self.nesting = self.nesting.push(id.clone());
        self.emit(EventKind::ParagraphOpen { opened_by: id }, position);
        self.scope_depth += 1;
        Ok(())
    }

    fn fragment_open(&mut self, name: Option<&str>, position: Position) {
        let id = match name {
            Some(name) => Identifier::from_name(name, self.scope_depth),
            None => {
                let pending = self.current_scope().pop_front();
                pending.unwrap_or_else(|| {
                    let id = Identifier::Unreferenced(self.next_unreferenced);
                    self.next_unreferenced += 1;
                    id
                })
            }
        };
        log::trace!("{}: fragment open {:?}", position, id);

        self.nesting = self.nesting.push(id.clone());
        self.emit(EventKind::FragmentOpen { opened_by: id }, position);
        self.scopes.push(VecDeque::new());
        self.scope_depth += 1;
    }

    fn fragment_close(&mut self, position: Position) -> Result<(), ParseError> {
        if self.scopes.len() == 1 {
            return Err(ParseError::UnmatchedFragmentClose { position });
        }

        self.nesting = self.nesting.parent();
        self.scopes.pop();
        self.scope_depth -= 1;
        log::trace!("{}: fragment close", position);

        self.emit(EventKind::FragmentClose, position);
        Ok(())
    }

    fn reveal_link(
        &mut self,
        caption: &str,
        target: Option<&str>,
        position: Position,
    ) -> Result<(), ParseError> {
        let opens = match target {
            Some(name) => {
                let id = Identifier::from_name(name, self.scope_depth);
                if let Some(first) = self.used.get(&id) {
                    return Err(ParseError::DuplicateLinkTarget {
                        target: id.to_string(),
                        first: *first,
                        position,
                    });
                }
                self.used.insert(id.clone(), position);
                id
            }
            None => {
                let id = Identifier::Auto(self.next_auto);
                self.next_auto += 1;
                self.current_scope().push_back(id.clone());
                id
            }
        };
        log::trace!("{}: reveal link to {:?}", position, opens);

        self.emit(
            EventKind::RevealLink {
                opens,
                caption: render_inline(caption),
                original: caption.to_string(),
                descendants: Vec::new(),
            },
            position,
        );
        Ok(())
    }

    fn text(&mut self, text: &str, position: Position) {
        self.emit(
            EventKind::Text {
                html: render_inline(text),
                original: text.to_string(),
            },
            position,
        );
    }

    fn current_scope(&mut self) -> &mut VecDeque<Identifier> {
        // The root scope is never popped: closing it is an error raised before the pop
        let innermost = self.scopes.len() - 1;
        &mut self.scopes[innermost]
    }
}
