//! AST events
//!
//! The AST is a flat, strictly ordered sequence of events. Structure is carried by open/close
//! pairs and by the nesting chain every event records: the ids of all fragments (and the
//! paragraph) enclosing it, outermost first.

use super::identifier::Identifier;
use super::nesting::Nesting;
use crate::location::Position;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub position: Position,
    pub nesting: Nesting,
    #[serde(flatten)]
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EventKind {
    ParagraphOpen {
        opened_by: Identifier,
    },
    ParagraphClose,
    FragmentOpen {
        opened_by: Identifier,
    },
    FragmentClose,
    RevealLink {
        opens: Identifier,
        /// Rendered caption html
        caption: String,
        /// Caption as written
        original: String,
        /// Filled in by the closure pass
        descendants: Vec<Identifier>,
    },
    Text {
        html: String,
        original: String,
    },
}

impl Event {
    pub fn new(kind: EventKind, position: Position, nesting: Nesting) -> Self {
        Self {
            position,
            nesting,
            kind,
        }
    }

    /// The id an open event introduces.
    pub fn opened_by(&self) -> Option<&Identifier> {
        match &self.kind {
            EventKind::ParagraphOpen { opened_by } | EventKind::FragmentOpen { opened_by } => {
                Some(opened_by)
            }
            _ => None,
        }
    }

    /// The target of a reveal link.
    pub fn opens(&self) -> Option<&Identifier> {
        match &self.kind {
            EventKind::RevealLink { opens, .. } => Some(opens),
            _ => None,
        }
    }

    pub fn descendants(&self) -> Option<&[Identifier]> {
        match &self.kind {
            EventKind::RevealLink { descendants, .. } => Some(descendants),
            _ => None,
        }
    }

    /// Whether `id` is one of this event's ancestors.
    pub fn is_nested_under(&self, id: &Identifier) -> bool {
        self.nesting.contains(id)
    }

    pub fn is_fragment_open(&self) -> bool {
        matches!(self.kind, EventKind::FragmentOpen { .. })
    }

    pub fn is_reveal_link(&self) -> bool {
        matches!(self.kind, EventKind::RevealLink { .. })
    }
}
