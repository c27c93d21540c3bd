//! Nesting chains
//!
//!     A chain is the list of ids enclosing an event, outermost first. Consecutive events share
//!     almost all of it, so chains are stored as parent-linked nodes: pushing an id creates one
//!     node pointing at the chain it extends, and every event holds a pointer to its innermost
//!     node. A document of depth `d` costs `O(d)` nodes in total instead of `O(d)` ids per event.
//!
//!     The flat list only materializes for serialization and for [`Nesting::to_vec`].

use super::identifier::Identifier;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Ordered ancestor ids of an event
#[derive(Clone, Default)]
pub struct Nesting {
    innermost: Option<Arc<Node>>,
}

struct Node {
    id: Identifier,
    parent: Nesting,
    depth: usize,
}

impl Nesting {
    /// The empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain extending this one by `id`. `self` is left untouched and shared.
    pub fn push(&self, id: Identifier) -> Nesting {
        Nesting {
            innermost: Some(Arc::new(Node {
                id,
                parent: self.clone(),
                depth: self.depth() + 1,
            })),
        }
    }

    /// This chain without its innermost id. The empty chain is its own parent.
    pub fn parent(&self) -> Nesting {
        self.innermost
            .as_ref()
            .map(|node| node.parent.clone())
            .unwrap_or_default()
    }

    pub fn innermost(&self) -> Option<&Identifier> {
        self.innermost.as_ref().map(|node| &node.id)
    }

    pub fn depth(&self) -> usize {
        self.innermost.as_ref().map_or(0, |node| node.depth)
    }

    pub fn is_empty(&self) -> bool {
        self.innermost.is_none()
    }

    /// Ids from the innermost outwards.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.innermost.as_deref(),
        }
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.ancestors().any(|ancestor| ancestor == id)
    }

    /// The chain as a list, outermost first.
    pub fn to_vec(&self) -> Vec<Identifier> {
        let mut ids: Vec<Identifier> = self.ancestors().cloned().collect();
        ids.reverse();
        ids
    }

    /// Whether both chains are the same node, not merely equal.
    pub(crate) fn same_node(&self, other: &Nesting) -> bool {
        match (&self.innermost, &other.innermost) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

pub struct Ancestors<'n> {
    next: Option<&'n Node>,
}

impl<'n> Iterator for Ancestors<'n> {
    type Item = &'n Identifier;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.innermost.as_deref();
        Some(&node.id)
    }
}

impl FromIterator<Identifier> for Nesting {
    /// Build a chain from ids listed outermost first.
    fn from_iter<I: IntoIterator<Item = Identifier>>(ids: I) -> Self {
        ids.into_iter()
            .fold(Nesting::new(), |chain, id| chain.push(id))
    }
}

// Long chains would otherwise drop recursively, one stack frame per node
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.parent.innermost.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.innermost.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for Nesting {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other)
            || (self.depth() == other.depth() && self.ancestors().eq(other.ancestors()))
    }
}

impl Eq for Nesting {}

impl fmt::Debug for Nesting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

impl Serialize for Nesting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_vec())
    }
}
