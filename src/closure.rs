//! Descendant closure
//!
//!     When a reveal link activates, the renderer must also open everything that lives under
//!     the link's target, and everything those things link to. This pass computes that set once
//!     per link, after the full event sequence exists.
//!
//!     The pass first builds a child index over the whole document. Every event hangs off the
//!     innermost id of its chain, and contributes:
//!
//!     - for a fragment or paragraph open, its `opened_by` id, both under itself and under
//!       its parent, and
//!     - for a reveal link, its `opens` id.
//!
//!     An event is nested under `X` exactly when its chain walks up to `X` through these
//!     edges, so the closure of a link targeting `X` is what the index reaches from `X`. The
//!     target itself is included when some fragment or paragraph is opened by it. Each id is
//!     visited once, so the walk terminates even if links point at each other, and the whole
//!     pass is linear in the size of the index plus the size of its output.
//!
//!     Before any of that, each link's own nesting chain is checked: a link enclosed by its
//!     target would reveal itself, which is rejected as a recursive link.

use crate::ast::{Event, EventKind, Identifier, Nesting};
use crate::parsing::ParseError;
use std::collections::{HashMap, HashSet};

/// Ids contributed directly under each id
type ChildIndex<'e> = HashMap<&'e Identifier, Vec<&'e Identifier>>;

/// Compute and store the descendants of every reveal link.
pub fn attach_descendants(events: &mut [Event]) -> Result<(), ParseError> {
    check_recursive_links(events)?;

    let index = child_index(events);
    let closures: Vec<(usize, Vec<Identifier>)> = events
        .iter()
        .enumerate()
        .filter_map(|(slot, event)| event.opens().map(|target| (slot, walk(&index, target))))
        .collect();

    log::debug!(
        "computed descendants for {} reveal links over {} indexed ids",
        closures.len(),
        index.len()
    );

    for (slot, closure) in closures {
        if let EventKind::RevealLink { descendants, .. } = &mut events[slot].kind {
            *descendants = closure;
        }
    }
    Ok(())
}

/// All ids that open along with `target`, in discovery order.
pub fn descendants_of(events: &[Event], target: &Identifier) -> Vec<Identifier> {
    walk(&child_index(events), target)
}

fn child_index(events: &[Event]) -> ChildIndex<'_> {
    let mut index = ChildIndex::new();

    for event in events {
        let Some(parent) = event.nesting.innermost() else {
            // Only the root paragraph sits outside every chain
            continue;
        };
        match &event.kind {
            EventKind::ParagraphOpen { opened_by } | EventKind::FragmentOpen { opened_by } => {
                // An open event is the innermost entry of its own chain
                index.entry(parent).or_default().push(opened_by);
                if let Some(outer) = event.nesting.ancestors().nth(1) {
                    index.entry(outer).or_default().push(opened_by);
                }
            }
            EventKind::RevealLink { opens, .. } => {
                index.entry(parent).or_default().push(opens);
            }
            _ => {}
        }
    }
    index
}

/// Depth-first walk of the index from `target`, in document order at every level.
fn walk(index: &ChildIndex<'_>, target: &Identifier) -> Vec<Identifier> {
    let mut found = Vec::new();
    let mut visited: HashSet<&Identifier> = HashSet::new();
    let mut stack: Vec<&Identifier> = Vec::new();

    let children = |id: &Identifier| index.get(id).map(Vec::as_slice).unwrap_or_default();
    stack.extend(children(target).iter().rev());

    while let Some(current) = stack.pop() {
        if visited.insert(current) {
            found.push(current.clone());
            stack.extend(children(current).iter().rev());
        }
    }

    log::trace!("descendants of {:?}: {} ids", target, found.len());
    found
}

/// Reject links nested under their own target.
///
/// The ids on the current chain are tracked while replaying the events in order. Each event's
/// chain differs from the previous one by at most one id, so every step is constant time.
fn check_recursive_links(events: &[Event]) -> Result<(), ParseError> {
    let mut open: HashMap<&Identifier, usize> = HashMap::new();
    let mut previous = &Nesting::new();

    for event in events {
        let current = &event.nesting;
        if !current.same_node(previous) {
            if current.depth() <= previous.depth() {
                if let Some(left) = previous.innermost() {
                    if let Some(count) = open.get_mut(left) {
                        *count -= 1;
                    }
                }
            }
            if current.depth() >= previous.depth() {
                if let Some(entered) = current.innermost() {
                    *open.entry(entered).or_default() += 1;
                }
            }
            previous = current;
        }

        if let Some(target) = event.opens() {
            if open.get(target).is_some_and(|count| *count > 0) {
                return Err(ParseError::RecursiveFragmentLink {
                    target: target.to_string(),
                    position: event.position,
                });
            }
        }
    }
    Ok(())
}
