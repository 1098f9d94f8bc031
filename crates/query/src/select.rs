//! Generic predicate selection
//!
//! Depth-first, pre-order, left-to-right. The shape of the tree is whatever
//! `descend` says it is, so the same walk serves the arena, borrowed structs
//! and `Rc` graphs alike.
//!
//! Rules:
//! - a node that matches is emitted and not descended into (outermost match
//!   wins, results never nest)
//! - every node identity may be reached once per call; a second arrival,
//!   whether through a cycle or a shared subtree, aborts with
//!   `CircularStructure`
//! - any error aborts the call, matches found so far are dropped
//!
//! Iterative with an explicit stack, so tree depth is bounded by heap, not
//! by the native stack.

use crate::arena::TreeArena;
use crate::error::CircularStructure;
use crate::tree::Tree;
use crate::types::NodeId;
use ahash::AHashSet;
use std::hash::Hash;
use std::rc::Rc;

/// Identity of a node handle, as opposed to its structure
pub trait Identity {
    type Key: Eq + Hash;

    fn identity(&self) -> Self::Key;
}

impl<T: ?Sized> Identity for &T {
    type Key = *const T;

    fn identity(&self) -> *const T {
        *self as *const T
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    type Key = *const T;

    fn identity(&self) -> *const T {
        Rc::as_ptr(self)
    }
}

impl Identity for Tree<'_> {
    type Key = (*const TreeArena, NodeId);

    fn identity(&self) -> Self::Key {
        (self.arena() as *const TreeArena, self.id())
    }
}

/// Select every outermost node under `root` (inclusive) for which
/// `predicate` holds, in document order.
///
/// `descend` yields the children of a non-matching node. Its errors are
/// returned unchanged; a revisited node is reported through
/// `E: From<CircularStructure<N>>`.
pub fn select<N, P, D, I, E>(root: N, mut predicate: P, mut descend: D) -> Result<Vec<N>, E>
where
    N: Identity,
    P: FnMut(&N) -> bool,
    D: FnMut(&N) -> Result<I, E>,
    I: IntoIterator<Item = N>,
    E: From<CircularStructure<N>>,
{
    let mut visited = AHashSet::new();
    let mut matches = Vec::new();
    let mut stack = vec![root];
    let mut children = Vec::new();

    while let Some(node) = stack.pop() {
        if !visited.insert(node.identity()) {
            tracing::debug!(
                visited = visited.len(),
                "[select] Node reached twice, aborting traversal"
            );
            return Err(CircularStructure { node }.into());
        }

        if predicate(&node) {
            matches.push(node);
            continue;
        }

        // Push children in reverse order (so they're visited left-to-right)
        children.extend(descend(&node)?);
        stack.extend(children.drain(..).rev());
    }

    tracing::trace!(
        matches = matches.len(),
        visited = visited.len(),
        "[select] Traversal complete"
    );

    Ok(matches)
}
