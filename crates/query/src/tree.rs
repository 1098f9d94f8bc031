//! `Tree` handle: a node id paired with the arena it lives in
//!
//! Handles are `Copy` and compare by identity (same arena, same id), never
//! by structure. A handle may be dangling; `tag`/`attributes` then answer
//! `None` and `content` fails with `NotATree`.

use crate::arena::TreeArena;
use crate::error::{NotATree, Result, TreeError};
use crate::types::{Attributes, NodeId, TreeNode};
use std::fmt;
use std::ptr;

#[derive(Clone, Copy)]
pub struct Tree<'a> {
    arena: &'a TreeArena,
    id: NodeId,
}

impl<'a> Tree<'a> {
    pub fn new(arena: &'a TreeArena, id: NodeId) -> Self {
        Self { arena, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn arena(&self) -> &'a TreeArena {
        self.arena
    }

    /// Stored node, `None` if dangling
    pub fn node(&self) -> Option<&'a TreeNode> {
        self.arena.get(self.id).ok()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node(), Some(TreeNode::Leaf(_)))
    }

    pub fn is_node(&self) -> bool {
        matches!(self.node(), Some(TreeNode::Node(_)))
    }

    /// Tag of a node; `None` for leaves and dangling handles
    pub fn tag(&self) -> Option<&'a str> {
        self.node().and_then(TreeNode::tag)
    }

    /// Attribute map of a node; `None` for leaves and dangling handles
    pub fn attributes(&self) -> Option<&'a Attributes> {
        match self.node()? {
            TreeNode::Node(element) => Some(&element.attributes),
            TreeNode::Leaf(_) => None,
        }
    }

    pub fn attribute_value(&self, key: &str) -> Option<&'a str> {
        self.attributes()?.get(key).map(String::as_str)
    }

    /// Scalar of a leaf
    pub fn text(&self) -> Option<&'a str> {
        match self.node()? {
            TreeNode::Leaf(text) => Some(text),
            TreeNode::Node(_) => None,
        }
    }

    /// Children in document order. Leaves have none; a dangling handle is
    /// not a tree at all and fails.
    pub fn content(&self) -> Result<Vec<Tree<'a>>> {
        match self.arena.get(self.id) {
            Ok(TreeNode::Node(element)) => Ok(element
                .children
                .iter()
                .map(|&child| Tree::new(self.arena, child))
                .collect()),
            Ok(TreeNode::Leaf(_)) => Ok(Vec::new()),
            Err(_) => Err(TreeError::NotATree(NotATree::Dangling(self.id))),
        }
    }
}

impl PartialEq for Tree<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl Eq for Tree<'_> {}

impl fmt::Debug for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Some(TreeNode::Node(element)) => write!(f, "Tree({} <{}>)", self.id, element.tag),
            Some(TreeNode::Leaf(text)) => write!(f, "Tree({} {:?})", self.id, text),
            None => write!(f, "Tree({} dangling)", self.id),
        }
    }
}
