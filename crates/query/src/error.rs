//! Error types for tree queries
//!
//! Flat hierarchy again. `TreeError` is what the arena-backed API returns;
//! `CircularStructure` and `CardinalityError` are the generic engine errors,
//! usable over any node type without pulling in the arena.

use crate::tree::Tree;
use crate::types::NodeId;
use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Not a tree: {0}")]
    NotATree(NotATree),

    #[error("Circular structure: node {node} reached twice in one traversal")]
    CircularStructure { node: NodeId },

    #[error("Expected exactly {expected} element, found {actual}")]
    Cardinality {
        expected: usize,
        actual: usize,
        items: Vec<NodeId>,
        /// Node whose content was asserted, when the sequence came from one
        parent: Option<NodeId>,
    },

    #[error("Invalid node type: expected {expected}, got {actual}")]
    InvalidNodeType { expected: String, actual: String },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A value offered as a tree that is neither a Leaf nor a Node
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotATree {
    /// Id with no node behind it in the arena
    #[error("node {0} does not exist")]
    Dangling(NodeId),
    /// JSON value of the wrong shape
    #[error("unrecognized JSON shape {0}")]
    Json(Value),
}

/// A node identity was seen twice during one `select` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Circular structure: {node:?} reached twice")]
pub struct CircularStructure<N> {
    pub node: N,
}

/// A sequence asserted to hold exactly one element did not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected exactly {expected} element, found {actual}: {items:?}")]
pub struct CardinalityError<T> {
    pub expected: usize,
    pub actual: usize,
    pub items: Vec<T>,
}

impl From<CircularStructure<Tree<'_>>> for TreeError {
    fn from(err: CircularStructure<Tree<'_>>) -> Self {
        TreeError::CircularStructure {
            node: err.node.id(),
        }
    }
}

impl From<CardinalityError<Tree<'_>>> for TreeError {
    fn from(err: CardinalityError<Tree<'_>>) -> Self {
        TreeError::Cardinality {
            expected: err.expected,
            actual: err.actual,
            items: err.items.iter().map(Tree::id).collect(),
            parent: None,
        }
    }
}
