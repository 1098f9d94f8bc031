//! Core type definitions
//!
//! Key design principles:
//! 1. Use u32 for indices (4 bytes vs 8 bytes pointer)
//! 2. One discriminant decides leaf vs node, nothing else does
//! 3. Use SmallVec for child lists (most nodes have few children)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Node identifier (index into arena)
pub type NodeId = u32;

/// Attribute mapping of a node. Keys are unique, order is irrelevant.
pub type Attributes = HashMap<String, String>;

/// A stored tree value: terminal text or an internal node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeNode {
    Leaf(String),
    Node(Element),
}

/// Internal node: tag, attributes and ordered children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attributes: Attributes,
    /// Stored unchecked; an id may be dangling, shared or point upwards
    pub children: SmallVec<[NodeId; 4]>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: SmallVec::new(),
        }
    }

    /// Get attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    /// Tag name, for nodes only
    pub fn tag(&self) -> Option<&str> {
        match self {
            TreeNode::Node(element) => Some(&element.tag),
            TreeNode::Leaf(_) => None,
        }
    }

    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            TreeNode::Leaf(_) => "leaf",
            TreeNode::Node(_) => "node",
        }
    }
}
