//! Arena-based tree storage
//!
//! All nodes of a tree live in one `Vec`, children refer to each other by
//! 4-byte index. Queries never touch the arena mutably.
//!
//! ## Memory Layout
//!
//! ```text
//! Arena: Vec<TreeNode>
//!        [Node0][Node1][Node2]...
//!         ↑ 4-byte index, not 8-byte pointer
//! ```
//!
//! Child ids are not validated when stored. That is what lets an arena hold
//! shared subtrees, cycles and dangling ids, and why the query layer has to
//! detect all three.

use crate::error::{NotATree, Result, TreeError};
use crate::tree::Tree;
use crate::types::{Attributes, Element, NodeId, TreeNode};
use serde::{Deserialize, Serialize};

/// Arena allocator for tree nodes
///
/// Serializes as its node table plus root id, so a parsed page can be
/// stored and queried again without re-parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeArena {
    /// All nodes stored sequentially
    nodes: Vec<TreeNode>,

    /// Root node ID (if set)
    root_id: Option<NodeId>,
}

impl TreeArena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Create arena with specific capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root_id: None,
        }
    }

    fn push(&mut self, node: TreeNode) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        node_id
    }

    /// Add a text leaf, returns its ID
    pub fn add_leaf(&mut self, text: impl Into<String>) -> NodeId {
        self.push(TreeNode::Leaf(text.into()))
    }

    /// Add an internal node, returns its ID
    ///
    /// `children` are stored as given, without checking that they exist.
    pub fn add_node<A, K, V, C>(
        &mut self,
        tag: impl Into<String>,
        attributes: A,
        children: C,
    ) -> NodeId
    where
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        C: IntoIterator<Item = NodeId>,
    {
        let mut element = Element::new(tag);
        element.attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<Attributes>();
        element.children = children.into_iter().collect();
        self.push(TreeNode::Node(element))
    }

    /// Append `child` to the children of `parent`
    ///
    /// The child id is not checked; appending an ancestor creates a cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        match self.get_mut(parent)? {
            TreeNode::Node(element) => {
                element.children.push(child);
                Ok(())
            }
            other => Err(TreeError::InvalidNodeType {
                expected: "node".to_string(),
                actual: other.kind().to_string(),
            }),
        }
    }

    /// Get node by ID (immutable)
    pub fn get(&self, node_id: NodeId) -> Result<&TreeNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(TreeError::NotATree(NotATree::Dangling(node_id)))
    }

    fn get_mut(&mut self, node_id: NodeId) -> Result<&mut TreeNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(TreeError::NotATree(NotATree::Dangling(node_id)))
    }

    /// Handle for `node_id`. The handle may be dangling; accessors on it
    /// report that rather than this call.
    pub fn tree(&self, node_id: NodeId) -> Tree<'_> {
        Tree::new(self, node_id)
    }

    /// Set root node
    pub fn set_root(&mut self, node_id: NodeId) -> Result<()> {
        // Verify node exists
        self.get(node_id)?;
        self.root_id = Some(node_id);
        Ok(())
    }

    /// Get root node ID
    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    /// Get root as a tree handle
    pub fn root(&self) -> Result<Tree<'_>> {
        let root_id = self.root_id.ok_or_else(|| TreeError::InvalidNodeType {
            expected: "root node".to_string(),
            actual: "no root set".to_string(),
        })?;
        Ok(self.tree(root_id))
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear arena (reuse allocation)
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root_id = None;
    }
}
