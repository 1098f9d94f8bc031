//! Build a tree from nested JSON
//!
//! Input format mirrors the node triple:
//! ```json
//! ["p", {"class": "intro"}, ["Hello, ", ["b", {}, ["world"]], "!"]]
//! ```
//! A JSON string is a leaf, a three-element array `[tag, attributes,
//! children]` is a node. Anything else is rejected as `NotATree`, carrying
//! the offending value.

use crate::arena::TreeArena;
use crate::error::{NotATree, Result, TreeError};
use crate::types::{Attributes, NodeId};
use serde_json::Value;

impl TreeArena {
    /// Parse a JSON value into a new arena whose root is the value itself
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut arena = TreeArena::new();
        let root_id = arena.add_json(value)?;
        arena.set_root(root_id)?;
        Ok(arena)
    }

    /// Same as `from_json`, from JSON text
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }

    /// Add a JSON tree, parent before children
    ///
    /// Uses an explicit stack: a `Value` built in code is not bound by the
    /// parser's nesting limit.
    fn add_json(&mut self, value: &Value) -> Result<NodeId> {
        let (root_id, children) = self.add_json_node(value)?;
        let mut stack: Vec<(&Value, NodeId)> =
            children.iter().rev().map(|child| (child, root_id)).collect();

        while let Some((value, parent)) = stack.pop() {
            let (node_id, children) = self.add_json_node(value)?;
            self.append_child(parent, node_id)?;

            // Push children in reverse order (so they're visited left-to-right)
            stack.extend(children.iter().rev().map(|child| (child, node_id)));
        }

        Ok(root_id)
    }

    /// Add one JSON node without its children, returning the children to add
    fn add_json_node<'v>(&mut self, value: &'v Value) -> Result<(NodeId, &'v [Value])> {
        match value {
            Value::String(text) => Ok((self.add_leaf(text.as_str()), &[] as &[Value])),
            Value::Array(parts) => match parts.as_slice() {
                [Value::String(tag), Value::Object(attrs), Value::Array(children)] => {
                    let attributes = attrs
                        .iter()
                        .map(|(key, value)| match value {
                            Value::String(s) => Ok((key.clone(), s.clone())),
                            _ => Err(not_a_tree(value)),
                        })
                        .collect::<Result<Attributes>>()?;

                    let node_id = self.add_node(tag.as_str(), attributes, []);
                    Ok((node_id, children.as_slice()))
                }
                _ => Err(not_a_tree(value)),
            },
            _ => Err(not_a_tree(value)),
        }
    }
}

fn not_a_tree(value: &Value) -> TreeError {
    TreeError::NotATree(NotATree::Json(value.clone()))
}
