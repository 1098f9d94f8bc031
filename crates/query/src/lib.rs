//! Tree Query Library
//!
//! Cycle-safe predicate selection over parse trees.
//!
//! ## Core Design
//!
//! ```text
//! HTML / JSON → TreeArena (owned) → Tree<'a> handle → select → Vec<Tree<'a>>
//!                    ↓
//!              NodeId (u32)
//! ```
//!
//! `select` itself knows nothing about the arena: it walks any handle type
//! with an `Identity`, using a caller-supplied `descend` function. The `html`
//! module fixes `descend` to `Tree::content` and layers tag selection,
//! sole-element assertions and text flattening on top.

pub mod arena;
pub mod error;
pub mod html;
pub mod json;
pub mod select;
pub mod tree;
pub mod types;

pub use arena::TreeArena;
pub use error::{CardinalityError, CircularStructure, NotATree, Result, TreeError};
pub use html::{
    as_text, get_sole_element, get_value, select_by_attribute, select_by_tag, select_html,
};
pub use select::{select, Identity};
pub use tree::Tree;
pub use types::*;
