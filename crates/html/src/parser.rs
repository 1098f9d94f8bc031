//! HTML → TreeArena conversion
//!
//! Walks the parsed document with an explicit stack, allocating ids in
//! document order. Doctypes and processing instructions are dropped;
//! comments are dropped unless `HtmlConfig::keep_comments` is set.

use crate::error::Result;
use scraper::{Html, Node};
use std::fs;
use std::path::Path;
use tree_query::{Attributes, NodeId, TreeArena};

/// Tag given to comment nodes when they are kept
pub const COMMENT_TAG: &str = "#comment";

/// Configuration for HTML ingestion
#[derive(Debug, Clone, Default)]
pub struct HtmlConfig {
    /// Drop text nodes that are only whitespace (indentation between tags)
    pub skip_whitespace_text: bool,
    /// Keep comments as `#comment` nodes holding one leaf
    pub keep_comments: bool,
}

/// Parse a full document. The arena root is the `html` element.
pub fn parse_document(input: &str, config: &HtmlConfig) -> Result<TreeArena> {
    let html = Html::parse_document(input);
    convert(&html, config)
}

/// Parse a fragment. The arena root is the `html` element wrapping it.
pub fn parse_fragment(input: &str, config: &HtmlConfig) -> Result<TreeArena> {
    let html = Html::parse_fragment(input);
    convert(&html, config)
}

/// Read and parse a document from disk
pub fn parse_file(path: impl AsRef<Path>, config: &HtmlConfig) -> Result<TreeArena> {
    let path = path.as_ref();
    tracing::info!("[html] Parsing {}", path.display());

    let input = fs::read_to_string(path)?;
    let arena = parse_document(&input, config)?;

    tracing::debug!(
        nodes = arena.len(),
        bytes = input.len(),
        "[html] Parsed {}",
        path.display()
    );
    Ok(arena)
}

fn convert(html: &Html, config: &HtmlConfig) -> Result<TreeArena> {
    let root = html.root_element();
    let mut arena = TreeArena::new();

    let root_id = arena.add_node(root.value().name(), root.value().attrs(), []);
    arena.set_root(root_id)?;

    let mut stack: Vec<_> = root.children().rev().map(|child| (child, root_id)).collect();

    while let Some((node, parent)) = stack.pop() {
        let Some(node_id) = add(&mut arena, node.value(), config) else {
            continue;
        };
        arena.append_child(parent, node_id)?;

        if node.value().is_element() {
            // Push children in reverse order (so they're visited left-to-right)
            stack.extend(node.children().rev().map(|child| (child, node_id)));
        }
    }

    Ok(arena)
}

/// Add the arena counterpart of `node`, if it has one
fn add(arena: &mut TreeArena, node: &Node, config: &HtmlConfig) -> Option<NodeId> {
    match node {
        Node::Element(element) => Some(arena.add_node(element.name(), element.attrs(), [])),
        Node::Text(text) => {
            let text: &str = text;
            if config.skip_whitespace_text && text.trim().is_empty() {
                None
            } else {
                Some(arena.add_leaf(text))
            }
        }
        Node::Comment(comment) if config.keep_comments => {
            let body = arena.add_leaf(&**comment);
            Some(arena.add_node(COMMENT_TAG, Attributes::new(), [body]))
        }
        _ => None,
    }
}
