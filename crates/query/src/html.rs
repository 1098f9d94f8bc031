//! Queries over arena trees
//!
//! Everything here is `select` with `descend` fixed to `Tree::content`, so a
//! dangling child aborts the query with `NotATree` exactly like a revisit
//! aborts it with `CircularStructure`.

use crate::error::{CardinalityError, Result, TreeError};
use crate::select::select;
use crate::tree::Tree;

/// Outermost nodes under `tree` (inclusive) for which `predicate` holds
pub fn select_html<'a, P>(tree: Tree<'a>, predicate: P) -> Result<Vec<Tree<'a>>>
where
    P: FnMut(&Tree<'a>) -> bool,
{
    select(tree, predicate, |node: &Tree<'a>| node.content())
}

/// Nodes whose tag equals `tag_name` exactly. Leaves never match.
pub fn select_by_tag<'a>(tree: Tree<'a>, tag_name: &str) -> Result<Vec<Tree<'a>>> {
    select_html(tree, |node| node.tag() == Some(tag_name))
}

/// Nodes carrying attribute `key` with exactly `value`
pub fn select_by_attribute<'a>(tree: Tree<'a>, key: &str, value: &str) -> Result<Vec<Tree<'a>>> {
    select_html(tree, |node| node.attribute_value(key) == Some(value))
}

/// The only element of `items`
///
/// Fails with the actual count and every element when there are zero or
/// several.
pub fn get_sole_element<I>(items: I) -> std::result::Result<I::Item, CardinalityError<I::Item>>
where
    I: IntoIterator,
{
    let mut iter = items.into_iter().fuse();
    match (iter.next(), iter.next()) {
        (Some(only), None) => Ok(only),
        (first, second) => {
            let items: Vec<I::Item> = first.into_iter().chain(second).chain(iter).collect();
            tracing::debug!(actual = items.len(), "[html] Expected a sole element");
            Err(CardinalityError {
                expected: 1,
                actual: items.len(),
                items,
            })
        }
    }
}

/// The single child of `tree`
pub fn get_value<'a>(tree: Tree<'a>) -> Result<Tree<'a>> {
    get_sole_element(tree.content()?).map_err(|err| TreeError::Cardinality {
        expected: err.expected,
        actual: err.actual,
        items: err.items.iter().map(Tree::id).collect(),
        parent: Some(tree.id()),
    })
}

/// Every leaf under `tree`, concatenated in document order
pub fn as_text(tree: Tree<'_>) -> Result<String> {
    let leaves = select_html(tree, Tree::is_leaf)?;
    Ok(leaves.iter().filter_map(Tree::text).collect())
}
