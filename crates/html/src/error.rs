//! Error types for HTML ingestion

use thiserror::Error;
use tree_query::TreeError;

pub type Result<T> = std::result::Result<T, HtmlError>;

#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
}
