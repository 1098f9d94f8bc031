//! HTML ingestion for tree-query
//!
//! Parses markup with `scraper` (html5ever underneath) and copies the result
//! into a `TreeArena`: elements become nodes, text becomes leaves. Only the
//! arena leaves this crate; queries run through `tree_query`.

pub mod error;
pub mod parser;

pub use error::{HtmlError, Result};
pub use parser::{parse_document, parse_file, parse_fragment, HtmlConfig, COMMENT_TAG};
