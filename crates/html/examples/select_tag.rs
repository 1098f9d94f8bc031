//! Print the text of every element with a given tag
//!
//! ```text
//! cargo run -p tree-query-html --example select_tag -- page.html h2
//! ```

use tree_query::{as_text, select_by_tag};
use tree_query_html::{parse_file, HtmlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(tag)) = (args.next(), args.next()) else {
        eprintln!("usage: select_tag <file.html> <tag>");
        std::process::exit(2);
    };

    let config = HtmlConfig {
        skip_whitespace_text: true,
        ..HtmlConfig::default()
    };
    let arena = parse_file(&path, &config)?;

    let matches = select_by_tag(arena.root()?, &tag)?;
    println!("{} <{}> element(s) in {}", matches.len(), tag, path);

    for (i, element) in matches.into_iter().enumerate() {
        println!("[{}] {}", i, as_text(element)?.trim());
    }

    Ok(())
}
