//! HTML text in, query results out

use std::io::Write;
use tempfile::{tempdir, NamedTempFile};
use tree_query::{
    as_text, get_sole_element, get_value, select_by_attribute, select_by_tag, TreeError,
};
use tree_query_html::{parse_document, parse_file, parse_fragment, HtmlConfig, HtmlError};

#[test]
fn test_paragraph_text() {
    let arena = parse_fragment("<p>Hello, <b>world</b>!</p>", &HtmlConfig::default()).unwrap();

    let paragraphs = select_by_tag(arena.root().unwrap(), "p").unwrap();
    let p = get_sole_element(paragraphs).unwrap();

    assert_eq!(as_text(p).unwrap(), "Hello, world!");
}

#[test]
fn test_link_attributes() {
    let arena = parse_fragment(r#"<a href="http://x/">foo</a>"#, &HtmlConfig::default()).unwrap();

    let link = get_sole_element(select_by_tag(arena.root().unwrap(), "a").unwrap()).unwrap();

    assert_eq!(link.attribute_value("href"), Some("http://x/"));
    assert_eq!(link.attribute_value("class"), None);
    assert_eq!(get_value(link).unwrap().text(), Some("foo"));
}

#[test]
fn test_table_cells() {
    let markup = r#"
        <table>
          <tr><td class="name">alpha</td><td class="value">1</td></tr>
          <tr><td class="name">beta</td><td class="value">2</td></tr>
        </table>
    "#;
    let config = HtmlConfig {
        skip_whitespace_text: true,
        ..HtmlConfig::default()
    };
    let arena = parse_document(markup, &config).unwrap();
    let root = arena.root().unwrap();

    // The parser inserts <tbody>; rows are still found in order
    let rows = select_by_tag(root, "tr").unwrap();
    assert_eq!(rows.len(), 2);

    let names: Vec<String> = select_by_attribute(root, "class", "name")
        .unwrap()
        .into_iter()
        .map(|cell| as_text(cell).unwrap())
        .collect();
    assert_eq!(names, vec!["alpha", "beta"]);

    // Querying from a row only sees that row's cells
    let cells_in_rows = select_by_tag(rows[1], "td").unwrap();
    assert_eq!(cells_in_rows.len(), 2);
    assert_eq!(as_text(rows[1]).unwrap(), "beta2");
}

#[test]
fn test_sole_element_failure() {
    let arena = parse_fragment("<p>a</p><p>b</p>", &HtmlConfig::default()).unwrap();
    let paragraphs = select_by_tag(arena.root().unwrap(), "p").unwrap();

    let err: TreeError = get_sole_element(paragraphs).unwrap_err().into();
    assert!(matches!(err, TreeError::Cardinality { actual: 2, .. }));
}

#[test]
fn test_parse_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "<html><body><h1>Title</h1></body></html>").unwrap();
    let arena = parse_file(file.path(), &HtmlConfig::default()).unwrap();

    let heading = get_sole_element(select_by_tag(arena.root().unwrap(), "h1").unwrap()).unwrap();
    assert_eq!(as_text(heading).unwrap(), "Title");
}

#[test]
fn test_parse_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.html");
    assert!(matches!(
        parse_file(&path, &HtmlConfig::default()),
        Err(HtmlError::Io(_))
    ));
}
