use crate::common::{names, render};
use typomark::input::{Block, Document, Inline, TableCell, TableRow};
use typomark::output::{OutputNode, WidgetKind};
use typomark::render_document;

fn row(cells: &[&str]) -> TableRow {
    TableRow::new(
        cells
            .iter()
            .map(|cell| TableCell::from_inlines(vec![Inline::literal(*cell)]))
            .collect(),
    )
}

fn assert_header_and_body(table: &OutputNode) {
    assert_eq!(table.name(), "table");
    assert_eq!(names(table.children()), vec!["thead", "tbody"]);

    let head = &table.children()[0];
    assert_eq!(names(head.children()), vec!["tr"]);
    assert_eq!(names(head.children()[0].children()), vec!["th", "th"]);
    assert_eq!(head.text_content(), "H1H2");

    let body = &table.children()[1];
    assert_eq!(names(body.children()), vec!["tr", "tr"]);
    for tr in body.children() {
        assert_eq!(names(tr.children()), vec!["td", "td"]);
    }
    assert_eq!(body.text_content(), "abcd");
}

#[test]
fn test_table_from_source() {
    let root = render("| H1 | H2 |\n| --- | --- |\n| a | b |\n| c | d |\n");
    assert_header_and_body(&root.children()[0]);
}

#[test]
fn test_table_header_is_positional() {
    // No separator marker at all: the first row is still the header
    let parser = |_: &str| {
        Document::new(vec![Block::Table(vec![
            row(&["H1", "H2"]),
            row(&["a", "b"]),
            row(&["c", "d"]),
        ])])
    };
    let root = render_document("table", &parser).unwrap();
    assert_header_and_body(&root.children()[0]);
}

#[test]
fn test_nested_list() {
    let root = render("- item1\n  - nested\n- item2\n");
    let list = &root.children()[0];

    assert_eq!(list.name(), "ul");
    assert_eq!(names(list.children()), vec!["li", "ul", "li"]);
    assert_eq!(list.children()[0].text_content(), "item1");
    assert_eq!(names(list.children()[1].children()), vec!["li"]);
    assert_eq!(list.children()[1].text_content(), "nested");
    assert_eq!(list.children()[2].text_content(), "item2");
}

#[test]
fn test_ordered_list() {
    let root = render("1. one\n2. two\n");
    assert_eq!(names(root.children()), vec!["ol"]);
    assert_eq!(names(root.children()[0].children()), vec!["li", "li"]);
}

#[test]
fn test_thematic_break_alone() {
    let root = render("---\n");
    assert_eq!(
        root.children(),
        &[OutputNode::Widget {
            key: 1,
            kind: WidgetKind::Divider,
            props: vec![],
            children: vec![],
        }]
    );
}

#[test]
fn test_headings() {
    let root = render("# One\n\n### Three\n\n###### Six\n");
    assert_eq!(names(root.children()), vec!["H1", "H3", "H6"]);
    assert_eq!(root.children()[1].text_content(), "Three");
}

#[test]
fn test_blockquote() {
    let root = render("> quoted *text*\n>\n> - item\n");
    let quote = &root.children()[0];
    assert_eq!(quote.name(), "blockquote");
    assert_eq!(names(quote.children()), vec!["p", "ul"]);
}

#[test]
fn test_unsupported_blocks_only() {
    let root = render("```\ncode\n```\n");
    assert_eq!(root.name(), "article");
    assert!(root.children().is_empty());
}

#[test]
fn test_unsupported_blocks_are_skipped_in_place() {
    let root = render("before\n\n    indented code\n\nafter\n");
    assert_eq!(names(root.children()), vec!["p", "p"]);
    assert_eq!(root.children()[1].text_content(), "after");
}

#[test]
fn test_empty_source() {
    assert_eq!(typomark::MarkdownRenderer::new().render(""), None);
}
