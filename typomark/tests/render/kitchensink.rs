use crate::common::{load_fixture, names, render};
use typomark::formats::treeviz::to_treeviz_str;

#[test]
fn test_kitchensink_structure() {
    let root = render(&load_fixture("kitchensink.md"));

    assert_eq!(
        names(root.children()),
        vec!["H1", "p", "H2", "ul", "ol", "blockquote", "Divider", "H2", "table", "p"]
    );
    assert_eq!(root.key(), 0);
}

#[test]
fn test_kitchensink_treeviz() {
    let root = render(&load_fixture("kitchensink.md"));
    let output = to_treeviz_str(&root);

    assert!(output.starts_with("⧉ article\n"));
    assert!(output.contains("§ H1"));
    assert!(output.contains("⊕ AnchorLink href=\"https://"));
    assert!(output.contains("▣ img src=\"logo.png\" alt=\"Logo\""));
    assert!(output.contains("▦ table class=\"mdc-table\""));
    assert_eq!(output.lines().count(), root.keys().len() - attribute_count(&root));
}

fn attribute_count(node: &typomark::OutputNode) -> usize {
    node.attributes().len() + node.children().iter().map(attribute_count).sum::<usize>()
}
