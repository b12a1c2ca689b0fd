//! Shared helpers for the integration tests.

use typomark::output::OutputNode;
use typomark::MarkdownRenderer;

pub fn render(source: &str) -> OutputNode {
    MarkdownRenderer::new()
        .render(source)
        .expect("source should render to a root element")
}

pub fn names(nodes: &[OutputNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.name()).collect()
}

pub fn text(key: usize, content: &str) -> OutputNode {
    OutputNode::Text {
        key,
        content: content.to_string(),
    }
}

pub fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/render/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
}
