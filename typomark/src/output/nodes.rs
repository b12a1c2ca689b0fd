//! Output tree produced by [`TreeBuilder`](super::TreeBuilder).
//!
//! Every node and every attribute carries the sequence key it was emitted
//! with. Keys are only meaningful within the render pass that produced them.

use serde::Serialize;
use std::fmt;

/// A node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputNode {
    /// A plain tag such as `p`, `ul` or `td`.
    Element {
        key: usize,
        tag: String,
        attributes: Vec<Attribute>,
        children: Vec<OutputNode>,
    },
    /// One of the rich widgets. `children` is the widget's child content.
    Widget {
        key: usize,
        kind: WidgetKind,
        props: Vec<Attribute>,
        children: Vec<OutputNode>,
    },
    Text {
        key: usize,
        content: String,
    },
    /// Markup passed through verbatim.
    RawMarkup {
        key: usize,
        content: String,
    },
}

/// An attribute of an element or a prop of a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub key: usize,
    pub name: String,
    pub value: String,
}

/// The fixed set of widgets the renderer maps Markdown onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WidgetKind {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    AnchorLink,
    Divider,
}

impl WidgetKind {
    /// Heading widget for a Markdown heading level. Levels outside 1-5 map to `H6`.
    pub fn heading(level: u8) -> Self {
        match level {
            1 => WidgetKind::H1,
            2 => WidgetKind::H2,
            3 => WidgetKind::H3,
            4 => WidgetKind::H4,
            5 => WidgetKind::H5,
            _ => WidgetKind::H6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::H1 => "H1",
            WidgetKind::H2 => "H2",
            WidgetKind::H3 => "H3",
            WidgetKind::H4 => "H4",
            WidgetKind::H5 => "H5",
            WidgetKind::H6 => "H6",
            WidgetKind::AnchorLink => "AnchorLink",
            WidgetKind::Divider => "Divider",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl OutputNode {
    pub fn key(&self) -> usize {
        match self {
            OutputNode::Element { key, .. }
            | OutputNode::Widget { key, .. }
            | OutputNode::Text { key, .. }
            | OutputNode::RawMarkup { key, .. } => *key,
        }
    }

    /// Tag, widget name, or `#text` / `#markup` for leaf content
    pub fn name(&self) -> &str {
        match self {
            OutputNode::Element { tag, .. } => tag,
            OutputNode::Widget { kind, .. } => kind.name(),
            OutputNode::Text { .. } => "#text",
            OutputNode::RawMarkup { .. } => "#markup",
        }
    }

    pub fn children(&self) -> &[OutputNode] {
        match self {
            OutputNode::Element { children, .. } | OutputNode::Widget { children, .. } => children,
            OutputNode::Text { .. } | OutputNode::RawMarkup { .. } => &[],
        }
    }

    /// Element attributes or widget props
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            OutputNode::Element { attributes, .. } => attributes,
            OutputNode::Widget { props, .. } => props,
            OutputNode::Text { .. } | OutputNode::RawMarkup { .. } => &[],
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Concatenated text and markup of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, output: &mut String) {
        match self {
            OutputNode::Text { content, .. } | OutputNode::RawMarkup { content, .. } => {
                output.push_str(content)
            }
            OutputNode::Element { children, .. } | OutputNode::Widget { children, .. } => {
                for child in children {
                    child.collect_text(output);
                }
            }
        }
    }

    /// Every key in emission order: the node, its attributes, then its children
    pub fn keys(&self) -> Vec<usize> {
        let mut keys = Vec::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys(&self, keys: &mut Vec<usize>) {
        keys.push(self.key());
        keys.extend(self.attributes().iter().map(|attr| attr.key));
        for child in self.children() {
            child.collect_keys(keys);
        }
    }
}
