//! The builder protocol the renderer emits into.
//!
//! The renderer drives a [`RenderSink`] imperatively: open a node, add
//! attributes and content, close it. Every call carries the sequence key the
//! renderer drew for it. [`TreeBuilder`] is the sink shipped with the crate and
//! materialises an owned [`OutputNode`] tree.

use super::nodes::{Attribute, OutputNode, WidgetKind};

/// Imperative tree-builder the renderer emits into.
///
/// Attributes apply to the most recently opened node that has not been closed
/// yet. For widgets they set props (for example the anchor's `href`); the
/// nodes added between `open_widget` and `close_node` form the widget's child
/// content.
pub trait RenderSink {
    fn open_element(&mut self, key: usize, tag: &str);

    fn open_widget(&mut self, key: usize, kind: WidgetKind);

    /// Close the most recently opened element or widget.
    fn close_node(&mut self);

    fn add_attribute(&mut self, key: usize, name: &str, value: &str);

    fn add_text(&mut self, key: usize, content: &str);

    /// Add markup verbatim. No escaping or validation happens on the way through.
    fn add_raw_markup(&mut self, key: usize, content: &str);
}

/// [`RenderSink`] that builds an owned [`OutputNode`] tree.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    roots: Vec<OutputNode>,
    open: Vec<OutputNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close anything left open and return the top-level nodes.
    pub fn finish(mut self) -> Vec<OutputNode> {
        while !self.open.is_empty() {
            tracing::warn!("closing node left open at end of render");
            self.close_node();
        }
        self.roots
    }

    /// First top-level node, for passes that emit a single root.
    pub fn into_root(self) -> Option<OutputNode> {
        self.finish().into_iter().next()
    }

    fn push(&mut self, node: OutputNode) {
        match self.open.last_mut() {
            Some(OutputNode::Element { children, .. } | OutputNode::Widget { children, .. }) => {
                children.push(node)
            }
            Some(_) | None => self.roots.push(node),
        }
    }
}

impl RenderSink for TreeBuilder {
    fn open_element(&mut self, key: usize, tag: &str) {
        self.open.push(OutputNode::Element {
            key,
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        });
    }

    fn open_widget(&mut self, key: usize, kind: WidgetKind) {
        self.open.push(OutputNode::Widget {
            key,
            kind,
            props: Vec::new(),
            children: Vec::new(),
        });
    }

    fn close_node(&mut self) {
        match self.open.pop() {
            Some(node) => self.push(node),
            None => tracing::warn!("close_node called with no open node"),
        }
    }

    fn add_attribute(&mut self, key: usize, name: &str, value: &str) {
        let attribute = Attribute {
            key,
            name: name.to_string(),
            value: value.to_string(),
        };

        match self.open.last_mut() {
            Some(OutputNode::Element { attributes, .. }) => attributes.push(attribute),
            Some(OutputNode::Widget { props, .. }) => props.push(attribute),
            Some(_) | None => tracing::warn!(name, "attribute emitted outside an open node"),
        }
    }

    fn add_text(&mut self, key: usize, content: &str) {
        self.push(OutputNode::Text {
            key,
            content: content.to_string(),
        });
    }

    fn add_raw_markup(&mut self, key: usize, content: &str) {
        self.push(OutputNode::RawMarkup {
            key,
            content: content.to_string(),
        });
    }
}
