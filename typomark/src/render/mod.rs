//! Markdown tree → keyed output tree
//!
//! The renderer walks the parsed [`Document`] depth-first and emits straight
//! into a [`RenderSink`]. Blocks and inlines form a mutual recursion pair
//! (`render_blocks` / `render_inlines`); every `open_*` call is closed in the
//! same function body, and empty-content early returns happen before anything
//! is opened, so the sink always sees balanced calls.
//!
//! # Sequence keys
//!
//! Each emitted node and each attribute draws one key from the renderer's
//! [`Sequencer`] right before it is emitted. Keys start at 0 for every pass.
//! [`MarkdownRenderer::render`] takes `&mut self`, so two passes can never
//! share a counter.
//!
//! # Raw HTML
//!
//! Inline HTML is handed to the sink verbatim. Nothing in this crate sanitises
//! it: untrusted input has to be cleaned before parsing or after rendering.
//!
//! # Limits
//!
//! Recursion depth follows Markdown nesting depth (lists, quotes, emphasis).
//! Input nested thousands of levels deep can exhaust the stack.

pub mod block;
pub mod emphasis;
pub mod inline;
pub mod table;

pub use emphasis::{classify, EmphasisKind};

use crate::input::{ComrakParser, Document, MarkdownParser};
use crate::options::RenderOptions;
use crate::output::{OutputNode, RenderSink, Sequencer, TreeBuilder};

/// State of one render pass: the sink, the key counter and the options.
pub(crate) struct RenderPass<'a, S: RenderSink + ?Sized> {
    sink: &'a mut S,
    sequence: &'a mut Sequencer,
    options: &'a RenderOptions,
}

impl<'a, S: RenderSink + ?Sized> RenderPass<'a, S> {
    fn new(sink: &'a mut S, sequence: &'a mut Sequencer, options: &'a RenderOptions) -> Self {
        Self {
            sink,
            sequence,
            options,
        }
    }

    fn next_key(&mut self) -> usize {
        self.sequence.next_key()
    }

    fn open_element(&mut self, tag: &str) {
        let key = self.next_key();
        self.sink.open_element(key, tag);
    }

    fn attribute(&mut self, name: &str, value: &str) {
        let key = self.next_key();
        self.sink.add_attribute(key, name, value);
    }

    fn text(&mut self, content: &str) {
        let key = self.next_key();
        self.sink.add_text(key, content);
    }

    fn render_document(&mut self, document: &Document) {
        let options = self.options;
        self.open_element(&options.root_tag);
        self.render_blocks(&document.blocks);
        self.sink.close_node();
    }
}

/// Renders Markdown source through a parser into keyed output trees.
///
/// ```ignore
/// let mut renderer = MarkdownRenderer::new();
/// let article = renderer.render("# Title\n\nSome *text*.\n").unwrap();
/// assert_eq!(article.name(), "article");
/// ```
#[derive(Debug, Default)]
pub struct MarkdownRenderer<P = ComrakParser> {
    parser: P,
    options: RenderOptions,
    sequence: Sequencer,
}

impl MarkdownRenderer<ComrakParser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: MarkdownParser> MarkdownRenderer<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            options: RenderOptions::default(),
            sequence: Sequencer::new(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Render `source` into an owned tree rooted at the root element.
    ///
    /// Returns `None` for empty source and for source that parses to no blocks.
    pub fn render(&mut self, source: &str) -> Option<OutputNode> {
        let mut builder = TreeBuilder::new();
        if self.render_into(source, &mut builder) {
            builder.into_root()
        } else {
            None
        }
    }

    /// Render `source` into an arbitrary sink. Returns whether anything was emitted.
    pub fn render_into<S: RenderSink + ?Sized>(&mut self, source: &str, sink: &mut S) -> bool {
        if source.is_empty() {
            return false;
        }

        let document = self.parser.parse(source);
        render_parsed(&document, &self.options, &mut self.sequence, sink)
    }

    /// Keys handed out by the most recent pass
    pub fn last_key_count(&self) -> usize {
        self.sequence.issued()
    }
}

/// Render `source` with `parser` and the default [`RenderOptions`].
pub fn render_document<P: MarkdownParser + ?Sized>(source: &str, parser: &P) -> Option<OutputNode> {
    if source.is_empty() {
        return None;
    }

    let document = parser.parse(source);
    let mut builder = TreeBuilder::new();
    let mut sequence = Sequencer::new();
    if render_parsed(
        &document,
        &RenderOptions::default(),
        &mut sequence,
        &mut builder,
    ) {
        builder.into_root()
    } else {
        None
    }
}

/// Render an already parsed document. The sequencer is reset first.
pub fn render_parsed<S: RenderSink + ?Sized>(
    document: &Document,
    options: &RenderOptions,
    sequence: &mut Sequencer,
    sink: &mut S,
) -> bool {
    if document.is_empty() {
        tracing::debug!("document has no blocks, nothing to render");
        return false;
    }

    sequence.reset();
    tracing::debug!(blocks = document.blocks.len(), "rendering document");

    RenderPass::new(sink, sequence, options).render_document(document);

    tracing::debug!(keys = sequence.issued(), "render pass complete");
    true
}

#[cfg(test)]
fn render_blocks_for_test(blocks: &[crate::input::Block]) -> Vec<OutputNode> {
    let options = RenderOptions::default();
    let mut sequence = Sequencer::new();
    let mut builder = TreeBuilder::new();
    RenderPass::new(&mut builder, &mut sequence, &options).render_blocks(blocks);
    builder.finish()
}

#[cfg(test)]
fn render_inlines_for_test(inlines: &[crate::input::Inline]) -> Vec<OutputNode> {
    let options = RenderOptions::default();
    let mut sequence = Sequencer::new();
    let mut builder = TreeBuilder::new();
    RenderPass::new(&mut builder, &mut sequence, &options).render_inlines(inlines);
    builder.finish()
}
