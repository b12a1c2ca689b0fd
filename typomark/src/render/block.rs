//! Block rendering
//!
//! A single dispatcher serves both the root container and every nested
//! container. Six block kinds are mapped; everything else is skipped so that
//! new parser node kinds degrade to omission instead of failing the document.

use super::RenderPass;
use crate::input::{Block, Inline, ListItem};
use crate::output::{RenderSink, WidgetKind};

const PARAGRAPH_TAG: &str = "p";
const BLOCKQUOTE_TAG: &str = "blockquote";
const ORDERED_LIST_TAG: &str = "ol";
const UNORDERED_LIST_TAG: &str = "ul";
const LIST_ITEM_TAG: &str = "li";

impl<S: RenderSink + ?Sized> RenderPass<'_, S> {
    pub(crate) fn render_blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            self.render_block(block);
        }
    }

    fn render_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(content) => {
                if let Some(inlines) = content {
                    self.render_paragraph(inlines);
                }
            }

            Block::Heading { level, content } => {
                if let Some(inlines) = content {
                    let key = self.next_key();
                    self.sink.open_widget(key, WidgetKind::heading(*level));
                    self.render_inlines(inlines);
                    self.sink.close_node();
                }
            }

            Block::Quote(children) => {
                self.open_element(BLOCKQUOTE_TAG);
                self.render_blocks(children);
                self.sink.close_node();
            }

            Block::Table(rows) => self.render_table(rows),

            Block::List { ordered, items } => self.render_list(*ordered, items),

            Block::ThematicBreak => {
                let key = self.next_key();
                self.sink.open_widget(key, WidgetKind::Divider);
                self.sink.close_node();
            }

            Block::Unsupported(kind) => {
                tracing::trace!(kind, "skipping unsupported block");
            }
        }
    }

    fn render_paragraph(&mut self, inlines: &[Inline]) {
        self.open_element(PARAGRAPH_TAG);
        self.render_inlines(inlines);
        self.sink.close_node();
    }

    /// Nested lists attach as siblings of the parent item's `li`, not inside it.
    fn render_list(&mut self, ordered: bool, items: &[ListItem]) {
        if items.is_empty() {
            return;
        }

        let tag = if ordered {
            ORDERED_LIST_TAG
        } else {
            UNORDERED_LIST_TAG
        };
        self.open_element(tag);

        for item in items {
            for block in &item.blocks {
                match block {
                    Block::List { ordered, items } => self.render_list(*ordered, items),

                    Block::Paragraph(content) => {
                        self.open_element(LIST_ITEM_TAG);
                        if let Some(inlines) = content {
                            self.render_inlines(inlines);
                        }
                        self.sink.close_node();
                    }

                    other => {
                        tracing::trace!(kind = other.kind(), "skipping list item child");
                    }
                }
            }
        }

        self.sink.close_node();
    }
}
