//! Inline rendering
//!
//! Walks the inline children of a leaf block (or of an emphasis/link) in
//! document order and emits one output node per inline.

use super::emphasis::classify;
use super::RenderPass;
use crate::input::Inline;
use crate::output::{RenderSink, WidgetKind};

const LINE_BREAK_TAG: &str = "br";
const CODE_TAG: &str = "code";
const IMAGE_TAG: &str = "img";

impl<S: RenderSink + ?Sized> RenderPass<'_, S> {
    pub(crate) fn render_inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            self.render_inline(inline);
        }
    }

    fn render_inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Literal(text) => self.text(text),

            Inline::RawHtml(html) => {
                let key = self.next_key();
                self.sink.add_raw_markup(key, html);
            }

            Inline::LineBreak => {
                self.open_element(LINE_BREAK_TAG);
                self.sink.close_node();
            }

            // Code span content is never re-parsed
            Inline::CodeSpan(code) => {
                self.open_element(CODE_TAG);
                self.text(code);
                self.sink.close_node();
            }

            Inline::Emphasis {
                delimiter,
                count,
                children,
            } => match classify(*delimiter, *count) {
                Some(kind) => {
                    self.open_element(kind.tag());
                    self.render_inlines(children);
                    self.sink.close_node();
                }
                None => {
                    tracing::trace!(%delimiter, count, "unmapped emphasis delimiter, rendering children unwrapped");
                    self.render_inlines(children);
                }
            },

            Inline::Link {
                url,
                is_image: true,
                children,
            } => self.render_image(url, children),

            Inline::Link { url, children, .. } => {
                let key = self.next_key();
                self.sink.open_widget(key, WidgetKind::AnchorLink);
                self.attribute("href", url);
                self.render_inlines(children);
                self.sink.close_node();
            }

            Inline::Unsupported(kind) => {
                tracing::trace!(kind, "skipping unsupported inline");
            }
        }
    }

    /// Images are leaves: `alt` is built from the direct literal children only.
    fn render_image(&mut self, url: &str, children: &[Inline]) {
        let alt: String = children
            .iter()
            .filter_map(|child| match child {
                Inline::Literal(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();

        self.open_element(IMAGE_TAG);
        self.attribute("src", url);
        self.attribute("alt", &alt);
        self.sink.close_node();
    }
}
