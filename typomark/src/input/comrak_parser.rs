//! Comrak adapter (Markdown → input tree)
//!
//! Pipeline: Markdown string → Comrak AST → owned [`Document`].
//!
//! Comrak models emphasis as `Emph`/`Strong` nodes without keeping the
//! delimiter, so the delimiter character is read back from the source at the
//! node's start position. Strikethrough and superscript are emphasis runs of
//! `~` and `^`. Soft breaks become a single literal space. Table
//! cells hold inlines directly in comrak and are wrapped in one paragraph here.

use super::nodes::{Block, Document, Inline, ListItem, TableCell, TableRow};
use super::MarkdownParser;
use crate::options::ParserOptions;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};

/// [`MarkdownParser`] backed by the `comrak` CommonMark/GFM parser.
#[derive(Debug, Clone, Default)]
pub struct ComrakParser {
    options: ParserOptions,
}

impl ComrakParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }
}

impl MarkdownParser for ComrakParser {
    fn parse(&self, source: &str) -> Document {
        let arena = Arena::new();
        let options = comrak_options(&self.options);
        let root = parse_document(&arena, source, &options);

        let converter = Converter {
            lines: source.lines().collect(),
        };
        Document::new(converter.blocks(root))
    }
}

fn comrak_options(parser: &ParserOptions) -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = parser.tables;
    options.extension.strikethrough = parser.strikethrough;
    options.extension.autolink = parser.autolink;
    options.extension.tasklist = parser.tasklist;
    options.extension.footnotes = parser.footnotes;
    options
}

struct Converter<'s> {
    lines: Vec<&'s str>,
}

impl Converter<'_> {
    /// Convert every child of a container node
    fn blocks<'a>(&self, node: &'a AstNode<'a>) -> Vec<Block> {
        node.children().map(|child| self.block(child)).collect()
    }

    fn block<'a>(&self, node: &'a AstNode<'a>) -> Block {
        let node_data = node.data.borrow();

        match &node_data.value {
            NodeValue::Paragraph => Block::Paragraph(self.inline_content(node)),

            NodeValue::Heading(heading) => Block::Heading {
                level: heading.level,
                content: self.inline_content(node),
            },

            NodeValue::BlockQuote => Block::Quote(self.blocks(node)),

            NodeValue::List(list) => Block::List {
                ordered: matches!(list.list_type, ListType::Ordered),
                // Children are `Item` nodes, or `TaskItem` when tasklists are on
                items: node
                    .children()
                    .map(|item| ListItem::new(self.blocks(item)))
                    .collect(),
            },

            NodeValue::Table(_) => Block::Table(
                node.children()
                    .map(|row| self.table_row(row))
                    .collect(),
            ),

            NodeValue::ThematicBreak => Block::ThematicBreak,

            other => Block::Unsupported(block_kind(other)),
        }
    }

    fn table_row<'a>(&self, row: &'a AstNode<'a>) -> TableRow {
        TableRow::new(
            row.children()
                .map(|cell| TableCell::new(vec![Block::Paragraph(self.inline_content(cell))]))
                .collect(),
        )
    }

    /// Inline content of a leaf block, `None` when the block has no children
    fn inline_content<'a>(&self, node: &'a AstNode<'a>) -> Option<Vec<Inline>> {
        node.first_child()?;
        Some(self.inlines(node))
    }

    fn inlines<'a>(&self, node: &'a AstNode<'a>) -> Vec<Inline> {
        node.children().map(|child| self.inline(child)).collect()
    }

    fn inline<'a>(&self, node: &'a AstNode<'a>) -> Inline {
        let node_data = node.data.borrow();

        match &node_data.value {
            NodeValue::Text(text) => Inline::Literal(text.clone()),

            NodeValue::SoftBreak => Inline::Literal(" ".to_string()),

            NodeValue::LineBreak => Inline::LineBreak,

            NodeValue::HtmlInline(html) => Inline::RawHtml(html.clone()),

            NodeValue::Code(code) => Inline::CodeSpan(code.literal.clone()),

            NodeValue::Emph | NodeValue::Strong => {
                let count = if matches!(node_data.value, NodeValue::Strong) {
                    2
                } else {
                    1
                };
                let start = node_data.sourcepos.start;
                Inline::Emphasis {
                    delimiter: self.delimiter_at(start.line, start.column),
                    count,
                    children: self.inlines(node),
                }
            }

            // No output mapping; kept as emphasis so the children still render
            NodeValue::Strikethrough => Inline::Emphasis {
                delimiter: '~',
                count: 2,
                children: self.inlines(node),
            },

            NodeValue::Superscript => Inline::Emphasis {
                delimiter: '^',
                count: 1,
                children: self.inlines(node),
            },

            NodeValue::Link(link) => Inline::Link {
                url: link.url.clone(),
                is_image: false,
                children: self.inlines(node),
            },

            NodeValue::Image(link) => Inline::Link {
                url: link.url.clone(),
                is_image: true,
                children: self.inlines(node),
            },

            other => Inline::Unsupported(inline_kind(other)),
        }
    }

    /// Emphasis delimiter at a 1-based source position, `*` when it can't be read back
    fn delimiter_at(&self, line: usize, column: usize) -> char {
        let byte = line
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .zip(column.checked_sub(1))
            .and_then(|(text, offset)| text.as_bytes().get(offset).copied());

        match byte {
            Some(b'_') => '_',
            _ => '*',
        }
    }
}

fn block_kind(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::CodeBlock(_) => "code_block",
        NodeValue::HtmlBlock(_) => "html_block",
        NodeValue::FrontMatter(_) => "front_matter",
        NodeValue::FootnoteDefinition(_) => "footnote_definition",
        _ => "unknown_block",
    }
}

fn inline_kind(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::FootnoteReference(_) => "footnote_reference",
        _ => "unknown_inline",
    }
}
