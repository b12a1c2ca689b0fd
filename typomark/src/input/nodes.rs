//! Owned Markdown tree handed to the renderer by a [`MarkdownParser`](super::MarkdownParser).
//!
//! The renderer only reads this tree. Kinds the renderer has no mapping for are
//! kept as `Unsupported` so that skipping them is an explicit decision at the
//! dispatch site rather than something lost inside the parser adapter.

/// Root container returned by a parser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A block-level Markdown node.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Leaf block; `None` when the paragraph carries no inline content.
    Paragraph(Option<Vec<Inline>>),

    /// Leaf block with a level (1-6 for well-formed input).
    Heading {
        level: u8,
        content: Option<Vec<Inline>>,
    },

    /// Block quote containing nested blocks.
    Quote(Vec<Block>),

    /// Rows in source order. The first row is the header by position.
    Table(Vec<TableRow>),

    List {
        ordered: bool,
        items: Vec<ListItem>,
    },

    ThematicBreak,

    /// Any block kind the parser produced that has no output mapping.
    Unsupported(&'static str),
}

impl Block {
    /// Short kind name, used when logging skipped nodes
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading { .. } => "heading",
            Block::Quote(_) => "quote",
            Block::Table(_) => "table",
            Block::List { .. } => "list",
            Block::ThematicBreak => "thematic_break",
            Block::Unsupported(kind) => *kind,
        }
    }
}

/// A list item is itself a container of blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    pub blocks: Vec<Block>,
}

impl ListItem {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

/// Table cells hold block content; supported input has a single paragraph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    pub blocks: Vec<Block>,
}

impl TableCell {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Convenience for the common single-paragraph cell.
    pub fn from_inlines(inlines: Vec<Inline>) -> Self {
        Self {
            blocks: vec![Block::Paragraph(Some(inlines))],
        }
    }
}

/// An inline Markdown node.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Literal(String),

    /// Raw inline markup, passed through untouched.
    RawHtml(String),

    /// Hard line break.
    LineBreak,

    CodeSpan(String),

    Emphasis {
        delimiter: char,
        count: usize,
        children: Vec<Inline>,
    },

    Link {
        url: String,
        is_image: bool,
        children: Vec<Inline>,
    },

    Unsupported(&'static str),
}

impl Inline {
    pub fn kind(&self) -> &'static str {
        match self {
            Inline::Literal(_) => "literal",
            Inline::RawHtml(_) => "raw_html",
            Inline::LineBreak => "line_break",
            Inline::CodeSpan(_) => "code_span",
            Inline::Emphasis { .. } => "emphasis",
            Inline::Link { .. } => "link",
            Inline::Unsupported(kind) => *kind,
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Inline::Literal(text.into())
    }
}
