//! Input side of the renderer: the owned Markdown tree and the parsers that produce it.
//!
//! Tokenizing Markdown is never done here. A [`MarkdownParser`] wraps a real
//! parsing library and hands back a [`Document`]; [`ComrakParser`] is the one
//! shipped with the crate.

pub mod comrak_parser;
pub mod nodes;

pub use comrak_parser::ComrakParser;
pub use nodes::{Block, Document, Inline, ListItem, TableCell, TableRow};

/// Turns Markdown source into the block/inline tree the renderer walks.
pub trait MarkdownParser {
    fn parse(&self, source: &str) -> Document;
}

/// Any `Fn(&str) -> Document` is a parser, which keeps hand-built trees easy to feed in.
impl<F> MarkdownParser for F
where
    F: Fn(&str) -> Document,
{
    fn parse(&self, source: &str) -> Document {
        self(source)
    }
}
