//! Markdown to keyed output trees
//!
//!     This crate turns CommonMark source into an output tree of elements, widgets, text and
//!     raw markup, where every node and every attribute carries a per-pass sequence key. The
//!     tree is what a UI layer diffs and mounts; the crate itself never draws anything.
//!
//!     This is a pure lib, that is, it powers the typomark-cli but is shell agnostic: no code
//!     here reads env vars, prints to stdout or touches the filesystem.
//!
//! Architecture
//!
//!     Parsing is delegated to comrak. Its arena AST is converted into an owned, minimal
//!     Markdown model (./input) so that the renderer never depends on comrak types and any
//!     parser can be plugged in through the [`MarkdownParser`] trait.
//!
//!     The renderer (./render) walks that model and emits into a [`RenderSink`]. The default
//!     sink, [`TreeBuilder`], assembles an owned [`OutputNode`] tree.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── options.rs              # Parser and render options
//!     ├── format.rs               # OutputFormat trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── input
//!     │   ├── nodes.rs            # Markdown model
//!     │   └── comrak_parser.rs    # comrak AST → model
//!     ├── output
//!     │   ├── nodes.rs            # Output tree
//!     │   ├── sequence.rs         # Sequence keys
//!     │   └── sink.rs             # RenderSink and TreeBuilder
//!     ├── render
//!     │   ├── emphasis.rs
//!     │   ├── inline.rs
//!     │   ├── block.rs
//!     │   └── table.rs
//!     ├── formats
//!     │   ├── json
//!     │   └── treeviz
//!     └── lib.rs
//!
//! Element mapping
//!
//!     paragraph          p
//!     heading 1..6       H1..H6 widget (anything outside 1..5 is H6)
//!     block quote        blockquote
//!     table              table > thead > tr > th, tbody > tr > td
//!     list               ol / ul > li (nested lists are siblings of li)
//!     list item, cell    li / td hold the inline content directly, with no p wrapper
//!     thematic break     Divider widget
//!     emphasis           i (single run), b (double run)
//!     strikethrough      content only, no wrapping element (superscript too)
//!     code span          code > text
//!     link, bare url     AnchorLink widget with href (autolink is on by default)
//!     image              img with src and alt
//!     hard break         br
//!     inline html        raw markup, unsanitised
//!
//!     Every other node kind is skipped.
//!
//! Trust boundary
//!
//!     Raw HTML from the source is passed through untouched. Callers rendering untrusted input
//!     must sanitise it.

pub mod error;
pub mod format;
pub mod formats;
pub mod input;
pub mod options;
pub mod output;
pub mod registry;
pub mod render;

pub use error::RenderError;
pub use format::OutputFormat;
pub use input::{ComrakParser, Document, MarkdownParser};
pub use options::{ParserOptions, RenderOptions};
pub use output::{OutputNode, RenderSink, TreeBuilder, WidgetKind};
pub use registry::FormatRegistry;
pub use render::{render_document, MarkdownRenderer};
