use serde::{Deserialize, Serialize};

/// Markdown extensions enabled on the comrak parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Pipe-delimited tables
    pub tables: bool,

    /// `~~strike~~`, rendered as its plain content
    pub strikethrough: bool,

    /// Bare URLs and `www.` links become links
    pub autolink: bool,

    /// `- [ ]` task list items
    pub tasklist: bool,

    /// `[^1]` footnote references and definitions
    pub footnotes: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: true,
            tasklist: false,
            footnotes: false,
        }
    }
}

/// Fixed names and styling hints used by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Tag of the element wrapping the whole document
    pub root_tag: String,

    /// `class` attribute of every `<table>`
    pub table_class: String,

    /// `class` attribute of every `<tr>`
    pub row_class: String,

    /// `style` attribute of every `<tr>`
    pub row_style: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            root_tag: "article".to_string(),
            table_class: "mdc-table".to_string(),
            row_class: "mdc-table-header-row".to_string(),
            row_style: "white-space: nowrap;".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parser_options() {
        let options = ParserOptions::default();
        assert!(options.tables);
        assert!(options.strikethrough);
        assert!(options.autolink);
        assert!(!options.tasklist);
        assert!(!options.footnotes);
    }

    #[test]
    fn test_default_render_options() {
        let options = RenderOptions::default();
        assert_eq!(options.root_tag, "article");
        assert_eq!(options.table_class, "mdc-table");
        assert_eq!(options.row_style, "white-space: nowrap;");
    }
}
