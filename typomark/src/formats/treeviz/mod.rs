//! Treeviz formatter for output trees
//!
//! A visual, line based view of a rendered tree. Each node is one line:
//!
//! <prefix><connector> <icon> <label>
//!
//! where the label is the tag or widget name followed by its attributes, or the content of a
//! text/markup leaf. Labels are truncated to 30 characters.
//!
//! Example:
//!
//! ⧉ article
//! ├─ § H1
//! │ └─ ◦ Title
//! └─ ¶ p
//!   ├─ 𝐼 i
//!   │ └─ ◦ emphasis
//!   └─ ◦  and text
//!
//! Params:
//!     show-keys: when "true", every line ends with the node's sequence key (`#3`).

use super::icons::get_icon;
use crate::error::RenderError;
use crate::format::OutputFormat;
use crate::output::OutputNode;
use std::collections::HashMap;

const MAX_LABEL_CHARS: usize = 30;

fn truncate(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let mut truncated: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

fn label(node: &OutputNode) -> String {
    match node {
        OutputNode::Text { content, .. } | OutputNode::RawMarkup { content, .. } => {
            content.replace('\n', "↵")
        }
        OutputNode::Element { .. } | OutputNode::Widget { .. } => {
            let mut label = node.name().to_string();
            for attr in node.attributes() {
                label.push_str(&format!(" {}=\"{}\"", attr.name, attr.value));
            }
            label
        }
    }
}

fn line(node: &OutputNode, show_keys: bool) -> String {
    let mut output = format!("{} {}", get_icon(node.name()), truncate(&label(node)));
    if show_keys {
        output.push_str(&format!(" #{}", node.key()));
    }
    output.push('\n');
    output
}

fn format_children(children: &[OutputNode], prefix: &str, show_keys: bool, output: &mut String) {
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        let is_last = i == child_count - 1;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!("{prefix}{connector} {}", line(child, show_keys)));

        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        format_children(child.children(), &child_prefix, show_keys, output);
    }
}

pub fn to_treeviz_str(root: &OutputNode) -> String {
    to_treeviz_str_with_params(root, &HashMap::new())
}

/// Convert a tree to treeviz with optional parameters (`show-keys`)
pub fn to_treeviz_str_with_params(root: &OutputNode, params: &HashMap<String, String>) -> String {
    let show_keys = params
        .get("show-keys")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    let mut output = line(root, show_keys);
    format_children(root.children(), "", show_keys, &mut output);
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl OutputFormat for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn serialize(&self, root: &OutputNode) -> Result<String, RenderError> {
        Ok(to_treeviz_str(root))
    }

    fn serialize_with_params(
        &self,
        root: &OutputNode,
        params: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        Ok(to_treeviz_str_with_params(root, params))
    }
}
