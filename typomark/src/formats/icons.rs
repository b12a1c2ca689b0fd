//! Icon mapping for tree visualization
//!
//! One Unicode character per output node name, so a node's kind can be told at a glance.

/// Get the Unicode icon for an output node name (tag, widget name, `#text` or `#markup`)
pub fn get_icon(node_name: &str) -> &'static str {
    match node_name {
        "article" => "⧉",
        "p" => "¶",
        "blockquote" => "❝",
        "table" => "▦",
        "thead" | "tbody" => "▤",
        "tr" => "↔",
        "th" | "td" => "▢",
        "ul" | "ol" => "☰",
        "li" => "•",
        "i" => "𝐼",
        "b" => "𝐁",
        "code" => "ƒ",
        "img" => "▣",
        "br" => "↵",
        "H1" | "H2" | "H3" | "H4" | "H5" | "H6" => "§",
        "AnchorLink" => "⊕",
        "Divider" => "⎯",
        "#text" => "◦",
        "#markup" => "‹",
        _ => "○",
    }
}
