//! JSON output
//!
//! The tree is serialized as-is through serde: every node is an object tagged with `type`
//! (`element`, `widget`, `text`, `raw_markup`) and carries its `key`.

use crate::error::RenderError;
use crate::format::OutputFormat;
use crate::output::OutputNode;

pub fn to_json_str(root: &OutputNode) -> Result<String, RenderError> {
    serde_json::to_string_pretty(root).map_err(|e| RenderError::Serialization(e.to_string()))
}

/// Format implementation for pretty-printed JSON
pub struct JsonFormat;

impl OutputFormat for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Keyed output tree as pretty-printed JSON"
    }

    fn serialize(&self, root: &OutputNode) -> Result<String, RenderError> {
        to_json_str(root)
    }
}
