//! OutputFormat trait definition
//!
//! Every serializer of rendered trees implements [`OutputFormat`]. Formats are looked up by
//! name through the [`FormatRegistry`](crate::registry::FormatRegistry).

use crate::error::RenderError;
use crate::output::OutputNode;
use std::collections::HashMap;

/// Trait for output tree serializers
///
/// # Examples
///
/// ```ignore
/// struct NamesFormat;
///
/// impl OutputFormat for NamesFormat {
///     fn name(&self) -> &str {
///         "names"
///     }
///
///     fn serialize(&self, root: &OutputNode) -> Result<String, RenderError> {
///         Ok(root.name().to_string())
///     }
/// }
/// ```
pub trait OutputFormat: Send + Sync {
    /// The name of this format (e.g., "json", "treeviz")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Serialize a rendered tree
    fn serialize(&self, root: &OutputNode) -> Result<String, RenderError>;

    /// Serialize a rendered tree, optionally using extra parameters.
    ///
    /// Formats without parameters rely on the default, which ignores them.
    fn serialize_with_params(
        &self,
        root: &OutputNode,
        params: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let _ = params;
        self.serialize(root)
    }
}
