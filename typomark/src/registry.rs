//! Format registry for output format discovery and selection

use crate::error::RenderError;
use crate::format::OutputFormat;
use crate::output::OutputNode;
use std::collections::HashMap;

/// Registry of output formats, keyed by name
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn OutputFormat>>,
}

impl FormatRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format. A format with the same name is replaced.
    pub fn register<F: OutputFormat + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn OutputFormat, RenderError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| RenderError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all registered format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name and description of every registered format, sorted by name
    pub fn describe_formats(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .filter_map(|name| {
                let description = self.formats.get(&name)?.description().to_string();
                Some((name, description))
            })
            .collect()
    }

    pub fn serialize(&self, root: &OutputNode, format: &str) -> Result<String, RenderError> {
        self.get(format)?.serialize(root)
    }

    pub fn serialize_with_params(
        &self,
        root: &OutputNode,
        format: &str,
        params: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        self.get(format)?.serialize_with_params(root, params)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::treeviz::TreevizFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
