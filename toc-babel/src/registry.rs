//! Format registry for format discovery and selection
//!
//! Formats are registered and retrieved by name, or picked from a file
//! extension.

use crate::error::FormatError;
use crate::format::Format;
use crate::options::ExtractOptions;
use std::collections::HashMap;
use std::path::Path;
use toc_outline::{HeadingRecord, OutlineTree};

/// Registry of heading sources and outline formats
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name of the extraction-capable format claiming the path's extension
    pub fn detect(&self, path: impl AsRef<Path>) -> Option<&str> {
        let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        let mut candidates: Vec<&dyn Format> = self
            .formats
            .values()
            .map(|f| f.as_ref())
            .filter(|f| f.supports_extraction() && f.file_extensions().contains(&extension.as_str()))
            .collect();
        candidates.sort_by(|a, b| a.name().cmp(b.name()));
        candidates.first().map(|f| f.name())
    }

    /// Extract headings using the specified format
    pub fn extract(
        &self,
        source: &str,
        format: &str,
        options: &ExtractOptions,
    ) -> Result<Vec<HeadingRecord>, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_extraction() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extraction",
                format
            )));
        }
        fmt.extract(source, options)
    }

    /// Serialize an outline using the specified format
    pub fn serialize(&self, tree: &OutlineTree, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(tree)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::HtmlFormat);
        registry.register(crate::formats::MarkdownFormat);
        registry.register(crate::formats::JsonFormat);
        registry.register(crate::formats::TreevizFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
