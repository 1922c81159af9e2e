//! Format trait definition
//!
//! Every format plugs into one uniform interface. Inbound formats pull a flat heading sequence
//! out of a source document, outbound formats write a built outline.

use crate::error::FormatError;
use crate::options::ExtractOptions;
use toc_outline::{HeadingRecord, OutlineTree};

/// Trait for document formats
///
/// Formats can support extraction, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_extraction(&self) -> bool {
///         true
///     }
///
///     fn extract(
///         &self,
///         source: &str,
///         options: &ExtractOptions,
///     ) -> Result<Vec<HeadingRecord>, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "markdown", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions handled by this format, without the leading dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports extraction (source → headings)
    fn supports_extraction(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (outline → text)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Extract headings, in document order, from source text
    ///
    /// Default implementation returns NotSupported error.
    fn extract(
        &self,
        _source: &str,
        _options: &ExtractOptions,
    ) -> Result<Vec<HeadingRecord>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support extraction",
            self.name()
        )))
    }

    /// Serialize an outline into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _tree: &OutlineTree) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
