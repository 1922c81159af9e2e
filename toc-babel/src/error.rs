//! Error types for format operations

use thiserror::Error;

/// Errors raised while extracting headings or serializing outlines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No format registered under this name
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    /// The format does not implement the requested direction
    #[error("not supported: {0}")]
    NotSupported(String),

    /// Source text could not be turned into headings
    #[error("parse error: {0}")]
    ParseError(String),

    /// An outline could not be written out
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Malformed extraction option (e.g. a scope selector)
    #[error("invalid option: {0}")]
    InvalidOption(String),
}
