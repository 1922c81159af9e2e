//! Heading records handed to the outline builder.

use serde::{Deserialize, Serialize};

/// A single heading extracted from a document, in document order.
///
/// Whoever extracts headings owns the creation of these records. The builder
/// never inspects anything beyond `level`, `text` and `existing_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    /// Semantic heading depth (1 = most significant). Any value is accepted;
    /// only the relative order of levels matters when nesting.
    pub level: usize,
    /// Display label.
    pub text: String,
    /// Anchor id already carried by the heading, if any.
    #[serde(
        default,
        alias = "existingId",
        alias = "id",
        skip_serializing_if = "Option::is_none"
    )]
    pub existing_id: Option<String>,
}

impl HeadingRecord {
    /// Create a record without an existing id. The text is trimmed.
    pub fn new(level: usize, text: impl AsRef<str>) -> Self {
        Self {
            level,
            text: text.as_ref().trim().to_string(),
            existing_id: None,
        }
    }

    /// Attach an existing anchor id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.existing_id = Some(id.into());
        self
    }

    /// The existing id, treating blank ids as absent.
    pub fn usable_id(&self) -> Option<&str> {
        self.existing_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_text() {
        let heading = HeadingRecord::new(2, "  Introduction \n");
        assert_eq!(heading.text, "Introduction");
        assert_eq!(heading.level, 2);
        assert!(heading.existing_id.is_none());
    }

    #[test]
    fn test_blank_existing_id_is_unusable() {
        let heading = HeadingRecord::new(1, "Title").with_id("   ");
        assert_eq!(heading.usable_id(), None);

        let heading = HeadingRecord::new(1, "Title").with_id("top");
        assert_eq!(heading.usable_id(), Some("top"));
    }

    #[test]
    fn test_existing_id_is_not_trimmed() {
        let heading = HeadingRecord::new(1, "Title").with_id(" top ");
        assert_eq!(heading.usable_id(), Some(" top "));
    }

    #[test]
    fn test_deserialize_accepts_id_aliases() {
        let camel: HeadingRecord =
            serde_json::from_str(r#"{"level": 2, "text": "A", "existingId": "a"}"#).unwrap();
        assert_eq!(camel.existing_id.as_deref(), Some("a"));

        let short: HeadingRecord =
            serde_json::from_str(r#"{"level": 2, "text": "A", "id": "b"}"#).unwrap();
        assert_eq!(short.existing_id.as_deref(), Some("b"));

        let bare: HeadingRecord = serde_json::from_str(r#"{"level": 3, "text": "C"}"#).unwrap();
        assert_eq!(bare.existing_id, None);
    }
}
