//! Markdown format implementation
//!
//! Data Model:
//!
//!     | Markdown | HeadingRecord | Notes |
//!     | ATX `#`..`######` | level 1..6 | |
//!     | Setext `===` / `---` | level 1 / 2 | |
//!     | heading inlines | text | emphasis flattened, inline code kept verbatim |
//!
//!     Markdown headings carry no anchor ids, so every id is generated by the builder.
//!     Class/id exclusions and scope do not apply; only the level window does.
//!
//! Library
//!
//!     comrak handles the parsing, same as everywhere else we read Markdown.

mod parser;

pub use parser::extract_from_markdown;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::ExtractOptions;
use toc_outline::HeadingRecord;

/// Markdown heading source
#[derive(Default)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Headings from a CommonMark document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_extraction(&self) -> bool {
        true
    }

    fn extract(
        &self,
        source: &str,
        options: &ExtractOptions,
    ) -> Result<Vec<HeadingRecord>, FormatError> {
        extract_from_markdown(source, options)
    }
}
