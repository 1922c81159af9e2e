//! JSON format implementation
//!
//! Both directions:
//!
//! - extraction reads a flat array of heading records, e.g.
//!   `[{"level": 2, "text": "Intro", "id": "intro"}]` (`id`, `existingId` and
//!   `existing_id` are all accepted for the existing anchor id). The level
//!   window applies; class/id exclusions and scope do not.
//! - serialization writes the nested outline as compact JSON:
//!   `{"roots":[{"id":..,"text":..,"level":..,"children":[...]}]}`. The writer
//!   follows the tree's enter/leave events, so arbitrarily deep outlines are
//!   written without recursion.

use crate::error::FormatError;
use crate::format::Format;
use crate::options::ExtractOptions;
use toc_outline::{HeadingRecord, OutlineNode, OutlineTree, WalkEvent};

/// JSON heading list in, nested JSON outline out
#[derive(Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Heading list in, nested outline out, as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_extraction(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn extract(
        &self,
        source: &str,
        options: &ExtractOptions,
    ) -> Result<Vec<HeadingRecord>, FormatError> {
        let headings: Vec<HeadingRecord> = serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("invalid heading list: {}", e)))?;
        Ok(headings
            .into_iter()
            .filter(|heading| options.accepts_level(heading.level))
            .map(|heading| HeadingRecord {
                text: heading.text.trim().to_string(),
                ..heading
            })
            .collect())
    }

    fn serialize(&self, tree: &OutlineTree) -> Result<String, FormatError> {
        to_json_str(tree)
    }
}

/// Write the nested outline document
pub fn to_json_str(tree: &OutlineTree) -> Result<String, FormatError> {
    let mut out = String::from(r#"{"roots":["#);
    // no comma before the first entry of each list
    let mut first = true;

    for event in tree.events() {
        match event {
            WalkEvent::Enter(node) => {
                if !first {
                    out.push(',');
                }
                open_node(node, &mut out)?;
                first = true;
            }
            WalkEvent::Leave(_) => {
                out.push_str("]}");
                first = false;
            }
        }
    }

    out.push_str("]}");
    Ok(out)
}

/// Everything up to and including the opening bracket of `children`
fn open_node(node: &OutlineNode, out: &mut String) -> Result<(), FormatError> {
    out.push_str(r#"{"id":"#);
    out.push_str(&json_string(node.id())?);
    out.push_str(r#","text":"#);
    out.push_str(&json_string(node.text())?);
    out.push_str(&format!(r#","level":{},"children":["#, node.level()));
    Ok(())
}

fn json_string(value: &str) -> Result<String, FormatError> {
    serde_json::to_string(value).map_err(|e| FormatError::SerializationError(e.to_string()))
}
