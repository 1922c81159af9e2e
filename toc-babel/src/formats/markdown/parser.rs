//! Markdown heading extraction
//!
//! Pipeline: Markdown string → Comrak AST → HeadingRecord list

use crate::error::FormatError;
use crate::options::ExtractOptions;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use log::debug;
use toc_outline::HeadingRecord;

/// Extract headings from Markdown source in document order
pub fn extract_from_markdown(
    source: &str,
    options: &ExtractOptions,
) -> Result<Vec<HeadingRecord>, FormatError> {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &default_comrak_options());

    let mut headings = Vec::new();
    for node in root.descendants() {
        let level = match &node.data.borrow().value {
            NodeValue::Heading(heading) => heading.level as usize,
            _ => continue,
        };
        if !options.accepts_level(level) {
            continue;
        }

        let mut raw = String::new();
        for child in node.children() {
            collect_text(child, &mut raw);
        }
        headings.push(HeadingRecord::new(
            level,
            raw.split_whitespace().collect::<Vec<_>>().join(" "),
        ));
    }

    debug!("markdown: extracted {} headings", headings.len());
    Ok(headings)
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

/// Flatten inline content to plain text
fn collect_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}
