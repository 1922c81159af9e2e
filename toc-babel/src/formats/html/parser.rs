//! HTML heading extraction
//!
//! Pipeline: HTML string → RcDom → depth-first walk → HeadingRecord list

use crate::error::FormatError;
use crate::options::{ElementInfo, ExtractOptions};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use log::debug;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use toc_outline::HeadingRecord;

/// Elements whose content is never rendered as document text
const OPAQUE_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// Extract headings from an HTML document in document order
pub fn extract_from_html(
    source: &str,
    options: &ExtractOptions,
) -> Result<Vec<HeadingRecord>, FormatError> {
    let dom = parse_document(RcDom::default(), Default::default()).one(source);

    let mut headings = Vec::new();
    collect_headings(&dom.document, options, options.scope.is_empty(), &mut headings);

    debug!("html: extracted {} headings", headings.len());
    Ok(headings)
}

fn collect_headings(
    handle: &Handle,
    options: &ExtractOptions,
    in_scope: bool,
    headings: &mut Vec<HeadingRecord>,
) {
    let mut in_scope = in_scope;

    if let NodeData::Element { name, attrs, .. } = &handle.data {
        let tag = name.local.to_ascii_lowercase().to_string();
        if is_opaque(&tag) {
            return;
        }

        let element = element_info(tag, &attrs.borrow());
        if options.excludes(&element) {
            return;
        }
        in_scope = in_scope || options.opens_scope(&element);

        if let Some(level) = heading_level(&element.tag) {
            if in_scope && options.accepts_level(level) {
                headings.push(HeadingRecord {
                    level,
                    text: heading_text(handle),
                    existing_id: element.id,
                });
            }
            // headings never contain headings
            return;
        }
    }

    for child in handle.children.borrow().iter() {
        collect_headings(child, options, in_scope, headings);
    }
}

fn element_info(tag: String, attrs: &[html5ever::Attribute]) -> ElementInfo {
    let mut info = ElementInfo {
        tag,
        ..ElementInfo::default()
    };
    for attr in attrs {
        let value: &str = &attr.value;
        match &*attr.name.local {
            "id" => {
                if !value.trim().is_empty() {
                    info.id = Some(value.to_string());
                }
            }
            "class" => {
                info.classes = value.split_whitespace().map(str::to_string).collect();
            }
            _ => {}
        }
    }
    info
}

fn is_opaque(tag: &str) -> bool {
    OPAQUE_ELEMENTS.contains(&tag)
}

/// `h1`..`h6` → 1..6
fn heading_level(tag: &str) -> Option<usize> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Concatenated descendant text with whitespace collapsed
fn heading_text(handle: &Handle) -> String {
    let mut raw = String::new();
    push_text(handle, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_text(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { name, .. } if is_opaque(&name.local.to_ascii_lowercase()) => {}
        _ => {
            for child in handle.children.borrow().iter() {
                push_text(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Selector;

    fn extract(html: &str) -> Vec<HeadingRecord> {
        extract_from_html(html, &ExtractOptions::default()).expect("html to extract")
    }

    #[test]
    fn test_headings_in_document_order() {
        let headings = extract("<h1>One</h1><p>x</p><h2>Two</h2><div><h3>Three</h3></div>");
        let levels: Vec<usize> = headings.iter().map(|h| h.level).collect();
        let texts: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(levels, vec![1, 2, 3]);
        assert_eq!(texts, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_text_is_collapsed_and_includes_inline_markup() {
        let headings = extract("<h2>\n  Linear <em>Models</em>\n   &amp; <code>lm()</code> </h2>");
        assert_eq!(headings[0].text, "Linear Models & lm()");
    }

    #[test]
    fn test_existing_ids_are_carried() {
        let headings = extract(r#"<h2 id="intro">Intro</h2><h2 id="  ">Blank</h2><h2>None</h2>"#);
        assert_eq!(headings[0].existing_id.as_deref(), Some("intro"));
        assert_eq!(headings[1].existing_id, None);
        assert_eq!(headings[2].existing_id, None);
    }

    #[test]
    fn test_uppercase_tags_and_verbatim_ids() {
        let headings = extract(r#"<H2 ID=" top ">Top</H2><SCRIPT><h1>Nope</h1></SCRIPT>"#);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].level, 2);
        assert_eq!(headings[0].existing_id.as_deref(), Some(" top "));
    }

    #[test]
    fn test_excluded_subtrees_are_skipped() {
        let html = r#"
            <nav id="toc-container"><h3>Table of Contents</h3></nav>
            <h1>Kept</h1>
            <div class="sidebar no-toc"><h2>Hidden</h2></div>
            <h2 class="no-toc">Also hidden</h2>
            <h2>Kept too</h2>
        "#;
        let texts: Vec<String> = extract(html).into_iter().map(|h| h.text).collect();
        assert_eq!(texts, vec!["Kept", "Kept too"]);
    }

    #[test]
    fn test_opaque_elements_are_ignored() {
        let html = "<script>document.write('<h1>Nope</h1>')</script><template><h1>Nope</h1></template><h1>Yes</h1>";
        let texts: Vec<String> = extract(html).into_iter().map(|h| h.text).collect();
        assert_eq!(texts, vec!["Yes"]);
    }

    #[test]
    fn test_level_window() {
        let options = ExtractOptions::default().with_levels(2, 3);
        let headings =
            extract_from_html("<h1>A</h1><h2>B</h2><h3>C</h3><h4>D</h4>", &options).unwrap();
        let texts: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "C"]);
    }

    #[test]
    fn test_scope_limits_collection() {
        let options = ExtractOptions::default()
            .with_scope(Selector::Tag("main".into()))
            .with_scope(Selector::Class("main".into()));
        let html = r#"
            <header><h1>Site title</h1></header>
            <div class="main"><h2>Body A</h2></div>
            <main><section><h2>Body B</h2></section></main>
            <footer><h2>Footer</h2></footer>
        "#;
        let headings = extract_from_html(html, &options).unwrap();
        let texts: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["Body A", "Body B"]);
    }

    #[test]
    fn test_no_headings() {
        assert!(extract("<p>Nothing to see</p>").is_empty());
        assert!(extract("").is_empty());
    }
}
