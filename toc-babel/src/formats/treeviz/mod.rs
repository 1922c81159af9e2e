//! Tree Visualization - box-drawing outline dump
//!
//! One line per entry, nested with box-drawing connectors, showing the
//! original heading level, label and anchor id.
//!
//! ## Example
//!
//! ```text
//! ⧉ Outline (4 sections, 2 roots)
//! ├─ h1 Teaching #teaching
//! │ ├─ h2 STAT 812 #stat-812
//! │ └─ h2 STAT 845 #stat-845
//! └─ h1 Software #software
//! ```

use crate::error::FormatError;
use crate::format::Format;
use toc_outline::{OutlineNode, OutlineTree, WalkEvent};

/// Text tree dump of an outline (serialization only)
#[derive(Default)]
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree of the outline"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, tree: &OutlineTree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree))
    }
}

/// Render the whole outline
pub fn to_treeviz_str(tree: &OutlineTree) -> String {
    let mut output = format!(
        "⧉ Outline ({} {}, {} {})\n",
        tree.len(),
        plural(tree.len(), "section", "sections"),
        tree.root_count(),
        plural(tree.root_count(), "root", "roots"),
    );

    // one two-char segment per open ancestor: "│ " or "  "
    let mut prefix = String::new();
    for event in tree.events() {
        match event {
            WalkEvent::Enter(node) => {
                let is_last = tree.is_last_sibling(node);
                push_line(node, &prefix, is_last, &mut output);
                prefix.push_str(if is_last { "  " } else { "│ " });
            }
            WalkEvent::Leave(_) => {
                prefix.pop();
                prefix.pop();
            }
        }
    }
    output
}

fn push_line(node: &OutlineNode, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} h{} {} #{}\n",
        prefix,
        connector,
        node.level(),
        node.text(),
        node.id()
    ));
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
