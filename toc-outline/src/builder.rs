//! Flat heading sequence → outline tree.

use crate::error::OutlineError;
use crate::heading::HeadingRecord;
use crate::hierarchy::NestingStack;
use crate::ids::{IdAssigner, DEFAULT_FALLBACK_PREFIX};
use crate::tree::{NodeId, OutlineNode, OutlineTree};
use log::debug;
use std::collections::HashMap;

/// Builds [`OutlineTree`]s. Holds configuration only; every call to
/// [`build`](OutlineBuilder::build) starts from a clean slate.
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    fallback_prefix: String,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self {
            fallback_prefix: DEFAULT_FALLBACK_PREFIX.to_string(),
        }
    }

    /// Prefix for ids of headings whose text has nothing to slugify.
    pub fn with_fallback_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fallback_prefix = prefix.into();
        self
    }

    pub fn fallback_prefix(&self) -> &str {
        &self.fallback_prefix
    }

    /// Convert `headings` (document order) into a nested outline.
    ///
    /// Never fails: irregular level sequences nest as deep as the stack rule
    /// allows and no placeholder nodes are synthesized for skipped levels.
    pub fn build(&self, headings: &[HeadingRecord]) -> OutlineTree {
        let mut nodes: Vec<OutlineNode> = Vec::with_capacity(headings.len());
        let mut roots = Vec::new();
        let mut index = HashMap::with_capacity(headings.len());
        let mut stack = NestingStack::new();
        let mut ids = IdAssigner::with_fallback_prefix(self.fallback_prefix.as_str());

        for (position, heading) in headings.iter().enumerate() {
            let handle = NodeId(position);
            let text = heading.text.trim();
            let id = ids.assign(heading.usable_id(), text, position);

            let parent = stack.on_heading(heading.level);
            match parent {
                Some(parent) => nodes[parent.0].children.push(handle),
                None => roots.push(handle),
            }

            index.insert(id.clone(), handle);
            nodes.push(OutlineNode {
                handle,
                id,
                text: text.to_string(),
                level: heading.level,
                position,
                children: Vec::new(),
                parent,
            });
            stack.open(heading.level, handle);
        }

        debug!(
            "built outline: {} entries, {} roots, {} still open",
            nodes.len(),
            roots.len(),
            stack.depth()
        );

        OutlineTree {
            nodes,
            roots,
            index,
        }
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an outline with the default settings.
pub fn build(headings: &[HeadingRecord]) -> OutlineTree {
    OutlineBuilder::new().build(headings)
}

/// Ancestor chain (root first) ending at the node with `id`.
pub fn find_active_path<'a>(
    tree: &'a OutlineTree,
    id: &str,
) -> Result<Vec<&'a OutlineNode>, OutlineError> {
    tree.find_active_path(id)
}
