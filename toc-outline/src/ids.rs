//! Anchor id assignment.
//!
//! Ids are assigned in document order during a single build:
//!
//! - an existing id is used verbatim if no earlier heading claimed it
//! - otherwise the text is slugified (`"Getting Started!"` → `getting-started`)
//! - text with no sluggable characters falls back to `<prefix>-<position>`
//! - a taken base id gets the smallest free `-2`, `-3`, ... suffix

use std::collections::{HashMap, HashSet};

pub const DEFAULT_FALLBACK_PREFIX: &str = "section";

/// Hands out unique anchor ids for one outline build.
#[derive(Debug)]
pub struct IdAssigner {
    fallback_prefix: String,
    used: HashSet<String>,
    /// Next suffix worth trying per base id. Every suffix below it is taken.
    next_suffix: HashMap<String, usize>,
}

impl IdAssigner {
    pub fn new() -> Self {
        Self::with_fallback_prefix(DEFAULT_FALLBACK_PREFIX)
    }

    pub fn with_fallback_prefix(prefix: impl Into<String>) -> Self {
        Self {
            fallback_prefix: prefix.into(),
            used: HashSet::new(),
            next_suffix: HashMap::new(),
        }
    }

    /// Assign an id for the heading at `position` (0-based, document order).
    pub fn assign(&mut self, existing: Option<&str>, text: &str, position: usize) -> String {
        if let Some(id) = existing {
            if !self.used.contains(id) {
                self.used.insert(id.to_string());
                return id.to_string();
            }
        }

        let mut base = slugify(text);
        if base.is_empty() {
            base = format!("{}-{}", self.fallback_prefix, position);
        }
        self.claim(base)
    }

    fn claim(&mut self, base: String) -> String {
        if !self.used.contains(&base) {
            self.used.insert(base.clone());
            return base;
        }

        let mut suffix = self.next_suffix.get(&base).copied().unwrap_or(2);
        let id = loop {
            let candidate = format!("{}-{}", base, suffix);
            if !self.used.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };
        self.next_suffix.insert(base, suffix + 1);
        self.used.insert(id.clone());
        id
    }
}

impl Default for IdAssigner {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase, hyphen-separated slug of `text`. Empty if nothing is sluggable.
///
/// Letters and digits of any script are kept as they are (after lowercasing);
/// every run of other characters becomes a single `-`, none at either end.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
