//! Which headings make it into the outline.
//!
//! Headings are dropped before the builder ever sees them when they fall
//! outside the level window, sit inside an excluded subtree (`.no-toc`,
//! `#toc-container`) or, with a scope set, outside every scope element.

use crate::error::FormatError;
use std::str::FromStr;

/// Filters applied while extracting headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Shallowest level kept (inclusive)
    pub min_level: usize,
    /// Deepest level kept (inclusive)
    pub max_level: usize,
    /// Subtrees carrying any of these classes are skipped
    pub exclude_classes: Vec<String>,
    /// Subtrees whose element has one of these ids are skipped
    pub exclude_ids: Vec<String>,
    /// When non-empty, only headings inside a matching element are kept
    pub scope: Vec<Selector>,
}

impl ExtractOptions {
    /// Keep `min..=max` levels only.
    pub fn with_levels(mut self, min: usize, max: usize) -> Self {
        self.min_level = min;
        self.max_level = max;
        self
    }

    pub fn with_scope(mut self, selector: Selector) -> Self {
        self.scope.push(selector);
        self
    }

    pub fn accepts_level(&self, level: usize) -> bool {
        (self.min_level..=self.max_level).contains(&level)
    }

    /// Whether the element's subtree must be skipped entirely.
    pub fn excludes(&self, element: &ElementInfo) -> bool {
        element
            .id
            .as_deref()
            .is_some_and(|id| self.exclude_ids.iter().any(|excluded| excluded == id))
            || element
                .classes
                .iter()
                .any(|class| self.exclude_classes.contains(class))
    }

    /// Whether the element opens a scope region.
    pub fn opens_scope(&self, element: &ElementInfo) -> bool {
        self.scope.iter().any(|selector| selector.matches(element))
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_level: 1,
            max_level: 6,
            exclude_classes: vec!["no-toc".to_string()],
            exclude_ids: vec!["toc-container".to_string()],
            scope: Vec::new(),
        }
    }
}

/// The parts of an element the filters look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementInfo {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

/// Single simple selector: `tag`, `.class` or `#id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
}

impl Selector {
    pub fn matches(&self, element: &ElementInfo) -> bool {
        match self {
            Selector::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
            Selector::Class(class) => element.classes.iter().any(|c| c == class),
            Selector::Id(id) => element.id.as_deref() == Some(id.as_str()),
        }
    }
}

impl FromStr for Selector {
    type Err = FormatError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let selector = if let Some(class) = raw.strip_prefix('.') {
            Selector::Class(class.to_string())
        } else if let Some(id) = raw.strip_prefix('#') {
            Selector::Id(id.to_string())
        } else {
            Selector::Tag(raw.to_string())
        };

        if !is_identifier(selector.name()) {
            return Err(FormatError::InvalidOption(format!(
                "unsupported scope selector '{}' (expected tag, .class or #id)",
                raw
            )));
        }
        Ok(selector)
    }
}

impl Selector {
    fn name(&self) -> &str {
        match self {
            Selector::Tag(name) | Selector::Class(name) | Selector::Id(name) => name,
        }
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
