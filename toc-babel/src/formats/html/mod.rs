//! HTML format implementation
//!
//! Strategy: HTML string → RcDom (html5ever) → headings (one-way only)
//!
//! # Data Model
//!
//! | HTML | HeadingRecord | Notes |
//! |------|---------------|-------|
//! | `<h1>`..`<h6>` | `level` 1..6 | Taken from the tag name |
//! | descendant text | `text` | Whitespace runs collapsed, trimmed |
//! | `id` attribute | `existing_id` | Blank ids count as absent |
//!
//! Subtrees are skipped when they carry an excluded class or id (by default
//! `.no-toc` and `#toc-container`, so a previously injected TOC never feeds
//! itself), and `<script>`/`<style>`/`<template>` are never looked into.
//! With a scope set (e.g. `main`, `.main`), only headings inside a matching
//! element are collected.

mod parser;

pub use parser::extract_from_html;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::ExtractOptions;
use toc_outline::HeadingRecord;

/// HTML heading source
#[derive(Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Headings from an HTML document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_extraction(&self) -> bool {
        true
    }

    fn extract(
        &self,
        source: &str,
        options: &ExtractOptions,
    ) -> Result<Vec<HeadingRecord>, FormatError> {
        extract_from_html(source, options)
    }
}
