//! Heading sources and outline formats for toc
//!
//!     This crate sits between documents and the outline core. Inbound, it pulls a flat heading
//!     sequence out of HTML, Markdown or a JSON heading list. Outbound, it writes a built outline
//!     as a visual tree or as JSON.
//!
//!     It is a pure lib, shell agnostic: no printing, no env vars, no file access. The CLI owns
//!     all of that.
//!
//! Architecture
//!
//!     - Format trait: one interface for every format, extraction and/or serialization
//!     - FormatRegistry: lookup by name or file extension
//!     - ExtractOptions: level window, excluded subtrees, scope
//!
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── options.rs              # ExtractOptions and scope selectors
//!     ├── registry.rs             # FormatRegistry
//!     ├── formats
//!     │   ├── html                # html5ever DOM walk
//!     │   ├── markdown            # comrak AST walk
//!     │   ├── json                # heading list in, nested outline out
//!     │   └── treeviz             # box-drawing dump
//!     └── lib.rs
//!
//! Implementation Principles
//!
//!     Parsing is never hand rolled: html5ever and comrak do it, this crate only walks their trees
//!     and maps heading nodes to HeadingRecords.

pub mod error;
pub mod format;
pub mod formats;
pub mod options;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use options::{ExtractOptions, Selector};
pub use registry::FormatRegistry;

use toc_outline::{OutlineBuilder, OutlineTree};

/// Extract headings from `source` with the named format and build the outline.
pub fn outline_from_source(
    registry: &FormatRegistry,
    source: &str,
    format: &str,
    options: &ExtractOptions,
    builder: &OutlineBuilder,
) -> Result<OutlineTree, FormatError> {
    let headings = registry.extract(source, format, options)?;
    Ok(builder.build(&headings))
}
