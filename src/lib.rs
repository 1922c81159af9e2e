//! # toc
//!
//! Nested table-of-contents outlines built from the headings of a document.
//!
//! The work is split across the workspace:
//!
//!     - toc-outline: heading records → nested outline, anchor ids, active paths
//!     - toc-babel: HTML / Markdown / JSON extraction, treeviz and JSON output
//!     - toc-config: layered TOML configuration
//!     - toc-cli: the `toc` binary
//!
//! This crate re-exports the library surface of the first two so hosts only need one dependency.

pub use toc_babel::{
    outline_from_source, ExtractOptions, Format, FormatError, FormatRegistry, Selector,
};
pub use toc_outline::{
    build, find_active_path, HeadingRecord, NodeId, OutlineBuilder, OutlineError, OutlineNode,
    OutlineTree, WalkEvent,
};

pub mod formats {
    pub use toc_babel::formats::*;
}
