//! Table-of-contents outlines from flat heading sequences
//!
//!     Documents describe their structure with a flat run of headings (h1..h6). This crate turns
//!     that run into a nested outline, hands every entry a unique anchor id and answers "which
//!     entries lead to this one" for highlighting the current reading position.
//!
//!     It is a pure lib: no I/O, no DOM, no rendering. Getting headings out of a document lives in
//!     toc-babel, turning the tree into markup is the host's business.
//!
//! Pipeline
//!
//!     [HeadingRecord] sequence ──build──▶ [OutlineTree] ──find_active_path(id)──▶ ancestor chain
//!
//!     - hierarchy.rs: stack of open headings, decides each entry's parent
//!     - ids.rs: existing id / slug / positional fallback, with `-N` disambiguation
//!     - tree.rs: arena of nodes in document order, id index, walks and enter/leave events
//!     - builder.rs: glues the three together
//!
//! Guarantees
//!
//!     - children keep input order, a pre-order walk reproduces the input sequence
//!     - ids are unique within one tree and identical across rebuilds of the same input
//!     - skipped levels (h2 → h4) nest directly, no placeholder entries
//!     - malformed level sequences degrade to a flatter tree, never an error

pub mod builder;
pub mod error;
pub mod heading;
pub mod hierarchy;
pub mod ids;
pub mod tree;

pub use builder::{build, find_active_path, OutlineBuilder};
pub use error::OutlineError;
pub use heading::HeadingRecord;
pub use tree::{NodeId, OutlineNode, OutlineTree, WalkEvent};
