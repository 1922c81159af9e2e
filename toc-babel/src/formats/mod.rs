//! Format implementations
//!
//! Inbound formats extract headings from documents, outbound formats write
//! built outlines.

pub mod html;
pub mod json;
pub mod markdown;
pub mod treeviz;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use treeviz::TreevizFormat;
