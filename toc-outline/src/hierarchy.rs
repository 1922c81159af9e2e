//! Nesting stack for flat → nested heading conversion
//!
//! Flat documents express structure only through heading levels:
//!
//! ```text
//! h1 Chapter 1
//! h2   Section 1.1
//! h4     Detail      (skips h3, still nests under 1.1)
//! h3     Section 1.1.1
//! h1 Chapter 2
//! ```
//!
//! `NestingStack` tracks which headings are currently "open". Each frame is a
//! heading that was actually seen, not a fixed numeric level, so irregular
//! sequences such as h2 → h4 → h3 resolve without placeholder nodes: the h3
//! closes the h4 (4 >= 3) and lands next to it under the h2.
//!
//! The rule applied for every incoming heading:
//!
//! 1. Close every open frame whose level is the same or deeper.
//! 2. Whatever frame is left on top is the parent; an empty stack means root.
//! 3. Open a frame for the new heading so deeper headings nest under it.

use crate::tree::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    level: usize,
    node: NodeId,
}

/// Stack of open headings during a single outline build.
#[derive(Debug, Default)]
pub struct NestingStack {
    frames: Vec<Frame>,
}

impl NestingStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Close frames at the same or deeper level than `level` and return the
    /// node the incoming heading should be attached to (`None` = new root).
    pub fn on_heading(&mut self, level: usize) -> Option<NodeId> {
        while let Some(frame) = self.frames.last() {
            if frame.level >= level {
                self.frames.pop();
            } else {
                break;
            }
        }
        self.frames.last().map(|frame| frame.node)
    }

    /// Open a frame for a freshly inserted node.
    pub fn open(&mut self, level: usize, node: NodeId) {
        self.frames.push(Frame { level, node });
    }

    /// Number of open headings.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
