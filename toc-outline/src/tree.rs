//! Outline tree: an arena of nodes in document order plus an id index.
//!
//! Nodes refer to each other through [`NodeId`] handles into the arena, so a
//! child's `parent` is a lookup key and never an owning pointer. The tree is
//! immutable once built; a changed document gets a brand new tree.

use crate::error::OutlineError;
use std::collections::HashMap;

/// Handle to a node inside an [`OutlineTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One entry in the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub(crate) handle: NodeId,
    pub(crate) id: String,
    pub(crate) text: String,
    pub(crate) level: usize,
    pub(crate) position: usize,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl OutlineNode {
    /// Unique anchor id.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Original heading level, kept even though tree depth is normalized.
    pub fn level(&self) -> usize {
        self.level
    }

    /// 0-based index of the source heading in the input sequence.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn handle(&self) -> NodeId {
        self.handle
    }

    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Hierarchical outline built from one heading sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineTree {
    pub(crate) nodes: Vec<OutlineNode>,
    pub(crate) roots: Vec<NodeId>,
    pub(crate) index: HashMap<String, NodeId>,
}

impl OutlineTree {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes in document order.
    pub fn roots(&self) -> impl Iterator<Item = &OutlineNode> + '_ {
        self.roots.iter().map(move |&id| self.node(id))
    }

    pub fn root_ids(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Look up a node by its anchor id.
    pub fn get(&self, id: &str) -> Option<&OutlineNode> {
        self.index.get(id).map(|&handle| self.node(handle))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Resolve a handle. Handles only come from this tree, so they are
    /// always in bounds.
    pub fn node(&self, handle: NodeId) -> &OutlineNode {
        &self.nodes[handle.0]
    }

    pub fn children<'a>(
        &'a self,
        node: &'a OutlineNode,
    ) -> impl Iterator<Item = &'a OutlineNode> + 'a {
        node.children.iter().map(move |&id| self.node(id))
    }

    pub fn parent(&self, node: &OutlineNode) -> Option<&OutlineNode> {
        node.parent.map(|id| self.node(id))
    }

    /// Nesting depth of `node`; roots are at depth 1.
    pub fn depth(&self, node: &OutlineNode) -> usize {
        let mut depth = 1;
        let mut current = node.parent;
        while let Some(id) = current {
            depth += 1;
            current = self.node(id).parent;
        }
        depth
    }

    /// All nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = &OutlineNode> + '_ {
        self.nodes.iter()
    }

    /// Pre-order walk of the tree, following `roots` and `children`.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            pending: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Enter/leave events in pre-order, for writers that need to close
    /// what they open.
    pub fn events(&self) -> Events<'_> {
        Events {
            tree: self,
            pending: self.roots.iter().rev().map(|&root| (root, false)).collect(),
        }
    }

    /// Whether `node` is the last entry of its sibling list.
    pub fn is_last_sibling(&self, node: &OutlineNode) -> bool {
        let siblings = match node.parent {
            Some(parent) => &self.node(parent).children,
            None => &self.roots,
        };
        siblings.last() == Some(&node.handle)
    }

    /// Chain from the top-most ancestor down to the node with `id`, inclusive.
    pub fn find_active_path(&self, id: &str) -> Result<Vec<&OutlineNode>, OutlineError> {
        let handle = self
            .index
            .get(id)
            .copied()
            .ok_or_else(|| OutlineError::NotFound(id.to_string()))?;

        let mut path = Vec::new();
        let mut current = Some(handle);
        while let Some(handle) = current {
            let node = self.node(handle);
            path.push(node);
            current = node.parent;
        }
        path.reverse();
        Ok(path)
    }
}

/// Pre-order iterator returned by [`OutlineTree::walk`].
pub struct Walk<'a> {
    tree: &'a OutlineTree,
    pending: Vec<NodeId>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a OutlineNode;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.pending.pop()?;
        let node = self.tree.node(handle);
        self.pending.extend(node.children.iter().rev().copied());
        Some(node)
    }
}

/// Step of a depth-first traversal: a node is entered, its children are
/// visited, then it is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    Enter(&'a OutlineNode),
    Leave(&'a OutlineNode),
}

/// Iterator returned by [`OutlineTree::events`]. Uses an explicit stack, so
/// outline depth is bounded by memory only.
pub struct Events<'a> {
    tree: &'a OutlineTree,
    /// `(node, entered)`, top of the stack is next
    pending: Vec<(NodeId, bool)>,
}

impl<'a> Iterator for Events<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (handle, entered) = self.pending.pop()?;
        let node = self.tree.node(handle);
        if entered {
            return Some(WalkEvent::Leave(node));
        }
        self.pending.push((handle, true));
        self.pending
            .extend(node.children.iter().rev().map(|&child| (child, false)));
        Some(WalkEvent::Enter(node))
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::build;
    use crate::error::OutlineError;
    use crate::heading::HeadingRecord;
    use crate::tree::WalkEvent;

    fn abc_tree() -> crate::OutlineTree {
        build(&[
            HeadingRecord::new(1, "A"),
            HeadingRecord::new(2, "B"),
            HeadingRecord::new(3, "C"),
            HeadingRecord::new(2, "D"),
        ])
    }

    #[test]
    fn test_active_path_root_to_node() {
        let tree = abc_tree();
        let path: Vec<&str> = tree
            .find_active_path("c")
            .unwrap()
            .iter()
            .map(|node| node.text())
            .collect();
        assert_eq!(path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_active_path_of_root_is_itself() {
        let tree = abc_tree();
        let path = tree.find_active_path("a").unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].id(), "a");
    }

    #[test]
    fn test_active_path_missing_id() {
        let tree = abc_tree();
        assert_eq!(
            tree.find_active_path("missing"),
            Err(OutlineError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_depth_and_parent() {
        let tree = abc_tree();
        let c = tree.get("c").unwrap();
        assert_eq!(tree.depth(c), 3);
        assert_eq!(tree.parent(c).map(|node| node.id()), Some("b"));

        let d = tree.get("d").unwrap();
        assert_eq!(tree.depth(d), 2);
        assert_eq!(tree.parent(d).map(|node| node.id()), Some("a"));
        assert!(tree.get("a").unwrap().is_root());
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = abc_tree();
        let walked: Vec<&str> = tree.walk().map(|node| node.id()).collect();
        assert_eq!(walked, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_events_enter_and_leave() {
        let tree = abc_tree();
        let events: Vec<String> = tree
            .events()
            .map(|event| match event {
                WalkEvent::Enter(node) => format!("+{}", node.id()),
                WalkEvent::Leave(node) => format!("-{}", node.id()),
            })
            .collect();
        assert_eq!(events, vec!["+a", "+b", "+c", "-c", "-b", "+d", "-d", "-a"]);
    }

    #[test]
    fn test_events_on_deep_outline() {
        let headings: Vec<HeadingRecord> = (1..=20_000)
            .map(|level| HeadingRecord::new(level, format!("H{}", level)))
            .collect();
        let tree = build(&headings);

        let mut depth = 0usize;
        let mut max_depth = 0usize;
        for event in tree.events() {
            match event {
                WalkEvent::Enter(_) => {
                    depth += 1;
                    max_depth = max_depth.max(depth);
                }
                WalkEvent::Leave(_) => depth -= 1,
            }
        }
        assert_eq!(depth, 0);
        assert_eq!(max_depth, 20_000);
        assert_eq!(tree.walk().count(), 20_000);
    }

    #[test]
    fn test_is_last_sibling() {
        let tree = abc_tree();
        assert!(tree.is_last_sibling(tree.get("a").unwrap()));
        assert!(!tree.is_last_sibling(tree.get("b").unwrap()));
        assert!(tree.is_last_sibling(tree.get("c").unwrap()));
        assert!(tree.is_last_sibling(tree.get("d").unwrap()));
    }
}
