//! Lazy walks over the arena.
//!
//! Every step re-reads the `parent`/`next` links instead of working from a
//! snapshot. The iterators borrow the [`Tree`], so the tree cannot be
//! mutated while one of them is alive.

use crate::{NodeId, Tree};

/// Containers above a node, nearest first.
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(tree: &'a Tree, start: Option<NodeId>) -> Self {
        Self { tree, next: start }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Children of a container from first to last.
///
/// Starts at `anchor.next` and stops right after yielding the anchor.
pub struct Elements<'a> {
    tree: &'a Tree,
    container: NodeId,
    current: Option<NodeId>,
}

impl<'a> Elements<'a> {
    pub(crate) fn new(tree: &'a Tree, container: NodeId) -> Self {
        let current = tree.anchor(container).map(|anchor| tree.next(anchor));
        Self {
            tree,
            container,
            current,
        }
    }
}

impl Iterator for Elements<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.current?;
        self.current = match self.tree.anchor(self.container) {
            Some(anchor) if anchor != current => Some(self.tree.next(current)),
            _ => None,
        };
        Some(current)
    }
}

/// Siblings from the first child up to, but excluding, the node.
pub struct ElementsBeforeSelf<'a> {
    tree: &'a Tree,
    target: NodeId,
    current: Option<NodeId>,
}

impl<'a> ElementsBeforeSelf<'a> {
    pub(crate) fn new(tree: &'a Tree, target: NodeId) -> Self {
        let current = tree
            .parent(target)
            .and_then(|parent| tree.anchor(parent))
            .map(|anchor| tree.next(anchor));
        Self {
            tree,
            target,
            current,
        }
    }
}

impl Iterator for ElementsBeforeSelf<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.current?;
        if current == self.target {
            self.current = None;
            return None;
        }
        self.current = Some(self.tree.next(current));
        Some(current)
    }
}

/// Siblings after the node, up to and including the last child.
pub struct ElementsAfterSelf<'a> {
    tree: &'a Tree,
    current: Option<NodeId>,
}

impl<'a> ElementsAfterSelf<'a> {
    pub(crate) fn new(tree: &'a Tree, target: NodeId) -> Self {
        let anchor = tree.parent(target).and_then(|parent| tree.anchor(parent));
        let current = match anchor {
            Some(anchor) if anchor != target => Some(tree.next(target)),
            _ => None,
        };
        Self { tree, current }
    }
}

impl Iterator for ElementsAfterSelf<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.current?;
        // Stop once the walk passes the anchor of the current parent.
        let anchor = self
            .tree
            .parent(current)
            .and_then(|parent| self.tree.anchor(parent));
        self.current = match anchor {
            Some(anchor) if anchor != current => Some(self.tree.next(current)),
            _ => None,
        };
        Some(current)
    }
}

/// Pre-order depth-first walk of a subtree in ring order.
///
/// Uses the ring links to move between siblings and climbs through
/// `parent` when a ring is exhausted, so no stack is kept.
pub struct Descendants<'a> {
    tree: &'a Tree,
    root: NodeId,
    current: Option<NodeId>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(tree: &'a Tree, root: NodeId, include_self: bool) -> Self {
        let current = if include_self {
            Some(root)
        } else {
            first_child(tree, root)
        };
        Self {
            tree,
            root,
            current,
        }
    }

    fn successor(&self, node: NodeId) -> Option<NodeId> {
        if let Some(first) = first_child(self.tree, node) {
            return Some(first);
        }
        let mut node = node;
        loop {
            if node == self.root {
                return None;
            }
            let parent = self.tree.parent(node)?;
            if self.tree.anchor(parent) != Some(node) {
                return Some(self.tree.next(node));
            }
            node = parent;
        }
    }
}

fn first_child(tree: &Tree, container: NodeId) -> Option<NodeId> {
    tree.anchor(container).map(|anchor| tree.next(anchor))
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.current?;
        self.current = self.successor(current);
        Some(current)
    }
}
