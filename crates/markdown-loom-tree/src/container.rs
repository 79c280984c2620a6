//! Container mutation: adding, removing, enumerating and cloning children.

use log::{debug, trace};

use crate::iter::Elements;
use crate::kinds::Text;
use crate::{Content, Error, Fragment, Kind, NodeId, NodeValue, Result, Tree};

impl Tree {
    /// Adds a node, a string or a sequence of both to `container`.
    ///
    /// The whole fragment is checked against the container's grammar before
    /// anything is linked, so a rejected call leaves the tree unchanged.
    pub fn add(&mut self, container: NodeId, value: impl Into<Fragment>) -> Result<()> {
        let fragment = value.into();
        self.check_fragment(container, &fragment)?;
        self.add_fragment(container, fragment);
        Ok(())
    }

    /// Links `element` as the last child of `container`.
    ///
    /// An element that already has a parent, or that is the root of the
    /// tree `container` belongs to, is deep-cloned first. The returned id is
    /// the node actually linked.
    pub fn add_element(&mut self, container: NodeId, element: NodeId) -> Result<NodeId> {
        self.check_child(container, self.kind(element))?;
        Ok(self.link_element(container, element))
    }

    /// Appends text to `container`, merging it into a trailing text run
    /// when the container's kind allows that. Kinds that keep their
    /// children distinct (table rows) store every string as its own leaf.
    pub fn add_string(&mut self, container: NodeId, text: &str) -> Result<()> {
        self.check_string(container)?;
        self.append_text(container, text);
        Ok(())
    }

    /// Detaches every child.
    pub fn remove_all(&mut self, container: NodeId) {
        let children: Vec<NodeId> = self.ring(container).collect();
        for child in children {
            self.detach(child);
        }
        self.node_mut(container).content = Content::Empty;
    }

    /// Children from first to last. `Text` content is materialized into a
    /// text leaf first.
    pub fn elements(&mut self, container: NodeId) -> Elements<'_> {
        self.materialize(container);
        Elements::new(self, container)
    }

    pub fn first_element(&mut self, container: NodeId) -> Option<NodeId> {
        self.materialize(container);
        self.anchor(container).map(|anchor| self.next(anchor))
    }

    pub fn last_element(&mut self, container: NodeId) -> Option<NodeId> {
        self.materialize(container);
        self.anchor(container)
    }

    pub fn is_empty(&self, container: NodeId) -> bool {
        self.content(container).is_empty()
    }

    /// Number of children, counting `Text` content as one leaf.
    pub fn element_count(&self, container: NodeId) -> usize {
        match self.content(container) {
            Content::Empty => 0,
            Content::Text(_) => 1,
            Content::Ring(_) => self.ring(container).count(),
        }
    }

    /// Deep copy of `id`: a new detached node of the same kind whose
    /// children are copies as well. No node is shared with the source.
    pub fn clone_node(&mut self, id: NodeId) -> NodeId {
        let source = self.node(id);
        let value = source.value.clone();
        let content = source.content.clone();

        let copy = self.create(value);
        match content {
            Content::Empty => {}
            Content::Text(text) => self.node_mut(copy).content = Content::Text(text),
            Content::Ring(_) => {
                let children: Vec<NodeId> = self.ring(id).collect();
                for child in children {
                    let child_copy = self.clone_node(child);
                    self.link_last(copy, child_copy);
                }
            }
        }
        copy
    }

    pub(crate) fn remove_element(&mut self, container: NodeId, element: NodeId) {
        let Some(anchor) = self.anchor(container) else {
            return;
        };

        let mut prev = anchor;
        while self.next(prev) != element {
            prev = self.next(prev);
            if prev == anchor {
                return;
            }
        }

        if prev == element {
            self.node_mut(container).content = Content::Empty;
        } else {
            if element == anchor {
                self.node_mut(container).content = Content::Ring(prev);
            }
            let after = self.next(element);
            self.node_mut(prev).next = after;
        }
        trace!("unlinked {element:?} from {container:?}");
        self.detach(element);
    }

    /// Turns `Text` content into a one-leaf ring. Exclusive access means no
    /// other reader can have installed a leaf in between, so the
    /// compare-and-set reduces to this conditional write.
    pub(crate) fn materialize(&mut self, container: NodeId) {
        let text = match &mut self.node_mut(container).content {
            Content::Text(text) => std::mem::take(text),
            _ => return,
        };
        let leaf = self.create(Text::new(text));
        self.node_mut(leaf).parent = Some(container);
        self.node_mut(container).content = Content::Ring(leaf);
        trace!("materialized text of {container:?} as {leaf:?}");
    }

    pub(crate) fn materialize_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            self.materialize(node);
            stack.extend(self.ring(node));
        }
    }

    fn check_child(&self, container: NodeId, kind: Kind) -> Result<()> {
        let value = &self.node(container).value;
        if value.allows_child(kind) {
            Ok(())
        } else {
            debug!("rejected {kind} as a child of {} {container:?}", value.kind());
            Err(Error::NotAllowed {
                child: kind,
                parent: value.kind(),
            })
        }
    }

    fn check_fragment(&self, container: NodeId, fragment: &Fragment) -> Result<()> {
        match fragment {
            Fragment::Element(element) => self.check_child(container, self.kind(*element)),
            Fragment::Text(_) => self.check_string(container),
            Fragment::Sequence(items) => items
                .iter()
                .try_for_each(|item| self.check_fragment(container, item)),
        }
    }

    fn add_fragment(&mut self, container: NodeId, fragment: Fragment) {
        match fragment {
            Fragment::Element(element) => {
                self.link_element(container, element);
            }
            Fragment::Text(text) => self.append_text(container, &text),
            Fragment::Sequence(items) => {
                for item in items {
                    self.add_fragment(container, item);
                }
            }
        }
    }

    /// Strings are refused where text is not a valid child, except by
    /// containers that never concatenate them.
    fn check_string(&self, container: NodeId) -> Result<()> {
        if self.node(container).value.concatenates_text() {
            self.check_child(container, Kind::Text)
        } else {
            Ok(())
        }
    }

    fn link_element(&mut self, container: NodeId, element: NodeId) -> NodeId {
        let element = if self.parent(element).is_some() || self.root(container) == element {
            let copy = self.clone_node(element);
            debug!(
                "{} {element:?} is already in a tree, linking clone {copy:?} into {container:?}",
                self.kind(element)
            );
            copy
        } else {
            element
        };
        self.materialize(container);
        self.link_last(container, element);
        element
    }

    fn append_text(&mut self, container: NodeId, text: &str) {
        let concatenates = self.node(container).value.concatenates_text();
        let content = &mut self.node_mut(container).content;
        if content.is_empty() {
            *content = Content::Text(text.to_string());
            return;
        }
        if text.is_empty() {
            return;
        }
        if let Content::Text(existing) = content {
            if concatenates {
                existing.push_str(text);
                return;
            }
        }

        self.materialize(container);
        if concatenates {
            if let Some(anchor) = self.anchor(container) {
                if let NodeValue::Text(last) = &mut self.node_mut(anchor).value {
                    last.push_str(text);
                    return;
                }
            }
        }
        let leaf = self.create(Text::new(text));
        self.link_last(container, leaf);
    }

    /// O(1) append: the new element becomes the anchor and points at the
    /// old first child.
    fn link_last(&mut self, container: NodeId, element: NodeId) {
        let first = match self.anchor(container) {
            Some(anchor) => {
                let first = self.next(anchor);
                self.node_mut(anchor).next = element;
                first
            }
            None => element,
        };
        let node = self.node_mut(element);
        node.next = first;
        node.parent = Some(container);
        self.node_mut(container).content = Content::Ring(element);
    }

    fn detach(&mut self, element: NodeId) {
        let node = self.node_mut(element);
        node.parent = None;
        node.next = element;
    }
}
