use log::debug;

use crate::iter::{Ancestors, Descendants, Elements, ElementsAfterSelf, ElementsBeforeSelf};
use crate::kinds::Payload;
use crate::render::MarkdownWriter;
use crate::{Content, Error, Kind, NodeId, NodeValue, Result};

/// One arena slot.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) value: NodeValue,
    /// Back-link for navigation only; the container's ring owns membership.
    pub(crate) parent: Option<NodeId>,
    /// Next sibling in the parent's ring, or the node itself when detached.
    pub(crate) next: NodeId,
    /// Always `Empty` for leaves.
    pub(crate) content: Content,
}

/// Arena owning every node of one or more markdown trees.
///
/// Nodes are never freed: removing a node detaches it, and the detached
/// node can be added somewhere else later. All structural mutation goes
/// through `&mut self`, so an enumeration borrowed from the tree can never
/// observe a concurrent edit.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<NodeData>,
}

impl Tree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Stores `value` as a new detached node.
    pub fn create(&mut self, value: impl Into<NodeValue>) -> NodeId {
        debug_assert!(self.nodes.len() < u32::MAX as usize);
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            value: value.into(),
            parent: None,
            next: id,
            content: Content::Empty,
        });
        id
    }

    /// Number of nodes ever created in this arena, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> Kind {
        self.node(id).value.kind()
    }

    pub fn value(&self, id: NodeId) -> &NodeValue {
        &self.node(id).value
    }

    /// The node's payload as its concrete type, if it is of kind `T`.
    pub fn get<T: Payload>(&self, id: NodeId) -> Option<&T> {
        T::from_value(&self.node(id).value)
    }

    /// Mutable access to the node's scalar fields. The kind itself cannot
    /// change through this handle.
    pub fn get_mut<T: Payload>(&mut self, id: NodeId) -> Option<&mut T> {
        T::from_value_mut(&mut self.node_mut(id).value)
    }

    /// Replaces the scalar fields of a node with another value of the same kind.
    pub fn set_value(&mut self, id: NodeId, value: impl Into<NodeValue>) -> Result<()> {
        let value = value.into();
        let kind = self.kind(id);
        if value.kind() != kind {
            return Err(Error::NotAllowed {
                child: value.kind(),
                parent: kind,
            });
        }
        self.node_mut(id).value = value;
        Ok(())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Raw ring link. For a detached node this is the node itself.
    pub fn next(&self, id: NodeId) -> NodeId {
        self.node(id).next
    }

    pub fn content(&self, id: NodeId) -> &Content {
        &self.node(id).content
    }

    pub(crate) fn anchor(&self, container: NodeId) -> Option<NodeId> {
        self.node(container).content.anchor()
    }

    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors::new(self, self.parent(id))
    }

    pub fn ancestors_and_self(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors::new(self, Some(id))
    }

    /// Topmost ancestor, or `id` itself when it is detached.
    pub fn root(&self, id: NodeId) -> NodeId {
        self.ancestors_and_self(id).last().unwrap_or(id)
    }

    pub fn elements_before_self(&self, id: NodeId) -> ElementsBeforeSelf<'_> {
        ElementsBeforeSelf::new(self, id)
    }

    pub fn elements_after_self(&self, id: NodeId) -> ElementsAfterSelf<'_> {
        ElementsAfterSelf::new(self, id)
    }

    /// Sibling after `id`, or `None` when `id` is last or detached.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let anchor = self.anchor(self.parent(id)?)?;
        (anchor != id).then(|| self.next(id))
    }

    /// Sibling before `id`, or `None` when `id` is first or detached.
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let anchor = self.anchor(self.parent(id)?)?;
        if self.next(anchor) == id {
            return None;
        }
        self.elements_before_self(id).last()
    }

    /// Members of the child ring only; `Text` content yields nothing.
    pub(crate) fn ring(&self, container: NodeId) -> Elements<'_> {
        Elements::new(self, container)
    }

    /// Pre-order walk below `id`, in ring order.
    pub fn descendants(&mut self, id: NodeId) -> Descendants<'_> {
        self.materialize_subtree(id);
        Descendants::new(self, id, false)
    }

    pub fn descendants_and_self(&mut self, id: NodeId) -> Descendants<'_> {
        self.materialize_subtree(id);
        Descendants::new(self, id, true)
    }

    /// Unlinks `id` from its parent.
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        let Some(parent) = self.parent(id) else {
            debug!("remove called on detached {} {id:?}", self.kind(id));
            return Err(Error::Detached);
        };
        self.remove_element(parent, id);
        Ok(())
    }

    /// Dispatches `id` and its content to `writer`, depth first.
    pub fn render(&self, id: NodeId, writer: &mut dyn MarkdownWriter) {
        self.node(id).value.render(self, id, writer);
    }

    /// Dispatches the content of a container: the inline string, or each
    /// ring member in order.
    pub fn render_content(&self, container: NodeId, writer: &mut dyn MarkdownWriter) {
        match &self.node(container).content {
            Content::Empty => {}
            Content::Text(text) => writer.write_text(text),
            Content::Ring(_) => {
                for child in self.ring(container) {
                    self.render(child, writer);
                }
            }
        }
    }
}
