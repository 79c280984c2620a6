use crate::NodeId;

/// The children of a container.
///
/// Exactly one state holds at a time. `Text` is the string fast path and
/// is equivalent to a ring holding one text leaf; it turns into `Ring` at
/// most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    /// Anchor of the child ring: the last child. Its `next` is the first.
    Ring(NodeId),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    pub fn anchor(&self) -> Option<NodeId> {
        match self {
            Content::Ring(anchor) => Some(*anchor),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}
