//! # markdown-loom-tree
//!
//! A mutable, in-memory markdown document tree that is built in code,
//! queried, edited and finally written out as text.
//!
//! ## Storage
//!
//! Every node lives in a [`Tree`] arena and is addressed by a [`NodeId`].
//! Parent and sibling links are ids, so nothing is reference counted and
//! there are no ownership cycles. A freshly created node is *detached*: it
//! has no parent and is the root of its own one-node tree.
//!
//! ## Children
//!
//! A container keeps its children in a circular singly-linked ring. The
//! container's [`Content`] points at the **last** child (the anchor), and
//! the anchor's `next` link is the first child, so appending is O(1):
//!
//! ```text
//! content ─► C ─next─► A ─next─► B ─next─► C
//!            last      first
//! ```
//!
//! A container that only ever received a string stores it inline as
//! [`Content::Text`]. It is turned into a real text leaf the first time the
//! children are enumerated.
//!
//! ## Quick Start
//!
//! ```
//! use markdown_loom_tree::{Kind, Tree};
//!
//! let mut tree = Tree::new();
//! let bold = tree.bold("hi").unwrap();
//!
//! let children: Vec<_> = tree.elements(bold).collect();
//! assert_eq!(children.len(), 1);
//! assert_eq!(tree.kind(children[0]), Kind::Text);
//!
//! assert_eq!(tree.to_markdown(bold), "**hi**");
//! ```

mod container;
mod content;
mod error;
mod factory;
mod fragment;
mod iter;
mod kind;
mod tree;

pub mod kinds;
pub mod render;

pub use content::Content;
pub use error::{Error, Result};
pub use fragment::Fragment;
pub use iter::{Ancestors, Descendants, Elements, ElementsAfterSelf, ElementsBeforeSelf};
pub use kind::Kind;
pub use kinds::{NodeValue, Payload, Variant};
pub use render::{MarkdownWriter, StringWriter};
pub use tree::Tree;

pub use markdown_loom_config as config;

/// Handle to a node stored in a [`Tree`].
///
/// Ids are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
