//! Concrete node kinds.
//!
//! Each kind is its own type and owns everything that is specific to it:
//! scalar validation in its constructor, the children it accepts and the
//! writer calls it makes when rendered. [`NodeValue`] wraps them all so the
//! arena can store any kind in one slot.

pub mod block;
pub mod code;
pub mod emphasis;
pub mod heading;
pub mod link;
pub mod list;
pub mod reference;
pub mod table;
pub mod text;

pub use block::{BlockQuote, Document, HorizontalRule};
pub use code::{FencedCodeBlock, IndentedCodeBlock, InlineCode};
pub use emphasis::{Bold, InlineContainer, Italic, Strikethrough};
pub use heading::Heading;
pub use link::{Autolink, Image, ImageReference, Link, LinkDefinition, LinkReference};
pub use list::{BulletItem, BulletList, OrderedItem, OrderedList, TaskItem, TaskList};
pub use reference::{CharReference, Comment, EntityReference};
pub use table::{Table, TableColumn, TableRow};
pub use text::{RawText, Text};

use crate::render::MarkdownWriter;
use crate::{Kind, NodeId, Tree};

/// Behaviour shared by every concrete node kind.
pub trait Variant: Clone + Into<NodeValue> {
    const KIND: Kind;

    /// Child grammar. Leaves accept nothing.
    fn allows_child(&self, kind: Kind) -> bool {
        let _ = kind;
        false
    }

    /// Whether appended strings may be merged into a trailing text run
    /// instead of becoming a new text leaf.
    fn concatenates_text(&self) -> bool {
        true
    }

    /// Emits this node through `writer`. Containers recurse into their
    /// content with [`Tree::render_content`].
    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter);
}

/// Typed access to the payload inside a [`NodeValue`].
///
/// Implemented for every kind, so [`Tree::get_mut`] can hand out the
/// concrete struct without letting callers swap the node's kind.
pub trait Payload: Sized {
    fn from_value(value: &NodeValue) -> Option<&Self>;
    fn from_value_mut(value: &mut NodeValue) -> Option<&mut Self>;
}

/// Grammar of containers holding inline content only.
pub(crate) fn inline_allows(kind: Kind) -> bool {
    kind.is_inline()
}

/// Grammar of document, block quote and list items.
pub(crate) fn block_allows(kind: Kind) -> bool {
    kind.is_inline() || kind.is_block()
}

macro_rules! node_value {
    ($($variant:ident),+ $(,)?) => {
        /// Payload of a node in the [`Tree`]: one variant per concrete kind.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum NodeValue {
            $($variant($variant)),+
        }

        impl NodeValue {
            pub fn kind(&self) -> Kind {
                match self {
                    $(NodeValue::$variant(_) => <$variant as Variant>::KIND),+
                }
            }

            pub(crate) fn allows_child(&self, kind: Kind) -> bool {
                match self {
                    $(NodeValue::$variant(value) => value.allows_child(kind)),+
                }
            }

            pub(crate) fn concatenates_text(&self) -> bool {
                match self {
                    $(NodeValue::$variant(value) => value.concatenates_text()),+
                }
            }

            pub(crate) fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
                match self {
                    $(NodeValue::$variant(value) => value.render(tree, id, writer)),+
                }
            }
        }

        $(
            impl From<$variant> for NodeValue {
                fn from(value: $variant) -> Self {
                    NodeValue::$variant(value)
                }
            }

            impl Payload for $variant {
                fn from_value(value: &NodeValue) -> Option<&Self> {
                    match value {
                        NodeValue::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_value_mut(value: &mut NodeValue) -> Option<&mut Self> {
                    match value {
                        NodeValue::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

node_value!(
    Text,
    RawText,
    InlineCode,
    Link,
    Image,
    Autolink,
    LinkReference,
    ImageReference,
    LinkDefinition,
    CharReference,
    EntityReference,
    Comment,
    FencedCodeBlock,
    IndentedCodeBlock,
    HorizontalRule,
    Document,
    InlineContainer,
    Bold,
    Italic,
    Strikethrough,
    Heading,
    BulletItem,
    OrderedItem,
    TaskItem,
    BulletList,
    OrderedList,
    TaskList,
    BlockQuote,
    Table,
    TableRow,
    TableColumn,
);

impl NodeValue {
    /// Text of a plain or raw text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NodeValue::Text(text) => Some(text.value()),
            NodeValue::RawText(raw) => Some(raw.value()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Text::new("a").into(), Kind::Text)]
    #[case(Bold.into(), Kind::Bold)]
    #[case(Heading::new(2).unwrap().into(), Kind::Heading)]
    #[case(TableRow.into(), Kind::TableRow)]
    #[case(HorizontalRule::new().into(), Kind::HorizontalRule)]
    fn value_reports_its_kind(#[case] value: NodeValue, #[case] kind: Kind) {
        assert_eq!(value.kind(), kind);
    }

    #[rstest]
    #[case(Bold.into(), Kind::Text, true)]
    #[case(Bold.into(), Kind::Italic, true)]
    #[case(Bold.into(), Kind::Heading, false)]
    #[case(Document.into(), Kind::Heading, true)]
    #[case(Document.into(), Kind::TableRow, false)]
    #[case(BlockQuote.into(), Kind::BlockQuote, true)]
    #[case(OrderedList.into(), Kind::OrderedItem, true)]
    #[case(OrderedList.into(), Kind::BulletItem, false)]
    #[case(TaskList.into(), Kind::TaskItem, true)]
    #[case(TaskList.into(), Kind::Text, false)]
    #[case(BulletList.into(), Kind::BulletItem, true)]
    #[case(Table.into(), Kind::TableRow, true)]
    #[case(Table.into(), Kind::TableColumn, true)]
    #[case(Table.into(), Kind::Bold, false)]
    #[case(TableRow.into(), Kind::TableColumn, true)]
    #[case(TableRow.into(), Kind::Text, false)]
    #[case(TableColumn.into(), Kind::Link, true)]
    #[case(Text::new("leaf").into(), Kind::Text, false)]
    fn grammar(#[case] value: NodeValue, #[case] child: Kind, #[case] allowed: bool) {
        assert_eq!(value.allows_child(child), allowed);
    }

    #[test]
    fn table_row_keeps_cells_distinct() {
        assert!(!NodeValue::from(TableRow).concatenates_text());
        assert!(NodeValue::from(Bold).concatenates_text());
    }

    #[test]
    fn payload_matches_variant_only() {
        let mut value = NodeValue::from(Heading::new(3).unwrap());
        assert_eq!(Heading::from_value(&value).map(Heading::level), Some(3));
        assert!(Text::from_value(&value).is_none());

        Heading::from_value_mut(&mut value)
            .unwrap()
            .set_level(1)
            .unwrap();
        assert_eq!(value, NodeValue::from(Heading::new(1).unwrap()));
    }

    #[test]
    fn as_text_reads_text_and_raw_leaves() {
        assert_eq!(NodeValue::from(Text::new("a")).as_text(), Some("a"));
        assert_eq!(NodeValue::from(RawText::new("<b>")).as_text(), Some("<b>"));
        assert_eq!(NodeValue::from(Bold).as_text(), None);
    }
}
