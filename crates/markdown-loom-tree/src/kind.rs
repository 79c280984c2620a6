use std::fmt;

/// Discriminant of every concrete node type.
///
/// A node's kind is fixed when it is created and drives the child grammar
/// checked by [`Tree::add`](crate::Tree::add).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    // === Leaves ===
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

    // === Containers ===
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
}

impl Kind {
    /// Returns true if nodes of this kind can own children.
    pub fn is_container(self) -> bool {
        (self as u8) >= (Self::Document as u8)
    }

    /// Kinds that may appear inside a run of inline content.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::RawText
                | Self::Link
                | Self::Image
                | Self::Autolink
                | Self::LinkReference
                | Self::ImageReference
                | Self::InlineCode
                | Self::CharReference
                | Self::EntityReference
                | Self::Comment
                | Self::Bold
                | Self::Italic
                | Self::Strikethrough
                | Self::InlineContainer
        )
    }

    /// Kinds that only a block container (document, quote, list item) may hold.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Self::Heading
                | Self::BulletList
                | Self::OrderedList
                | Self::TaskList
                | Self::BulletItem
                | Self::OrderedItem
                | Self::TaskItem
                | Self::FencedCodeBlock
                | Self::IndentedCodeBlock
                | Self::BlockQuote
                | Self::HorizontalRule
                | Self::Table
                | Self::LinkDefinition
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
