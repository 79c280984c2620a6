//! Inline containers: emphasis spans and the plain inline grouping node.

use super::{Variant, inline_allows};
use crate::render::MarkdownWriter;
use crate::{Kind, NodeId, Tree};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bold;

impl Variant for Bold {
    const KIND: Kind = Kind::Bold;

    fn allows_child(&self, kind: Kind) -> bool {
        inline_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_bold();
        tree.render_content(id, writer);
        writer.write_end_bold();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Italic;

impl Variant for Italic {
    const KIND: Kind = Kind::Italic;

    fn allows_child(&self, kind: Kind) -> bool {
        inline_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_italic();
        tree.render_content(id, writer);
        writer.write_end_italic();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strikethrough;

impl Variant for Strikethrough {
    const KIND: Kind = Kind::Strikethrough;

    fn allows_child(&self, kind: Kind) -> bool {
        inline_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_strikethrough();
        tree.render_content(id, writer);
        writer.write_end_strikethrough();
    }
}

/// Groups inline content without adding any markup of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineContainer;

impl Variant for InlineContainer {
    const KIND: Kind = Kind::InlineContainer;

    fn allows_child(&self, kind: Kind) -> bool {
        inline_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        tree.render_content(id, writer);
    }
}
