//! Pipe tables. The first row is the header row.

use super::{Variant, inline_allows};
use crate::render::MarkdownWriter;
use crate::{Kind, NodeId, Tree};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Table;

impl Variant for Table {
    const KIND: Kind = Kind::Table;

    fn allows_child(&self, kind: Kind) -> bool {
        matches!(kind, Kind::TableColumn | Kind::TableRow)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_table();
        tree.render_content(id, writer);
        writer.write_end_table();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableRow;

impl Variant for TableRow {
    const KIND: Kind = Kind::TableRow;

    fn allows_child(&self, kind: Kind) -> bool {
        kind == Kind::TableColumn
    }

    fn concatenates_text(&self) -> bool {
        false
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_table_row();
        tree.render_content(id, writer);
        writer.write_end_table_row();
    }
}

/// A single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableColumn;

impl Variant for TableColumn {
    const KIND: Kind = Kind::TableColumn;

    fn allows_child(&self, kind: Kind) -> bool {
        inline_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_table_column();
        tree.render_content(id, writer);
        writer.write_end_table_column();
    }
}
