//! List items and the lists that group them.
//!
//! Items are block containers. Each list accepts only its own item kind.

use super::{Variant, block_allows};
use crate::render::MarkdownWriter;
use crate::{Kind, NodeId, Tree};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulletItem;

impl Variant for BulletItem {
    const KIND: Kind = Kind::BulletItem;

    fn allows_child(&self, kind: Kind) -> bool {
        block_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_bullet_item();
        tree.render_content(id, writer);
        writer.write_end_bullet_item();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderedItem {
    number: u32,
}

impl OrderedItem {
    pub fn new(number: u32) -> Self {
        Self { number }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn set_number(&mut self, number: u32) {
        self.number = number;
    }
}

impl Variant for OrderedItem {
    const KIND: Kind = Kind::OrderedItem;

    fn allows_child(&self, kind: Kind) -> bool {
        block_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_ordered_item(self.number);
        tree.render_content(id, writer);
        writer.write_end_ordered_item();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskItem {
    completed: bool,
}

impl TaskItem {
    pub fn new(completed: bool) -> Self {
        Self { completed }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

impl Variant for TaskItem {
    const KIND: Kind = Kind::TaskItem;

    fn allows_child(&self, kind: Kind) -> bool {
        block_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_task_item(self.completed);
        tree.render_content(id, writer);
        writer.write_end_task_item();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulletList;

impl Variant for BulletList {
    const KIND: Kind = Kind::BulletList;

    fn allows_child(&self, kind: Kind) -> bool {
        kind == Kind::BulletItem
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_bullet_list();
        tree.render_content(id, writer);
        writer.write_end_bullet_list();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderedList;

impl Variant for OrderedList {
    const KIND: Kind = Kind::OrderedList;

    fn allows_child(&self, kind: Kind) -> bool {
        kind == Kind::OrderedItem
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_ordered_list();
        tree.render_content(id, writer);
        writer.write_end_ordered_list();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskList;

impl Variant for TaskList {
    const KIND: Kind = Kind::TaskList;

    fn allows_child(&self, kind: Kind) -> bool {
        kind == Kind::TaskItem
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_task_list();
        tree.render_content(id, writer);
        writer.write_end_task_list();
    }
}
