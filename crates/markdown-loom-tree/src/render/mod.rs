//! Render dispatch.
//!
//! The tree only decides *what* is emitted and in which order: every node
//! calls the [`MarkdownWriter`] method for its kind, containers wrap their
//! children in a start/end pair, and children are visited depth first in
//! ring order. Escaping, markers and layout belong to the writer.

mod string_writer;

pub use string_writer::StringWriter;

use markdown_loom_config::{MarkdownFormat, RuleFormat};

use crate::{NodeId, Tree};

/// Receiver of the render dispatch.
pub trait MarkdownWriter {
    fn write_text(&mut self, text: &str);
    fn write_raw(&mut self, text: &str);
    fn write_inline_code(&mut self, text: &str);
    fn write_link(&mut self, text: &str, url: &str, title: Option<&str>);
    fn write_image(&mut self, text: &str, url: &str, title: Option<&str>);
    fn write_autolink(&mut self, url: &str);
    fn write_link_reference(&mut self, text: &str, label: &str);
    fn write_image_reference(&mut self, text: &str, label: &str);
    fn write_link_definition(&mut self, label: &str, url: &str, title: Option<&str>);
    fn write_char_reference(&mut self, value: u32);
    fn write_entity_reference(&mut self, name: &str);
    fn write_comment(&mut self, text: &str);
    fn write_fenced_code_block(&mut self, text: &str, info: Option<&str>);
    fn write_indented_code_block(&mut self, text: &str);
    /// `None` means the writer's own default rule.
    fn write_horizontal_rule(&mut self, format: Option<&RuleFormat>);

    fn write_start_bold(&mut self);
    fn write_end_bold(&mut self);
    fn write_start_italic(&mut self);
    fn write_end_italic(&mut self);
    fn write_start_strikethrough(&mut self);
    fn write_end_strikethrough(&mut self);
    fn write_start_heading(&mut self, level: u8);
    fn write_end_heading(&mut self, level: u8);
    fn write_start_block_quote(&mut self);
    fn write_end_block_quote(&mut self);
    fn write_start_bullet_list(&mut self);
    fn write_end_bullet_list(&mut self);
    fn write_start_ordered_list(&mut self);
    fn write_end_ordered_list(&mut self);
    fn write_start_task_list(&mut self);
    fn write_end_task_list(&mut self);
    fn write_start_bullet_item(&mut self);
    fn write_end_bullet_item(&mut self);
    fn write_start_ordered_item(&mut self, number: u32);
    fn write_end_ordered_item(&mut self);
    fn write_start_task_item(&mut self, completed: bool);
    fn write_end_task_item(&mut self);
    fn write_start_table(&mut self);
    fn write_end_table(&mut self);
    fn write_start_table_row(&mut self);
    fn write_end_table_row(&mut self);
    fn write_start_table_column(&mut self);
    fn write_end_table_column(&mut self);
}

impl Tree {
    /// Markdown text of `id` and everything below it, using the default format.
    pub fn to_markdown(&self, id: NodeId) -> String {
        self.to_markdown_with(id, &MarkdownFormat::default())
    }

    pub fn to_markdown_with(&self, id: NodeId, format: &MarkdownFormat) -> String {
        let mut writer = StringWriter::new(format.clone());
        self.render(id, &mut writer);
        writer.finish()
    }
}
