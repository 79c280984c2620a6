use super::Variant;
use crate::render::MarkdownWriter;
use crate::{Kind, NodeId, Tree};

/// A run of plain text. The writer is free to escape it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_str(&mut self, value: &str) {
        self.value.push_str(value);
    }
}

impl Variant for Text {
    const KIND: Kind = Kind::Text;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_text(&self.value);
    }
}

/// Text written exactly as given, with no escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawText {
    value: String,
}

impl RawText {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Variant for RawText {
    const KIND: Kind = Kind::RawText;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_raw(&self.value);
    }
}
