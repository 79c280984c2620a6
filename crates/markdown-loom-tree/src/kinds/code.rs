use super::Variant;
use crate::error::{Result, out_of_range};
use crate::render::MarkdownWriter;
use crate::{Kind, NodeId, Tree};

/// Backtick code span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineCode {
    text: String,
}

impl InlineCode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Variant for InlineCode {
    const KIND: Kind = Kind::InlineCode;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_inline_code(&self.text);
    }
}

/// Fenced code block with an optional info string (usually a language).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FencedCodeBlock {
    text: String,
    info: Option<String>,
}

impl FencedCodeBlock {
    pub fn new(text: impl Into<String>, info: Option<&str>) -> Result<Self> {
        if let Some(info) = info {
            // The info string shares the opening fence line.
            if info.contains(['\n', '\r']) {
                return Err(out_of_range(
                    "info",
                    format!("info string {info:?} spans more than one line"),
                ));
            }
        }
        Ok(Self {
            text: text.into(),
            info: info.map(str::to_string),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }
}

impl Variant for FencedCodeBlock {
    const KIND: Kind = Kind::FencedCodeBlock;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_fenced_code_block(&self.text, self.info.as_deref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndentedCodeBlock {
    text: String,
}

impl IndentedCodeBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Variant for IndentedCodeBlock {
    const KIND: Kind = Kind::IndentedCodeBlock;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_indented_code_block(&self.text);
    }
}
