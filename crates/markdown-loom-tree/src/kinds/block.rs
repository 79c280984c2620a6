//! Document root, block quotes and horizontal rules.

use markdown_loom_config::{RuleFormat, RuleStyle};

use super::{Variant, block_allows};
use crate::error::{Result, out_of_range};
use crate::render::MarkdownWriter;
use crate::{Kind, NodeId, Tree};

/// Root of a markdown document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Document;

impl Variant for Document {
    const KIND: Kind = Kind::Document;

    fn allows_child(&self, kind: Kind) -> bool {
        block_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        tree.render_content(id, writer);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockQuote;

impl Variant for BlockQuote {
    const KIND: Kind = Kind::BlockQuote;

    fn allows_child(&self, kind: Kind) -> bool {
        block_allows(kind)
    }

    fn render(&self, tree: &Tree, id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_start_block_quote();
        tree.render_content(id, writer);
        writer.write_end_block_quote();
    }
}

/// Thematic break. Without an explicit format the writer's default is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HorizontalRule {
    format: Option<RuleFormat>,
}

impl HorizontalRule {
    pub fn new() -> Self {
        Self { format: None }
    }

    pub fn with_format(style: RuleStyle, count: usize, separator: &str) -> Result<Self> {
        if count < 1 {
            return Err(out_of_range("count", "a rule needs at least one character"));
        }
        if !separator.chars().all(|c| c == ' ' || c == '\t') {
            return Err(out_of_range(
                "separator",
                format!("separator {separator:?} must be spaces or tabs"),
            ));
        }
        Ok(Self {
            format: Some(RuleFormat {
                style,
                count,
                separator: separator.to_string(),
            }),
        })
    }

    pub fn format(&self) -> Option<&RuleFormat> {
        self.format.as_ref()
    }
}

impl Variant for HorizontalRule {
    const KIND: Kind = Kind::HorizontalRule;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_horizontal_rule(self.format.as_ref());
    }
}
