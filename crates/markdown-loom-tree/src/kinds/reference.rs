//! Character and entity references, and HTML comments.

use super::Variant;
use crate::error::{Result, out_of_range, require};
use crate::render::MarkdownWriter;
use crate::{Kind, NodeId, Tree};

/// Numeric character reference such as `&#x41;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharReference {
    value: u32,
}

impl CharReference {
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 || char::from_u32(value).is_none() {
            return Err(out_of_range(
                "value",
                format!("{value:#X} is not a Unicode scalar value"),
            ));
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl From<char> for CharReference {
    fn from(c: char) -> Self {
        Self { value: c as u32 }
    }
}

impl Variant for CharReference {
    const KIND: Kind = Kind::CharReference;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_char_reference(self.value);
    }
}

/// Named entity reference such as `&copy;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityReference {
    name: String,
}

impl EntityReference {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        require("name", &name)?;
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(out_of_range(
                "name",
                format!("entity name {name:?} must be ASCII alphanumeric"),
            ));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Variant for EntityReference {
    const KIND: Kind = Kind::EntityReference;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_entity_reference(&self.name);
    }
}

/// `<!-- value -->`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    value: String,
}

impl Comment {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.contains("-->") {
            return Err(out_of_range(
                "value",
                "comment text cannot contain \"-->\"",
            ));
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Variant for Comment {
    const KIND: Kind = Kind::Comment;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_comment(&self.value);
    }
}
