//! Links, images and the reference-style variants of both.

use super::Variant;
use crate::error::{Result, check_url, require};
use crate::render::MarkdownWriter;
use crate::{Kind, NodeId, Tree};

/// Inline link `[text](url "title")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    text: String,
    url: String,
    title: Option<String>,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        check_url(&url)?;
        Ok(Self {
            text: text.into(),
            url,
            title: None,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        check_url(&url)?;
        self.url = url;
        Ok(())
    }
}

impl Variant for Link {
    const KIND: Kind = Kind::Link;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_link(&self.text, &self.url, self.title.as_deref());
    }
}

/// Inline image `![text](url "title")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    text: String,
    url: String,
    title: Option<String>,
}

impl Image {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        check_url(&url)?;
        Ok(Self {
            text: text.into(),
            url,
            title: None,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Variant for Image {
    const KIND: Kind = Kind::Image;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_image(&self.text, &self.url, self.title.as_deref());
    }
}

/// `<url>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autolink {
    url: String,
}

impl Autolink {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        require("url", &url)?;
        check_url(&url)?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Variant for Autolink {
    const KIND: Kind = Kind::Autolink;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_autolink(&self.url);
    }
}

/// `[text][label]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    text: String,
    label: String,
}

impl LinkReference {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        require("label", &label)?;
        Ok(Self {
            text: text.into(),
            label,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Variant for LinkReference {
    const KIND: Kind = Kind::LinkReference;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_link_reference(&self.text, &self.label);
    }
}

/// `![text][label]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    text: String,
    label: String,
}

impl ImageReference {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        require("label", &label)?;
        Ok(Self {
            text: text.into(),
            label,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Variant for ImageReference {
    const KIND: Kind = Kind::ImageReference;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_image_reference(&self.text, &self.label);
    }
}

/// Block-level `[label]: url "title"` definition targeted by references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefinition {
    label: String,
    url: String,
    title: Option<String>,
}

impl LinkDefinition {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let url = url.into();
        require("label", &label)?;
        require("url", &url)?;
        check_url(&url)?;
        Ok(Self {
            label,
            url,
            title: None,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Variant for LinkDefinition {
    const KIND: Kind = Kind::LinkDefinition;

    fn render(&self, _tree: &Tree, _id: NodeId, writer: &mut dyn MarkdownWriter) {
        writer.write_link_definition(&self.label, &self.url, self.title.as_deref());
    }
}
