//! One constructor per node kind.
//!
//! Leaf constructors validate their scalar fields; container constructors
//! create the node and then [`add`](Tree::add) the given content, so they
//! fail when the content breaks the container's grammar.

use markdown_loom_config::RuleStyle;

use crate::kinds::{
    Autolink, BlockQuote, Bold, BulletItem, BulletList, CharReference, Comment, Document,
    EntityReference, FencedCodeBlock, Heading, HorizontalRule, Image, ImageReference,
    IndentedCodeBlock, InlineCode, InlineContainer, Italic, Link, LinkDefinition, LinkReference,
    OrderedItem, OrderedList, RawText, Strikethrough, Table, TableColumn, TableRow, TaskItem,
    TaskList, Text,
};
use crate::{Fragment, NodeId, NodeValue, Result, Tree};

impl Tree {
    fn container(
        &mut self,
        value: impl Into<NodeValue>,
        content: impl Into<Fragment>,
    ) -> Result<NodeId> {
        let id = self.create(value);
        self.add(id, content)?;
        Ok(id)
    }

    // === Leaves ===

    pub fn text(&mut self, value: impl Into<String>) -> NodeId {
        self.create(Text::new(value))
    }

    pub fn raw(&mut self, value: impl Into<String>) -> NodeId {
        self.create(RawText::new(value))
    }

    pub fn inline_code(&mut self, text: impl Into<String>) -> NodeId {
        self.create(InlineCode::new(text))
    }

    pub fn link(&mut self, text: impl Into<String>, url: impl Into<String>) -> Result<NodeId> {
        Ok(self.create(Link::new(text, url)?))
    }

    pub fn link_with_title(
        &mut self,
        text: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<NodeId> {
        Ok(self.create(Link::new(text, url)?.with_title(title)))
    }

    pub fn image(&mut self, text: impl Into<String>, url: impl Into<String>) -> Result<NodeId> {
        Ok(self.create(Image::new(text, url)?))
    }

    pub fn image_with_title(
        &mut self,
        text: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<NodeId> {
        Ok(self.create(Image::new(text, url)?.with_title(title)))
    }

    pub fn autolink(&mut self, url: impl Into<String>) -> Result<NodeId> {
        Ok(self.create(Autolink::new(url)?))
    }

    pub fn link_reference(
        &mut self,
        text: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<NodeId> {
        Ok(self.create(LinkReference::new(text, label)?))
    }

    pub fn image_reference(
        &mut self,
        text: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<NodeId> {
        Ok(self.create(ImageReference::new(text, label)?))
    }

    pub fn link_definition(
        &mut self,
        label: impl Into<String>,
        url: impl Into<String>,
        title: Option<&str>,
    ) -> Result<NodeId> {
        let mut definition = LinkDefinition::new(label, url)?;
        if let Some(title) = title {
            definition = definition.with_title(title);
        }
        Ok(self.create(definition))
    }

    pub fn char_reference(&mut self, value: u32) -> Result<NodeId> {
        Ok(self.create(CharReference::new(value)?))
    }

    pub fn entity_reference(&mut self, name: impl Into<String>) -> Result<NodeId> {
        Ok(self.create(EntityReference::new(name)?))
    }

    pub fn comment(&mut self, value: impl Into<String>) -> Result<NodeId> {
        Ok(self.create(Comment::new(value)?))
    }

    pub fn fenced_code_block(
        &mut self,
        text: impl Into<String>,
        info: Option<&str>,
    ) -> Result<NodeId> {
        Ok(self.create(FencedCodeBlock::new(text, info)?))
    }

    pub fn indented_code_block(&mut self, text: impl Into<String>) -> NodeId {
        self.create(IndentedCodeBlock::new(text))
    }

    /// Rule spelled with the writer's configured format.
    pub fn horizontal_rule(&mut self) -> NodeId {
        self.create(HorizontalRule::new())
    }

    pub fn horizontal_rule_with(
        &mut self,
        style: RuleStyle,
        count: usize,
        separator: &str,
    ) -> Result<NodeId> {
        Ok(self.create(HorizontalRule::with_format(style, count, separator)?))
    }

    // === Containers ===

    pub fn document(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(Document, content)
    }

    pub fn inline(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(InlineContainer, content)
    }

    pub fn bold(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(Bold, content)
    }

    pub fn italic(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(Italic, content)
    }

    pub fn strikethrough(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(Strikethrough, content)
    }

    pub fn heading(&mut self, level: u8, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(Heading::new(level)?, content)
    }

    pub fn block_quote(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(BlockQuote, content)
    }

    pub fn bullet_item(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(BulletItem, content)
    }

    pub fn ordered_item(&mut self, number: u32, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(OrderedItem::new(number), content)
    }

    pub fn task_item(&mut self, completed: bool, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(TaskItem::new(completed), content)
    }

    pub fn bullet_list(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(BulletList, content)
    }

    pub fn ordered_list(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(OrderedList, content)
    }

    pub fn task_list(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(TaskList, content)
    }

    /// Bullet list with one item wrapping each entry of `items`.
    pub fn bullet_list_of<I>(&mut self, items: I) -> Result<NodeId>
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let list = self.create(BulletList);
        for item in items {
            let item = self.bullet_item(item)?;
            self.add(list, item)?;
        }
        Ok(list)
    }

    /// Ordered list with items numbered from 1.
    pub fn ordered_list_of<I>(&mut self, items: I) -> Result<NodeId>
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let list = self.create(OrderedList);
        for (number, item) in (1..).zip(items) {
            let item = self.ordered_item(number, item)?;
            self.add(list, item)?;
        }
        Ok(list)
    }

    pub fn table(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(Table, content)
    }

    pub fn table_row(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(TableRow, content)
    }

    pub fn table_column(&mut self, content: impl Into<Fragment>) -> Result<NodeId> {
        self.container(TableColumn, content)
    }

    /// Row with one column wrapping each entry of `cells`.
    pub fn table_row_of<I>(&mut self, cells: I) -> Result<NodeId>
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let row = self.create(TableRow);
        for cell in cells {
            let column = self.table_column(cell)?;
            self.add(row, column)?;
        }
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Kind};

    #[test]
    fn heading_level_is_validated_before_anything_is_created() {
        let mut tree = Tree::new();
        assert!(matches!(
            tree.heading(0, "x"),
            Err(Error::OutOfRange { field: "level", .. })
        ));
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn container_rejects_bad_content() {
        let mut tree = Tree::new();
        let heading = tree.heading(1, "h").unwrap();
        assert_eq!(
            tree.bold(heading),
            Err(Error::NotAllowed {
                child: Kind::Heading,
                parent: Kind::Bold
            })
        );
    }

    #[test]
    fn lists_only_take_their_item_kind() {
        let mut tree = Tree::new();
        let bullet = tree.bullet_item("x").unwrap();
        assert!(tree.ordered_list(bullet).is_err());
        assert!(tree.task_list("loose text").is_err());
        assert!(tree.bullet_list(bullet).is_ok());
    }

    #[test]
    fn ordered_list_of_numbers_from_one() {
        let mut tree = Tree::new();
        let list = tree.ordered_list_of(["a", "b", "c"]).unwrap();
        let numbers: Vec<u32> = tree
            .ring(list)
            .filter_map(|item| tree.get::<OrderedItem>(item).map(OrderedItem::number))
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn table_row_of_wraps_cells() {
        let mut tree = Tree::new();
        let row = tree.table_row_of(["a", "b"]).unwrap();
        assert_eq!(tree.element_count(row), 2);
        assert!(tree.ring(row).all(|cell| tree.kind(cell) == Kind::TableColumn));
    }

    #[test]
    fn link_definition_title() {
        let mut tree = Tree::new();
        let id = tree.link_definition("home", "/", Some("Home")).unwrap();
        assert_eq!(
            tree.get::<LinkDefinition>(id).and_then(LinkDefinition::title),
            Some("Home")
        );
    }
}
