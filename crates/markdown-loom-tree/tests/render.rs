//! Render dispatch order, checked with a writer that records every call.

use markdown_loom_tree::config::RuleFormat;
use markdown_loom_tree::{Content, MarkdownWriter, Tree};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl Recorder {
    fn push(&mut self, call: impl Into<String>) {
        self.calls.push(call.into());
    }
}

impl MarkdownWriter for Recorder {
    fn write_text(&mut self, text: &str) {
        self.push(format!("text {text:?}"));
    }
    fn write_raw(&mut self, text: &str) {
        self.push(format!("raw {text:?}"));
    }
    fn write_inline_code(&mut self, text: &str) {
        self.push(format!("code {text:?}"));
    }
    fn write_link(&mut self, text: &str, url: &str, _title: Option<&str>) {
        self.push(format!("link {text} {url}"));
    }
    fn write_image(&mut self, text: &str, url: &str, _title: Option<&str>) {
        self.push(format!("image {text} {url}"));
    }
    fn write_autolink(&mut self, url: &str) {
        self.push(format!("autolink {url}"));
    }
    fn write_link_reference(&mut self, text: &str, label: &str) {
        self.push(format!("link_ref {text} {label}"));
    }
    fn write_image_reference(&mut self, text: &str, label: &str) {
        self.push(format!("image_ref {text} {label}"));
    }
    fn write_link_definition(&mut self, label: &str, url: &str, _title: Option<&str>) {
        self.push(format!("definition {label} {url}"));
    }
    fn write_char_reference(&mut self, value: u32) {
        self.push(format!("char_ref {value}"));
    }
    fn write_entity_reference(&mut self, name: &str) {
        self.push(format!("entity {name}"));
    }
    fn write_comment(&mut self, text: &str) {
        self.push(format!("comment {text}"));
    }
    fn write_fenced_code_block(&mut self, text: &str, info: Option<&str>) {
        self.push(format!("fenced {text:?} {info:?}"));
    }
    fn write_indented_code_block(&mut self, text: &str) {
        self.push(format!("indented {text:?}"));
    }
    fn write_horizontal_rule(&mut self, format: Option<&RuleFormat>) {
        self.push(format!("rule {}", format.is_some()));
    }
    fn write_start_bold(&mut self) {
        self.push("+bold");
    }
    fn write_end_bold(&mut self) {
        self.push("-bold");
    }
    fn write_start_italic(&mut self) {
        self.push("+italic");
    }
    fn write_end_italic(&mut self) {
        self.push("-italic");
    }
    fn write_start_strikethrough(&mut self) {
        self.push("+strike");
    }
    fn write_end_strikethrough(&mut self) {
        self.push("-strike");
    }
    fn write_start_heading(&mut self, level: u8) {
        self.push(format!("+heading {level}"));
    }
    fn write_end_heading(&mut self, level: u8) {
        self.push(format!("-heading {level}"));
    }
    fn write_start_block_quote(&mut self) {
        self.push("+quote");
    }
    fn write_end_block_quote(&mut self) {
        self.push("-quote");
    }
    fn write_start_bullet_list(&mut self) {
        self.push("+bullets");
    }
    fn write_end_bullet_list(&mut self) {
        self.push("-bullets");
    }
    fn write_start_ordered_list(&mut self) {
        self.push("+ordered");
    }
    fn write_end_ordered_list(&mut self) {
        self.push("-ordered");
    }
    fn write_start_task_list(&mut self) {
        self.push("+tasks");
    }
    fn write_end_task_list(&mut self) {
        self.push("-tasks");
    }
    fn write_start_bullet_item(&mut self) {
        self.push("+bullet");
    }
    fn write_end_bullet_item(&mut self) {
        self.push("-bullet");
    }
    fn write_start_ordered_item(&mut self, number: u32) {
        self.push(format!("+item {number}"));
    }
    fn write_end_ordered_item(&mut self) {
        self.push("-item");
    }
    fn write_start_task_item(&mut self, completed: bool) {
        self.push(format!("+task {completed}"));
    }
    fn write_end_task_item(&mut self) {
        self.push("-task");
    }
    fn write_start_table(&mut self) {
        self.push("+table");
    }
    fn write_end_table(&mut self) {
        self.push("-table");
    }
    fn write_start_table_row(&mut self) {
        self.push("+row");
    }
    fn write_end_table_row(&mut self) {
        self.push("-row");
    }
    fn write_start_table_column(&mut self) {
        self.push("+column");
    }
    fn write_end_table_column(&mut self) {
        self.push("-column");
    }
}

fn record(tree: &Tree, id: markdown_loom_tree::NodeId) -> Vec<String> {
    let mut recorder = Recorder::default();
    tree.render(id, &mut recorder);
    recorder.calls
}

#[test]
fn containers_wrap_children_in_ring_order() {
    let mut tree = Tree::new();
    let italic = tree.italic("b").unwrap();
    let code = tree.inline_code("c");
    let heading = tree.heading(3, ("a", italic, code)).unwrap();
    let rule = tree.horizontal_rule();
    let doc = tree.document((heading, rule)).unwrap();

    assert_eq!(
        record(&tree, doc),
        vec![
            "+heading 3",
            "text \"a\"",
            "+italic",
            "text \"b\"",
            "-italic",
            "code \"c\"",
            "-heading 3",
            "rule false",
        ]
    );
}

#[test]
fn lists_and_tables_dispatch_item_fields() {
    let mut tree = Tree::new();
    let task = tree.task_item(true, "done").unwrap();
    let tasks = tree.task_list(task).unwrap();
    let numbered = tree.ordered_item(7, "seven").unwrap();
    let ordered = tree.ordered_list(numbered).unwrap();
    let row = tree.table_row_of(["x"]).unwrap();
    let table = tree.table(row).unwrap();

    assert_eq!(
        record(&tree, tasks),
        vec!["+tasks", "+task true", "text \"done\"", "-task", "-tasks"]
    );
    assert_eq!(
        record(&tree, ordered),
        vec!["+ordered", "+item 7", "text \"seven\"", "-item", "-ordered"]
    );
    assert_eq!(
        record(&tree, table),
        vec!["+table", "+row", "+column", "text \"x\"", "-column", "-row", "-table"]
    );
}

#[test]
fn text_content_renders_without_materializing() {
    let mut tree = Tree::new();
    let bold = tree.bold("hi").unwrap();
    let before = tree.node_count();

    assert_eq!(record(&tree, bold), vec!["+bold", "text \"hi\"", "-bold"]);
    assert_eq!(tree.content(bold), &Content::Text("hi".to_string()));
    assert_eq!(tree.node_count(), before);
}

#[test]
fn leaves_dispatch_their_fields() {
    let mut tree = Tree::new();
    let link = tree.link("docs", "/docs").unwrap();
    let autolink = tree.autolink("https://example.com").unwrap();
    let entity = tree.entity_reference("copy").unwrap();
    let char_ref = tree.char_reference(65).unwrap();
    let comment = tree.comment("note").unwrap();
    let raw = tree.raw("<br>");
    let span = tree
        .inline((link, autolink, entity, char_ref, comment, raw))
        .unwrap();

    assert_eq!(
        record(&tree, span),
        vec![
            "link docs /docs",
            "autolink https://example.com",
            "entity copy",
            "char_ref 65",
            "comment note",
            "raw \"<br>\"",
        ]
    );
}
