use markdown_loom_config::{CharReferenceFormat, MarkdownFormat, RuleFormat};

use super::MarkdownWriter;

/// Writes markdown text into a `String` according to a [`MarkdownFormat`].
///
/// Blocks are separated by one blank line, list items are kept tight and
/// nested content is indented under its list marker or prefixed with `> `
/// inside block quotes. Text is written as given; nothing is escaped.
#[derive(Debug)]
pub struct StringWriter {
    format: MarkdownFormat,
    out: String,
    /// Line prefixes of the enclosing block quotes and list items.
    prefixes: Vec<String>,
    at_line_start: bool,
    /// A block just ended; the next output starts with a blank line.
    blank_pending: bool,
    table: Option<TableState>,
}

#[derive(Debug, Default)]
struct TableState {
    rows: usize,
    cells: usize,
    in_row: bool,
    in_cell: bool,
    /// Cells added straight to the table are wrapped in a row of their own.
    implicit_row: bool,
}

impl StringWriter {
    pub fn new(format: MarkdownFormat) -> Self {
        Self {
            format,
            out: String::new(),
            prefixes: Vec::new(),
            at_line_start: true,
            blank_pending: false,
            table: None,
        }
    }

    pub fn format(&self) -> &MarkdownFormat {
        &self.format
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn write(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.write_segment(first);
        }
        for line in lines {
            self.newline();
            self.write_segment(line);
        }
    }

    /// Writes a piece of text that contains no line break.
    fn write_segment(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            if self.blank_pending {
                self.blank_line();
            }
            for prefix in &self.prefixes {
                self.out.push_str(prefix);
            }
            self.at_line_start = false;
        }
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        self.out.push_str(&self.format.newline);
        self.at_line_start = true;
    }

    fn ensure_line_start(&mut self) {
        if !self.at_line_start {
            self.newline();
        }
    }

    fn blank_line(&mut self) {
        self.blank_pending = false;
        let prefix = self.prefixes.concat();
        self.out.push_str(prefix.trim_end());
        self.newline();
    }

    fn begin_block(&mut self) {
        self.ensure_line_start();
        if self.blank_pending {
            self.blank_line();
        }
    }

    fn end_block(&mut self) {
        self.ensure_line_start();
        self.blank_pending = true;
    }

    fn start_item(&mut self, marker: String, indent: usize) {
        self.ensure_line_start();
        self.blank_pending = false;
        self.write_segment(&marker);
        self.prefixes.push(" ".repeat(indent));
    }

    fn end_item(&mut self) {
        self.prefixes.pop();
        self.ensure_line_start();
        self.blank_pending = false;
    }

    fn bullet_marker(&self) -> char {
        self.format.bullet_style.marker()
    }

    fn emphasis(&mut self, delimiter: char, count: usize) {
        let delimiter = delimiter.to_string().repeat(count);
        self.write_segment(&delimiter);
    }

    fn write_title(&mut self, title: Option<&str>) {
        if let Some(title) = title {
            self.write(&format!(" \"{}\"", title.replace('"', "\\\"")));
        }
    }

    fn table_state(&mut self) -> &mut TableState {
        self.table.get_or_insert_with(TableState::default)
    }

    fn open_row(&mut self) {
        self.ensure_line_start();
        let table = self.table_state();
        table.cells = 0;
        table.in_row = true;
    }

    fn open_cell(&mut self) {
        if !self.table_state().in_row {
            self.open_row();
            self.table_state().implicit_row = true;
        }
        let table = self.table_state();
        let first = table.cells == 0;
        table.cells += 1;
        table.in_cell = true;
        if !first {
            self.write_segment(" | ");
        } else if self.format.table_outer_pipes {
            self.write_segment("| ");
        }
    }

    /// Text straight inside a row, outside any column, fills a cell of its own.
    fn in_bare_row(&self) -> bool {
        self.table
            .as_ref()
            .is_some_and(|table| table.in_row && !table.in_cell)
    }

    fn write_cell_text(&mut self, text: &str) {
        if self.in_bare_row() {
            self.open_cell();
            self.write(text);
            self.table_state().in_cell = false;
        } else {
            self.write(text);
        }
    }

    fn close_row(&mut self) {
        let outer = self.format.table_outer_pipes;
        if outer {
            self.write_segment(" |");
        }
        self.newline();

        let table = self.table_state();
        let (header, cells) = (table.rows == 0, table.cells);
        table.rows += 1;
        table.in_row = false;
        table.implicit_row = false;

        if header {
            let mut separator = vec!["---"; cells.max(1)].join(" | ");
            if outer {
                separator = format!("| {separator} |");
            }
            self.write_segment(&separator);
            self.newline();
        }
    }
}

impl Default for StringWriter {
    fn default() -> Self {
        Self::new(MarkdownFormat::default())
    }
}

/// Length of the longest run of `c` in `text`.
fn longest_run(text: &str, c: char) -> usize {
    text.split(|other| other != c)
        .map(str::len)
        .max()
        .unwrap_or(0)
}

impl MarkdownWriter for StringWriter {
    fn write_text(&mut self, text: &str) {
        self.write_cell_text(text);
    }

    fn write_raw(&mut self, text: &str) {
        self.write_cell_text(text);
    }

    fn write_inline_code(&mut self, text: &str) {
        let delimiter = "`".repeat(longest_run(text, '`') + 1);
        let padding = if text.starts_with('`') || text.ends_with('`') {
            " "
        } else {
            ""
        };
        self.write(&format!("{delimiter}{padding}{text}{padding}{delimiter}"));
    }

    fn write_link(&mut self, text: &str, url: &str, title: Option<&str>) {
        self.write(&format!("[{text}]({url}"));
        self.write_title(title);
        self.write_segment(")");
    }

    fn write_image(&mut self, text: &str, url: &str, title: Option<&str>) {
        self.write(&format!("![{text}]({url}"));
        self.write_title(title);
        self.write_segment(")");
    }

    fn write_autolink(&mut self, url: &str) {
        self.write_segment(&format!("<{url}>"));
    }

    fn write_link_reference(&mut self, text: &str, label: &str) {
        self.write(&format!("[{text}][{label}]"));
    }

    fn write_image_reference(&mut self, text: &str, label: &str) {
        self.write(&format!("![{text}][{label}]"));
    }

    fn write_link_definition(&mut self, label: &str, url: &str, title: Option<&str>) {
        self.begin_block();
        self.write(&format!("[{label}]: {url}"));
        self.write_title(title);
        self.end_block();
    }

    fn write_char_reference(&mut self, value: u32) {
        let reference = match self.format.char_reference_format {
            CharReferenceFormat::Hexadecimal => format!("&#x{value:X};"),
            CharReferenceFormat::Decimal => format!("&#{value};"),
        };
        self.write_segment(&reference);
    }

    fn write_entity_reference(&mut self, name: &str) {
        self.write_segment(&format!("&{name};"));
    }

    fn write_comment(&mut self, text: &str) {
        self.write(&format!("<!-- {text} -->"));
    }

    fn write_fenced_code_block(&mut self, text: &str, info: Option<&str>) {
        let style = self.format.fence_style.fence();
        let fence_char = style.chars().next().unwrap_or('`');
        let length = style.len().max(longest_run(text, fence_char) + 1);
        let fence = fence_char.to_string().repeat(length);

        self.begin_block();
        self.write_segment(&format!("{fence}{}", info.unwrap_or_default()));
        self.newline();
        if !text.is_empty() {
            self.write(text.strip_suffix('\n').unwrap_or(text));
            self.newline();
        }
        self.write_segment(&fence);
        self.end_block();
    }

    fn write_indented_code_block(&mut self, text: &str) {
        self.begin_block();
        let mut lines = text.strip_suffix('\n').unwrap_or(text).split('\n');
        if let Some(first) = lines.next() {
            self.write_segment(&format!("    {first}"));
        }
        for line in lines {
            self.newline();
            self.write_segment(&format!("    {line}"));
        }
        self.end_block();
    }

    fn write_horizontal_rule(&mut self, format: Option<&RuleFormat>) {
        let format = format.unwrap_or(&self.format.horizontal_rule);
        let rule = vec![format.style.character().to_string(); format.count.max(1)]
            .join(format.separator.as_str());
        self.begin_block();
        self.write_segment(&rule);
        self.end_block();
    }

    fn write_start_bold(&mut self) {
        self.emphasis(self.format.bold_style.delimiter(), 2);
    }

    fn write_end_bold(&mut self) {
        self.emphasis(self.format.bold_style.delimiter(), 2);
    }

    fn write_start_italic(&mut self) {
        self.emphasis(self.format.italic_style.delimiter(), 1);
    }

    fn write_end_italic(&mut self) {
        self.emphasis(self.format.italic_style.delimiter(), 1);
    }

    fn write_start_strikethrough(&mut self) {
        self.emphasis('~', 2);
    }

    fn write_end_strikethrough(&mut self) {
        self.emphasis('~', 2);
    }

    fn write_start_heading(&mut self, level: u8) {
        self.begin_block();
        self.emphasis('#', level as usize);
        self.write_segment(" ");
    }

    fn write_end_heading(&mut self, level: u8) {
        if self.format.heading_closing {
            self.write_segment(" ");
            self.emphasis('#', level as usize);
        }
        self.end_block();
    }

    fn write_start_block_quote(&mut self) {
        self.begin_block();
        self.prefixes.push("> ".to_string());
    }

    fn write_end_block_quote(&mut self) {
        self.ensure_line_start();
        self.prefixes.pop();
        self.blank_pending = true;
    }

    fn write_start_bullet_list(&mut self) {
        self.begin_block();
    }

    fn write_end_bullet_list(&mut self) {
        self.end_block();
    }

    fn write_start_ordered_list(&mut self) {
        self.begin_block();
    }

    fn write_end_ordered_list(&mut self) {
        self.end_block();
    }

    fn write_start_task_list(&mut self) {
        self.begin_block();
    }

    fn write_end_task_list(&mut self) {
        self.end_block();
    }

    fn write_start_bullet_item(&mut self) {
        let marker = format!("{} ", self.bullet_marker());
        self.start_item(marker, 2);
    }

    fn write_end_bullet_item(&mut self) {
        self.end_item();
    }

    fn write_start_ordered_item(&mut self, number: u32) {
        let marker = format!("{number}{} ", self.format.ordered_style.delimiter());
        let indent = marker.len();
        self.start_item(marker, indent);
    }

    fn write_end_ordered_item(&mut self) {
        self.end_item();
    }

    fn write_start_task_item(&mut self, completed: bool) {
        let check = if completed { 'x' } else { ' ' };
        let marker = format!("{} [{check}] ", self.bullet_marker());
        self.start_item(marker, 2);
    }

    fn write_end_task_item(&mut self) {
        self.end_item();
    }

    fn write_start_table(&mut self) {
        self.begin_block();
        self.table = Some(TableState::default());
    }

    fn write_end_table(&mut self) {
        if self.table.as_ref().is_some_and(|table| table.implicit_row) {
            self.close_row();
        }
        self.table = None;
        self.end_block();
    }

    fn write_start_table_row(&mut self) {
        if self.table.as_ref().is_some_and(|table| table.implicit_row) {
            self.close_row();
        }
        self.open_row();
    }

    fn write_end_table_row(&mut self) {
        self.close_row();
    }

    fn write_start_table_column(&mut self) {
        self.open_cell();
    }

    fn write_end_table_column(&mut self) {
        self.table_state().in_cell = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tree;
    use insta::assert_snapshot;
    use markdown_loom_config::{BulletStyle, EmphasisStyle, FenceStyle, OrderedStyle, RuleStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_spans() {
        let mut tree = Tree::new();
        let italic = tree.italic("world").unwrap();
        let code = tree.inline_code("x");
        let link = tree.link("docs", "https://example.com").unwrap();
        let span = tree
            .inline(("hello ", italic, " ", code, " ", link))
            .unwrap();
        assert_eq!(
            tree.to_markdown(span),
            "hello *world* `x` [docs](https://example.com)"
        );
    }

    #[test]
    fn document_blocks_are_separated_by_blank_lines() {
        let mut tree = Tree::new();
        let heading = tree.heading(1, "Title").unwrap();
        let list = tree.bullet_list_of(["one", "two"]).unwrap();
        let rule = tree.horizontal_rule();
        let quote = tree.block_quote("quoted").unwrap();
        let doc = tree.document((heading, list, rule, quote)).unwrap();

        assert_snapshot!(tree.to_markdown(doc), @r"
        # Title

        * one
        * two

        - - -

        > quoted
        ");
    }

    #[test]
    fn nested_lists_indent_under_their_marker() {
        let mut tree = Tree::new();
        let inner = tree.ordered_list_of(["x", "y"]).unwrap();
        let first = tree.bullet_item(("one", inner)).unwrap();
        let second = tree.bullet_item("two").unwrap();
        let list = tree.bullet_list((first, second)).unwrap();

        assert_snapshot!(tree.to_markdown(list), @r"
        * one
          1. x
          2. y
        * two
        ");
    }

    #[test]
    fn task_items() {
        let mut tree = Tree::new();
        let done = tree.task_item(true, "done").unwrap();
        let open = tree.task_item(false, "open").unwrap();
        let list = tree.task_list((done, open)).unwrap();
        assert_eq!(tree.to_markdown(list), "* [x] done\n* [ ] open\n");
    }

    #[test]
    fn block_quote_prefixes_every_line() {
        let mut tree = Tree::new();
        let heading = tree.heading(2, "Note").unwrap();
        let code = tree.fenced_code_block("let a = 1;", Some("rust")).unwrap();
        let quote = tree.block_quote((heading, code)).unwrap();

        assert_snapshot!(tree.to_markdown(quote), @r"
        > ## Note
        >
        > ```rust
        > let a = 1;
        > ```
        ");
    }

    #[test]
    fn table_with_header_separator() {
        let mut tree = Tree::new();
        let header = tree.table_row_of(["Name", "Kind"]).unwrap();
        let row = tree.table_row_of(["bold", "inline"]).unwrap();
        let table = tree.table((header, row)).unwrap();

        assert_snapshot!(tree.to_markdown(table), @r"
        | Name | Kind |
        | --- | --- |
        | bold | inline |
        ");
    }

    #[test]
    fn strings_in_a_row_fill_their_own_cells() {
        let mut tree = Tree::new();
        let header = tree.table_row(("a", "b")).unwrap();
        let column = tree.table_column("y").unwrap();
        let row = tree.table_row(("x", column)).unwrap();
        let table = tree.table((header, row)).unwrap();

        assert_snapshot!(tree.to_markdown(table), @r"
        | a | b |
        | --- | --- |
        | x | y |
        ");
    }

    #[test]
    fn loose_table_columns_form_one_row() {
        let mut tree = Tree::new();
        let a = tree.table_column("a").unwrap();
        let b = tree.table_column("b").unwrap();
        let table = tree.table((a, b)).unwrap();
        assert_eq!(tree.to_markdown(table), "| a | b |\n| --- | --- |\n");
    }

    #[test]
    fn fence_grows_past_backticks_in_code() {
        let mut tree = Tree::new();
        let code = tree.fenced_code_block("````\nx", None).unwrap();
        assert_eq!(tree.to_markdown(code), "`````\n````\nx\n`````\n");

        let span = tree.inline_code("a`b");
        assert_eq!(tree.to_markdown(span), "``a`b``");
    }

    #[test]
    fn indented_code_block() {
        let mut tree = Tree::new();
        let code = tree.indented_code_block("fn main() {}\n");
        assert_eq!(tree.to_markdown(code), "    fn main() {}\n");
    }

    #[test]
    fn references_and_definitions() {
        let mut tree = Tree::new();
        let char_ref = tree.char_reference(0xA9).unwrap();
        let entity = tree.entity_reference("amp").unwrap();
        let reference = tree.link_reference("home", "h").unwrap();
        let image = tree.image_with_title("logo", "/logo.png", "Logo").unwrap();
        let span = tree
            .inline((char_ref, " ", entity, " ", reference, " ", image))
            .unwrap();
        assert_eq!(
            tree.to_markdown(span),
            "&#xA9; &amp; [home][h] ![logo](/logo.png \"Logo\")"
        );

        let definition = tree.link_definition("h", "/", Some("Home")).unwrap();
        assert_eq!(tree.to_markdown(definition), "[h]: / \"Home\"\n");
    }

    #[test]
    fn format_changes_markers() {
        let format = MarkdownFormat {
            bold_style: EmphasisStyle::Underscore,
            bullet_style: BulletStyle::Minus,
            ordered_style: OrderedStyle::Parenthesis,
            heading_closing: true,
            fence_style: FenceStyle::Tilde,
            char_reference_format: CharReferenceFormat::Decimal,
            table_outer_pipes: false,
            ..MarkdownFormat::default()
        };

        let mut tree = Tree::new();
        let bold = tree.bold("b").unwrap();
        let char_ref = tree.char_reference(0xA9).unwrap();
        let heading = tree.heading(2, (bold, " ", char_ref)).unwrap();
        let bullets = tree.bullet_list_of(["a"]).unwrap();
        let numbers = tree.ordered_list_of(["n"]).unwrap();
        let code = tree.fenced_code_block("x", None).unwrap();
        let row = tree.table_row_of(["a", "b"]).unwrap();
        let table = tree.table(row).unwrap();
        let doc = tree
            .document((heading, bullets, numbers, code, table))
            .unwrap();

        assert_snapshot!(tree.to_markdown_with(doc, &format), @r"
        ## __b__ &#169; ##

        - a

        1) n

        ~~~
        x
        ~~~

        a | b
        --- | ---
        ");
    }

    #[test]
    fn horizontal_rule_own_format_wins() {
        let mut tree = Tree::new();
        let rule = tree.horizontal_rule_with(RuleStyle::Asterisk, 5, "").unwrap();
        assert_eq!(tree.to_markdown(rule), "*****\n");

        let default_rule = tree.horizontal_rule();
        let format = MarkdownFormat {
            horizontal_rule: RuleFormat {
                style: RuleStyle::Underscore,
                count: 3,
                separator: String::new(),
            },
            ..MarkdownFormat::default()
        };
        assert_eq!(tree.to_markdown_with(default_rule, &format), "___\n");
    }

    #[test]
    fn crlf_newlines() {
        let format = MarkdownFormat {
            newline: "\r\n".to_string(),
            ..MarkdownFormat::default()
        };
        let mut tree = Tree::new();
        let list = tree.bullet_list_of(["a", "b"]).unwrap();
        assert_eq!(tree.to_markdown_with(list, &format), "* a\r\n* b\r\n");
    }
}
