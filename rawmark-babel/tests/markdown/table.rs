//! Tables: native markdown tables, raw HTML inside their cells, and raw HTML
//! tables.

use crate::common::{import, kinds, only, raw_html};
use rawmark_babel::ir::nodes::{MarkKind, Node, NodeKind};

fn body_cell(md: &str) -> Node {
    let doc = import(md);
    let cells = doc.find_all(NodeKind::TableBodyCell);
    assert_eq!(cells.len(), 1, "expected one body cell");
    cells[0].clone()
}

#[test]
fn test_table_structure() {
    let doc = import("| Header 1 | Header 2 |\n| :--- | :---: |\n| Cell 1 | Cell 2 |\n| Cell 3 | Cell 4 |\n");

    let table = only(&doc, NodeKind::Table);
    assert_eq!(
        kinds(&table.children),
        vec![NodeKind::TableHead, NodeKind::TableBody]
    );
    assert_eq!(doc.find_all(NodeKind::TableHeadCell).len(), 2);
    assert_eq!(doc.find_all(NodeKind::TableBodyCell).len(), 4);
    assert_eq!(table.children[1].children.len(), 2);

    let cell = &doc.find_all(NodeKind::TableBodyCell)[0];
    assert_eq!(kinds(&cell.children), vec![NodeKind::Paragraph]);
    assert_eq!(cell.text_content(), "Cell 1");
}

#[test]
fn test_inline_marks_in_cell() {
    let cell = body_cell("| A |\n| - |\n| x <i>y</i> |\n");

    let paragraph = &cell.children[0];
    assert_eq!(paragraph.kind, NodeKind::Paragraph);
    let emph = paragraph.children[1]
        .mark(MarkKind::Emph)
        .expect("emph mark");
    assert_eq!(emph.attrs.raw_html.as_deref(), Some("i"));
}

#[test]
fn test_list_in_cell() {
    let cell = body_cell("| Items |\n| --- |\n| <ul><li>one</li><li>two</li></ul> |\n");

    assert_eq!(kinds(&cell.children), vec![NodeKind::BulletList]);
    let list = &cell.children[0];
    assert_eq!(raw_html(list), Some("ul"));
    assert_eq!(
        kinds(&list.children),
        vec![NodeKind::ListItem, NodeKind::ListItem]
    );
    for (item, text) in list.children.iter().zip(["one", "two"]) {
        assert_eq!(raw_html(item), Some("li"));
        assert_eq!(kinds(&item.children), vec![NodeKind::Paragraph]);
        assert_eq!(item.text_content(), text);
    }
}

#[test]
fn test_ordered_list_between_text_in_cell() {
    let cell = body_cell("| A |\n| - |\n| before<ol><li>x</li></ol>after |\n");

    assert_eq!(
        kinds(&cell.children),
        vec![
            NodeKind::Paragraph,
            NodeKind::OrderedList,
            NodeKind::Paragraph
        ]
    );
    assert_eq!(cell.children[0].text_content(), "before");
    assert_eq!(raw_html(&cell.children[1]), Some("ol"));
    assert_eq!(cell.children[2].text_content(), "after");
}

#[test]
fn test_task_item_in_cell() {
    let cell = body_cell("| A |\n| - |\n| <ul><li data-task data-task-checked>done</li></ul> |\n");

    let item = only_in(&cell, NodeKind::ListItem);
    assert!(item.attrs.task);
    assert!(item.attrs.checked);
}

#[test]
fn test_br_in_cell_splits_paragraphs() {
    let cell = body_cell("| A |\n| - |\n| one<br>two |\n");

    assert_eq!(
        kinds(&cell.children),
        vec![NodeKind::Paragraph, NodeKind::Paragraph]
    );
    assert_eq!(cell.children[0].text_content(), "one");
    assert_eq!(cell.children[1].text_content(), "two");
}

#[test]
fn test_raw_html_table_block() {
    let doc = import("<table>\n<tr><td>a</td><td><b>b</b></td></tr>\n</table>\n");

    let table = only(&doc, NodeKind::Table);
    assert_eq!(raw_html(table), Some("table"));
    assert_eq!(kinds(&table.children), vec![NodeKind::TableBody]);

    let row = &table.children[0].children[0];
    assert_eq!(row.kind, NodeKind::TableRow);
    assert_eq!(raw_html(row), Some("tr"));
    assert_eq!(
        kinds(&row.children),
        vec![NodeKind::TableBodyCell, NodeKind::TableBodyCell]
    );
    assert_eq!(raw_html(&row.children[0]), Some("td"));
    assert_eq!(row.children[0].text_content(), "a");

    let bold = &row.children[1].children[0].children[0];
    assert!(bold.mark(MarkKind::Strong).is_some());
}

fn only_in(node: &Node, kind: NodeKind) -> &Node {
    let found = node.find_all(kind);
    assert_eq!(found.len(), 1, "expected exactly one {kind:?}");
    found[0]
}
