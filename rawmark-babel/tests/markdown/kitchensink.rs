//! The kitchensink fixture exercises every mapping at once.

use crate::common::{kinds, load_fixture, raw_html};
use rawmark_babel::ir::nodes::{Document, NodeKind};
use rawmark_babel::ir::treeviz::to_treeviz;
use rawmark_babel::markdown_to_document;

fn kitchensink() -> Document {
    markdown_to_document(&load_fixture("kitchensink.md")).expect("kitchensink should import")
}

#[test]
fn test_kitchensink_top_level() {
    let doc = kitchensink();

    assert_eq!(
        kinds(&doc.children),
        vec![
            NodeKind::Heading,
            NodeKind::Paragraph,
            NodeKind::Paragraph,
            NodeKind::Heading,
            NodeKind::BlockQuote,
            NodeKind::BulletList,
            NodeKind::BulletList,
            NodeKind::Table,
            NodeKind::CodeBlock,
            NodeKind::ThematicBreak,
            NodeKind::Paragraph,
        ]
    );
}

#[test]
fn test_kitchensink_raw_markers() {
    let doc = kitchensink();

    assert_eq!(raw_html(&doc.children[0]), None);
    assert_eq!(raw_html(&doc.children[3]), Some("h3"));
    assert_eq!(raw_html(&doc.children[6]), Some("ul"));
    assert_eq!(raw_html(&doc.children[8]), Some("pre"));
    assert_eq!(raw_html(&doc.children[9]), Some("hr"));
    assert_eq!(doc.children[8].text_content(), "raw\npreformatted");

    let images = doc.find_all(NodeKind::Image);
    assert_eq!(images.len(), 2);
    assert_eq!(raw_html(images[0]), None);
    assert_eq!(raw_html(images[1]), Some("img"));
}

#[test]
fn test_kitchensink_tables_hold_lists() {
    let doc = kitchensink();

    let table = &doc.children[7];
    let lists = table.find_all(NodeKind::BulletList);
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].children.len(), 2);
    assert_eq!(table.find_all(NodeKind::Paragraph).len(), 2 + 1 + 2 + 1 + 2);
}

#[test]
fn test_kitchensink_serializes() {
    let doc = kitchensink();

    let json = doc.to_json().expect("json");
    assert!(json.contains("\"rawHtml\": \"h3\""));

    let viz = to_treeviz(&doc);
    assert!(viz.starts_with("⧉ document\n"));
    assert!(viz.lines().count() > doc.children.len());
}
