//! Every collaborator of the importer can be swapped out.

use rawmark_babel::html::fragment::{Element, Fragment, FragmentNode};
use rawmark_babel::ir::events::Event;
use rawmark_babel::ir::nodes::{Attrs, Mark, MarkKind, NodeKind};
use rawmark_babel::{
    ConvertError, FragmentParser, Html5everParser, MarkdownImporter, Sanitizer, SchemeSanitizer,
    TagHandler, TagTable,
};

struct Rewrite;

impl Sanitizer for Rewrite {
    fn sanitize(&self, raw: &str) -> String {
        format!("https://proxy.example/?u={raw}")
    }
}

/// Parses nothing: every block comes back as a single empty `div`.
struct Stub;

impl FragmentParser for Stub {
    fn parse(&self, _html: &str) -> Result<Fragment, ConvertError> {
        Ok(Fragment {
            children: vec![FragmentNode::Element(Element::new("div"))],
        })
    }
}

struct Broken;

impl FragmentParser for Broken {
    fn parse(&self, _html: &str) -> Result<Fragment, ConvertError> {
        Err(ConvertError::FragmentParse("no parser".to_string()))
    }
}

#[test]
fn test_custom_sanitizer_sees_every_url() {
    let doc = MarkdownImporter::new(&Html5everParser, &Rewrite)
        .import("<a href=\"a.html\">x</a> [y](b.html) <img src=\"c.png\">\n")
        .unwrap();

    let texts = &doc.children[0].children;
    let raw_link = texts[0].mark(MarkKind::Link).expect("raw link");
    assert_eq!(
        raw_link.attrs.link_url.as_deref(),
        Some("https://proxy.example/?u=a.html")
    );
    let md_link = texts[2].mark(MarkKind::Link).expect("markdown link");
    assert_eq!(
        md_link.attrs.link_url.as_deref(),
        Some("https://proxy.example/?u=b.html")
    );
    let image = &doc.find_all(NodeKind::Image)[0];
    assert_eq!(
        image.attrs.image_url.as_deref(),
        Some("https://proxy.example/?u=c.png")
    );
}

#[test]
fn test_custom_tag_table() {
    let table = TagTable::from_entries(&[("u, ins", TagHandler::Mark(MarkKind::Emph))]);
    let sanitizer = SchemeSanitizer::default();
    let events = MarkdownImporter::new(&Html5everParser, &sanitizer)
        .with_tag_table(&table)
        .import_events("<u>x</u> <b>y</b>\n")
        .unwrap();

    assert!(events.contains(&Event::OpenMark(Mark::new(
        MarkKind::Emph,
        Attrs::raw_html("u")
    ))));
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::OpenMark(mark) if mark.kind == MarkKind::Strong)));
}

#[test]
fn test_custom_fragment_parser_drives_delegation() {
    let sanitizer = SchemeSanitizer::default();
    let events = MarkdownImporter::new(&Stub, &sanitizer)
        .import_events("<table><tr><td>ignored</td></tr></table>\n")
        .unwrap();

    assert_eq!(
        events,
        vec![Event::IngestFragment {
            html: "<div data-raw-html=\"div\"></div>".to_string(),
            block: true,
        }]
    );
}

#[test]
fn test_fragment_parse_errors_propagate() {
    let sanitizer = SchemeSanitizer::default();
    let result = MarkdownImporter::new(&Broken, &sanitizer).import("<h1>x</h1>\n");

    assert_eq!(
        result,
        Err(ConvertError::FragmentParse("no parser".to_string()))
    );
}

#[test]
fn test_inline_tags_do_not_need_the_fragment_parser() {
    let sanitizer = SchemeSanitizer::default();
    let doc = MarkdownImporter::new(&Broken, &sanitizer)
        .import("plain <b>bold</b>\n")
        .unwrap();

    assert!(doc.children[0].children[1].mark(MarkKind::Strong).is_some());
}
