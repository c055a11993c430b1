//! Import tests for markdown with inline and block raw HTML.

use crate::common::{import, kinds, only, raw_html};
use rawmark_babel::ir::nodes::{MarkKind, NodeKind};

#[test]
fn test_paragraph_simple() {
    let doc = import("This is a simple paragraph.\n");

    assert_eq!(kinds(&doc.children), vec![NodeKind::Paragraph]);
    assert_eq!(doc.text_content(), "This is a simple paragraph.");
}

#[test]
fn test_native_marks_have_no_raw_html() {
    let doc = import("# Title\n\n**bold** and `code`\n");

    let heading = only(&doc, NodeKind::Heading);
    assert_eq!(heading.attrs.level, Some(1));
    assert_eq!(raw_html(heading), None);

    let texts = &doc.children[1].children;
    let bold = texts[0].mark(MarkKind::Strong).expect("bold text");
    assert!(bold.attrs.is_empty());
    assert!(texts[2].mark(MarkKind::Code).is_some());
    assert_eq!(texts[2].text.as_deref(), Some("code"));
}

#[test]
fn test_inline_tags_become_marks() {
    let doc = import("Say <b>hi</b> and <em>bye</em>.\n");

    let texts = &doc.children[0].children;
    assert_eq!(texts.len(), 5);
    assert!(texts[0].marks.is_empty());

    let strong = texts[1].mark(MarkKind::Strong).expect("strong mark");
    assert_eq!(strong.attrs.raw_html.as_deref(), Some("b"));
    assert_eq!(texts[1].text.as_deref(), Some("hi"));

    let emph = texts[3].mark(MarkKind::Emph).expect("emph mark");
    assert_eq!(emph.attrs.raw_html.as_deref(), Some("em"));
    assert!(texts[4].marks.is_empty());
}

#[test]
fn test_tag_spelling_is_preserved() {
    let doc = import("a <B>loud</B> word\n");

    let loud = &doc.children[0].children[1];
    let strong = loud.mark(MarkKind::Strong).expect("strong mark");
    assert_eq!(strong.attrs.raw_html.as_deref(), Some("B"));
}

#[test]
fn test_nested_inline_tags_stack_marks() {
    let doc = import("<s>old <code>x</code></s> new\n");

    let texts = &doc.children[0].children;
    assert!(texts[0].mark(MarkKind::Strike).is_some());
    assert!(texts[1].mark(MarkKind::Strike).is_some());
    assert!(texts[1].mark(MarkKind::Code).is_some());
    assert!(texts[2].marks.is_empty());
}

#[test]
fn test_unknown_inline_tags_are_transparent() {
    let doc = import("a <span>b</span> c\n");

    assert_eq!(doc.children[0].children.len(), 1);
    assert_eq!(doc.text_content(), "a b c");
}

#[test]
fn test_raw_link_keeps_allowed_url() {
    let doc = import("go <a href=\"https://example.com/x\">there</a>\n");

    let link = doc.children[0].children[1]
        .mark(MarkKind::Link)
        .expect("link mark");
    assert_eq!(link.attrs.link_url.as_deref(), Some("https://example.com/x"));
    assert_eq!(link.attrs.raw_html.as_deref(), Some("a"));
}

#[test]
fn test_raw_link_with_script_url_is_blanked() {
    let doc = import("go <a href=\"javascript:alert(1)\">click</a>\n");

    let link = doc.children[0].children[1]
        .mark(MarkKind::Link)
        .expect("link mark");
    assert_eq!(link.attrs.link_url.as_deref(), Some(""));
    assert_eq!(doc.children[0].children[1].text.as_deref(), Some("click"));
}

#[test]
fn test_raw_image() {
    let doc = import("see <img src=\"cat.png\" alt=\"A cat\"> here\n");

    let image = only(&doc, NodeKind::Image);
    assert_eq!(image.attrs.image_url.as_deref(), Some("cat.png"));
    assert_eq!(image.attrs.alt_text.as_deref(), Some("A cat"));
    assert_eq!(raw_html(image), Some("img"));
}

#[test]
fn test_raw_image_without_src_is_dropped() {
    let doc = import("x <img alt=\"none\"> y\n");

    assert!(doc.find_all(NodeKind::Image).is_empty());
    assert_eq!(doc.text_content(), "x  y");
}

#[test]
fn test_markdown_image_alt_from_text() {
    let doc = import("![a *small* dog](dog.png)\n");

    let image = only(&doc, NodeKind::Image);
    assert_eq!(image.attrs.image_url.as_deref(), Some("dog.png"));
    assert_eq!(image.attrs.alt_text.as_deref(), Some("a small dog"));
    assert_eq!(raw_html(image), None);
}

#[test]
fn test_br_between_text_leaves_empty_paragraph() {
    let doc = import("one<br>two\n");

    assert_eq!(kinds(&doc.children), vec![NodeKind::Paragraph]);
    let paragraph = &doc.children[0];
    assert_eq!(
        kinds(&paragraph.children),
        vec![NodeKind::Text, NodeKind::Paragraph, NodeKind::Text]
    );
    assert!(paragraph.children[1].children.is_empty());
}

#[test]
fn test_leading_br_keeps_later_blocks_at_top_level() {
    let doc = import("<br>b\n\nnext\n\n# H\n");

    assert_eq!(
        kinds(&doc.children),
        vec![
            NodeKind::Paragraph,
            NodeKind::Text,
            NodeKind::Paragraph,
            NodeKind::Heading,
        ]
    );
    assert!(doc.children[0].children.is_empty());
    assert_eq!(doc.children[1].text.as_deref(), Some("b"));
    assert_eq!(doc.children[2].text_content(), "next");
    assert_eq!(doc.children[3].text_content(), "H");
}

#[test]
fn test_trailing_br_keeps_later_blocks_at_top_level() {
    let doc = import("a<br>\n\nnext\n\n# H\n");

    assert_eq!(
        kinds(&doc.children),
        vec![NodeKind::Paragraph, NodeKind::Paragraph, NodeKind::Heading]
    );
    assert_eq!(
        kinds(&doc.children[0].children),
        vec![NodeKind::Text, NodeKind::Paragraph]
    );
    assert_eq!(doc.children[1].text_content(), "next");
}

#[test]
fn test_markdown_hard_break_is_a_leaf() {
    let doc = import("a  \nb\n");

    assert_eq!(
        kinds(&doc.children[0].children),
        vec![NodeKind::Text, NodeKind::HardBreak, NodeKind::Text]
    );
}

#[test]
fn test_pre_block_becomes_code_block() {
    let doc = import("<pre><code>let x = 1;\n</code></pre>\n");

    let code = only(&doc, NodeKind::CodeBlock);
    assert_eq!(raw_html(code), Some("pre"));
    assert_eq!(code.text_content(), "let x = 1;");
}

#[test]
fn test_fenced_code_block_language() {
    let doc = import("```python\nprint(1)\n```\n");

    let code = only(&doc, NodeKind::CodeBlock);
    assert_eq!(code.attrs.language.as_deref(), Some("python"));
    assert_eq!(code.text_content(), "print(1)");
}

#[test]
fn test_heading_block_is_delegated_and_stamped() {
    let doc = import("<h2>Raw <b>title</b></h2>\n");

    let heading = only(&doc, NodeKind::Heading);
    assert_eq!(heading.attrs.level, Some(2));
    assert_eq!(raw_html(heading), Some("h2"));
    assert_eq!(heading.text_content(), "Raw title");

    let strong = heading.children[1]
        .mark(MarkKind::Strong)
        .expect("strong mark");
    assert_eq!(strong.attrs.raw_html.as_deref(), Some("b"));
}

#[test]
fn test_list_block_outside_table() {
    let doc = import("<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n");

    let list = only(&doc, NodeKind::BulletList);
    assert_eq!(raw_html(list), Some("ul"));
    assert_eq!(
        kinds(&list.children),
        vec![NodeKind::ListItem, NodeKind::ListItem]
    );
    for item in &list.children {
        assert_eq!(raw_html(item), Some("li"));
        assert_eq!(kinds(&item.children), vec![NodeKind::Paragraph]);
    }
    assert_eq!(list.children[1].text_content(), "two");
}

#[test]
fn test_raw_horizontal_rule() {
    let doc = import("above\n\n<hr>\n\nbelow\n");

    assert_eq!(
        kinds(&doc.children),
        vec![
            NodeKind::Paragraph,
            NodeKind::ThematicBreak,
            NodeKind::Paragraph
        ]
    );
    assert_eq!(raw_html(&doc.children[1]), Some("hr"));
}

#[test]
fn test_blockquote_block() {
    let doc = import("<blockquote>quoted</blockquote>\n");

    let quote = only(&doc, NodeKind::BlockQuote);
    assert_eq!(raw_html(quote), Some("blockquote"));
    assert_eq!(kinds(&quote.children), vec![NodeKind::Paragraph]);
    assert_eq!(quote.text_content(), "quoted");
}

#[test]
fn test_task_list_markdown() {
    let doc = import("- [x] done\n- [ ] todo\n");

    let items = doc.find_all(NodeKind::ListItem);
    assert_eq!(items.len(), 2);
    assert!(items[0].attrs.task && items[0].attrs.checked);
    assert!(items[1].attrs.task && !items[1].attrs.checked);
}

#[test]
fn test_comments_are_skipped() {
    let doc = import("a <!-- note --> b\n");

    assert_eq!(doc.text_content(), "a  b");
}
