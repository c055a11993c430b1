//! Treeviz rendering of the editable tree
//!
//! One node per line, nesting drawn with box connectors:
//!
//! ```text
//! ├─ ¶ paragraph
//! │ ├─ ◦ "Hello "
//! │ └─ ◦ "world" [strong raw=b]
//! └─ ▦ table raw=table
//! ```

use crate::ir::nodes::{Attrs, Document, Node, NodeKind};

const MAX_TEXT: usize = 30;

fn icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Paragraph => "¶",
        NodeKind::Heading => "§",
        NodeKind::BlockQuote => "❝",
        NodeKind::BulletList | NodeKind::OrderedList => "☰",
        NodeKind::ListItem => "•",
        NodeKind::CodeBlock => "𝒱",
        NodeKind::ThematicBreak => "―",
        NodeKind::Image => "▣",
        NodeKind::Table
        | NodeKind::TableHead
        | NodeKind::TableBody
        | NodeKind::TableRow
        | NodeKind::TableHeadCell
        | NodeKind::TableBodyCell => "▦",
        NodeKind::HardBreak => "↵",
        NodeKind::Text => "◦",
    }
}

fn kind_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Paragraph => "paragraph",
        NodeKind::Heading => "heading",
        NodeKind::BlockQuote => "blockQuote",
        NodeKind::BulletList => "bulletList",
        NodeKind::OrderedList => "orderedList",
        NodeKind::ListItem => "listItem",
        NodeKind::CodeBlock => "codeBlock",
        NodeKind::ThematicBreak => "thematicBreak",
        NodeKind::Image => "image",
        NodeKind::Table => "table",
        NodeKind::TableHead => "tableHead",
        NodeKind::TableBody => "tableBody",
        NodeKind::TableRow => "tableRow",
        NodeKind::TableHeadCell => "tableHeadCell",
        NodeKind::TableBodyCell => "tableBodyCell",
        NodeKind::HardBreak => "hardBreak",
        NodeKind::Text => "text",
    }
}

fn attrs_label(attrs: &Attrs) -> String {
    let mut parts = Vec::new();
    if let Some(raw) = &attrs.raw_html {
        parts.push(format!("raw={raw}"));
    }
    if let Some(level) = attrs.level {
        parts.push(format!("level={level}"));
    }
    if let Some(url) = &attrs.link_url {
        parts.push(format!("href={url}"));
    }
    if let Some(url) = &attrs.image_url {
        parts.push(format!("src={url}"));
    }
    if let Some(alt) = &attrs.alt_text {
        parts.push(format!("alt={alt}"));
    }
    if let Some(language) = &attrs.language {
        parts.push(format!("lang={language}"));
    }
    if attrs.task {
        parts.push(if attrs.checked { "[x]" } else { "[ ]" }.to_string());
    }
    parts.join(" ")
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_TEXT {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_TEXT - 1).collect();
    format!("{cut}…")
}

fn node_label(node: &Node) -> String {
    let mut label = match (&node.text, node.kind) {
        (Some(text), NodeKind::Text) => format!("{:?}", truncate(text)),
        _ => kind_label(node.kind).to_string(),
    };
    let attrs = attrs_label(&node.attrs);
    if !attrs.is_empty() {
        label.push(' ');
        label.push_str(&attrs);
    }
    if !node.marks.is_empty() {
        let marks: Vec<String> = node
            .marks
            .iter()
            .map(|mark| {
                let attrs = attrs_label(&mark.attrs);
                let name = format!("{:?}", mark.kind).to_lowercase();
                if attrs.is_empty() {
                    name
                } else {
                    format!("{name} {attrs}")
                }
            })
            .collect();
        label.push_str(&format!(" [{}]", marks.join(", ")));
    }
    label
}

fn render_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{prefix}{connector} {} {}\n",
        icon(node.kind),
        node_label(node)
    ));
    let child_prefix = format!("{prefix}{}", if is_last { "  " } else { "│ " });
    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        render_node(child, &child_prefix, index + 1 == count, output);
    }
}

/// Renders the document as an indented tree, one node per line.
pub fn to_treeviz(doc: &Document) -> String {
    let mut output = String::from("⧉ document\n");
    let count = doc.children.len();
    for (index, child) in doc.children.iter().enumerate() {
        render_node(child, "", index + 1 == count, &mut output);
    }
    output
}
