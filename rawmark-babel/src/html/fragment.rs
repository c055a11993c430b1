//! HTML fragment parsing, marker-stamping and re-serialization.
//!
//! Raw HTML blocks are handed to a [`FragmentParser`], which turns them into an
//! owned [`Fragment`]. The production parser is backed by `html5ever`, so the
//! parsing is as forgiving as a browser's: unknown tags are kept, malformed
//! attributes are recovered, and entities are decoded.
//!
//! Fragments are plain data. Marking every element with its original tag name
//! ([`stamp_raw_html`]) is a pure transform that returns a new fragment rather
//! than mutating a live DOM.

use crate::error::ConvertError;
use html5ever::serialize::{SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{ns, parse_document, serialize, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::RefCell;
use std::rc::Rc;

/// Attribute stamped on every element of a delegated fragment.
pub const RAW_HTML_ATTR: &str = "data-raw-html";

/// A node of a parsed fragment. Comments and doctypes are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentNode {
    Element(Element),
    Text(String),
}

/// An element with its qualified name and attributes as html5ever parsed
/// them, so namespaced markup (`svg`, `xlink:href`) serializes unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: QualName,
    attrs: Vec<Attribute>,
    pub children: Vec<FragmentNode>,
}

impl Element {
    /// An empty HTML element.
    pub fn new(name: &str) -> Self {
        Self {
            name: QualName::new(None, ns!(html), LocalName::from(name)),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Lower-cased local name.
    pub fn name(&self) -> &str {
        &self.name.local
    }

    /// Value of an attribute without a namespace.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name.ns == ns!() && &*attr.name.local == name)
            .map(|attr| &*attr.value)
    }

    pub fn attribute_count(&self) -> usize {
        self.attrs.len()
    }

    /// Sets an attribute, replacing an existing value of the same name.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let existing = self
            .attrs
            .iter_mut()
            .find(|attr| attr.name.ns == ns!() && &*attr.name.local == name);
        match existing {
            Some(attr) => attr.value = value.into(),
            None => self.attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(name)),
                value: value.into(),
            }),
        }
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// First descendant element (depth-first) with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        find_in(&self.children, name)
    }
}

fn collect_text(nodes: &[FragmentNode], out: &mut String) {
    for node in nodes {
        match node {
            FragmentNode::Text(text) => out.push_str(text),
            FragmentNode::Element(element) => collect_text(&element.children, out),
        }
    }
}

fn find_in<'a>(nodes: &'a [FragmentNode], name: &str) -> Option<&'a Element> {
    for node in nodes {
        if let FragmentNode::Element(element) = node {
            if element.name() == name {
                return Some(element);
            }
            if let Some(found) = find_in(&element.children, name) {
                return Some(found);
            }
        }
    }
    None
}

/// The top-level nodes of a parsed fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub children: Vec<FragmentNode>,
}

impl Fragment {
    pub fn first_element(&self) -> Option<&Element> {
        self.children.iter().find_map(|node| match node {
            FragmentNode::Element(element) => Some(element),
            FragmentNode::Text(_) => None,
        })
    }

    /// First element (depth-first) with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        find_in(&self.children, name)
    }

    /// Serializes the fragment back to markup with html5ever's serializer.
    pub fn to_html(&self) -> Result<String, ConvertError> {
        let body = QualName::new(None, ns!(html), LocalName::from("body"));
        let container = create_element(body.clone(), Vec::new());
        for node in &self.children {
            append(&container, to_handle(node));
        }

        let opts = SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(Some(body)),
            ..Default::default()
        };
        let mut output = Vec::new();
        serialize(&mut output, &SerializableHandle::from(container), opts).map_err(|e| {
            ConvertError::Serialization(format!("HTML serialization failed: {e}"))
        })?;

        String::from_utf8(output)
            .map_err(|e| ConvertError::Serialization(format!("UTF-8 conversion failed: {e}")))
    }
}

fn create_element(name: QualName, attrs: Vec<Attribute>) -> Handle {
    Node::new(NodeData::Element {
        name,
        attrs: RefCell::new(attrs),
        template_contents: Default::default(),
        mathml_annotation_xml_integration_point: false,
    })
}

fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

fn to_handle(node: &FragmentNode) -> Handle {
    match node {
        FragmentNode::Text(text) => Node::new(NodeData::Text {
            contents: RefCell::new(text.as_str().into()),
        }),
        FragmentNode::Element(element) => {
            let handle = create_element(element.name.clone(), element.attrs.clone());
            for child in &element.children {
                append(&handle, to_handle(child));
            }
            handle
        }
    }
}

/// Parses raw markup into a [`Fragment`].
pub trait FragmentParser: Send + Sync {
    fn parse(&self, html: &str) -> Result<Fragment, ConvertError>;
}

/// [`FragmentParser`] backed by html5ever's tree builder.
///
/// The input is parsed as the content of `<body>`, which is how a browser
/// treats markup assigned to a detached container.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5everParser;

impl FragmentParser for Html5everParser {
    fn parse(&self, html: &str) -> Result<Fragment, ConvertError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| ConvertError::FragmentParse(e.to_string()))?;

        let children = match find_body(&dom.document) {
            Some(body) => convert_children(&body),
            None => Vec::new(),
        };
        Ok(Fragment { children })
    }
}

fn find_body(handle: &Handle) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            if name.local.as_ref() == "body" {
                return Some(child.clone());
            }
        }
        if let Some(body) = find_body(child) {
            return Some(body);
        }
    }
    None
}

fn convert_children(handle: &Handle) -> Vec<FragmentNode> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .collect()
}

fn convert_node(handle: &Handle) -> Option<FragmentNode> {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => Some(FragmentNode::Element(Element {
            name: name.clone(),
            attrs: attrs.borrow().clone(),
            children: convert_children(handle),
        })),
        NodeData::Text { contents } => Some(FragmentNode::Text(contents.borrow().to_string())),
        _ => None,
    }
}

/// Returns a copy of `fragment` in which every element, at any depth, carries
/// [`RAW_HTML_ATTR`] set to its own tag name.
pub fn stamp_raw_html(fragment: &Fragment) -> Fragment {
    Fragment {
        children: fragment.children.iter().map(stamp_node).collect(),
    }
}

fn stamp_node(node: &FragmentNode) -> FragmentNode {
    match node {
        FragmentNode::Text(text) => FragmentNode::Text(text.clone()),
        FragmentNode::Element(element) => {
            let mut stamped = Element {
                name: element.name.clone(),
                attrs: element.attrs.clone(),
                children: element.children.iter().map(stamp_node).collect(),
            };
            stamped.set_attribute(RAW_HTML_ATTR, element.name());
            FragmentNode::Element(stamped)
        }
    }
}
