//! Core data structures for rich-text content.
//!
//! A block field (a quote's body, a citation, a text block's content) holds a
//! [`Content`] sequence. Each [`ContentNode`] is either a text leaf, a markup
//! [`Element`], or a nested [`ContentNode::Group`] as produced by editors that
//! hand over arrays inside arrays.
//!
//! The JSON form mirrors the editor's element tree:
//!
//! ```text
//! "plain text"                                         -> Text
//! {"type": "br", "props": {"className": "citation-break"}}  -> Element
//! {"type": "p", "props": {"children": ["x"]}}          -> Element with children
//! ["a", "b"]                                           -> Group
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An ordered sequence of content nodes: the value of one block field.
pub type Content = Vec<ContentNode>;

/// A unit of rich text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    Text(String),
    Group(Vec<ContentNode>),
    Element(Element),
}

impl ContentNode {
    pub fn text(value: impl Into<String>) -> Self {
        ContentNode::Text(value.into())
    }

    pub fn element(element: Element) -> Self {
        ContentNode::Element(element)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ContentNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Whether this node is a markup element with the given tag.
    pub fn is_element_of(&self, tag: &str) -> bool {
        self.as_element().is_some_and(|element| element.tag == tag)
    }

    /// Reads a string attribute of an element node (e.g. `className`).
    pub fn class_name(&self, attribute: &str) -> Option<&str> {
        self.as_element()
            .and_then(|element| element.attribute(attribute))
    }

    /// Whether the node carries no renderable content.
    ///
    /// Elements always count as content, even without children (`<br>`).
    pub fn is_empty(&self) -> bool {
        match self {
            ContentNode::Text(text) => text.is_empty(),
            ContentNode::Group(nodes) => nodes.is_empty(),
            ContentNode::Element(_) => false,
        }
    }
}

impl From<&str> for ContentNode {
    fn from(value: &str) -> Self {
        ContentNode::Text(value.to_string())
    }
}

impl From<String> for ContentNode {
    fn from(value: String) -> Self {
        ContentNode::Text(value)
    }
}

impl From<Element> for ContentNode {
    fn from(value: Element) -> Self {
        ContentNode::Element(value)
    }
}

/// A markup node: a tag, its attributes and its ordered children.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawElement", into = "RawElement")]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, Value>,
    pub children: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Content) -> Self {
        self.children = children;
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }
}

/// Shorthand for a paragraph element holding a single text leaf.
pub fn paragraph(text: impl Into<String>) -> ContentNode {
    ContentNode::Element(Element::new("p").with_children(vec![ContentNode::text(text)]))
}

/// Wire shape of an [`Element`]: attributes and children live under `props`.
#[derive(Serialize, Deserialize)]
struct RawElement {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    props: RawProps,
}

#[derive(Default, Serialize, Deserialize)]
struct RawProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<ContentNode>,
    #[serde(flatten)]
    attributes: BTreeMap<String, Value>,
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        // Editors emit a lone child without the surrounding array.
        let children = match raw.props.children {
            None => Vec::new(),
            Some(ContentNode::Group(nodes)) => nodes,
            Some(node) => vec![node],
        };
        Element {
            tag: raw.tag,
            attributes: raw.props.attributes,
            children,
        }
    }
}

impl From<Element> for RawElement {
    fn from(element: Element) -> Self {
        let children = if element.children.is_empty() {
            None
        } else {
            Some(ContentNode::Group(element.children))
        };
        RawElement {
            tag: element.tag,
            props: RawProps {
                children,
                attributes: element.attributes,
            },
        }
    }
}
