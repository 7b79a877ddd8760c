//! Block attribute records for the three block types.
//!
//! Each record names the fields its block understands and collects everything
//! else in an [`Attributes`] passthrough map, so unknown attributes survive a
//! transform without being named individually.

use crate::error::TransformError;
use crate::ir::nodes::{Content, ContentNode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// The block types the engine converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockType {
    Text,
    Heading,
    Quote,
}

impl BlockType {
    pub const ALL: [BlockType; 3] = [BlockType::Text, BlockType::Heading, BlockType::Quote];

    /// Registered block name (e.g. `core/quote`).
    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Text => "core/text",
            BlockType::Heading => "core/heading",
            BlockType::Quote => "core/quote",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            BlockType::Text => "text",
            BlockType::Heading => "heading",
            BlockType::Quote => "quote",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for BlockType {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let short = s.strip_prefix("core/").unwrap_or(s);
        BlockType::ALL
            .into_iter()
            .find(|block_type| block_type.short_name() == short)
            .ok_or_else(|| TransformError::UnknownBlockType(s.to_string()))
    }
}

/// Passthrough attributes: every field a rule does not name explicitly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of every field except `keys`.
    pub fn without(&self, keys: &[&str]) -> Attributes {
        Attributes(
            self.0
                .iter()
                .filter(|(key, _)| !keys.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

/// Attributes of a text block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(flatten)]
    pub rest: Attributes,
}

impl TextAttributes {
    pub const CONTENT: &'static str = "content";

    pub fn new(content: Content) -> Self {
        Self {
            content: Some(content),
            rest: Attributes::new(),
        }
    }
}

/// Attributes of a heading block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeadingAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl HeadingAttributes {
    pub fn new(content: Content) -> Self {
        Self {
            content: Some(content),
        }
    }
}

/// Visual variant of a quote. Stored as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum QuoteStyle {
    #[default]
    One,
    Two,
}

impl QuoteStyle {
    /// The style in effect, defaulting when the attribute is absent.
    pub fn effective(style: Option<QuoteStyle>) -> QuoteStyle {
        style.unwrap_or_default()
    }

    pub fn from_value(value: &Value) -> Option<QuoteStyle> {
        value
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .and_then(|n| QuoteStyle::try_from(n).ok())
    }
}

impl TryFrom<u8> for QuoteStyle {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(QuoteStyle::One),
            2 => Ok(QuoteStyle::Two),
            other => Err(format!("quote style must be 1 or 2, got {other}")),
        }
    }
}

impl From<QuoteStyle> for u8 {
    fn from(style: QuoteStyle) -> Self {
        match style {
            QuoteStyle::One => 1,
            QuoteStyle::Two => 2,
        }
    }
}

/// The body of a quote.
///
/// Editors store a sequence of paragraphs, but older content can carry a
/// single bare node instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteValue {
    Paragraphs(Content),
    Node(ContentNode),
}

impl QuoteValue {
    pub fn is_empty(&self) -> bool {
        match self {
            QuoteValue::Paragraphs(nodes) => nodes.is_empty(),
            QuoteValue::Node(node) => node.is_empty(),
        }
    }

    pub fn as_paragraphs(&self) -> Option<&[ContentNode]> {
        match self {
            QuoteValue::Paragraphs(nodes) => Some(nodes),
            QuoteValue::Node(_) => None,
        }
    }

    /// The body as a fresh content sequence.
    pub fn to_content(&self) -> Content {
        match self {
            QuoteValue::Paragraphs(nodes) => nodes.clone(),
            QuoteValue::Node(node) => vec![node.clone()],
        }
    }
}

impl From<Content> for QuoteValue {
    fn from(nodes: Content) -> Self {
        QuoteValue::Paragraphs(nodes)
    }
}

/// Attributes of a quote block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<QuoteValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<QuoteStyle>,
    #[serde(flatten)]
    pub rest: Attributes,
}

impl QuoteAttributes {
    pub const VALUE: &'static str = "value";
    pub const CITATION: &'static str = "citation";
    pub const ALIGN: &'static str = "align";
    pub const STYLE: &'static str = "style";

    pub fn new(value: Content, citation: Option<Content>) -> Self {
        Self {
            value: Some(QuoteValue::Paragraphs(value)),
            citation,
            ..Default::default()
        }
    }

    /// A citation counts only when it holds at least one node.
    pub fn has_citation(&self) -> bool {
        self.citation.as_ref().is_some_and(|nodes| !nodes.is_empty())
    }

    pub fn has_value(&self) -> bool {
        self.value.as_ref().is_some_and(|value| !value.is_empty())
    }

    pub fn effective_style(&self) -> QuoteStyle {
        QuoteStyle::effective(self.style)
    }

    /// Every attribute besides `value` and `citation`, as a plain record.
    pub fn passthrough(&self) -> Attributes {
        let mut attrs = self.rest.without(&[Self::ALIGN, Self::STYLE]);
        if let Some(align) = &self.align {
            attrs.insert(Self::ALIGN, align.clone());
        }
        if let Some(style) = self.style {
            attrs.insert(Self::STYLE, u8::from(style));
        }
        attrs
    }

    /// Builds a quote from a body, a citation and a passthrough record.
    ///
    /// `align` and `style` entries are lifted into their typed fields. A style
    /// outside {1, 2} is dropped, and so are stale `value` or `citation`
    /// entries, which the typed fields replace.
    pub fn from_parts(
        value: Option<QuoteValue>,
        citation: Option<Content>,
        attrs: &Attributes,
    ) -> Self {
        let align = attrs
            .get(Self::ALIGN)
            .and_then(Value::as_str)
            .map(str::to_string);
        let style = attrs.get(Self::STYLE).and_then(|raw| {
            let style = QuoteStyle::from_value(raw);
            if style.is_none() {
                tracing::debug!(style = %raw, "dropping unsupported quote style");
            }
            style
        });
        let mut rest = attrs.without(&[Self::VALUE, Self::CITATION, Self::STYLE]);
        if align.is_some() {
            rest.remove(Self::ALIGN);
        }
        Self {
            value,
            citation,
            align,
            style,
            rest,
        }
    }
}

/// Attributes of one block, tagged by block type.
///
/// Serializes as the `{"name": ..., "attributes": {...}}` block envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "attributes")]
pub enum BlockAttributes {
    #[serde(rename = "core/text")]
    Text(TextAttributes),
    #[serde(rename = "core/heading")]
    Heading(HeadingAttributes),
    #[serde(rename = "core/quote")]
    Quote(QuoteAttributes),
}

impl BlockAttributes {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockAttributes::Text(_) => BlockType::Text,
            BlockAttributes::Heading(_) => BlockType::Heading,
            BlockAttributes::Quote(_) => BlockType::Quote,
        }
    }

    pub fn as_text(&self) -> Option<&TextAttributes> {
        match self {
            BlockAttributes::Text(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn as_heading(&self) -> Option<&HeadingAttributes> {
        match self {
            BlockAttributes::Heading(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn as_quote(&self) -> Option<&QuoteAttributes> {
        match self {
            BlockAttributes::Quote(attrs) => Some(attrs),
            _ => None,
        }
    }
}

impl From<TextAttributes> for BlockAttributes {
    fn from(attrs: TextAttributes) -> Self {
        BlockAttributes::Text(attrs)
    }
}

impl From<HeadingAttributes> for BlockAttributes {
    fn from(attrs: HeadingAttributes) -> Self {
        BlockAttributes::Heading(attrs)
    }
}

impl From<QuoteAttributes> for BlockAttributes {
    fn from(attrs: QuoteAttributes) -> Self {
        BlockAttributes::Quote(attrs)
    }
}
