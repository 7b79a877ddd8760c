//! Shared builders for block transform tests.

use blockmorph_babel::ir::nodes::paragraph;
use blockmorph_babel::{
    BlockAttributes, ContentNode, QuoteAttributes, TextAttributes, TransformRules,
};

pub fn text(value: &str) -> ContentNode {
    ContentNode::text(value)
}

pub fn p(value: &str) -> ContentNode {
    paragraph(value)
}

pub fn marker() -> ContentNode {
    TransformRules::default().citation_break()
}

pub fn text_block(content: Vec<ContentNode>) -> BlockAttributes {
    BlockAttributes::Text(TextAttributes::new(content))
}

pub fn quote_block(value: Vec<ContentNode>, citation: Option<Vec<ContentNode>>) -> BlockAttributes {
    BlockAttributes::Quote(QuoteAttributes::new(value, citation))
}
