//! Heading ↔ quote bridge.
//!
//! Heading → quote wraps the heading content as the quote body. The reverse
//! direction promotes the quote's leading paragraph to a heading; whatever is
//! left (further paragraphs, a citation) stays behind as a residual quote that
//! follows the heading.

use crate::ir::attributes::{
    BlockAttributes, BlockType, HeadingAttributes, QuoteAttributes, QuoteValue,
};
use crate::ir::nodes::{Content, ContentNode};
use crate::rules::TransformRules;
use crate::transform::{passthrough_mismatch, BlockTransform, TransformOutput};

/// The heading's whole content becomes the quote body. Nothing else carries over.
pub fn heading_to_quote(attrs: &HeadingAttributes) -> QuoteAttributes {
    QuoteAttributes {
        value: attrs.content.clone().map(QuoteValue::Paragraphs),
        ..Default::default()
    }
}

/// Promotes the first paragraph of a quote to a heading.
///
/// Yields `[heading, quote]` when the body is a paragraph element followed by
/// more nodes, or the quote has a citation, so neither further paragraphs nor
/// the citation are lost. Otherwise the quote is absorbed into a lone heading.
pub fn quote_to_heading(attrs: &QuoteAttributes, rules: &TransformRules) -> TransformOutput {
    let paragraphs = attrs.value.as_ref().and_then(QuoteValue::as_paragraphs);
    let leading_paragraph = paragraphs
        .and_then(<[ContentNode]>::first)
        .filter(|node| rules.is_paragraph(node));
    let multi_paragraph =
        leading_paragraph.is_some() && paragraphs.is_some_and(|nodes| nodes.len() > 1);

    let heading_content = match (leading_paragraph, attrs.value.as_ref()) {
        (Some(paragraph), _) => Some(children_of(paragraph)),
        (None, Some(QuoteValue::Node(node))) if rules.is_paragraph(node) => {
            Some(children_of(node))
        }
        (None, value) => value.map(QuoteValue::to_content),
    };
    let heading = HeadingAttributes {
        content: heading_content,
    };

    let has_citation = attrs.has_citation();
    tracing::debug!(multi_paragraph, has_citation, "promoting quote to heading");

    if !multi_paragraph && !has_citation {
        return TransformOutput::single(heading);
    }

    // A bare node body has no further paragraphs to keep.
    let remaining: Content = paragraphs
        .and_then(|nodes| nodes.get(1..))
        .map(<[ContentNode]>::to_vec)
        .unwrap_or_default();
    let residual = QuoteAttributes {
        value: Some(QuoteValue::Paragraphs(remaining)),
        citation: attrs.citation.clone(),
        align: attrs.align.clone(),
        style: attrs.style,
        rest: attrs.rest.clone(),
    };

    TransformOutput::pair(heading, residual)
}

fn children_of(node: &ContentNode) -> Content {
    node.as_element()
        .map(|element| element.children.clone())
        .unwrap_or_default()
}

pub struct HeadingToQuote;

impl BlockTransform for HeadingToQuote {
    fn source(&self) -> BlockType {
        BlockType::Heading
    }

    fn target(&self) -> BlockType {
        BlockType::Quote
    }

    fn description(&self) -> &str {
        "Wrap heading content as a single-paragraph quote"
    }

    fn apply(&self, attrs: &BlockAttributes, _rules: &TransformRules) -> TransformOutput {
        match attrs {
            BlockAttributes::Heading(heading) => TransformOutput::single(heading_to_quote(heading)),
            other => passthrough_mismatch(self, other),
        }
    }
}

pub struct QuoteToHeading;

impl BlockTransform for QuoteToHeading {
    fn source(&self) -> BlockType {
        BlockType::Quote
    }

    fn target(&self) -> BlockType {
        BlockType::Heading
    }

    fn description(&self) -> &str {
        "Promote the first quote paragraph to a heading, keeping the rest as a quote"
    }

    fn apply(&self, attrs: &BlockAttributes, rules: &TransformRules) -> TransformOutput {
        match attrs {
            BlockAttributes::Quote(quote) => quote_to_heading(quote, rules),
            other => passthrough_mismatch(self, other),
        }
    }
}
