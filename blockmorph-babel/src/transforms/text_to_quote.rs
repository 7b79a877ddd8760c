//! Text → quote: split a text block at its citation-break marker.

use crate::common::flatten;
use crate::ir::attributes::{
    BlockAttributes, BlockType, QuoteAttributes, QuoteValue, TextAttributes,
};
use crate::rules::TransformRules;
use crate::transform::{passthrough_mismatch, BlockTransform, TransformOutput};

/// Converts text attributes into quote attributes.
///
/// The content is deep-flattened and split at the first citation-break marker:
/// everything before it becomes the quote body, everything after it the
/// citation. The marker itself is dropped. Without a marker the whole content
/// becomes the body and the citation stays absent.
pub fn text_to_quote(attrs: &TextAttributes, rules: &TransformRules) -> QuoteAttributes {
    let (value, citation) = match attrs.content.as_deref() {
        None | Some([]) => (None, None),
        Some(content) => {
            let flat = flatten(content);
            match flat.iter().position(|node| rules.is_citation_break(node)) {
                Some(index) => {
                    tracing::debug!(index, len = flat.len(), "citation break found");
                    let citation = flat[index + 1..].to_vec();
                    let mut value = flat;
                    value.truncate(index);
                    (Some(value), Some(citation))
                }
                None => (Some(flat), None),
            }
        }
    };

    QuoteAttributes::from_parts(value.map(QuoteValue::Paragraphs), citation, &attrs.rest)
}

pub struct TextToQuote;

impl BlockTransform for TextToQuote {
    fn source(&self) -> BlockType {
        BlockType::Text
    }

    fn target(&self) -> BlockType {
        BlockType::Quote
    }

    fn description(&self) -> &str {
        "Split text at the citation break into quote body and citation"
    }

    fn apply(&self, attrs: &BlockAttributes, rules: &TransformRules) -> TransformOutput {
        match attrs {
            BlockAttributes::Text(text) => TransformOutput::single(text_to_quote(text, rules)),
            other => passthrough_mismatch(self, other),
        }
    }
}
