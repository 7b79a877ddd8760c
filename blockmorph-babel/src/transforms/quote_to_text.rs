//! Quote → text: collapse body and citation into one content sequence.

use crate::ir::attributes::{
    Attributes, BlockAttributes, BlockType, QuoteAttributes, TextAttributes,
};
use crate::rules::TransformRules;
use crate::transform::{passthrough_mismatch, BlockTransform, TransformOutput};

/// Converts quote attributes into text attributes.
///
/// A quote without a body degrades to its citation: the citation becomes the
/// whole text content and every other attribute is dropped. Otherwise the body
/// is copied and, when a citation is present, followed by a citation-break
/// marker and the citation nodes.
pub fn quote_to_text(attrs: &QuoteAttributes, rules: &TransformRules) -> TextAttributes {
    let Some(value) = attrs.value.as_ref().filter(|value| !value.is_empty()) else {
        return TextAttributes {
            content: attrs.citation.clone(),
            rest: Attributes::new(),
        };
    };

    let mut content = value.to_content();
    if let Some(citation) = attrs.citation.as_ref().filter(|nodes| !nodes.is_empty()) {
        content.reserve(citation.len() + 1);
        content.push(rules.citation_break());
        content.extend(citation.iter().cloned());
    }

    TextAttributes {
        content: Some(content),
        rest: attrs.passthrough().without(&[TextAttributes::CONTENT]),
    }
}

pub struct QuoteToText;

impl BlockTransform for QuoteToText {
    fn source(&self) -> BlockType {
        BlockType::Quote
    }

    fn target(&self) -> BlockType {
        BlockType::Text
    }

    fn description(&self) -> &str {
        "Join quote body and citation, separated by a citation break"
    }

    fn apply(&self, attrs: &BlockAttributes, rules: &TransformRules) -> TransformOutput {
        match attrs {
            BlockAttributes::Quote(quote) => TransformOutput::single(quote_to_text(quote, rules)),
            other => passthrough_mismatch(self, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::attributes::{QuoteStyle, QuoteValue};
    use crate::ir::nodes::{paragraph, ContentNode};
    use serde_json::json;

    #[test]
    fn appends_marker_and_citation() {
        let rules = TransformRules::default();
        let quote = QuoteAttributes::new(vec!["a".into()], Some(vec!["b".into()]));

        let text = quote_to_text(&quote, &rules);

        assert_eq!(
            text.content,
            Some(vec!["a".into(), rules.citation_break(), "b".into()])
        );
    }

    #[test]
    fn no_marker_without_citation() {
        let rules = TransformRules::default();
        for citation in [None, Some(vec![])] {
            let quote = QuoteAttributes::new(vec![paragraph("x")], citation);
            let text = quote_to_text(&quote, &rules);
            assert_eq!(text.content, Some(vec![paragraph("x")]));
        }
    }

    #[test]
    fn empty_body_degrades_to_citation() {
        let rules = TransformRules::default();
        let mut quote = QuoteAttributes::new(vec![], Some(vec!["Someone".into()]));
        quote.align = Some("center".to_string());
        quote.rest.insert("anchor", "q");

        let text = quote_to_text(&quote, &rules);

        assert_eq!(text.content, Some(vec!["Someone".into()]));
        assert!(text.rest.is_empty());
    }

    #[test]
    fn absent_body_and_citation_gives_absent_content() {
        let text = quote_to_text(&QuoteAttributes::default(), &TransformRules::default());
        assert_eq!(text.content, None);
        assert!(text.rest.is_empty());
    }

    #[test]
    fn keeps_quote_attributes() {
        let rules = TransformRules::default();
        let mut quote = QuoteAttributes::new(vec!["a".into()], None);
        quote.align = Some("right".to_string());
        quote.style = Some(QuoteStyle::Two);
        quote.rest.insert("anchor", "q");

        let text = quote_to_text(&quote, &rules);

        assert_eq!(text.rest.get("align"), Some(&json!("right")));
        assert_eq!(text.rest.get("style"), Some(&json!(2)));
        assert_eq!(text.rest.get("anchor"), Some(&json!("q")));
    }

    #[test]
    fn stale_content_field_is_replaced() {
        let rules = TransformRules::default();
        let mut quote = QuoteAttributes::new(vec!["a".into()], None);
        quote.rest.insert("content", json!(["stale"]));

        let text = quote_to_text(&quote, &rules);

        assert!(text.rest.is_empty());
        let encoded = serde_json::to_string(&text).unwrap();
        assert_eq!(encoded, r#"{"content":["a"]}"#);
    }

    #[test]
    fn does_not_touch_input() {
        let rules = TransformRules::default();
        let quote = QuoteAttributes::new(vec!["a".into()], Some(vec!["b".into()]));
        let before = quote.clone();

        let _ = quote_to_text(&quote, &rules);

        assert_eq!(quote, before);
    }

    #[test]
    fn bare_node_body_becomes_single_node_content() {
        let rules = TransformRules::default();
        let quote = QuoteAttributes {
            value: Some(QuoteValue::Node(ContentNode::text("solo"))),
            ..Default::default()
        };
        let text = quote_to_text(&quote, &rules);
        assert_eq!(text.content, Some(vec![ContentNode::text("solo")]));
    }

    #[test]
    fn empty_bare_text_counts_as_no_body() {
        let rules = TransformRules::default();
        let quote = QuoteAttributes {
            value: Some(QuoteValue::Node(ContentNode::text(""))),
            citation: Some(vec!["c".into()]),
            ..Default::default()
        };
        let text = quote_to_text(&quote, &rules);
        assert_eq!(text.content, Some(vec!["c".into()]));
    }
}
