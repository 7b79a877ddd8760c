//! Property tests over generated content.

use crate::common::{marker, text_block};
use blockmorph_babel::common::{flatten, is_flat};
use blockmorph_babel::transforms::{quote_to_heading, quote_to_text, text_to_quote};
use blockmorph_babel::{
    ContentNode, Element, QuoteAttributes, QuoteValue, TextAttributes, TransformRules,
};
use proptest::prelude::*;

fn arb_leaf() -> impl Strategy<Value = ContentNode> {
    prop_oneof![
        "[a-z ]{1,6}".prop_map(ContentNode::Text),
        "[a-z]{1,6}".prop_map(|word| {
            ContentNode::Element(Element::new("em").with_children(vec![ContentNode::Text(word)]))
        }),
        Just(ContentNode::Element(Element::new("br"))),
    ]
}

fn arb_nested() -> impl Strategy<Value = ContentNode> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(ContentNode::Group)
    })
}

fn arb_paragraph() -> impl Strategy<Value = ContentNode> {
    prop::collection::vec(arb_leaf(), 1..3)
        .prop_map(|children| ContentNode::Element(Element::new("p").with_children(children)))
}

proptest! {
    #[test]
    fn flatten_reaches_a_fixed_point(nodes in prop::collection::vec(arb_nested(), 0..6)) {
        let flat = flatten(&nodes);
        prop_assert!(is_flat(&flat));
        prop_assert_eq!(flatten(&flat), flat);
    }

    #[test]
    fn quote_text_quote_recovers_body_and_citation(
        value in prop::collection::vec(arb_leaf(), 1..5),
        citation in prop::collection::vec(arb_leaf(), 1..4),
    ) {
        let rules = TransformRules::default();
        let quote = QuoteAttributes::new(value, Some(citation));

        let text = quote_to_text(&quote, &rules);
        let recovered = text_to_quote(&text, &rules);

        prop_assert_eq!(recovered, quote);
    }

    #[test]
    fn text_without_marker_round_trips(content in prop::collection::vec(arb_leaf(), 1..6)) {
        let rules = TransformRules::default();
        let text = TextAttributes::new(content);

        let quote = text_to_quote(&text, &rules);
        prop_assert_eq!(quote.citation.clone(), None);
        prop_assert_eq!(quote_to_text(&quote, &rules), text);
    }

    #[test]
    fn text_split_preserves_every_node_but_the_marker(
        before in prop::collection::vec(arb_leaf(), 0..4),
        after in prop::collection::vec(arb_leaf(), 0..4),
    ) {
        let rules = TransformRules::default();
        let mut content = before.clone();
        content.push(marker());
        content.extend(after.clone());

        let block = text_block(content);
        let quote = text_to_quote(block.as_text().unwrap(), &rules);

        prop_assert_eq!(quote.value, Some(QuoteValue::Paragraphs(before)));
        prop_assert_eq!(quote.citation, Some(after));
    }

    #[test]
    fn lone_paragraph_without_citation_is_absorbed(paragraph in arb_paragraph()) {
        let rules = TransformRules::default();
        let quote = QuoteAttributes::new(vec![paragraph.clone()], None);

        let output = quote_to_heading(&quote, &rules);

        prop_assert_eq!(output.len(), 1);
        let heading = output.blocks()[0].as_heading().unwrap();
        let children = paragraph.as_element().unwrap().children.clone();
        prop_assert_eq!(heading.content.clone(), Some(children));
    }

    #[test]
    fn promotion_keeps_every_remaining_paragraph(
        paragraphs in prop::collection::vec(arb_paragraph(), 1..5),
        cited in any::<bool>(),
    ) {
        // A lone uncited paragraph is absorbed; that branch is covered above.
        prop_assume!(paragraphs.len() > 1 || cited);
        let rules = TransformRules::default();
        let citation = cited.then(|| vec![ContentNode::text("source")]);
        let quote = QuoteAttributes::new(paragraphs.clone(), citation.clone());

        let output = quote_to_heading(&quote, &rules);

        prop_assert_eq!(output.len(), 2);
        let heading = output.blocks()[0].as_heading().unwrap();
        let first_children = paragraphs[0].as_element().unwrap().children.clone();
        prop_assert_eq!(heading.content.clone(), Some(first_children));
        let residual = output.blocks()[1].as_quote().unwrap();
        prop_assert_eq!(residual.value.clone(), Some(QuoteValue::Paragraphs(paragraphs[1..].to_vec())));
        prop_assert_eq!(residual.citation.clone(), citation);
    }

    #[test]
    fn promotion_splits_unless_a_lone_paragraph_is_uncited(
        paragraphs in prop::collection::vec(arb_paragraph(), 1..5),
        cited in any::<bool>(),
    ) {
        let rules = TransformRules::default();
        let citation = cited.then(|| vec![ContentNode::text("source")]);
        let quote = QuoteAttributes::new(paragraphs.clone(), citation);

        let output = quote_to_heading(&quote, &rules);

        let expected = if paragraphs.len() == 1 && !cited { 1 } else { 2 };
        prop_assert_eq!(output.len(), expected);
    }
}
