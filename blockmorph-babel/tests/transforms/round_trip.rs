//! Text ↔ quote round trips through the default registry.

use crate::common::{marker, p, quote_block, text, text_block};
use blockmorph_babel::{BlockAttributes, BlockType, QuoteValue, TransformRegistry};

fn convert(block: &BlockAttributes, to: BlockType) -> BlockAttributes {
    let output = TransformRegistry::default()
        .apply(block, to)
        .expect("transform to be registered");
    assert_eq!(output.len(), 1, "expected exactly one block");
    output.into_blocks().remove(0)
}

#[test]
fn test_round_trip_without_citation() {
    let original = text_block(vec![text("hello")]);

    let quote = convert(&original, BlockType::Quote);
    let back = convert(&quote, BlockType::Text);

    assert_eq!(back, original);
}

#[test]
fn test_split_at_marker() {
    let quote = convert(
        &text_block(vec![text("a"), marker(), text("b")]),
        BlockType::Quote,
    );

    let quote = quote.as_quote().unwrap();
    assert_eq!(quote.value, Some(QuoteValue::Paragraphs(vec![text("a")])));
    assert_eq!(quote.citation, Some(vec![text("b")]));
}

#[test]
fn test_round_trip_with_citation() {
    let original = quote_block(vec![text("a")], Some(vec![text("b")]));

    let flattened = convert(&original, BlockType::Text);
    assert_eq!(
        flattened.as_text().unwrap().content,
        Some(vec![text("a"), marker(), text("b")])
    );

    let recovered = convert(&flattened, BlockType::Quote);
    assert_eq!(recovered, original);
}

#[test]
fn test_absent_or_empty_citation_never_inserts_marker() {
    for citation in [None, Some(vec![])] {
        let block = quote_block(vec![p("x"), p("y")], citation);
        let content = convert(&block, BlockType::Text)
            .as_text()
            .unwrap()
            .content
            .clone()
            .unwrap();
        assert!(!content.contains(&marker()));
        assert_eq!(content, vec![p("x"), p("y")]);
    }
}

#[test]
fn test_round_trip_keeps_quote_attributes() {
    let original: BlockAttributes = serde_json::from_str(
        r#"{"name": "core/quote", "attributes": {
            "value": [{"type": "p", "props": {"children": ["a"]}}],
            "citation": ["b"],
            "align": "right",
            "style": 2,
            "className": "is-large"
        }}"#,
    )
    .unwrap();

    let text_form = convert(&original, BlockType::Text);
    let recovered = convert(&text_form, BlockType::Quote);

    assert_eq!(recovered, original);
}

#[test]
fn test_citation_only_quote_degrades_to_text() {
    let block = quote_block(vec![], Some(vec![text("Anonymous")]));

    let back = convert(&block, BlockType::Text);

    assert_eq!(back, text_block(vec![text("Anonymous")]));
}
