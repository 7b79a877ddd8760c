//! Heading ↔ quote through the default registry.

use crate::common::{p, quote_block, text};
use blockmorph_babel::{
    BlockAttributes, BlockType, HeadingAttributes, QuoteAttributes, QuoteValue, TransformRegistry,
};

fn convert(block: &BlockAttributes, to: BlockType) -> Vec<BlockAttributes> {
    TransformRegistry::default()
        .apply(block, to)
        .expect("transform to be registered")
        .into_blocks()
}

#[test]
fn test_single_paragraph_absorbed() {
    let blocks = convert(&quote_block(vec![p("x")], None), BlockType::Heading);

    assert_eq!(
        blocks,
        vec![BlockAttributes::Heading(HeadingAttributes::new(vec![text("x")]))]
    );
}

#[test]
fn test_citation_splits_into_heading_then_quote() {
    let blocks = convert(
        &quote_block(vec![p("x")], Some(vec![text("y")])),
        BlockType::Heading,
    );

    assert_eq!(
        blocks,
        vec![
            BlockAttributes::Heading(HeadingAttributes::new(vec![text("x")])),
            BlockAttributes::Quote(QuoteAttributes::new(vec![], Some(vec![text("y")]))),
        ]
    );
}

#[test]
fn test_multi_paragraph_split() {
    let blocks = convert(&quote_block(vec![p("x"), p("z")], None), BlockType::Heading);

    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[0],
        BlockAttributes::Heading(HeadingAttributes::new(vec![text("x")]))
    );
    let residual = blocks[1].as_quote().unwrap();
    assert_eq!(residual.value, Some(QuoteValue::Paragraphs(vec![p("z")])));
    assert_eq!(residual.citation, None);
}

#[test]
fn test_paragraph_followed_by_loose_text_splits() {
    let blocks = convert(&quote_block(vec![p("x"), text("tail")], None), BlockType::Heading);

    assert_eq!(blocks.len(), 2);
    let residual = blocks[1].as_quote().unwrap();
    assert_eq!(residual.value, Some(QuoteValue::Paragraphs(vec![text("tail")])));
}

#[test]
fn test_heading_to_quote_and_back() {
    let heading = BlockAttributes::Heading(HeadingAttributes::new(vec![text("Title")]));

    let quote = convert(&heading, BlockType::Quote);
    assert_eq!(quote.len(), 1);

    // A bare text body is not a paragraph, so the whole body is promoted.
    let back = convert(&quote[0], BlockType::Heading);
    assert_eq!(back, vec![heading]);
}

#[test]
fn test_repeated_promotion_drains_quote() {
    let mut quote = quote_block(vec![p("a"), p("b"), p("c")], None);
    let mut headings = Vec::new();

    loop {
        let mut blocks = convert(&quote, BlockType::Heading);
        headings.push(blocks.remove(0));
        // The last paragraph is absorbed, so no residual quote follows it.
        match blocks.pop() {
            Some(residual) => quote = residual,
            None => break,
        }
    }

    let titles: Vec<_> = headings
        .iter()
        .map(|block| block.as_heading().unwrap().content.clone().unwrap())
        .collect();
    assert_eq!(titles, vec![vec![text("a")], vec![text("b")], vec![text("c")]]);
}
