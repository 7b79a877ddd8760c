//! JSON interchange for blocks
//!
//! This module provides a functional interface over the registry for callers
//! that hold blocks as JSON: one block envelope, or an array of them.
//!
//! ```text
//! {"name": "core/quote", "attributes": {"value": [...], "citation": [...]}}
//! ```

use crate::error::TransformError;
use crate::ir::attributes::{BlockAttributes, BlockType};
use crate::registry::TransformRegistry;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<BlockAttributes>),
    One(Box<BlockAttributes>),
}

/// Parse a single block envelope.
pub fn parse_block(source: &str) -> Result<BlockAttributes, TransformError> {
    Ok(serde_json::from_str(source)?)
}

/// Parse either one block envelope or an array of them.
pub fn parse_blocks(source: &str) -> Result<Vec<BlockAttributes>, TransformError> {
    let parsed: OneOrMany = serde_json::from_str(source)?;
    Ok(match parsed {
        OneOrMany::Many(blocks) => blocks,
        OneOrMany::One(block) => vec![*block],
    })
}

/// Serialize blocks as a compact JSON array.
pub fn to_json(blocks: &[BlockAttributes]) -> Result<String, TransformError> {
    Ok(serde_json::to_string(blocks)?)
}

/// Serialize blocks as an indented JSON array.
pub fn to_json_pretty(blocks: &[BlockAttributes]) -> Result<String, TransformError> {
    Ok(serde_json::to_string_pretty(blocks)?)
}

/// Convert every block into `to`, concatenating the outputs in order.
///
/// Fails on the first block whose type has no rule for `to`.
pub fn convert_blocks(
    registry: &TransformRegistry,
    blocks: &[BlockAttributes],
    to: BlockType,
) -> Result<Vec<BlockAttributes>, TransformError> {
    let mut converted = Vec::with_capacity(blocks.len());
    for block in blocks {
        converted.extend(registry.apply(block, to)?);
    }
    Ok(converted)
}

/// Parse, convert and re-serialize in one step.
///
/// # Example
///
/// ```
/// use blockmorph_babel::interchange::convert_json;
/// use blockmorph_babel::ir::attributes::BlockType;
/// use blockmorph_babel::TransformRegistry;
///
/// let source = r#"{"name": "core/text", "attributes": {"content": ["hello"]}}"#;
/// let out = convert_json(&TransformRegistry::default(), source, BlockType::Quote).unwrap();
/// assert_eq!(out, r#"[{"name":"core/quote","attributes":{"value":["hello"]}}]"#);
/// ```
pub fn convert_json(
    registry: &TransformRegistry,
    source: &str,
    to: BlockType,
) -> Result<String, TransformError> {
    let blocks = parse_blocks(source)?;
    let converted = convert_blocks(registry, &blocks, to)?;
    to_json(&converted)
}
