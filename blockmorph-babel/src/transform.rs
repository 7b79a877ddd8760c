//! Block transform trait definition
//!
//! This module defines the core BlockTransform trait that every rule implements,
//! together with [`TransformOutput`], the ordered list of blocks a rule produces.

use crate::ir::attributes::{BlockAttributes, BlockType};
use crate::rules::TransformRules;

/// Ordered blocks produced by one transform call.
///
/// A rule may yield one block or several (quote → heading can split into a
/// heading followed by a residual quote). Callers always iterate.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    blocks: Vec<BlockAttributes>,
}

impl TransformOutput {
    pub fn single(block: impl Into<BlockAttributes>) -> Self {
        Self {
            blocks: vec![block.into()],
        }
    }

    pub fn pair(first: impl Into<BlockAttributes>, second: impl Into<BlockAttributes>) -> Self {
        Self {
            blocks: vec![first.into(), second.into()],
        }
    }

    pub fn blocks(&self) -> &[BlockAttributes] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<BlockAttributes> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BlockAttributes> {
        self.blocks.iter()
    }
}

impl IntoIterator for TransformOutput {
    type Item = BlockAttributes;
    type IntoIter = std::vec::IntoIter<BlockAttributes>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a TransformOutput {
    type Item = &'a BlockAttributes;
    type IntoIter = std::slice::Iter<'a, BlockAttributes>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Trait for block transforms
///
/// Implementors convert the attributes of one `source` block into one or more
/// blocks, starting with a `target` block. Rules are total: any well-typed input
/// yields output, never an error.
///
/// # Examples
///
/// ```ignore
/// struct Identity;
///
/// impl BlockTransform for Identity {
///     fn source(&self) -> BlockType {
///         BlockType::Text
///     }
///
///     fn target(&self) -> BlockType {
///         BlockType::Text
///     }
///
///     fn apply(&self, attrs: &BlockAttributes, _rules: &TransformRules) -> TransformOutput {
///         TransformOutput::single(attrs.clone())
///     }
/// }
/// ```
pub trait BlockTransform: Send + Sync {
    /// Block type this rule reads
    fn source(&self) -> BlockType;

    /// Block type of the first block this rule produces
    fn target(&self) -> BlockType;

    /// Optional description of this rule
    fn description(&self) -> &str {
        ""
    }

    /// Human-readable `source -> target` label
    fn label(&self) -> String {
        format!("{} -> {}", self.source(), self.target())
    }

    /// Apply the rule to one block's attributes
    ///
    /// Attributes of another block type come back unchanged as a single block.
    fn apply(&self, attrs: &BlockAttributes, rules: &TransformRules) -> TransformOutput;
}

/// Shared fallback for a rule handed attributes of the wrong block type.
pub(crate) fn passthrough_mismatch(
    transform: &dyn BlockTransform,
    attrs: &BlockAttributes,
) -> TransformOutput {
    tracing::warn!(
        rule = %transform.label(),
        got = %attrs.block_type(),
        "block type does not match transform source, leaving block unchanged"
    );
    TransformOutput::single(attrs.clone())
}
