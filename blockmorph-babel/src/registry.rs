//! Transform registry for rule discovery and dispatch
//!
//! This module provides a centralized table of block transforms, keyed by
//! `(source, target)` block type. Callers hand over one block's attributes and
//! a target type; the registry picks the rule and applies it.

use crate::error::TransformError;
use crate::ir::attributes::{BlockAttributes, BlockType};
use crate::rules::TransformRules;
use crate::transform::{BlockTransform, TransformOutput};
use std::collections::HashMap;

/// Registry of block transforms
///
/// # Examples
///
/// ```ignore
/// let registry = TransformRegistry::default();
/// let output = registry.apply(&block, BlockType::Quote)?;
/// for block in output {
///     // construct editor blocks from the attributes
/// }
/// ```
pub struct TransformRegistry {
    transforms: HashMap<(BlockType, BlockType), Box<dyn BlockTransform>>,
    rules: TransformRules,
}

impl TransformRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TransformRegistry {
            transforms: HashMap::new(),
            rules: TransformRules::default(),
        }
    }

    /// Register a transform
    ///
    /// If a transform for the same pair already exists, it will be replaced.
    pub fn register<T: BlockTransform + 'static>(&mut self, transform: T) {
        self.transforms
            .insert((transform.source(), transform.target()), Box::new(transform));
    }

    /// Get the transform for a pair
    pub fn get(
        &self,
        from: BlockType,
        to: BlockType,
    ) -> Result<&dyn BlockTransform, TransformError> {
        self.transforms
            .get(&(from, to))
            .map(|t| t.as_ref())
            .ok_or(TransformError::TransformNotFound { from, to })
    }

    /// Check if a transform exists for a pair
    pub fn has(&self, from: BlockType, to: BlockType) -> bool {
        self.transforms.contains_key(&(from, to))
    }

    /// List all registered transforms as `source -> target` labels (sorted)
    pub fn list_transforms(&self) -> Vec<String> {
        let mut pairs: Vec<_> = self.transforms.keys().copied().collect();
        pairs.sort();
        pairs
            .into_iter()
            .map(|(from, to)| format!("{from} -> {to}"))
            .collect()
    }

    /// Block types reachable from `source` in one step (sorted)
    pub fn targets_for(&self, source: BlockType) -> Vec<BlockType> {
        let mut targets: Vec<_> = self
            .transforms
            .keys()
            .filter(|(from, _)| *from == source)
            .map(|(_, to)| *to)
            .collect();
        targets.sort();
        targets
    }

    /// Rules used when applying transforms
    pub fn rules(&self) -> &TransformRules {
        &self.rules
    }

    /// Replace the rules used when applying transforms
    pub fn set_rules(&mut self, rules: TransformRules) {
        self.rules = rules;
    }

    /// Convert one block into `to`, dispatching on the block's own type
    pub fn apply(
        &self,
        attrs: &BlockAttributes,
        to: BlockType,
    ) -> Result<TransformOutput, TransformError> {
        let from = attrs.block_type();
        let transform = self.get(from, to)?;
        let output = transform.apply(attrs, &self.rules);
        tracing::debug!(
            rule = %transform.label(),
            produced = output.len(),
            "applied block transform"
        );
        Ok(output)
    }

    /// Create a registry with the default rules
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::transforms::TextToQuote);
        registry.register(crate::transforms::HeadingToQuote);
        registry.register(crate::transforms::QuoteToText);
        registry.register(crate::transforms::QuoteToHeading);

        registry
    }

    /// Create a registry with the default rules and custom marker settings
    pub fn with_rules(rules: TransformRules) -> Self {
        let mut registry = Self::with_defaults();
        registry.set_rules(rules);
        registry
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
