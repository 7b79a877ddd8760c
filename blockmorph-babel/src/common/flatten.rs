//! Deep-flattens nested content sequences.
//!
//! # The High-Level Concept
//!
//! Editors may hand over content whose arrays nest inside arrays
//! ([`ContentNode::Group`]). Marker search needs one ordered, non-nested
//! sequence, so every group is expanded in place, recursively, before the
//! scan.
//!
//! # The Algorithm
//!
//! 1. Walk the input sequence in order.
//! 2. A group recurses into its members and contributes nothing itself.
//! 3. Text leaves and elements are cloned into the output as they are. Element
//!    children belong to the markup and stay inside it.
//!
//! The output holds no groups, so flattening it again is a no-op.

use crate::ir::nodes::{Content, ContentNode};

/// Expands every nested group of `nodes` into one flat sequence.
pub fn flatten(nodes: &[ContentNode]) -> Content {
    let mut flat = Vec::with_capacity(nodes.len());
    walk(nodes, &mut flat);
    flat
}

/// Whether `nodes` contains no nested group at its top level.
pub fn is_flat(nodes: &[ContentNode]) -> bool {
    !nodes
        .iter()
        .any(|node| matches!(node, ContentNode::Group(_)))
}

fn walk(nodes: &[ContentNode], flat: &mut Content) {
    for node in nodes {
        match node {
            ContentNode::Group(children) => walk(children, flat),
            leaf => flat.push(leaf.clone()),
        }
    }
}
