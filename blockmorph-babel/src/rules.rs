use crate::ir::nodes::{ContentNode, Element};
use serde::{Deserialize, Serialize};

/// Configuration for the block transforms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRules {
    /// Tag of the citation-break marker element
    pub marker_tag: String,

    /// Attribute that carries the marker class
    pub marker_class_attribute: String,

    /// Class value identifying the citation-break marker
    pub marker_class: String,

    /// Tag of a paragraph element inside a quote body
    pub paragraph_tag: String,
}

impl TransformRules {
    /// A fresh citation-break marker node.
    pub fn citation_break(&self) -> ContentNode {
        ContentNode::Element(
            Element::new(self.marker_tag.as_str())
                .with_attribute(self.marker_class_attribute.as_str(), self.marker_class.as_str()),
        )
    }

    pub fn is_citation_break(&self, node: &ContentNode) -> bool {
        node.is_element_of(&self.marker_tag)
            && node.class_name(&self.marker_class_attribute) == Some(self.marker_class.as_str())
    }

    pub fn is_paragraph(&self, node: &ContentNode) -> bool {
        node.is_element_of(&self.paragraph_tag)
    }
}

impl Default for TransformRules {
    fn default() -> Self {
        Self {
            marker_tag: "br".to_string(),
            marker_class_attribute: "className".to_string(),
            marker_class: "citation-break".to_string(),
            paragraph_tag: "p".to_string(),
        }
    }
}
