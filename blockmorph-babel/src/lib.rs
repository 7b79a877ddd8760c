//! Content transforms between text, heading and quote blocks
//!
//!     This crate converts the attributes of one rich-text block into another block type. Three
//!     block types take part: a generic text block, a heading, and a quote made of a body and an
//!     optional citation.
//!
//!     TLDR: For rule authors:
//!         - Rules are pure functions over typed attributes. They never fail and never mutate
//!           their input; malformed or absent fields degrade to the empty default.
//!         - A rule may produce more than one block (quote → heading can split), so rules return a
//!           TransformOutput and callers always iterate it.
//!         - Attributes a rule does not name travel in the passthrough record and must survive.
//!
//! Architecture
//!
//!     Content lives in a small IR (./ir/nodes.rs): text leaves, markup elements and nested
//!     groups. Block attributes (./ir/attributes.rs) wrap content fields and keep everything
//!     else in a passthrough map. The rules (./transforms) read and build these records, using
//!     the shared helpers in ./common (deep flattening).
//!
//!     This is a pure lib, that is, it powers blockmorph-cli but is shell agnostic: no code
//!     should suppose a shell environment, be it std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── transform.rs            # BlockTransform trait and TransformOutput
//!     ├── registry.rs             # (source, target) dispatch table
//!     ├── rules.rs                # Citation-break marker and paragraph settings
//!     ├── interchange.rs          # JSON block envelopes
//!     ├── transforms
//!     │   ├── text_to_quote.rs
//!     │   ├── quote_to_text.rs
//!     │   └── heading_quote.rs
//!     ├── ir                      # Content nodes and block attributes
//!     ├── common                  # Flattening
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common                  # shared builders
//!     └── transforms              # cross-rule properties and round trips
//!
//! The Citation Break
//!
//!     A text block has a single content field, a quote has two. Going from quote to text the
//!     boundary is kept as a marker element (`<br className="citation-break">`) between body and
//!     citation; going back the first such marker splits the content again. The marker shape is
//!     configurable through TransformRules.
pub mod error;
pub mod interchange;
pub mod registry;
pub mod rules;
pub mod transform;
pub mod transforms;

pub mod common;
pub mod ir;

pub use error::TransformError;
pub use ir::attributes::{
    Attributes, BlockAttributes, BlockType, HeadingAttributes, QuoteAttributes, QuoteStyle,
    QuoteValue, TextAttributes,
};
pub use ir::nodes::{Content, ContentNode, Element};
pub use registry::TransformRegistry;
pub use rules::TransformRules;
pub use transform::{BlockTransform, TransformOutput};

/// Applies the default rule for `to` to one block.
///
/// Shorthand for [`TransformRegistry::apply`] on the default registry.
pub fn transform_block(
    attrs: &BlockAttributes,
    to: BlockType,
) -> Result<TransformOutput, TransformError> {
    TransformRegistry::default().apply(attrs, to)
}
