//! The block transform rules
//!
//! Each rule is available both as a plain function over typed attributes and as
//! a [`BlockTransform`](crate::transform::BlockTransform) for the registry:
//!
//! | source  | target  | rule                                         |
//! |---------|---------|----------------------------------------------|
//! | text    | quote   | [`text_to_quote`], split at the citation break |
//! | quote   | text    | [`quote_to_text`], join with a citation break  |
//! | heading | quote   | [`heading_to_quote`]                         |
//! | quote   | heading | [`quote_to_heading`], may yield two blocks   |

pub mod heading_quote;
pub mod quote_to_text;
pub mod text_to_quote;

pub use heading_quote::{heading_to_quote, quote_to_heading, HeadingToQuote, QuoteToHeading};
pub use quote_to_text::{quote_to_text, QuoteToText};
pub use text_to_quote::{text_to_quote, TextToQuote};
