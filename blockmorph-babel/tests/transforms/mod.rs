//! Cross-rule behavior of the default registry.

mod heading;
mod properties;
mod round_trip;
