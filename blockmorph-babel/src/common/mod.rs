//! Helpers shared by the block transforms.

pub mod flatten;

pub use flatten::{flatten, is_flat};
