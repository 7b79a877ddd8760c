//! Error types for dispatch and interchange
//!
//! The transform rules themselves are total. Errors only arise when a caller
//! asks for a pair nobody registered, names an unknown block type, or hands
//! over JSON that does not describe a block.

use crate::ir::attributes::BlockType;
use thiserror::Error;

/// Errors that can occur around block transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// No rule registered for the pair
    #[error("No transform registered from '{from}' to '{to}'")]
    TransformNotFound { from: BlockType, to: BlockType },
    /// Block type name outside text, heading and quote
    #[error("Unknown block type '{0}'")]
    UnknownBlockType(String),
    /// Error while decoding or encoding block JSON
    #[error("Invalid block JSON: {0}")]
    Json(#[from] serde_json::Error),
}
