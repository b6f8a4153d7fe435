use hound_ast::{FileId, NodeIndex};
use thiserror::Error;

/// Host contract violations and bad configuration.
///
/// Diagnostics the resolver cannot explain are not errors; they end up in
/// [`crate::HoundReport::unsupported`].
#[derive(Debug, Error)]
pub enum HoundError {
    #[error("diagnostic {code} refers to unknown file {file:?}")]
    UnknownFile { code: u32, file: FileId },
    #[error("diagnostic {code} refers to unknown node {node:?} in {file_name}")]
    UnknownNode {
        code: u32,
        file_name: String,
        node: NodeIndex,
    },
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HoundError>;
