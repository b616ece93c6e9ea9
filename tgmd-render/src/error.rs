//! Error types for rendering operations

use crate::tree::NodeKind;
use thiserror::Error;

/// Errors that can occur while building or rendering a document tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The renderer reached a node kind it refuses to emit
    #[error("unsupported construct: {0}")]
    Unsupported(NodeKind),
    /// The Markdown parser produced a node with no document-tree counterpart
    #[error("markdown construct has no document tree equivalent: {0}")]
    Unmapped(String),
}

impl RenderError {
    /// The offending node kind, when the error is an unsupported construct.
    pub fn unsupported_kind(&self) -> Option<NodeKind> {
        match self {
            RenderError::Unsupported(kind) => Some(*kind),
            RenderError::Unmapped(_) => None,
        }
    }
}
