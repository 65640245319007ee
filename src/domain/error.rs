// Error types for the visualization core and its frontends.

use crate::domain::syntax::NodeId;
use thiserror::Error;

/// Fatal failures during traversal. Unsupported kinds and malformed fields are
/// not errors; only an inconsistent node model ends up here.
#[derive(Debug, Error)]
pub enum VisualizeError {
    #[error("node {0} is referenced but does not exist in the syntax tree")]
    DanglingNode(NodeId),
}

/// Errors raised by source frontends while building a syntax tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("invalid tree: {0}")]
    InvalidTree(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while declaring kind relations.
#[derive(Debug, Error, PartialEq)]
pub enum HierarchyError {
    #[error("declaring `{kind}` under `{parent}` would create a cycle")]
    Cycle { kind: String, parent: String },
}
