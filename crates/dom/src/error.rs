//! Error types for DOM tree operations
//!
//! Simple, flat error hierarchy. Lookups return `Option`, mutations return these.

use crate::types::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node {0} is not reachable from the document root")]
    NotInTree(NodeId),

    #[error("Cannot insert node {child} under {parent}: node is an ancestor of its new parent")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
