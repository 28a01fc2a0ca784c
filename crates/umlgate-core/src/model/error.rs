//! Errors raised when the diagram model is mutated inconsistently.

use thiserror::Error;

use super::{DiagramKind, EdgeKind, NodeId, NodeKind};

/// Errors for structural operations on a [`Diagram`](super::Diagram).
///
/// Queries never fail; they answer `None` or an empty iterator for unknown
/// ids. Only mutations report errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Node {0} does not exist in the diagram")]
    UnknownNode(NodeId),

    #[error("A {diagram} diagram cannot contain {node} nodes")]
    NodeNotAccepted { diagram: DiagramKind, node: NodeKind },

    #[error("A {diagram} diagram cannot contain {edge} edges")]
    EdgeNotAccepted { diagram: DiagramKind, edge: EdgeKind },

    #[error("A {child} node cannot be nested inside a {parent} node")]
    InvalidContainment { parent: NodeKind, child: NodeKind },

    #[error("Expected a {expected} diagram, found a {found} diagram")]
    DiagramKindMismatch {
        expected: DiagramKind,
        found: DiagramKind,
    },
}
