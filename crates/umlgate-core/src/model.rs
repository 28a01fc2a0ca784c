//! Diagram model inspected by the edge constraints.
//!
//! A [`Diagram`] owns all of its nodes and committed edges. Nodes and edges
//! are addressed through copyable arena indices ([`NodeId`], [`EdgeId`]),
//! so every query takes the diagram explicitly.
//!
//! # Organization
//!
//! - [`kind`] - Closed sets of variant tags: [`NodeKind`], [`EdgeKind`], [`DiagramKind`]
//! - [`node`] - [`Node`] and its geometry
//! - [`diagram`] - [`Diagram`], [`Edge`] and traversal queries
//! - [`error`] - [`ModelError`]

pub mod diagram;
pub mod error;
pub mod kind;
pub mod node;

mod graph;

pub use diagram::{Diagram, Edge};
pub use error::ModelError;
pub use kind::{DiagramKind, EdgeKind, NodeKind};
pub use node::Node;

use std::fmt;

/// Index of a node inside its [`Diagram`].
///
/// Two nodes are the same node exactly when their ids are equal, regardless
/// of their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Index of a committed edge inside its [`Diagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
