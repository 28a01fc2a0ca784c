//! Arena graph backing [`Diagram`](super::Diagram).
//!
//! Nodes and edges live in vectors and are addressed by their position.
//! Incoming and outgoing edge lists are kept per node so that the
//! edges touching a node can be listed in O(degree).
//!
//! This is an internal module; [`Diagram`](super::Diagram) is the public face.

use std::collections::HashMap;

use super::{EdgeId, NodeId};

/// A directed edge with its endpoints and associated value.
#[derive(Debug, Clone, Copy)]
pub(super) struct EdgeEntry<E> {
    source: NodeId,
    target: NodeId,
    value: E,
}

impl<E: Copy> EdgeEntry<E> {
    pub(super) fn source(&self) -> NodeId {
        self.source
    }

    pub(super) fn target(&self) -> NodeId {
        self.target
    }

    pub(super) fn value(&self) -> E {
        self.value
    }
}

/// Directed multigraph. Self-loops and parallel edges are allowed.
#[derive(Debug)]
pub(super) struct Graph<N, E> {
    nodes: Vec<N>,
    edges: Vec<EdgeEntry<E>>,
    incoming: HashMap<NodeId, Vec<EdgeId>>,
    outgoing: HashMap<NodeId, Vec<EdgeId>>,
}

impl<N, E> Graph<N, E>
where
    N: std::fmt::Debug,
    E: Copy + std::fmt::Debug,
{
    pub(super) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            incoming: HashMap::new(),
            outgoing: HashMap::new(),
        }
    }

    pub(super) fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(id.index())
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(id.index())
    }

    /// Returns an iterator over all nodes with their ids, in insertion order.
    pub(super) fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }

    pub(super) fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub(super) fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub(super) fn edge(&self, id: EdgeId) -> Option<&EdgeEntry<E>> {
        self.edges.get(id.index())
    }

    /// Returns an iterator over all edges with their ids, in insertion order.
    pub(super) fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeEntry<E>)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId::new(index), edge))
    }

    pub(super) fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the ids of edges leaving `id`.
    pub(super) fn outgoing(&self, id: NodeId) -> &[EdgeId] {
        self.outgoing.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the ids of edges entering `id`.
    pub(super) fn incoming(&self, id: NodeId) -> &[EdgeId] {
        self.incoming.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the ids of edges touching `id` in either direction.
    ///
    /// Outgoing edges come first. A self-loop is reported once.
    pub(super) fn incident(&self, id: NodeId) -> impl Iterator<Item = EdgeId> {
        let incoming = self
            .incoming(id)
            .iter()
            .copied()
            .filter(move |edge_id| self.edges[edge_id.index()].source != id);
        self.outgoing(id).iter().copied().chain(incoming)
    }

    pub(super) fn add_node(&mut self, node: N) -> NodeId {
        self.nodes.push(node);
        NodeId::new(self.nodes.len() - 1)
    }

    /// Adds a directed edge between two existing nodes.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if either endpoint is missing. Callers validate
    /// endpoints first; the check only catches internal bugs.
    pub(super) fn add_edge(&mut self, source: NodeId, target: NodeId, value: E) -> EdgeId {
        debug_assert!(
            self.contains_node(source),
            "Adding edge: source node {source} does not exist for {value:?}"
        );
        debug_assert!(
            self.contains_node(target),
            "Adding edge: target node {target} does not exist for {value:?}"
        );

        self.edges.push(EdgeEntry {
            source,
            target,
            value,
        });

        let id = EdgeId::new(self.edges.len() - 1);
        self.outgoing.entry(source).or_default().push(id);
        self.incoming.entry(target).or_default().push(id);
        id
    }
}
