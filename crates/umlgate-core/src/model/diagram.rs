//! Diagrams and their traversal queries.

use log::trace;

use super::{
    DiagramKind, EdgeId, EdgeKind, ModelError, Node, NodeId, NodeKind,
    graph::{EdgeEntry, Graph},
};

/// A committed edge, as seen through [`Diagram`] queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    kind: EdgeKind,
    start: NodeId,
    end: NodeId,
}

impl Edge {
    fn from_entry(id: EdgeId, entry: &EdgeEntry<EdgeKind>) -> Self {
        Self {
            id,
            kind: entry.value(),
            start: entry.source(),
            end: entry.target(),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    /// Returns true if this edge runs from `start` to `end`, in that direction.
    pub fn connects(&self, start: NodeId, end: NodeId) -> bool {
        self.start == start && self.end == end
    }
}

/// A diagram of one fixed [`DiagramKind`].
///
/// The diagram owns every node and committed edge. Only node and edge kinds
/// accepted by the diagram kind can be added, so the kind alone determines
/// which constraints apply to it.
///
/// # Examples
///
/// ```
/// # use umlgate_core::model::{Diagram, DiagramKind, EdgeKind, Node, NodeKind};
/// let mut diagram = Diagram::new(DiagramKind::Class);
/// let order = diagram.add_root_node(Node::new(NodeKind::Class).with_label("Order"))?;
/// let line = diagram.add_root_node(Node::new(NodeKind::Class).with_label("OrderLine"))?;
/// diagram.add_edge(EdgeKind::Aggregation, order, line)?;
///
/// assert_eq!(diagram.edges_connected_to(line).count(), 1);
/// # Ok::<(), umlgate_core::model::ModelError>(())
/// ```
#[derive(Debug)]
pub struct Diagram {
    kind: DiagramKind,
    graph: Graph<Node, EdgeKind>,
    roots: Vec<NodeId>,
}

impl Diagram {
    /// Creates an empty diagram of `kind`.
    pub fn new(kind: DiagramKind) -> Self {
        Self {
            kind,
            graph: Graph::new(),
            roots: Vec::new(),
        }
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    /// Adds a top-level node.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NodeNotAccepted`] if this diagram kind does not
    /// hold nodes of that kind.
    pub fn add_root_node(&mut self, node: Node) -> Result<NodeId, ModelError> {
        self.accept_node(node.kind())?;
        let id = self.graph.add_node(node);
        self.roots.push(id);
        trace!(node_id:% = id; "Added root node");
        Ok(id)
    }

    /// Adds `node` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is unknown, if the diagram does not hold
    /// nodes of that kind, or if the parent kind cannot contain the child kind.
    pub fn add_child(&mut self, parent: NodeId, mut node: Node) -> Result<NodeId, ModelError> {
        let parent_kind = self.node_kind(parent).ok_or(ModelError::UnknownNode(parent))?;
        self.accept_node(node.kind())?;
        if !node.kind().can_be_child_of(parent_kind) {
            return Err(ModelError::InvalidContainment {
                parent: parent_kind,
                child: node.kind(),
            });
        }

        node.set_parent(parent);
        let id = self.graph.add_node(node);
        if let Some(parent_node) = self.graph.node_mut(parent) {
            parent_node.push_child(id);
        }
        trace!(node_id:% = id, parent_id:% = parent; "Added child node");
        Ok(id)
    }

    /// Commits an edge from `start` to `end` without consulting any rule.
    ///
    /// Rule checks are the job of the caller; this is the plain structural
    /// operation performed once a placement has been accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is unknown or the diagram does not
    /// hold edges of that kind.
    pub fn add_edge(
        &mut self,
        kind: EdgeKind,
        start: NodeId,
        end: NodeId,
    ) -> Result<EdgeId, ModelError> {
        if !self.kind.accepts_edge(kind) {
            return Err(ModelError::EdgeNotAccepted {
                diagram: self.kind,
                edge: kind,
            });
        }
        for endpoint in [start, end] {
            if !self.graph.contains_node(endpoint) {
                return Err(ModelError::UnknownNode(endpoint));
            }
        }

        let id = self.graph.add_edge(start, end, kind);
        trace!(edge_id:% = id, edge_kind:% = kind, start:% = start, end:% = end; "Added edge");
        Ok(id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.graph.contains_node(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.graph.node(id)
    }

    pub fn node_kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(Node::kind)
    }

    /// Returns true if `id` is a node of `kind`. Unknown ids are of no kind.
    pub fn is_kind(&self, id: NodeId, kind: NodeKind) -> bool {
        self.node_kind(id) == Some(kind)
    }

    /// Returns all nodes with their ids, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.graph.nodes()
    }

    pub fn nodes_count(&self) -> usize {
        self.graph.nodes_count()
    }

    /// Returns the top-level nodes in insertion order.
    pub fn root_nodes(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn edge(&self, id: EdgeId) -> Option<Edge> {
        self.graph.edge(id).map(|entry| Edge::from_entry(id, entry))
    }

    /// Returns all committed edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> {
        self.graph
            .edges()
            .map(|(id, entry)| Edge::from_entry(id, entry))
    }

    pub fn edges_count(&self) -> usize {
        self.graph.edges_count()
    }

    /// Returns the committed edges that start or end at `id`.
    ///
    /// A self-loop on `id` is reported once.
    pub fn edges_connected_to(&self, id: NodeId) -> impl Iterator<Item = Edge> {
        self.graph.incident(id).filter_map(|edge_id| self.edge(edge_id))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    /// Returns the children of `id`; empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], Node::children)
    }

    /// Returns true if `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.parent(id);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Returns true if at least one activation ([`NodeKind::Call`]) exists
    /// anywhere in the diagram.
    pub fn has_activations(&self) -> bool {
        self.nodes().any(|(_, node)| node.kind() == NodeKind::Call)
    }

    /// Returns the node that called `id`: the start of the call edge ending
    /// at `id`, if there is one.
    pub fn caller(&self, id: NodeId) -> Option<NodeId> {
        self.graph
            .incoming(id)
            .iter()
            .filter_map(|edge_id| self.edge(*edge_id))
            .find(|edge| edge.kind() == EdgeKind::Call)
            .map(|edge| edge.start())
    }

    fn accept_node(&self, kind: NodeKind) -> Result<(), ModelError> {
        if self.kind.accepts_node(kind) {
            Ok(())
        } else {
            Err(ModelError::NodeNotAccepted {
                diagram: self.kind,
                node: kind,
            })
        }
    }
}
