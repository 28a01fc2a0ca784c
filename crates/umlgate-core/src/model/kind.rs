//! Variant tags for nodes, edges and diagrams.
//!
//! Rules dispatch on these tags instead of on the concrete type of an
//! element. Every tag set is closed; adding a variant means revisiting the
//! `accepts_*` tables below.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Class,
    Interface,
    Package,
    /// Freeform annotation box.
    Note,
    /// Free-floating anchor that a note edge can point to.
    Point,
    /// Lifeline of an object taking part in an interaction.
    ImplicitParameter,
    /// Activation box on a lifeline.
    Call,
    State,
    InitialState,
    FinalState,
    Object,
    /// Field compartment of an object.
    Field,
    Actor,
    UseCase,
}

impl NodeKind {
    /// Returns true if a node of this kind may be nested inside a node of
    /// kind `parent`.
    pub fn can_be_child_of(self, parent: NodeKind) -> bool {
        matches!(
            (parent, self),
            (NodeKind::ImplicitParameter, NodeKind::Call)
                | (NodeKind::Object, NodeKind::Field)
                | (
                    NodeKind::Package,
                    NodeKind::Class | NodeKind::Interface | NodeKind::Package
                )
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Class => "class",
            NodeKind::Interface => "interface",
            NodeKind::Package => "package",
            NodeKind::Note => "note",
            NodeKind::Point => "point",
            NodeKind::ImplicitParameter => "implicit parameter",
            NodeKind::Call => "call",
            NodeKind::State => "state",
            NodeKind::InitialState => "initial state",
            NodeKind::FinalState => "final state",
            NodeKind::Object => "object",
            NodeKind::Field => "field",
            NodeKind::Actor => "actor",
            NodeKind::UseCase => "use case",
        };
        f.write_str(name)
    }
}

/// The kind of a diagram edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Association,
    Aggregation,
    Dependency,
    Generalization,
    /// Connector between an element and a note.
    Note,
    ObjectReference,
    ObjectCollaboration,
    Call,
    Return,
    StateTransition,
    UseCaseAssociation,
    UseCaseGeneralization,
    UseCaseDependency,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeKind::Association => "association",
            EdgeKind::Aggregation => "aggregation",
            EdgeKind::Dependency => "dependency",
            EdgeKind::Generalization => "generalization",
            EdgeKind::Note => "note",
            EdgeKind::ObjectReference => "object reference",
            EdgeKind::ObjectCollaboration => "object collaboration",
            EdgeKind::Call => "call",
            EdgeKind::Return => "return",
            EdgeKind::StateTransition => "state transition",
            EdgeKind::UseCaseAssociation => "use case association",
            EdgeKind::UseCaseGeneralization => "use case generalization",
            EdgeKind::UseCaseDependency => "use case dependency",
        };
        f.write_str(name)
    }
}

/// The kind of a diagram. It fixes which node and edge kinds may appear in
/// the diagram and which constraint set applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    Class,
    Object,
    Sequence,
    State,
    UseCase,
}

impl DiagramKind {
    /// All diagram kinds, in declaration order.
    pub const ALL: [DiagramKind; 5] = [
        DiagramKind::Class,
        DiagramKind::Object,
        DiagramKind::Sequence,
        DiagramKind::State,
        DiagramKind::UseCase,
    ];

    /// Returns true if nodes of `kind` may be placed in this diagram.
    ///
    /// Notes and point anchors are accepted everywhere.
    pub fn accepts_node(self, kind: NodeKind) -> bool {
        if matches!(kind, NodeKind::Note | NodeKind::Point) {
            return true;
        }
        match self {
            DiagramKind::Class => matches!(
                kind,
                NodeKind::Class | NodeKind::Interface | NodeKind::Package
            ),
            DiagramKind::Object => matches!(kind, NodeKind::Object | NodeKind::Field),
            DiagramKind::Sequence => matches!(kind, NodeKind::ImplicitParameter | NodeKind::Call),
            DiagramKind::State => matches!(
                kind,
                NodeKind::State | NodeKind::InitialState | NodeKind::FinalState
            ),
            DiagramKind::UseCase => matches!(kind, NodeKind::Actor | NodeKind::UseCase),
        }
    }

    /// Returns true if edges of `kind` may be placed in this diagram.
    pub fn accepts_edge(self, kind: EdgeKind) -> bool {
        if kind == EdgeKind::Note {
            return true;
        }
        match self {
            DiagramKind::Class => matches!(
                kind,
                EdgeKind::Association
                    | EdgeKind::Aggregation
                    | EdgeKind::Dependency
                    | EdgeKind::Generalization
            ),
            DiagramKind::Object => matches!(
                kind,
                EdgeKind::ObjectReference | EdgeKind::ObjectCollaboration
            ),
            DiagramKind::Sequence => matches!(kind, EdgeKind::Call | EdgeKind::Return),
            DiagramKind::State => kind == EdgeKind::StateTransition,
            DiagramKind::UseCase => matches!(
                kind,
                EdgeKind::UseCaseAssociation
                    | EdgeKind::UseCaseGeneralization
                    | EdgeKind::UseCaseDependency
            ),
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagramKind::Class => "class",
            DiagramKind::Object => "object",
            DiagramKind::Sequence => "sequence",
            DiagramKind::State => "state",
            DiagramKind::UseCase => "use case",
        };
        f.write_str(name)
    }
}
