//! Edge-addition constraints.
//!
//! A [`Constraint`] is one named rule: a pure predicate over a proposed
//! [`EdgePlacement`] and the [`Diagram`] the edge would join. Constraints are
//! total. A rule that does not concern the candidate edge kind is satisfied
//! vacuously.
//!
//! # Organization
//!
//! - [`edge`] - Rules shared by several diagram kinds
//! - [`class`] - Class diagram rules
//! - [`object`] - Object diagram rules
//! - [`sequence`] - Sequence diagram rules (state and geometry sensitive)
//! - [`state`] - State diagram rules
//! - [`ConstraintSet`] - Ordered conjunction of constraints

pub mod class;
pub mod edge;
pub mod object;
pub mod sequence;
pub mod state;

mod set;

pub use set::{ConstraintSet, Violation};

use std::fmt;

use umlgate_core::{
    geometry::Point,
    model::{Diagram, EdgeKind, NodeId},
};

/// Identifies a rule and carries the explanation shown when it rejects an
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    NoSelfEdge,
    MaxEdges,
    NoteEdge,
    NoteNode,
    NoSelfGeneralization,
    NoSelfDependency,
    NoDirectCycles,
    NoCombinedAssociationAggregation,
    Collaboration,
    Reference,
    NoEdgesFromParameterTop,
    ReturnEdge,
    CallEdgeEnd,
    SingleEntryPoint,
    NoEdgeToInitialNode,
    NoEdgeFromFinalNode,
}

impl Rule {
    /// Stable identifier used in log records.
    pub fn name(self) -> &'static str {
        match self {
            Rule::NoSelfEdge => "no_self_edge",
            Rule::MaxEdges => "max_edges",
            Rule::NoteEdge => "note_edge",
            Rule::NoteNode => "note_node",
            Rule::NoSelfGeneralization => "no_self_generalization",
            Rule::NoSelfDependency => "no_self_dependency",
            Rule::NoDirectCycles => "no_direct_cycles",
            Rule::NoCombinedAssociationAggregation => "no_combined_association_aggregation",
            Rule::Collaboration => "collaboration",
            Rule::Reference => "reference",
            Rule::NoEdgesFromParameterTop => "no_edges_from_parameter_top",
            Rule::ReturnEdge => "return_edge",
            Rule::CallEdgeEnd => "call_edge_end",
            Rule::SingleEntryPoint => "single_entry_point",
            Rule::NoEdgeToInitialNode => "no_edge_to_initial_node",
            Rule::NoEdgeFromFinalNode => "no_edge_from_final_node",
        }
    }

    /// Human-readable explanation of the rule.
    pub fn message(self) -> &'static str {
        match self {
            Rule::NoSelfEdge => "Self-edges are not allowed.",
            Rule::MaxEdges => {
                "Only a limited number of edges of the same type are allowed in one direction between two nodes."
            }
            Rule::NoteEdge => {
                "A note edge can only be added between any node and a note node, or between a note node and a point node."
            }
            Rule::NoteNode => "An edge can only be added to or from a note node if it is a note edge.",
            Rule::NoSelfGeneralization => "A class cannot generalize itself.",
            Rule::NoSelfDependency => "A class cannot depend on itself.",
            Rule::NoDirectCycles => {
                "There cannot be two edges of the same type, one in each direction, between two nodes."
            }
            Rule::NoCombinedAssociationAggregation => {
                "There cannot be both an association and an aggregation edge between two nodes."
            }
            Rule::Collaboration => "A collaboration edge can only be between two object nodes.",
            Rule::Reference => "A reference edge can only go from a field node to an object node.",
            Rule::NoEdgesFromParameterTop => {
                "No edge is allowed to start in the top rectangle of a parameter node."
            }
            Rule::ReturnEdge => {
                "For a return edge, the end node has to be the caller, and return edges on self-calls are not allowed."
            }
            Rule::CallEdgeEnd => {
                "Call edges that land on a parameter node must land on the life line part, except if it is allowed to create a constructor."
            }
            Rule::SingleEntryPoint => {
                "It's only legal to start an interaction on a parameter node if there are no existing activations in the diagram."
            }
            Rule::NoEdgeToInitialNode => "No edges are allowed into an initial node.",
            Rule::NoEdgeFromFinalNode => "The only edge allowed out of a final node is a note edge.",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A proposed edge: its kind, its endpoints, and where the pointer was
/// pressed on the start node and released on the end node.
///
/// # Examples
///
/// ```
/// # use umlgate::{constraint::EdgePlacement, geometry::Point};
/// # use umlgate::model::{Diagram, DiagramKind, EdgeKind, Node, NodeKind};
/// let mut diagram = Diagram::new(DiagramKind::Sequence);
/// let lifeline = diagram.add_root_node(Node::new(NodeKind::ImplicitParameter))?;
///
/// let placement = EdgePlacement::new(EdgeKind::Call, lifeline, lifeline)
///     .with_points(Point::new(40.0, 80.0), Point::new(40.0, 90.0));
/// assert!(placement.is_self_edge());
/// # Ok::<(), umlgate::model::ModelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePlacement {
    edge: EdgeKind,
    start: NodeId,
    end: NodeId,
    start_point: Point,
    end_point: Point,
}

impl EdgePlacement {
    /// Creates a placement with both points at the origin.
    pub fn new(edge: EdgeKind, start: NodeId, end: NodeId) -> Self {
        Self {
            edge,
            start,
            end,
            start_point: Point::default(),
            end_point: Point::default(),
        }
    }

    /// Sets the press point on the start node and the release point on the
    /// end node.
    pub fn with_points(mut self, start_point: Point, end_point: Point) -> Self {
        self.start_point = start_point;
        self.end_point = end_point;
        self
    }

    pub fn edge(&self) -> EdgeKind {
        self.edge
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }

    /// Returns true if the edge would start and end at the same node.
    pub fn is_self_edge(&self) -> bool {
        self.start == self.end
    }
}

type Predicate = dyn Fn(&EdgePlacement, &Diagram) -> bool + Send + Sync;

/// The result of evaluating one constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    rule: Rule,
    satisfied: bool,
}

impl Outcome {
    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    /// Converts the outcome into a `Result`, naming the rule on failure.
    pub fn into_result(self) -> Result<(), Violation> {
        if self.satisfied {
            Ok(())
        } else {
            Err(Violation::new(self.rule))
        }
    }
}

/// A single named edge-addition rule.
///
/// Constraints are built by the factory functions of the submodules and are
/// immutable once created.
pub struct Constraint {
    rule: Rule,
    predicate: Box<Predicate>,
}

impl Constraint {
    /// Creates a constraint enforcing `rule` with `predicate`.
    ///
    /// The predicate must be pure: the same placement and diagram always give
    /// the same answer.
    pub fn new<F>(rule: Rule, predicate: F) -> Self
    where
        F: Fn(&EdgePlacement, &Diagram) -> bool + Send + Sync + 'static,
    {
        Self {
            rule,
            predicate: Box::new(predicate),
        }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Evaluates the constraint against a proposed placement.
    pub fn evaluate(&self, placement: &EdgePlacement, diagram: &Diagram) -> Outcome {
        Outcome {
            rule: self.rule,
            satisfied: (self.predicate)(placement, diagram),
        }
    }

    /// Shorthand for `self.evaluate(..).is_satisfied()`.
    pub fn is_satisfied(&self, placement: &EdgePlacement, diagram: &Diagram) -> bool {
        self.evaluate(placement, diagram).is_satisfied()
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}
