//! umlgate - Edge-addition constraints for UML diagrams.
//!
//! Decides whether an edge may be drawn between two nodes of a class,
//! object, sequence, state or use case diagram. Each diagram kind gets a
//! fixed [`ConstraintSet`](constraint::ConstraintSet) assembled once by a
//! [`DiagramBuilder`]; every proposed edge is checked against it before the
//! diagram is touched.

pub mod config;
pub mod constraint;

mod error;

pub use umlgate_core::{geometry, label, model};

pub use error::UmlGateError;

use log::{debug, info, trace};

use config::RulesConfig;
use constraint::{
    ConstraintSet, EdgePlacement, Violation, class, edge, object, sequence, state,
};
use geometry::Point;
use model::{Diagram, DiagramKind, EdgeId, EdgeKind, ModelError, Node, NodeId};

/// Guards edge additions for one kind of diagram.
///
/// The builder owns the constraint set for its diagram kind. The set is
/// built once, from a [`RulesConfig`], and reused for every check.
///
/// # Examples
///
/// ```
/// use umlgate::{DiagramBuilder, config::RulesConfig};
/// use umlgate::model::{Diagram, DiagramKind, EdgeKind, Node, NodeKind};
/// use umlgate::constraint::{EdgePlacement, Rule};
///
/// let mut diagram = Diagram::new(DiagramKind::Class);
/// let order = diagram.add_root_node(Node::new(NodeKind::Class).with_label("Order"))?;
/// let item = diagram.add_root_node(Node::new(NodeKind::Class).with_label("Item"))?;
///
/// let builder = DiagramBuilder::new(DiagramKind::Class, &RulesConfig::default())?;
///
/// builder.add_edge(&mut diagram, EdgePlacement::new(EdgeKind::Dependency, order, item))?;
///
/// // A second dependency in the same direction exceeds the limit
/// let err = builder
///     .add_edge(&mut diagram, EdgePlacement::new(EdgeKind::Dependency, order, item))
///     .unwrap_err();
/// assert_eq!(err.violation().map(|v| v.rule()), Some(Rule::MaxEdges));
/// # Ok::<(), umlgate::UmlGateError>(())
/// ```
#[derive(Debug)]
pub struct DiagramBuilder {
    kind: DiagramKind,
    constraints: ConstraintSet,
}

impl DiagramBuilder {
    /// Creates a builder for `kind` with rules tuned by `config`.
    ///
    /// # Arguments
    ///
    /// * `kind` - The diagram kind whose rules to assemble.
    /// * `config` - Edge limits and lifeline geometry.
    ///
    /// # Errors
    ///
    /// Returns [`UmlGateError::Config`] if `config` does not pass
    /// [`RulesConfig::validate`].
    pub fn new(kind: DiagramKind, config: &RulesConfig) -> Result<Self, UmlGateError> {
        config.validate()?;
        Ok(Self::assemble(kind, config))
    }

    /// Creates a builder for `kind` with the default configuration.
    pub fn with_defaults(kind: DiagramKind) -> Self {
        Self::assemble(kind, &RulesConfig::default())
    }

    /// Creates a builder matching the kind of `diagram`.
    ///
    /// # Errors
    ///
    /// Returns [`UmlGateError::Config`] if `config` is invalid.
    pub fn for_diagram(diagram: &Diagram, config: &RulesConfig) -> Result<Self, UmlGateError> {
        Self::new(diagram.kind(), config)
    }

    fn assemble(kind: DiagramKind, config: &RulesConfig) -> Self {
        let constraints = match kind {
            DiagramKind::Class => class_constraints(),
            DiagramKind::Object => object_constraints(),
            DiagramKind::Sequence => sequence_constraints(config.sequence().header_height()),
            DiagramKind::State => state_constraints(),
            DiagramKind::UseCase => use_case_constraints(),
        };
        let constraints = base_constraints(config.limits().max_edges(kind)).merge(constraints);

        debug!(
            diagram_kind:% = kind,
            constraints_count = constraints.len();
            "Assembled constraint set"
        );
        Self { kind, constraints }
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    /// Returns the rules this builder enforces, in evaluation order.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Returns true if an edge of kind `edge` may be drawn from `start` to
    /// `end`.
    ///
    /// `start_point` is where the gesture began on `start` and `end_point`
    /// where it was released on `end`. The diagram is not modified.
    pub fn can_add_edge(
        &self,
        diagram: &Diagram,
        edge: EdgeKind,
        start: NodeId,
        end: NodeId,
        start_point: Point,
        end_point: Point,
    ) -> bool {
        let placement = EdgePlacement::new(edge, start, end).with_points(start_point, end_point);
        self.check_edge(diagram, &placement).is_ok()
    }

    /// Checks a placement and reports the first rule it breaks.
    ///
    /// # Errors
    ///
    /// Returns the [`Violation`] of the first rule, in evaluation order, that
    /// rejects the placement.
    pub fn check_edge(&self, diagram: &Diagram, placement: &EdgePlacement) -> Result<(), Violation> {
        let result = self.constraints.check(placement, diagram);
        match &result {
            Ok(()) => trace!(
                edge_kind:% = placement.edge(),
                start:% = placement.start(),
                end:% = placement.end();
                "Edge placement accepted"
            ),
            Err(violation) => debug!(
                edge_kind:% = placement.edge(),
                start:% = placement.start(),
                start_label = label_of(diagram, placement.start()),
                end:% = placement.end(),
                end_label = label_of(diagram, placement.end()),
                rule:% = violation.rule();
                "Edge placement rejected"
            ),
        }
        result
    }

    /// Checks a placement and, if every rule accepts it, commits the edge.
    ///
    /// The diagram is left untouched when any check fails.
    ///
    /// # Errors
    ///
    /// Returns [`UmlGateError::Model`] if `diagram` is not of this builder's
    /// kind or cannot hold the edge, and [`UmlGateError::Rejected`] if a rule
    /// rejects the placement.
    pub fn add_edge(
        &self,
        diagram: &mut Diagram,
        placement: EdgePlacement,
    ) -> Result<EdgeId, UmlGateError> {
        if diagram.kind() != self.kind {
            return Err(ModelError::DiagramKindMismatch {
                expected: self.kind,
                found: diagram.kind(),
            }
            .into());
        }

        self.check_edge(diagram, &placement)?;
        let id = diagram.add_edge(placement.edge(), placement.start(), placement.end())?;

        info!(
            edge_id:% = id,
            edge_kind:% = placement.edge(),
            diagram_kind:% = self.kind;
            "Edge added"
        );
        Ok(id)
    }
}

/// Label of `id` for log records; empty when the node has none.
fn label_of(diagram: &Diagram, id: NodeId) -> String {
    diagram
        .node(id)
        .and_then(Node::label)
        .map(|label| label.to_string())
        .unwrap_or_default()
}

fn base_constraints(max_edges: usize) -> ConstraintSet {
    ConstraintSet::new([
        edge::note_edge(),
        edge::note_node(),
        edge::max_edges(max_edges),
    ])
}

fn class_constraints() -> ConstraintSet {
    ConstraintSet::new([
        edge::no_self_edge(),
        class::no_self_generalization(),
        class::no_self_dependency(),
        class::no_direct_cycles(EdgeKind::Generalization),
        class::no_direct_cycles(EdgeKind::Aggregation),
        class::no_direct_cycles(EdgeKind::Association),
        class::no_combined_association_aggregation(),
    ])
}

fn object_constraints() -> ConstraintSet {
    ConstraintSet::new([object::collaboration(), object::reference()])
}

fn sequence_constraints(header_height: f32) -> ConstraintSet {
    ConstraintSet::new([
        sequence::no_edges_from_parameter_top(header_height),
        sequence::return_edge(),
        sequence::call_edge_end(header_height),
        sequence::single_entry_point(),
    ])
}

fn state_constraints() -> ConstraintSet {
    ConstraintSet::new([state::no_edge_to_initial_node(), state::no_edge_from_final_node()])
}

fn use_case_constraints() -> ConstraintSet {
    ConstraintSet::new([edge::no_self_edge()])
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{ConfigError, LimitsConfig, SequenceConfig},
        constraint::Rule,
    };

    use super::*;

    #[test]
    fn test_composition_per_kind() {
        let rules = |kind| -> Vec<Rule> {
            DiagramBuilder::with_defaults(kind)
                .constraints()
                .rules()
                .collect()
        };

        let base = [Rule::NoteEdge, Rule::NoteNode, Rule::MaxEdges];
        for kind in DiagramKind::ALL {
            assert_eq!(rules(kind)[..3], base, "{kind} should start with the shared rules");
        }

        assert_eq!(
            rules(DiagramKind::Class)[3..],
            [
                Rule::NoSelfEdge,
                Rule::NoSelfGeneralization,
                Rule::NoSelfDependency,
                Rule::NoDirectCycles,
                Rule::NoDirectCycles,
                Rule::NoDirectCycles,
                Rule::NoCombinedAssociationAggregation,
            ]
        );
        assert_eq!(
            rules(DiagramKind::Object)[3..],
            [Rule::Collaboration, Rule::Reference]
        );
        assert_eq!(
            rules(DiagramKind::Sequence)[3..],
            [
                Rule::NoEdgesFromParameterTop,
                Rule::ReturnEdge,
                Rule::CallEdgeEnd,
                Rule::SingleEntryPoint,
            ]
        );
        assert_eq!(
            rules(DiagramKind::State)[3..],
            [Rule::NoEdgeToInitialNode, Rule::NoEdgeFromFinalNode]
        );
        assert_eq!(rules(DiagramKind::UseCase)[3..], [Rule::NoSelfEdge]);
    }

    #[test]
    fn test_for_diagram_uses_diagram_kind() {
        let diagram = Diagram::new(DiagramKind::Object);
        let builder = DiagramBuilder::for_diagram(&diagram, &RulesConfig::default()).unwrap();
        assert_eq!(builder.kind(), DiagramKind::Object);
    }

    #[test]
    fn test_new_rejects_zero_edge_limit() {
        let config = RulesConfig::new(LimitsConfig::new(0), SequenceConfig::default());
        let result = DiagramBuilder::new(DiagramKind::Class, &config);
        assert!(matches!(
            result,
            Err(UmlGateError::Config(ConfigError::Validation(_)))
        ));

        let config = RulesConfig::new(
            LimitsConfig::default().with_override(DiagramKind::State, 0),
            SequenceConfig::default(),
        );
        assert!(DiagramBuilder::new(DiagramKind::State, &config).is_err());
    }

    #[test]
    fn test_new_rejects_invalid_header_height() {
        for height in [f32::NAN, f32::INFINITY, 0.0, -10.0] {
            let config = RulesConfig::new(LimitsConfig::default(), SequenceConfig::new(height));
            let result = DiagramBuilder::new(DiagramKind::Sequence, &config);
            assert!(
                matches!(result, Err(UmlGateError::Config(ConfigError::Validation(_)))),
                "accepted header height {height}"
            );
        }
    }

    #[test]
    fn test_label_of() {
        let mut diagram = Diagram::new(DiagramKind::Class);
        let named = diagram
            .add_root_node(Node::new(model::NodeKind::Class).with_label("Order"))
            .unwrap();
        let anonymous = diagram
            .add_root_node(Node::new(model::NodeKind::Class))
            .unwrap();

        assert_eq!(label_of(&diagram, named), "Order");
        assert_eq!(label_of(&diagram, anonymous), "");
    }

    #[test]
    fn test_add_edge_rejects_other_diagram_kind() {
        let mut diagram = Diagram::new(DiagramKind::Class);
        let node = diagram
            .add_root_node(Node::new(model::NodeKind::Note))
            .unwrap();
        let builder = DiagramBuilder::with_defaults(DiagramKind::State);

        let err = builder
            .add_edge(&mut diagram, EdgePlacement::new(EdgeKind::Note, node, node))
            .unwrap_err();
        assert!(matches!(
            err,
            UmlGateError::Model(ModelError::DiagramKindMismatch {
                expected: DiagramKind::State,
                found: DiagramKind::Class,
            })
        ));
        assert_eq!(diagram.edges_count(), 0);
    }
}
