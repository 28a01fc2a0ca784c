//! Class diagram rules.

use umlgate_core::model::EdgeKind;

use super::{Constraint, Rule};

/// Rejects a generalization from a class to itself.
pub fn no_self_generalization() -> Constraint {
    Constraint::new(Rule::NoSelfGeneralization, |placement, _| {
        !(placement.edge() == EdgeKind::Generalization && placement.is_self_edge())
    })
}

/// Rejects a dependency from a class to itself.
pub fn no_self_dependency() -> Constraint {
    Constraint::new(Rule::NoSelfDependency, |placement, _| {
        !(placement.edge() == EdgeKind::Dependency && placement.is_self_edge())
    })
}

/// Rejects an edge of `kind` when an edge of the same kind already runs in
/// the opposite direction between the same two nodes.
///
/// Duplicates in the same direction are left to
/// [`max_edges`](super::edge::max_edges).
pub fn no_direct_cycles(kind: EdgeKind) -> Constraint {
    Constraint::new(Rule::NoDirectCycles, move |placement, diagram| {
        if placement.edge() != kind {
            return true;
        }
        !diagram
            .edges_connected_to(placement.start())
            .any(|edge| edge.kind() == kind && edge.connects(placement.end(), placement.start()))
    })
}

/// Associations and aggregations exclude each other between two nodes, in
/// either direction.
pub fn no_combined_association_aggregation() -> Constraint {
    Constraint::new(Rule::NoCombinedAssociationAggregation, |placement, diagram| {
        if !is_association_or_aggregation(placement.edge()) {
            return true;
        }
        let (start, end) = (placement.start(), placement.end());
        !diagram.edges_connected_to(start).any(|edge| {
            is_association_or_aggregation(edge.kind())
                && (edge.connects(start, end) || edge.connects(end, start))
        })
    })
}

fn is_association_or_aggregation(kind: EdgeKind) -> bool {
    matches!(kind, EdgeKind::Association | EdgeKind::Aggregation)
}

#[cfg(test)]
mod tests {
    use umlgate_core::model::{Diagram, DiagramKind, Node, NodeId, NodeKind};

    use crate::constraint::EdgePlacement;

    use super::*;

    fn diagram_with_classes(count: usize) -> (Diagram, Vec<NodeId>) {
        let mut diagram = Diagram::new(DiagramKind::Class);
        let nodes = (0..count)
            .map(|_| {
                diagram
                    .add_root_node(Node::new(NodeKind::Class))
                    .expect("class accepted")
            })
            .collect();
        (diagram, nodes)
    }

    fn placement(edge: EdgeKind, start: NodeId, end: NodeId) -> EdgePlacement {
        EdgePlacement::new(edge, start, end)
    }

    #[test]
    fn test_no_self_generalization() {
        let (diagram, nodes) = diagram_with_classes(2);
        let rule = no_self_generalization();

        assert!(!rule.is_satisfied(&placement(EdgeKind::Generalization, nodes[0], nodes[0]), &diagram));
        assert!(rule.is_satisfied(&placement(EdgeKind::Generalization, nodes[0], nodes[1]), &diagram));
        assert!(rule.is_satisfied(&placement(EdgeKind::Association, nodes[0], nodes[0]), &diagram));
    }

    #[test]
    fn test_no_self_dependency() {
        let (diagram, nodes) = diagram_with_classes(2);
        let rule = no_self_dependency();

        assert!(!rule.is_satisfied(&placement(EdgeKind::Dependency, nodes[1], nodes[1]), &diagram));
        assert!(rule.is_satisfied(&placement(EdgeKind::Dependency, nodes[1], nodes[0]), &diagram));
        assert!(rule.is_satisfied(&placement(EdgeKind::Generalization, nodes[1], nodes[1]), &diagram));
    }

    #[test]
    fn test_no_direct_cycles_empty_diagram() {
        let (diagram, nodes) = diagram_with_classes(2);
        let rule = no_direct_cycles(EdgeKind::Generalization);

        assert!(rule.is_satisfied(&placement(EdgeKind::Generalization, nodes[0], nodes[1]), &diagram));
    }

    #[test]
    fn test_no_direct_cycles_reverse_edge() {
        let (mut diagram, nodes) = diagram_with_classes(2);
        diagram
            .add_edge(EdgeKind::Generalization, nodes[1], nodes[0])
            .expect("edge accepted");
        let rule = no_direct_cycles(EdgeKind::Generalization);

        assert!(!rule.is_satisfied(&placement(EdgeKind::Generalization, nodes[0], nodes[1]), &diagram));
    }

    #[test]
    fn test_no_direct_cycles_same_direction_duplicate() {
        let (mut diagram, nodes) = diagram_with_classes(2);
        diagram
            .add_edge(EdgeKind::Generalization, nodes[0], nodes[1])
            .expect("edge accepted");
        let rule = no_direct_cycles(EdgeKind::Generalization);

        assert!(rule.is_satisfied(&placement(EdgeKind::Generalization, nodes[0], nodes[1]), &diagram));
    }

    #[test]
    fn test_no_direct_cycles_only_checks_its_kind() {
        let (mut diagram, nodes) = diagram_with_classes(2);
        diagram
            .add_edge(EdgeKind::Aggregation, nodes[1], nodes[0])
            .expect("edge accepted");

        let generalization = no_direct_cycles(EdgeKind::Generalization);
        assert!(generalization.is_satisfied(&placement(EdgeKind::Aggregation, nodes[0], nodes[1]), &diagram));
        assert!(generalization.is_satisfied(&placement(EdgeKind::Generalization, nodes[0], nodes[1]), &diagram));

        let aggregation = no_direct_cycles(EdgeKind::Aggregation);
        assert!(!aggregation.is_satisfied(&placement(EdgeKind::Aggregation, nodes[0], nodes[1]), &diagram));
    }

    #[test]
    fn test_no_combined_association_aggregation() {
        let (mut diagram, nodes) = diagram_with_classes(3);
        diagram
            .add_edge(EdgeKind::Association, nodes[0], nodes[1])
            .expect("edge accepted");
        let rule = no_combined_association_aggregation();

        assert!(!rule.is_satisfied(&placement(EdgeKind::Aggregation, nodes[0], nodes[1]), &diagram));
        assert!(!rule.is_satisfied(&placement(EdgeKind::Aggregation, nodes[1], nodes[0]), &diagram));
        assert!(!rule.is_satisfied(&placement(EdgeKind::Association, nodes[1], nodes[0]), &diagram));
        assert!(rule.is_satisfied(&placement(EdgeKind::Association, nodes[0], nodes[2]), &diagram));
        assert!(rule.is_satisfied(&placement(EdgeKind::Aggregation, nodes[2], nodes[0]), &diagram));
        assert!(rule.is_satisfied(&placement(EdgeKind::Dependency, nodes[0], nodes[1]), &diagram));
    }
}
