//! Object diagram rules.

use umlgate_core::model::{EdgeKind, NodeKind};

use super::{Constraint, Rule};

/// A collaboration edge can only join two objects.
pub fn collaboration() -> Constraint {
    Constraint::new(Rule::Collaboration, |placement, diagram| {
        placement.edge() != EdgeKind::ObjectCollaboration
            || (diagram.is_kind(placement.start(), NodeKind::Object)
                && diagram.is_kind(placement.end(), NodeKind::Object))
    })
}

/// A reference edge can only go from a field to an object.
pub fn reference() -> Constraint {
    Constraint::new(Rule::Reference, |placement, diagram| {
        placement.edge() != EdgeKind::ObjectReference
            || (diagram.is_kind(placement.start(), NodeKind::Field)
                && diagram.is_kind(placement.end(), NodeKind::Object))
    })
}

#[cfg(test)]
mod tests {
    use umlgate_core::model::{Diagram, DiagramKind, Node, NodeId};

    use crate::constraint::EdgePlacement;

    use super::*;

    fn fixture() -> (Diagram, NodeId, NodeId, NodeId) {
        let mut diagram = Diagram::new(DiagramKind::Object);
        let order = diagram
            .add_root_node(Node::new(NodeKind::Object).with_label("order"))
            .expect("object accepted");
        let customer = diagram
            .add_root_node(Node::new(NodeKind::Object).with_label("customer"))
            .expect("object accepted");
        let field = diagram
            .add_child(order, Node::new(NodeKind::Field).with_label("buyer"))
            .expect("field nests in object");
        (diagram, order, customer, field)
    }

    #[test]
    fn test_collaboration_between_objects() {
        let (diagram, order, customer, _) = fixture();
        let placement = EdgePlacement::new(EdgeKind::ObjectCollaboration, order, customer);
        assert!(collaboration().is_satisfied(&placement, &diagram));
    }

    #[test]
    fn test_collaboration_from_field() {
        let (diagram, _, customer, field) = fixture();
        let forward = EdgePlacement::new(EdgeKind::ObjectCollaboration, field, customer);
        let backward = EdgePlacement::new(EdgeKind::ObjectCollaboration, customer, field);

        assert!(!collaboration().is_satisfied(&forward, &diagram));
        assert!(!collaboration().is_satisfied(&backward, &diagram));
    }

    #[test]
    fn test_collaboration_ignores_references() {
        let (diagram, _, customer, field) = fixture();
        let placement = EdgePlacement::new(EdgeKind::ObjectReference, field, customer);
        assert!(collaboration().is_satisfied(&placement, &diagram));
    }

    #[test]
    fn test_reference_from_field_to_object() {
        let (diagram, _, customer, field) = fixture();
        let placement = EdgePlacement::new(EdgeKind::ObjectReference, field, customer);
        assert!(reference().is_satisfied(&placement, &diagram));
    }

    #[test]
    fn test_reference_wrong_endpoints() {
        let (diagram, order, customer, field) = fixture();

        let from_object = EdgePlacement::new(EdgeKind::ObjectReference, order, customer);
        assert!(!reference().is_satisfied(&from_object, &diagram));

        let to_field = EdgePlacement::new(EdgeKind::ObjectReference, field, field);
        assert!(!reference().is_satisfied(&to_field, &diagram));
    }

    #[test]
    fn test_reference_ignores_collaborations() {
        let (diagram, order, customer, _) = fixture();
        let placement = EdgePlacement::new(EdgeKind::ObjectCollaboration, order, customer);
        assert!(reference().is_satisfied(&placement, &diagram));
    }
}
