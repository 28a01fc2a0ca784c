//! Sequence diagram rules.
//!
//! These rules read the call graph and node geometry. A lifeline
//! ([`NodeKind::ImplicitParameter`]) is split into a title box, the top
//! `header_height` units of its bounds, and the life line below it.

use umlgate_core::{
    geometry::Point,
    model::{Diagram, EdgeKind, NodeId, NodeKind},
};

use super::{Constraint, Rule};

/// Height of a lifeline's title box when nothing else is configured.
pub const DEFAULT_HEADER_HEIGHT: f32 = 60.0;

/// No edge may start in the title box of a lifeline, except a self-call on
/// that lifeline.
pub fn no_edges_from_parameter_top(header_height: f32) -> Constraint {
    Constraint::new(Rule::NoEdgesFromParameterTop, move |placement, diagram| {
        let start = placement.start();
        !(diagram.is_kind(start, NodeKind::ImplicitParameter)
            && in_title_box(diagram, start, placement.start_point(), header_height)
            && !placement.is_self_edge())
    })
}

/// A return edge must go from a call back to its caller, and never between
/// two calls on the same lifeline.
pub fn return_edge() -> Constraint {
    Constraint::new(Rule::ReturnEdge, |placement, diagram| {
        if placement.edge() != EdgeKind::Return {
            return true;
        }
        let (start, end) = (placement.start(), placement.end());
        diagram.is_kind(start, NodeKind::Call)
            && diagram.is_kind(end, NodeKind::Call)
            && start != end
            && diagram.caller(start) == Some(end)
            && lifeline_of(diagram, start) != lifeline_of(diagram, end)
    })
}

/// A call edge landing on a lifeline must land on its life line, unless the
/// call creates the object.
pub fn call_edge_end(header_height: f32) -> Constraint {
    Constraint::new(Rule::CallEdgeEnd, move |placement, diagram| {
        let end = placement.end();
        !(placement.edge() == EdgeKind::Call
            && diagram.is_kind(end, NodeKind::ImplicitParameter)
            && in_title_box(diagram, end, placement.end_point(), header_height)
            && !can_create_constructor(diagram, placement.start(), end))
    })
}

/// Only the first call of an interaction may start on a bare lifeline.
pub fn single_entry_point() -> Constraint {
    Constraint::new(Rule::SingleEntryPoint, |placement, diagram| {
        !(placement.edge() == EdgeKind::Call
            && diagram.is_kind(placement.start(), NodeKind::ImplicitParameter)
            && diagram.has_activations())
    })
}

fn in_title_box(diagram: &Diagram, id: NodeId, point: Point, header_height: f32) -> bool {
    diagram
        .node(id)
        .is_some_and(|node| node.top_bounds(header_height).contains(point))
}

/// The lifeline a node lives on: itself for a lifeline, its parent otherwise.
fn lifeline_of(diagram: &Diagram, id: NodeId) -> Option<NodeId> {
    if diagram.is_kind(id, NodeKind::ImplicitParameter) {
        Some(id)
    } else {
        diagram.parent(id)
    }
}

// A constructor call targets a lifeline that has no activation yet.
fn can_create_constructor(diagram: &Diagram, start: NodeId, end: NodeId) -> bool {
    let start_in_interaction = diagram.is_kind(start, NodeKind::ImplicitParameter)
        || diagram.is_kind(start, NodeKind::Call);
    start_in_interaction && diagram.children(end).is_empty()
}
