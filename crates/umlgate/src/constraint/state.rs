//! State diagram rules.

use umlgate_core::model::{EdgeKind, NodeKind};

use super::{Constraint, Rule};

/// Initial states have no incoming edges.
pub fn no_edge_to_initial_node() -> Constraint {
    Constraint::new(Rule::NoEdgeToInitialNode, |placement, diagram| {
        !diagram.is_kind(placement.end(), NodeKind::InitialState)
    })
}

/// Only note edges may leave a final state.
pub fn no_edge_from_final_node() -> Constraint {
    Constraint::new(Rule::NoEdgeFromFinalNode, |placement, diagram| {
        !(diagram.is_kind(placement.start(), NodeKind::FinalState)
            && placement.edge() != EdgeKind::Note)
    })
}
