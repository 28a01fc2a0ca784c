//! Rules shared across diagram kinds.
//!
//! Each builder opts into the rules it needs; nothing here is applied
//! implicitly.

use umlgate_core::model::{EdgeKind, NodeKind};

use super::{Constraint, Rule};

/// Rejects edges whose start and end are the same node.
pub fn no_self_edge() -> Constraint {
    Constraint::new(Rule::NoSelfEdge, |placement, _| !placement.is_self_edge())
}

/// Allows at most `limit` edges of the candidate's kind from its start to its
/// end.
///
/// Only edges of the same kind and the same direction count: an edge from
/// the end back to the start does not.
pub fn max_edges(limit: usize) -> Constraint {
    Constraint::new(Rule::MaxEdges, move |placement, diagram| {
        let existing = diagram
            .edges_connected_to(placement.start())
            .filter(|edge| {
                edge.kind() == placement.edge()
                    && edge.connects(placement.start(), placement.end())
            })
            .count();
        existing < limit
    })
}

/// A note edge may only go from any node to a note, or from a note to a
/// point anchor.
pub fn note_edge() -> Constraint {
    Constraint::new(Rule::NoteEdge, |placement, diagram| {
        if placement.edge() != EdgeKind::Note {
            return true;
        }
        let to_note = diagram.is_kind(placement.end(), NodeKind::Note);
        let note_to_point = diagram.is_kind(placement.start(), NodeKind::Note)
            && diagram.is_kind(placement.end(), NodeKind::Point);
        to_note || note_to_point
    })
}

/// Only note edges may touch a note node.
pub fn note_node() -> Constraint {
    Constraint::new(Rule::NoteNode, |placement, diagram| {
        let touches_note = diagram.is_kind(placement.start(), NodeKind::Note)
            || diagram.is_kind(placement.end(), NodeKind::Note);
        placement.edge() == EdgeKind::Note || !touches_note
    })
}
