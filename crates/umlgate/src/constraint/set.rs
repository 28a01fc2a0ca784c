//! Ordered conjunction of constraints.

use log::trace;
use thiserror::Error;

use umlgate_core::model::Diagram;

use super::{Constraint, EdgePlacement, Outcome, Rule};

/// The first rule that rejected an edge placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("edge rejected by `{}`: {}", .rule.name(), .rule.message())]
pub struct Violation {
    rule: Rule,
}

impl Violation {
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Explanation to show to the user.
    pub fn message(&self) -> &'static str {
        self.rule.message()
    }
}

/// An immutable, ordered sequence of constraints.
///
/// The set is satisfied when every member is. Members are evaluated in
/// insertion order and evaluation stops at the first rejection, so the
/// reported [`Violation`] is deterministic.
///
/// # Examples
///
/// ```
/// # use umlgate::constraint::{ConstraintSet, EdgePlacement, Rule, edge};
/// # use umlgate::model::{Diagram, DiagramKind, EdgeKind, Node, NodeKind};
/// let mut diagram = Diagram::new(DiagramKind::UseCase);
/// let actor = diagram.add_root_node(Node::new(NodeKind::Actor))?;
///
/// let set = ConstraintSet::new([edge::max_edges(1), edge::no_self_edge()]);
/// let placement = EdgePlacement::new(EdgeKind::UseCaseAssociation, actor, actor);
///
/// let violation = set.check(&placement, &diagram).unwrap_err();
/// assert_eq!(violation.rule(), Rule::NoSelfEdge);
/// # Ok::<(), umlgate::model::ModelError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    pub fn new(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        Self {
            constraints: constraints.into_iter().collect(),
        }
    }

    /// Appends the members of `other` after the members of this set.
    pub fn merge(mut self, other: ConstraintSet) -> Self {
        self.constraints.extend(other.constraints);
        self
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// Returns the rules of the members, in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = Rule> {
        self.constraints.iter().map(Constraint::rule)
    }

    /// Returns true if and only if every constraint is satisfied.
    pub fn satisfied(&self, placement: &EdgePlacement, diagram: &Diagram) -> bool {
        self.check(placement, diagram).is_ok()
    }

    /// Evaluates the members in order and returns the first violation.
    ///
    /// # Errors
    ///
    /// Returns the [`Violation`] of the first member that is not satisfied.
    pub fn check(&self, placement: &EdgePlacement, diagram: &Diagram) -> Result<(), Violation> {
        for constraint in &self.constraints {
            let outcome = constraint.evaluate(placement, diagram);
            trace!(
                rule = outcome.rule().name(),
                satisfied = outcome.is_satisfied();
                "Evaluated constraint"
            );
            outcome.into_result()?;
        }
        Ok(())
    }

    /// Evaluates every member without stopping, in order.
    ///
    /// Useful to list all the reasons an edge is rejected.
    pub fn outcomes<'a>(
        &'a self,
        placement: &'a EdgePlacement,
        diagram: &'a Diagram,
    ) -> impl Iterator<Item = Outcome> + 'a {
        self.constraints
            .iter()
            .map(move |constraint| constraint.evaluate(placement, diagram))
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = Constraint>>(iter: T) -> Self {
        Self::new(iter)
    }
}
