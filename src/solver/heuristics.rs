//! Heuristics for choosing which undecided variable to branch on next.

use crate::solver::{assignment::Assignment, graph::VariableId, value::Value};

/// A strategy for picking the next variable to branch on.
///
/// Implementations must be deterministic: given the same assignment they
/// return the same variable, so search traces are reproducible.
pub trait VariableSelectionHeuristic<V: Value> {
    /// Picks an undecided variable (domain length > 1), or `None` when every
    /// variable is decided.
    fn select_variable(&self, assignment: &Assignment<V>) -> Option<VariableId>;
}

/// Branches on the undecided variable with the fewest remaining values
/// (minimum remaining values, MRV).
///
/// This is a fail-first strategy: the most constrained variable is the one
/// most likely to expose a dead end early. Ties go to the variable registered
/// first, i.e. the lowest [`VariableId`].
pub struct MinimumRemainingValues;

impl<V: Value> VariableSelectionHeuristic<V> for MinimumRemainingValues {
    fn select_variable(&self, assignment: &Assignment<V>) -> Option<VariableId> {
        assignment
            .iter()
            .filter(|(_, domain)| domain.len() > 1)
            .min_by_key(|(variable, domain)| (domain.len(), *variable))
            .map(|(variable, _)| variable)
    }
}

/// Branches on the first undecided variable in registration order.
///
/// The trivial baseline; useful for tests and benchmarks where the branching
/// order itself is under observation.
pub struct SelectFirst;

impl<V: Value> VariableSelectionHeuristic<V> for SelectFirst {
    fn select_variable(&self, assignment: &Assignment<V>) -> Option<VariableId> {
        assignment
            .iter()
            .filter(|(_, domain)| domain.len() > 1)
            .min_by_key(|(variable, _)| *variable)
            .map(|(variable, _)| variable)
    }
}
