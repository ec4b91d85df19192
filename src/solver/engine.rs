use tracing::debug;

use crate::solver::{
    assignment::Assignment,
    domain::Domain,
    graph::ConstraintGraph,
    heuristics::{MinimumRemainingValues, VariableSelectionHeuristic},
    propagate,
    stats::SearchStats,
    value::Value,
};

/// The backtracking search driver.
///
/// `Solver` interleaves depth-first search with arc-consistency propagation:
/// every tentative assignment is followed by an AC-3 pass seeded with the
/// arcs into the assigned variable, so contradictions surface long before the
/// assignment is complete. Each branch works on its own persistent
/// [`Assignment`] snapshot; sibling branches never observe each other's
/// pruning.
///
/// An unsatisfiable problem is a defined outcome (`None`), not an error.
pub struct Solver<V: Value> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
}

impl<V: Value> Solver<V> {
    pub fn new(variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>) -> Self {
        Self { variable_heuristic }
    }

    /// Solves the problem described by `graph`.
    ///
    /// Runs one whole-graph propagation pass first (which alone can prove
    /// unsatisfiability), then searches. Returns the first complete
    /// assignment found in depth-first, domain-order traversal, together
    /// with the search counters.
    pub fn solve(&self, graph: &ConstraintGraph<V>) -> (Option<Assignment<V>>, SearchStats) {
        let mut stats = SearchStats::default();

        let initial = graph.initial_assignment();
        let Some(pruned) = propagate::enforce(graph, initial, graph.all_arcs(), &mut stats)
        else {
            debug!("initial propagation proved the problem unsatisfiable");
            stats.nodes_visited += 1;
            stats.dead_ends += 1;
            return (None, stats);
        };

        let found = self.backtrack(graph, pruned, &mut stats);
        (found, stats)
    }

    fn backtrack(
        &self,
        graph: &ConstraintGraph<V>,
        assignment: Assignment<V>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<V>> {
        stats.nodes_visited += 1;

        if assignment.is_complete() {
            return Some(assignment);
        }

        let Some(variable) = self.variable_heuristic.select_variable(&assignment) else {
            // Unreachable when the heuristic honors its contract, but an
            // incomplete assignment with no undecided variable has nothing
            // left to branch on.
            return Some(assignment);
        };

        let domain = assignment.domain(variable)?.clone();
        for value in domain.iter() {
            let guess = assignment.with_domain(variable, Domain::singleton(value.clone()));

            // Only `variable` changed, so the arcs into it are the only ones
            // whose consistency may have broken.
            if let Some(propagated) =
                propagate::enforce(graph, guess, graph.arcs_into(variable), stats)
            {
                if let Some(found) = self.backtrack(graph, propagated, stats) {
                    return Some(found);
                }
            }
        }

        debug!(variable, "every candidate value exhausted");
        stats.dead_ends += 1;
        None
    }
}

impl<V: Value> Default for Solver<V> {
    /// A solver with the minimum-remaining-values heuristic.
    fn default() -> Self {
        Self::new(Box::new(MinimumRemainingValues))
    }
}
