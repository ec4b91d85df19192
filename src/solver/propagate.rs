//! Arc-consistency propagation (the AC-3 algorithm).

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::solver::{
    assignment::Assignment,
    graph::{ConstraintGraph, VariableId},
    stats::SearchStats,
    value::Value,
};

/// FIFO worklist of arcs awaiting revision.
///
/// An arc that is already pending is not queued twice; revising it once
/// covers both requests.
struct ArcQueue {
    queue: VecDeque<(VariableId, VariableId)>,
    members: HashSet<(VariableId, VariableId)>,
}

impl ArcQueue {
    fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            members: HashSet::new(),
        }
    }

    fn push_back(&mut self, arc: (VariableId, VariableId)) {
        if self.members.insert(arc) {
            self.queue.push_back(arc);
        }
    }

    fn pop_front(&mut self) -> Option<(VariableId, VariableId)> {
        let arc = self.queue.pop_front()?;
        self.members.remove(&arc);
        Some(arc)
    }
}

/// Prunes `assignment` to arc consistency over every arc reachable from the
/// seed queue.
///
/// Pops arcs FIFO; for arc `(i, j)`, removes from `i`'s domain every value
/// with no supporting value left in `j`'s domain. A revision that tightens
/// `i` re-enqueues every registered arc `(k, i)` with `k != j`, because the
/// support those arcs established may now be gone. A revision that empties a
/// domain proves this branch unsatisfiable and abandons the rest of the
/// queue.
///
/// Returns the arc-consistent assignment, or `None` on contradiction.
///
/// Arc consistency is necessary but not sufficient for a full solution, which
/// is why the search driver interleaves this with backtracking instead of
/// running it once.
pub fn enforce<V: Value>(
    graph: &ConstraintGraph<V>,
    assignment: Assignment<V>,
    seed: impl IntoIterator<Item = (VariableId, VariableId)>,
    stats: &mut SearchStats,
) -> Option<Assignment<V>> {
    let mut assignment = assignment;
    let mut queue = ArcQueue::new();
    for arc in seed {
        queue.push_back(arc);
    }

    while let Some((i, j)) = queue.pop_front() {
        stats.revise_calls += 1;
        let Some(revised) = revise(graph, &assignment, i, j) else {
            continue;
        };
        if revised.domain(i).map_or(true, |domain| domain.is_empty()) {
            debug!(variable = i, "domain wiped out, abandoning branch");
            return None;
        }
        stats.prunings += 1;
        trace!(arc = ?(i, j), "revised");
        assignment = revised;
        for (k, _) in graph.arcs_into(i) {
            if k != j {
                queue.push_back((k, i));
            }
        }
    }

    Some(assignment)
}

/// If any value of `i` lacks support in `j` under the relation `i -> j`,
/// returns the assignment with those values removed; `None` when nothing
/// changed.
fn revise<V: Value>(
    graph: &ConstraintGraph<V>,
    assignment: &Assignment<V>,
    i: VariableId,
    j: VariableId,
) -> Option<Assignment<V>> {
    let relation = graph.relation(i, j)?;
    let domain_i = assignment.domain(i)?;
    let domain_j = assignment.domain(j)?;

    let narrowed = domain_i.retain(|x| domain_j.iter().any(|y| relation.satisfies(x, y)));
    if narrowed.len() < domain_i.len() {
        Some(assignment.with_domain(i, narrowed))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::relation::NotEqual;

    fn chain_graph() -> ConstraintGraph<i32> {
        // a != b, b != c, constraints in both directions.
        let mut graph = ConstraintGraph::new();
        let a = graph.add_variable("a", [1]).unwrap();
        let b = graph.add_variable("b", [1, 2]).unwrap();
        let c = graph.add_variable("c", [1, 2]).unwrap();
        for (i, j) in [(a, b), (b, a), (b, c), (c, b)] {
            graph.add_constraint(i, j, NotEqual).unwrap();
        }
        graph
    }

    #[test]
    fn propagation_reaches_a_fixpoint_through_the_chain() {
        let graph = chain_graph();
        let mut stats = SearchStats::default();
        let result = enforce(&graph, graph.initial_assignment(), graph.all_arcs(), &mut stats)
            .expect("chain is satisfiable");

        // a=1 forces b=2 forces c=1.
        assert_eq!(result.domain(0).unwrap().singleton_value(), Some(1));
        assert_eq!(result.domain(1).unwrap().singleton_value(), Some(2));
        assert_eq!(result.domain(2).unwrap().singleton_value(), Some(1));
        assert!(stats.prunings >= 2);
    }

    #[test]
    fn rerunning_on_a_fixpoint_prunes_nothing() {
        let graph = chain_graph();
        let mut stats = SearchStats::default();
        let first = enforce(&graph, graph.initial_assignment(), graph.all_arcs(), &mut stats)
            .unwrap();

        let prunings_before = stats.prunings;
        let second = enforce(&graph, first.clone(), graph.all_arcs(), &mut stats)
            .expect("already consistent");

        assert_eq!(stats.prunings, prunings_before, "idempotent second pass");
        assert_eq!(second, first);
    }

    #[test]
    fn empty_domain_short_circuits() {
        let mut graph = ConstraintGraph::new();
        let a = graph.add_variable("a", [1]).unwrap();
        let b = graph.add_variable("b", [1]).unwrap();
        graph.add_constraint(a, b, NotEqual).unwrap();
        graph.add_constraint(b, a, NotEqual).unwrap();

        let mut stats = SearchStats::default();
        let result = enforce(&graph, graph.initial_assignment(), graph.all_arcs(), &mut stats);
        assert_eq!(result, None);
    }

    #[test]
    fn domains_never_grow() {
        let graph = chain_graph();
        let before = graph.initial_assignment();
        let mut stats = SearchStats::default();
        let after = enforce(&graph, before.clone(), graph.all_arcs(), &mut stats).unwrap();

        for variable in graph.variables() {
            assert!(after
                .domain(variable)
                .unwrap()
                .is_subset_of(before.domain(variable).unwrap()));
        }
    }

    #[test]
    fn seeding_a_single_arc_limits_the_initial_work() {
        let graph = chain_graph();
        let mut stats = SearchStats::default();
        // Only (b, a) seeded: b loses 1, which wakes the arcs into b.
        let result = enforce(
            &graph,
            graph.initial_assignment(),
            [(1, 0)],
            &mut stats,
        )
        .unwrap();

        assert_eq!(result.domain(1).unwrap().singleton_value(), Some(2));
        assert_eq!(result.domain(2).unwrap().singleton_value(), Some(1));
    }

    #[test]
    fn asymmetric_constraints_only_wake_registered_arcs() {
        let mut graph = ConstraintGraph::new();
        let a = graph.add_variable("a", [1, 2]).unwrap();
        let b = graph.add_variable("b", [2]).unwrap();
        // One direction only.
        graph.add_constraint(a, b, NotEqual).unwrap();

        let mut stats = SearchStats::default();
        let result = enforce(&graph, graph.initial_assignment(), graph.all_arcs(), &mut stats)
            .expect("satisfiable");
        assert_eq!(result.domain(a).unwrap().singleton_value(), Some(1));
        assert_eq!(result.domain(b).unwrap().singleton_value(), Some(2));
    }
}
