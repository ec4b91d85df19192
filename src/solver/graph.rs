use std::{collections::HashMap, sync::Arc};

use crate::{
    error::GraphError,
    solver::{
        assignment::Assignment,
        domain::Domain,
        relation::{NotEqual, Relation},
        value::Value,
    },
};

/// Identifies one variable of a problem. Ids are assigned densely in
/// registration order, starting at zero.
pub type VariableId = u32;

/// The variables of a problem, their initial domains, and the directed binary
/// constraints between them.
///
/// A graph is populated once by a problem builder and then treated as
/// read-only by the solver: the search never touches the graph's domains, only
/// the per-branch [`Assignment`] snapshots taken from them.
///
/// Constraints are directed. A builder that wants arc consistency enforced in
/// both directions (the usual case) registers both `i -> j` and `j -> i`;
/// nothing in the model requires it to.
pub struct ConstraintGraph<V: Value> {
    names: Vec<String>,
    index: HashMap<String, VariableId>,
    domains: Vec<Domain<V>>,
    /// Outgoing constraints per variable, in registration order.
    outgoing: Vec<Vec<(VariableId, Arc<dyn Relation<V>>)>>,
    /// Sources of registered arcs into each variable.
    incoming: Vec<Vec<VariableId>>,
}

impl<V: Value> ConstraintGraph<V> {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            index: HashMap::new(),
            domains: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Registers a variable with its initial domain and returns its id.
    ///
    /// Re-registering a name is rejected with
    /// [`GraphError::DuplicateVariable`].
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = V>,
    ) -> Result<VariableId, GraphError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateVariable(name));
        }
        let id = self.names.len() as VariableId;
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.domains.push(Domain::new(domain));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        Ok(id)
    }

    /// Records the one-directional constraint `i -> j`.
    ///
    /// A second registration for the same `(i, j)` pair is a silent no-op:
    /// the first relation wins. This mirrors the usual builder pattern where
    /// symmetric helpers may revisit a pair, and it is pinned by a test.
    pub fn add_constraint(
        &mut self,
        i: VariableId,
        j: VariableId,
        relation: impl Relation<V> + 'static,
    ) -> Result<(), GraphError> {
        self.add_constraint_shared(i, j, Arc::new(relation))
    }

    fn add_constraint_shared(
        &mut self,
        i: VariableId,
        j: VariableId,
        relation: Arc<dyn Relation<V>>,
    ) -> Result<(), GraphError> {
        let count = self.names.len() as VariableId;
        for var in [i, j] {
            if var >= count {
                return Err(GraphError::UnknownVariable(var));
            }
        }
        let outgoing = &mut self.outgoing[i as usize];
        if outgoing.iter().any(|(target, _)| *target == j) {
            return Ok(());
        }
        outgoing.push((j, relation));
        self.incoming[j as usize].push(i);
        Ok(())
    }

    /// Adds `i != j` in both directions for every pair of distinct variables
    /// in the list: `n * (n - 1)` directed arcs for `n` variables.
    pub fn add_all_different(&mut self, variables: &[VariableId]) -> Result<(), GraphError> {
        let relation: Arc<dyn Relation<V>> = Arc::new(NotEqual);
        for &i in variables {
            for &j in variables {
                if i != j {
                    self.add_constraint_shared(i, j, relation.clone())?;
                }
            }
        }
        Ok(())
    }

    /// The relation registered for `i -> j`, if any.
    pub fn relation(&self, i: VariableId, j: VariableId) -> Option<&dyn Relation<V>> {
        self.outgoing
            .get(i as usize)?
            .iter()
            .find(|(target, _)| *target == j)
            .map(|(_, relation)| relation.as_ref())
    }

    /// The targets of `i`'s outgoing constraints, in registration order.
    pub fn neighbors_of(&self, i: VariableId) -> impl Iterator<Item = VariableId> + '_ {
        self.outgoing
            .get(i as usize)
            .into_iter()
            .flatten()
            .map(|(target, _)| *target)
    }

    /// Every registered arc `(i, j)`, in variable order then constraint
    /// registration order. Seeds the initial whole-graph propagation pass.
    pub fn all_arcs(&self) -> Vec<(VariableId, VariableId)> {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(i, targets)| {
                targets
                    .iter()
                    .map(move |(j, _)| (i as VariableId, *j))
            })
            .collect()
    }

    /// Every registered arc `(k, v)` pointing at `v`. Seeds re-propagation
    /// after a tentative assignment of `v`, since only `v`'s domain changed.
    pub fn arcs_into(&self, v: VariableId) -> Vec<(VariableId, VariableId)> {
        self.incoming
            .get(v as usize)
            .into_iter()
            .flatten()
            .map(|&k| (k, v))
            .collect()
    }

    /// A snapshot of every variable's registered domain, the root state of a
    /// search.
    pub fn initial_assignment(&self) -> Assignment<V> {
        Assignment::new(
            self.domains
                .iter()
                .enumerate()
                .map(|(id, domain)| (id as VariableId, domain.clone())),
        )
    }

    /// Number of registered variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All variable ids in registration order.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        0..self.names.len() as VariableId
    }

    pub fn variable_id(&self, name: &str) -> Option<VariableId> {
        self.index.get(name).copied()
    }

    pub fn variable_name(&self, id: VariableId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }
}

impl<V: Value> Default for ConstraintGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Value> std::fmt::Debug for ConstraintGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintGraph")
            .field("variables", &self.names)
            .field("arcs", &self.all_arcs().len())
            .finish()
    }
}
