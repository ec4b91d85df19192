use im::HashMap;

use crate::solver::{domain::Domain, graph::VariableId, value::Value};

/// A snapshot of every variable's current domain at one point in the search
/// tree.
///
/// An assignment is partial while any domain holds more than one value and
/// complete once every domain is a singleton. Each search branch owns an
/// independent `Assignment`; no branch may observe another branch's pruning.
/// That isolation is what makes the backtracking search correct, and it is
/// obtained here the cheap way: the underlying map is persistent, so a clone
/// shares structure with its parent and [`with_domain`](Self::with_domain)
/// produces a sibling-invisible update instead of mutating in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment<V: Value> {
    domains: HashMap<VariableId, Domain<V>>,
}

impl<V: Value> Assignment<V> {
    pub fn new(domains: impl IntoIterator<Item = (VariableId, Domain<V>)>) -> Self {
        Self {
            domains: domains.into_iter().collect(),
        }
    }

    pub fn domain(&self, variable: VariableId) -> Option<&Domain<V>> {
        self.domains.get(&variable)
    }

    /// Returns a new assignment in which `variable` has the given domain.
    /// `self` is unchanged.
    pub fn with_domain(&self, variable: VariableId, domain: Domain<V>) -> Self {
        Self {
            domains: self.domains.update(variable, domain),
        }
    }

    /// `true` once every variable's domain holds exactly one value.
    pub fn is_complete(&self) -> bool {
        self.domains.values().all(Domain::is_decided)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &Domain<V>)> {
        self.domains.iter().map(|(id, domain)| (*id, domain))
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
