use im::Vector;

use crate::solver::value::Value;

/// The ordered set of candidate values for one variable.
///
/// Values keep the order in which they were supplied (duplicates are dropped,
/// first occurrence wins), and that order is the order in which the search
/// tries them. Backed by a persistent vector, so cloning a domain shares
/// structure rather than copying values.
///
/// A domain of length one means the variable is decided; a domain of length
/// zero means the current search branch is contradictory.
///
/// Every operation that narrows a domain produces a new `Domain`; an existing
/// one is never mutated in place. Domains only ever shrink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain<V: Value>(Vector<V>);

impl<V: Value> Domain<V> {
    pub fn new(values: impl IntoIterator<Item = V>) -> Self {
        let mut inner = Vector::new();
        for value in values {
            if !inner.contains(&value) {
                inner.push_back(value);
            }
        }
        Self(inner)
    }

    /// A domain holding exactly one value.
    pub fn singleton(value: V) -> Self {
        Self(Vector::unit(value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the domain contains exactly one value, i.e. the
    /// variable is decided.
    pub fn is_decided(&self) -> bool {
        self.0.len() == 1
    }

    /// If the domain is a singleton, returns the single value. Otherwise,
    /// `None`.
    pub fn singleton_value(&self) -> Option<V> {
        if self.is_decided() {
            self.0.front().cloned()
        } else {
            None
        }
    }

    pub fn contains(&self, value: &V) -> bool {
        self.0.contains(value)
    }

    /// Iterates the values in domain order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.0.iter()
    }

    /// Returns a new domain containing only the values that satisfy the
    /// predicate, preserving order.
    pub fn retain(&self, f: impl Fn(&V) -> bool) -> Self {
        Self(self.0.iter().filter(|v| f(v)).cloned().collect())
    }

    /// Returns `true` if every value of `self` is also a value of `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.iter().all(|v| other.contains(v))
    }
}

impl<V: Value> FromIterator<V> for Domain<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}
