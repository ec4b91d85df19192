use crate::solver::value::Value;

/// A human-readable description of a registered constraint, used by
/// diagnostics.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// The binary predicate carried by a directed constraint `i -> j`.
///
/// `satisfies(x, y)` means "value `x` for `i` is compatible with value `y`
/// for `j`". Relations are registered on a
/// [`ConstraintGraph`](crate::solver::graph::ConstraintGraph) and evaluated by
/// the propagation engine; they must be pure functions of their arguments.
pub trait Relation<V: Value>: std::fmt::Debug {
    fn satisfies(&self, x: &V, y: &V) -> bool;

    fn descriptor(&self) -> ConstraintDescriptor;
}

/// The inequality relation: `x != y`.
///
/// This is the workhorse of colouring-style problems and of the pairwise
/// decomposition of all-different groups.
#[derive(Debug, Clone, Copy)]
pub struct NotEqual;

impl<V: Value> Relation<V> for NotEqual {
    fn satisfies(&self, x: &V, y: &V) -> bool {
        x != y
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqual".to_string(),
            description: "?x != ?y".to_string(),
        }
    }
}

/// A named wrapper around an arbitrary binary predicate function.
///
/// This is the escape hatch for problem builders whose relation is not one of
/// the provided kinds. The name is carried for diagnostics only.
#[derive(Debug, Clone, Copy)]
pub struct Predicate<V> {
    name: &'static str,
    test: fn(&V, &V) -> bool,
}

impl<V: Value> Predicate<V> {
    pub fn new(name: &'static str, test: fn(&V, &V) -> bool) -> Self {
        Self { name, test }
    }
}

impl<V: Value> Relation<V> for Predicate<V> {
    fn satisfies(&self, x: &V, y: &V) -> bool {
        (self.test)(x, y)
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "Predicate".to_string(),
            description: self.name.to_string(),
        }
    }
}
