//! Problem builders: collaborators that turn a domain-specific source into a
//! [`ConstraintGraph`](crate::solver::graph::ConstraintGraph) and render a
//! found assignment back into human-readable form.

pub mod map_colouring;
pub mod sudoku;
