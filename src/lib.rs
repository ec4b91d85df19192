//! Arcsolve is a constraint satisfaction problem (CSP) solver built on
//! arc-consistency propagation (AC-3) interleaved with backtracking search.
//!
//! A problem is a set of variables, each with a finite ordered domain of
//! candidate values, and directed binary constraints between variable pairs.
//! The solver finds an assignment of exactly one value per variable
//! satisfying every constraint, or proves that none exists.
//!
//! # Core Concepts
//!
//! - **[`ConstraintGraph`](solver::graph::ConstraintGraph)**: the variables,
//!   their domains, and the binary [`Relation`](solver::relation::Relation)s
//!   between them, populated by a problem builder.
//! - **[`propagate::enforce`](solver::propagate::enforce)**: the AC-3 engine.
//!   Prunes domains to a fixpoint over a FIFO queue of arcs and detects
//!   contradictions early.
//! - **[`Solver`](solver::engine::Solver)**: the backtracking driver. It
//!   branches on one variable at a time (minimum remaining values by
//!   default), re-propagates after every tentative assignment, and keeps each
//!   branch on its own persistent snapshot of the domains.
//!
//! Problem builders for Sudoku and map colouring live in [`problems`].
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `a != b` where `a` can be `1` or `2` and `b` can only be `1`; the
//! solver deduces that `a` must be `2`.
//!
//! ```
//! use arcsolve::solver::{engine::Solver, graph::ConstraintGraph, relation::NotEqual};
//!
//! let mut graph = ConstraintGraph::new();
//! let a = graph.add_variable("a", [1, 2])?;
//! let b = graph.add_variable("b", [1])?;
//! graph.add_constraint(a, b, NotEqual)?;
//! graph.add_constraint(b, a, NotEqual)?;
//!
//! let (solution, stats) = Solver::default().solve(&graph);
//! let solution = solution.expect("satisfiable");
//!
//! assert_eq!(solution.domain(a).unwrap().singleton_value(), Some(2));
//! assert!(stats.nodes_visited >= 1);
//! # Ok::<(), arcsolve::error::GraphError>(())
//! ```

pub mod error;
pub mod problems;
pub mod solver;
