pub mod assignment;
pub mod domain;
pub mod engine;
pub mod graph;
pub mod heuristics;
pub mod propagate;
pub mod relation;
pub mod stats;
pub mod value;
