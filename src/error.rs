use crate::solver::graph::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while registering variables and constraints on a
/// [`ConstraintGraph`](crate::solver::graph::ConstraintGraph).
///
/// Search-internal failure (an emptied domain, an exhausted branch) is never
/// reported through this type; it is ordinary control flow inside the solver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("variable {0:?} is already registered")]
    DuplicateVariable(String),
    #[error("variable id {0} is not registered")]
    UnknownVariable(VariableId),
}

/// Errors raised while parsing a textual problem source, before solving
/// starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("expected 9 grid lines, found {0}")]
    WrongLineCount(usize),
    #[error("line {line}: expected 9 cells, found {len}")]
    WrongLineLength { line: usize, len: usize },
    #[error("line {line}: unrecognized cell {found:?}")]
    UnrecognizedCell { line: usize, found: char },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
