use crate::query::Operator;
use thiserror::Error;

/// A query that the stack machine could not reduce to a single result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("operator '{operator}' at position {position} without sufficient operands")]
    InsufficientOperands { operator: Operator, position: usize },
    #[error("{count} operand(s) left without an operator")]
    UnconsumedOperands { count: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("unknown retrieval model '{0}' (expected boolean, extended or vector)")]
    UnknownModel(String),
}
