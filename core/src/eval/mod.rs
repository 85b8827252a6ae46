//! Query evaluation. The Boolean and Extended Boolean models share one postfix
//! stack machine and differ only in their [`Algebra`]; the Vector Space model
//! ranks by cosine similarity instead.

pub mod boolean;
pub mod extended;
pub mod vector;

use crate::config::MissingOperands;
use crate::error::QueryError;
use crate::query::{Operator, QueryToken};

pub use boolean::BooleanAlgebra;
pub use extended::ExtendedAlgebra;

/// Operand values and operator semantics of one retrieval model.
pub trait Algebra {
    type Value;

    /// Operands `not` pops: 1 for a true complement, 2 for set difference.
    const NOT_ARITY: usize;

    /// Value pushed for a query term. Unknown terms give the empty value.
    fn operand(&self, term: &str) -> Self::Value;

    fn empty(&self) -> Self::Value;

    fn and(&self, a: Self::Value, b: Self::Value) -> Self::Value;

    fn or(&self, a: Self::Value, b: Self::Value) -> Self::Value;

    /// `base` is set only when [`Algebra::NOT_ARITY`] is 2.
    fn not(&self, base: Option<Self::Value>, negated: Self::Value) -> Self::Value;
}

/// Runs `postfix` on a stack machine.
///
/// Returns `Ok(None)` for an empty query. Operands left over at the end are an
/// error under [`MissingOperands::Reject`]; under [`MissingOperands::Substitute`]
/// the bottom of the stack, the first operand pushed, is the result.
pub fn evaluate<A: Algebra>(
    algebra: &A,
    postfix: &[QueryToken],
    policy: MissingOperands,
) -> Result<Option<A::Value>, QueryError> {
    let mut stack: Vec<A::Value> = Vec::new();
    for (position, token) in postfix.iter().enumerate() {
        match token {
            QueryToken::Term(term) => stack.push(algebra.operand(term)),
            QueryToken::Operator(op) => {
                let arity = match op {
                    Operator::Not => A::NOT_ARITY,
                    Operator::And | Operator::Or => 2,
                };
                if stack.len() < arity && policy == MissingOperands::Reject {
                    return Err(QueryError::InsufficientOperands { operator: *op, position });
                }
                let b = stack.pop().unwrap_or_else(|| algebra.empty());
                let a = if arity == 2 { Some(stack.pop().unwrap_or_else(|| algebra.empty())) } else { None };
                let value = match (op, a) {
                    (Operator::Not, base) => algebra.not(base, b),
                    (Operator::And, Some(a)) => algebra.and(a, b),
                    (Operator::Or, Some(a)) => algebra.or(a, b),
                    (_, None) => b,
                };
                stack.push(value);
            }
        }
    }
    if stack.len() > 1 {
        let count = stack.len() - 1;
        if policy == MissingOperands::Reject {
            return Err(QueryError::UnconsumedOperands { count });
        }
        tracing::debug!(leftover = count, "query left unconsumed operands");
        return Ok(stack.into_iter().next());
    }
    Ok(stack.pop())
}
