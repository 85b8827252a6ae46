use super::Algebra;
use crate::config::MissingOperands;
use crate::error::QueryError;
use crate::index::BooleanIndex;
use crate::query::parse;
use crate::DocId;
use std::collections::BTreeSet;

/// Plain set algebra. `not` is binary set difference `a - b`, not a complement
/// against the corpus.
pub struct BooleanAlgebra<'a> {
    index: &'a BooleanIndex,
}

impl<'a> BooleanAlgebra<'a> {
    pub fn new(index: &'a BooleanIndex) -> Self { Self { index } }
}

impl Algebra for BooleanAlgebra<'_> {
    type Value = BTreeSet<DocId>;
    const NOT_ARITY: usize = 2;

    fn operand(&self, term: &str) -> Self::Value { self.index.postings(term).iter().copied().collect() }

    fn empty(&self) -> Self::Value { BTreeSet::new() }

    fn and(&self, a: Self::Value, b: Self::Value) -> Self::Value { a.intersection(&b).copied().collect() }

    fn or(&self, mut a: Self::Value, mut b: Self::Value) -> Self::Value {
        a.append(&mut b);
        a
    }

    fn not(&self, base: Option<Self::Value>, negated: Self::Value) -> Self::Value {
        match base {
            Some(a) => a.difference(&negated).copied().collect(),
            None => BTreeSet::new(),
        }
    }
}

/// Evaluate `query` with the strict Boolean model.
pub fn evaluate(index: &BooleanIndex, query: &str, policy: MissingOperands) -> Result<BTreeSet<DocId>, QueryError> {
    let postfix = parse(query);
    Ok(super::evaluate(&BooleanAlgebra::new(index), &postfix, policy)?.unwrap_or_default())
}
