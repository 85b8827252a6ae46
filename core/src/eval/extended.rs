use super::Algebra;
use crate::config::{AndPolicy, MissingOperands};
use crate::corpus::Corpus;
use crate::error::QueryError;
use crate::index::WeightedIndex;
use crate::query::parse;
use crate::scoring::{fuzzy_and, fuzzy_not, fuzzy_or, WeightMap};
use crate::DocId;

/// Fuzzy set algebra over TF-IDF weight maps.
///
/// Unlike [`super::BooleanAlgebra`], `not` here is unary: the complement of its
/// operand against the whole corpus, each surviving document weighted 1.
pub struct ExtendedAlgebra<'a> {
    index: &'a WeightedIndex,
    corpus: &'a Corpus,
    and_policy: AndPolicy,
}

impl<'a> ExtendedAlgebra<'a> {
    pub fn new(index: &'a WeightedIndex, corpus: &'a Corpus, and_policy: AndPolicy) -> Self {
        Self { index, corpus, and_policy }
    }
}

impl Algebra for ExtendedAlgebra<'_> {
    type Value = WeightMap;
    const NOT_ARITY: usize = 1;

    fn operand(&self, term: &str) -> Self::Value { self.index.weights(term) }

    fn empty(&self) -> Self::Value { WeightMap::new() }

    fn and(&self, a: Self::Value, b: Self::Value) -> Self::Value { fuzzy_and(&a, &b, self.and_policy) }

    fn or(&self, a: Self::Value, b: Self::Value) -> Self::Value { fuzzy_or(&a, &b) }

    fn not(&self, _base: Option<Self::Value>, negated: Self::Value) -> Self::Value {
        fuzzy_not(&negated, self.corpus.doc_ids())
    }
}

/// Evaluate `query` with the Extended Boolean model, ranked by descending weight.
pub fn evaluate(
    index: &WeightedIndex,
    corpus: &Corpus,
    query: &str,
    and_policy: AndPolicy,
    policy: MissingOperands,
) -> Result<Vec<(DocId, f64)>, QueryError> {
    let postfix = parse(query);
    let algebra = ExtendedAlgebra::new(index, corpus, and_policy);
    let weights = super::evaluate(&algebra, &postfix, policy)?.unwrap_or_default();
    Ok(weights.ranked())
}
