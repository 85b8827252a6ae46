use crate::index::WeightedIndex;
use crate::scoring::{cosine_similarity, term_frequency, tf_idf, TermVector};
use crate::tokenizer::tokenize;
use crate::DocId;
use std::collections::BTreeSet;

/// Query vector: `tf_query(t) * idf(t)` for each distinct query term the index knows.
pub fn query_vector(index: &WeightedIndex, terms: &[String]) -> TermVector {
    terms
        .iter()
        .filter(|t| index.contains_term(t))
        .map(|t| (t.clone(), tf_idf(term_frequency(t, terms), index.idf(t))))
        .collect()
}

/// Document vector restricted to `terms`, using the stored TF-IDF weights.
pub fn document_vector(index: &WeightedIndex, doc_id: DocId, terms: &[String]) -> TermVector {
    terms
        .iter()
        .filter_map(|t| index.weight(t, doc_id).map(|w| (t.clone(), w)))
        .collect()
}

/// Rank documents by cosine similarity with `query`.
///
/// Boolean operators carry no meaning here; every word is a term. Documents
/// sharing no term with the query are left out rather than scored 0.
pub fn rank(index: &WeightedIndex, query: &str, epsilon: f64) -> Vec<(DocId, f64)> {
    let terms = tokenize(query);
    let candidates: BTreeSet<DocId> =
        terms.iter().flat_map(|t| index.postings(t).iter().map(|p| p.doc_id)).collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let q = query_vector(index, &terms);
    let mut scored: Vec<(DocId, f64)> = candidates
        .into_iter()
        .map(|doc_id| {
            let d = document_vector(index, doc_id, &terms);
            (doc_id, cosine_similarity(&q, &d, epsilon))
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    tracing::debug!(query, candidates = scored.len(), "ranked vector query");
    scored
}
