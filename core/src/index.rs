use crate::corpus::Corpus;
use crate::scoring::{inverse_document_frequency, tf_idf, WeightMap};
use crate::tokenizer::{token_set, tokenize};
use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub weight: f64, // raw tf-idf, not normalized
}

/// Term -> posting list of documents, for the strict Boolean model.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BooleanIndex {
    postings: HashMap<String, Vec<DocId>>, // postings in corpus order
}

impl BooleanIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let mut postings: HashMap<String, Vec<DocId>> = HashMap::new();
        for (doc_id, doc) in corpus.iter() {
            // distinct tokens, so a document appears at most once per list
            for term in token_set(&doc.text) {
                postings.entry(term).or_default().push(doc_id);
            }
        }
        tracing::info!(num_docs = corpus.len(), num_terms = postings.len(), "built boolean index");
        Self { postings }
    }

    /// Posting list for `term`; empty if the term is unknown.
    pub fn postings(&self, term: &str) -> &[DocId] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ { self.postings.keys().map(String::as_str) }
}

/// Term -> (document -> TF-IDF weight), shared by the Extended Boolean and Vector models.
///
/// Only documents with at least one occurrence of a term get a posting, so a
/// weight of 0 or below can still be stored for terms present everywhere.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WeightedIndex {
    postings: HashMap<String, Vec<Posting>>, // sorted by doc_id
    df: HashMap<String, u32>,
    num_docs: u32,
    epsilon: f64,
}

impl WeightedIndex {
    pub fn build(corpus: &Corpus, epsilon: f64) -> Self {
        let mut df: HashMap<String, u32> = HashMap::new();
        let mut postings_raw: HashMap<String, Vec<(DocId, u32)>> = HashMap::new();

        for (doc_id, doc) in corpus.iter() {
            let mut tf_counts: HashMap<String, u32> = HashMap::new();
            for term in tokenize(&doc.text) {
                *tf_counts.entry(term).or_insert(0) += 1;
            }
            for (term, tf_raw) in tf_counts {
                *df.entry(term.clone()).or_insert(0) += 1;
                postings_raw.entry(term).or_default().push((doc_id, tf_raw));
            }
        }

        let n = corpus.len();
        let postings: HashMap<String, Vec<Posting>> = postings_raw
            .into_iter()
            .map(|(term, plist)| {
                let idf = inverse_document_frequency(n, df[&term], epsilon);
                let out = plist
                    .into_iter()
                    .map(|(doc_id, tf_raw)| Posting { doc_id, weight: tf_idf(tf_raw, idf) })
                    .collect();
                (term, out)
            })
            .collect();

        tracing::info!(num_docs = n, num_terms = postings.len(), "built weighted index");
        Self { postings, df, num_docs: n as u32, epsilon }
    }

    pub fn postings(&self, term: &str) -> &[Posting] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Posting list of `term` as a sparse weight map; empty if the term is unknown.
    pub fn weights(&self, term: &str) -> WeightMap {
        self.postings(term).iter().map(|p| (p.doc_id, p.weight)).collect()
    }

    /// Weight of `term` in `doc_id`, `None` when the document lacks the term.
    pub fn weight(&self, term: &str, doc_id: DocId) -> Option<f64> {
        let plist = self.postings(term);
        plist.binary_search_by_key(&doc_id, |p| p.doc_id).ok().map(|i| plist[i].weight)
    }

    pub fn document_frequency(&self, term: &str) -> u32 { self.df.get(term).copied().unwrap_or(0) }

    pub fn idf(&self, term: &str) -> f64 {
        inverse_document_frequency(self.num_docs as usize, self.document_frequency(term), self.epsilon)
    }

    pub fn contains_term(&self, term: &str) -> bool { self.postings.contains_key(term) }

    pub fn num_docs(&self) -> u32 { self.num_docs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EPSILON;

    fn corpus() -> Corpus {
        [("A", "cat dog dog"), ("B", "dog bird"), ("C", "fish")].into_iter().collect()
    }

    #[test]
    fn boolean_postings_follow_corpus_order() {
        let idx = BooleanIndex::build(&corpus());
        assert_eq!(idx.postings("dog"), &[0, 1]);
        assert_eq!(idx.postings("cat"), &[0]);
        assert!(idx.postings("whale").is_empty());
        assert_eq!(idx.num_terms(), 4);
    }

    #[test]
    fn weights_are_tf_times_idf() {
        let idx = WeightedIndex::build(&corpus(), DEFAULT_EPSILON);
        let idf_dog = (3.0f64 / (2.0 + DEFAULT_EPSILON)).ln();
        let w = idx.weight("dog", 0).unwrap();
        assert!((w - 2.0 * idf_dog).abs() < 1e-12);
        assert!((idx.weight("dog", 1).unwrap() - idf_dog).abs() < 1e-12);
        assert_eq!(idx.weight("dog", 2), None);
        assert_eq!(idx.document_frequency("dog"), 2);
    }

    #[test]
    fn absent_documents_have_no_entry() {
        let idx = WeightedIndex::build(&corpus(), DEFAULT_EPSILON);
        let cat = idx.weights("cat");
        assert_eq!(cat.len(), 1);
        assert!(cat.contains(&0));
        assert!(idx.weights("whale").is_empty());
    }

    #[test]
    fn rebuild_is_deterministic() {
        let c = corpus();
        assert_eq!(BooleanIndex::build(&c), BooleanIndex::build(&c));
        assert_eq!(WeightedIndex::build(&c, DEFAULT_EPSILON), WeightedIndex::build(&c, DEFAULT_EPSILON));
    }

    #[test]
    fn empty_documents_contribute_nothing() {
        let c: Corpus = [("A", ""), ("B", "cat")].into_iter().collect();
        let idx = WeightedIndex::build(&c, DEFAULT_EPSILON);
        assert_eq!(idx.num_docs(), 2);
        assert_eq!(idx.postings("cat").len(), 1);
    }
}
