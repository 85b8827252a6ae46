//! Shared math: TF, IDF, fuzzy set algebra over sparse weight maps, and
//! cosine similarity.

use crate::config::AndPolicy;
use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse `key -> weight` vector. Missing keys read as 0.0.
///
/// Backed by a `BTreeMap` so iteration order is the key order, which for
/// [`DocId`] keys is corpus insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector<K: Ord> {
    entries: BTreeMap<K, f64>,
}

/// Document -> weight, the operand type of the Extended Boolean model.
pub type WeightMap = SparseVector<DocId>;
/// Term -> weight, the vectors of the Vector Space model.
pub type TermVector = SparseVector<String>;

impl<K: Ord> Default for SparseVector<K> {
    fn default() -> Self { Self { entries: BTreeMap::new() } }
}

impl<K: Ord + Clone> SparseVector<K> {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, key: &K) -> f64 { self.entries.get(key).copied().unwrap_or(0.0) }

    pub fn contains(&self, key: &K) -> bool { self.entries.contains_key(key) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ { self.entries.keys() }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.entries.iter().map(|(k, w)| (k, *w))
    }

    pub fn dot(&self, other: &Self) -> f64 {
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small
            .entries
            .iter()
            .filter_map(|(k, w)| large.entries.get(k).map(|o| w * o))
            .sum()
    }

    pub fn magnitude(&self) -> f64 { self.entries.values().map(|w| w * w).sum::<f64>().sqrt() }

    /// Entries sorted by descending weight. Equal weights keep key order.
    pub fn ranked(&self) -> Vec<(K, f64)> {
        let mut out: Vec<(K, f64)> = self.entries.iter().map(|(k, w)| (k.clone(), *w)).collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }
}

impl<K: Ord> FromIterator<(K, f64)> for SparseVector<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Raw occurrences of `term` in a token sequence.
pub fn term_frequency(term: &str, tokens: &[String]) -> u32 {
    tokens.iter().filter(|t| t.as_str() == term).count() as u32
}

/// `ln(N / (df + epsilon))`. Zero or negative for terms present in every document;
/// that is left as is. An empty corpus yields 0.
pub fn inverse_document_frequency(total_docs: usize, doc_freq: u32, epsilon: f64) -> f64 {
    if total_docs == 0 {
        return 0.0;
    }
    (total_docs as f64 / (doc_freq as f64 + epsilon)).ln()
}

pub fn tf_idf(tf: u32, idf: f64) -> f64 { tf as f64 * idf }

pub fn fuzzy_and(a: &WeightMap, b: &WeightMap, policy: AndPolicy) -> WeightMap {
    match policy {
        AndPolicy::Intersection => a
            .iter()
            .filter(|(doc, _)| b.contains(doc))
            .map(|(doc, w)| (*doc, w.min(b.get(doc))))
            .collect(),
        AndPolicy::ZeroDefaultUnion => a
            .keys()
            .chain(b.keys())
            .map(|doc| (*doc, a.get(doc).min(b.get(doc))))
            .collect(),
    }
}

pub fn fuzzy_or(a: &WeightMap, b: &WeightMap) -> WeightMap {
    a.keys().chain(b.keys()).map(|doc| (*doc, a.get(doc).max(b.get(doc)))).collect()
}

/// Complement against `universe`: every document absent from `b` with weight 1.
pub fn fuzzy_not(b: &WeightMap, universe: impl IntoIterator<Item = DocId>) -> WeightMap {
    universe.into_iter().filter(|doc| !b.contains(doc)).map(|doc| (doc, 1.0)).collect()
}

/// `(a . b) / (|a| |b| + epsilon)`
pub fn cosine_similarity<K: Ord + Clone>(a: &SparseVector<K>, b: &SparseVector<K>, epsilon: f64) -> f64 {
    a.dot(b) / (a.magnitude() * b.magnitude() + epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EPSILON;

    fn wm(pairs: &[(DocId, f64)]) -> WeightMap { pairs.iter().copied().collect() }

    #[test]
    fn missing_key_reads_zero() {
        let m = wm(&[(1, 0.5)]);
        assert_eq!(m.get(&1), 0.5);
        assert_eq!(m.get(&7), 0.0);
    }

    #[test]
    fn idf_of_ubiquitous_term_is_not_positive() {
        assert!(inverse_document_frequency(3, 3, DEFAULT_EPSILON) <= 0.0);
        assert!(inverse_document_frequency(3, 1, DEFAULT_EPSILON) > 1.0);
        assert_eq!(inverse_document_frequency(0, 0, DEFAULT_EPSILON), 0.0);
    }

    #[test]
    fn intersection_and_drops_one_sided_docs() {
        let a = wm(&[(0, 0.9), (1, 0.4)]);
        let b = wm(&[(1, 0.7), (2, 0.3)]);
        let r = fuzzy_and(&a, &b, AndPolicy::Intersection);
        assert_eq!(r.len(), 1);
        assert_eq!(r.get(&1), 0.4);
    }

    #[test]
    fn zero_default_and_keeps_one_sided_docs_at_zero() {
        let a = wm(&[(0, 0.9), (1, 0.4)]);
        let b = wm(&[(1, 0.7), (2, 0.3)]);
        let r = fuzzy_and(&a, &b, AndPolicy::ZeroDefaultUnion);
        assert_eq!(r.len(), 3);
        assert!(r.contains(&0) && r.contains(&2));
        assert_eq!(r.get(&0), 0.0);
        assert_eq!(r.get(&1), 0.4);
    }

    #[test]
    fn fuzzy_and_never_exceeds_fuzzy_or() {
        let a = wm(&[(0, 0.9), (1, 0.4), (3, 2.5)]);
        let b = wm(&[(1, 0.7), (2, 0.3), (3, 1.0)]);
        let or = fuzzy_or(&a, &b);
        for policy in [AndPolicy::Intersection, AndPolicy::ZeroDefaultUnion] {
            let and = fuzzy_and(&a, &b, policy);
            for (doc, w) in and.iter() {
                assert!(w <= or.get(doc));
            }
        }
        assert_eq!(or.get(&0), 0.9);
        assert_eq!(or.get(&3), 2.5);
    }

    #[test]
    fn not_is_complement_with_unit_weight() {
        let b = wm(&[(1, 3.0)]);
        let r = fuzzy_not(&b, 0..3);
        assert_eq!(r.keys().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(r.get(&2), 1.0);
    }

    #[test]
    fn cosine_is_symmetric_and_bounded() {
        let q: TermVector = [("cat".to_string(), 1.2), ("dog".to_string(), 0.3)].into_iter().collect();
        let d: TermVector = [("dog".to_string(), 2.0), ("bird".to_string(), 0.5)].into_iter().collect();
        let ab = cosine_similarity(&q, &d, DEFAULT_EPSILON);
        let ba = cosine_similarity(&d, &q, DEFAULT_EPSILON);
        assert_eq!(ab, ba);
        assert!(ab > 0.0 && ab < 1.0);
        assert!((cosine_similarity(&q, &q, DEFAULT_EPSILON) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ranked_breaks_ties_by_key() {
        let m = wm(&[(2, 1.0), (0, 1.0), (1, 3.0)]);
        let order: Vec<DocId> = m.ranked().into_iter().map(|(d, _)| d).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }
}
