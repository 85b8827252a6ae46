use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    pub external_id: String,
    pub text: String,
}

/// Immutable `DocumentID -> Text` mapping handed to the engine by a document source.
///
/// Documents get dense [`DocId`]s in insertion order. That order is the
/// tie-break order of every ranked result.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<DocMeta>,
    ids: HashMap<String, DocId>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Adds a document. Re-inserting a known identifier replaces its text in place.
    pub fn insert(&mut self, external_id: impl Into<String>, text: impl Into<String>) -> DocId {
        let external_id = external_id.into();
        let text = text.into();
        if let Some(&doc_id) = self.ids.get(&external_id) {
            self.docs[doc_id as usize].text = text;
            return doc_id;
        }
        let doc_id = self.docs.len() as DocId;
        self.ids.insert(external_id.clone(), doc_id);
        self.docs.push(DocMeta { external_id, text });
        doc_id
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    pub fn get(&self, doc_id: DocId) -> Option<&DocMeta> { self.docs.get(doc_id as usize) }

    pub fn external_id(&self, doc_id: DocId) -> Option<&str> {
        self.get(doc_id).map(|d| d.external_id.as_str())
    }

    pub fn doc_id(&self, external_id: &str) -> Option<DocId> { self.ids.get(external_id).copied() }

    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        (0..self.docs.len()).map(|i| i as DocId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &DocMeta)> + '_ {
        self.docs.iter().enumerate().map(|(i, d)| (i as DocId, d))
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (id, text) in iter {
            corpus.insert(id, text);
        }
        corpus
    }
}
