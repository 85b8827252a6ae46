use crate::config::EngineConfig;
use crate::corpus::Corpus;
use crate::error::{Error, QueryError};
use crate::eval::{boolean, extended, vector};
use crate::index::{BooleanIndex, WeightedIndex};
use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Rendering of an empty result.
pub const NO_RESULTS: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    Boolean,
    Extended,
    Vector,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Boolean, Model::Extended, Model::Vector];

    pub fn as_str(self) -> &'static str {
        match self {
            Model::Boolean => "boolean",
            Model::Extended => "extended",
            Model::Vector => "vector",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "boolean" | "bool" => Ok(Model::Boolean),
            "extended" | "extended-boolean" | "fuzzy" => Ok(Model::Extended),
            "vector" | "vsm" => Ok(Model::Vector),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub id: String,
    pub score: f64,
}

/// A corpus together with the indexes built from it.
///
/// Everything is built once in the constructor and read-only afterwards, so a
/// session can serve any number of queries, from any number of threads.
#[derive(Debug, Clone)]
pub struct Session {
    corpus: Corpus,
    boolean: BooleanIndex,
    weighted: WeightedIndex,
    config: EngineConfig,
}

impl Session {
    pub fn new(corpus: Corpus) -> Self { Self::with_config(corpus, EngineConfig::default()) }

    pub fn with_config(corpus: Corpus, config: EngineConfig) -> Self {
        let boolean = BooleanIndex::build(&corpus);
        let weighted = WeightedIndex::build(&corpus, config.epsilon);
        Self { corpus, boolean, weighted, config }
    }

    pub fn from_documents<I, S, T>(docs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::new(docs.into_iter().collect())
    }

    pub fn corpus(&self) -> &Corpus { &self.corpus }

    pub fn boolean_index(&self) -> &BooleanIndex { &self.boolean }

    pub fn weighted_index(&self) -> &WeightedIndex { &self.weighted }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn boolean(&self, query: &str) -> Result<BTreeSet<DocId>, QueryError> {
        boolean::evaluate(&self.boolean, query, self.config.missing_operands)
    }

    pub fn extended(&self, query: &str) -> Result<Vec<(DocId, f64)>, QueryError> {
        extended::evaluate(&self.weighted, &self.corpus, query, self.config.and_policy, self.config.missing_operands)
    }

    pub fn vector(&self, query: &str) -> Vec<(DocId, f64)> { vector::rank(&self.weighted, query, self.config.epsilon) }

    /// Named hits in result order. Boolean hits carry a score of 1.
    pub fn hits(&self, model: Model, query: &str) -> Result<Vec<Hit>, QueryError> {
        let scored: Vec<(DocId, f64)> = match model {
            Model::Boolean => self.boolean(query)?.into_iter().map(|d| (d, 1.0)).collect(),
            Model::Extended => self.extended(query)?,
            Model::Vector => self.vector(query),
        };
        Ok(scored
            .into_iter()
            .filter_map(|(doc_id, score)| {
                self.corpus.external_id(doc_id).map(|id| Hit { id: id.to_string(), score })
            })
            .collect())
    }

    /// Comma separated document ids, or `"None"`.
    ///
    /// A malformed query is logged and reported as no results.
    pub fn search(&self, model: Model, query: &str) -> String {
        match self.hits(model, query) {
            Ok(hits) => render(&hits),
            Err(err) => {
                tracing::warn!(%model, query, error = %err, "query rejected");
                NO_RESULTS.to_string()
            }
        }
    }
}

pub fn render(hits: &[Hit]) -> String {
    if hits.is_empty() {
        return NO_RESULTS.to_string();
    }
    hits.iter().map(|h| h.id.as_str()).collect::<Vec<_>>().join(", ")
}
