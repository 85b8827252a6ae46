//! Small three-model retrieval engine.
//!
//! A [`Session`] owns a [`Corpus`] plus the plain and TF-IDF weighted inverted
//! indexes built from it, and answers queries with the strict Boolean model,
//! the Extended Boolean (fuzzy) model or the Vector Space model.

pub mod config;
pub mod corpus;
pub mod error;
pub mod eval;
pub mod index;
pub mod query;
pub mod scoring;
pub mod session;
pub mod tokenizer;

pub type DocId = u32;

pub use config::{AndPolicy, EngineConfig, MissingOperands};
pub use corpus::{Corpus, DocMeta};
pub use error::{Error, QueryError};
pub use index::{BooleanIndex, Posting, WeightedIndex};
pub use query::{Operator, QueryToken};
pub use scoring::{SparseVector, TermVector, WeightMap};
pub use session::{Hit, Model, Session, NO_RESULTS};
