pub mod loader;

use anyhow::{Context, Result};
use retrieval::session::render;
use retrieval::{EngineConfig, Hit, Model, Session};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub model: Model,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<Hit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchReport {
    /// Comma separated ids, or `None`.
    pub fn render(&self) -> String { render(&self.results) }
}

pub fn run_query(session: &Session, model: Model, query: &str) -> SearchReport {
    let start = Instant::now();
    let (results, error) = match session.hits(model, query) {
        Ok(hits) => (hits, None),
        Err(err) => {
            tracing::warn!(%model, query, error = %err, "query rejected");
            (Vec::new(), Some(err.to_string()))
        }
    };
    let took_s = start.elapsed().as_secs_f64();
    tracing::debug!(%model, query, total_hits = results.len(), took_s, "query finished");
    SearchReport { query: query.to_string(), model, took_s, total_hits: results.len(), results, error }
}

/// Reads an [`EngineConfig`] from a JSON file; missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let buf = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&buf)?;
    Ok(config)
}
