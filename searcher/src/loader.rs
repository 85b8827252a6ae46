//! Document sources. Everything here produces a [`Corpus`]; the engine itself
//! never touches the filesystem.
//!
//! A single document that cannot be read is indexed as empty text. Only a bad
//! corpus root or a malformed JSON file fails the load.

use anyhow::{bail, Context, Result};
use retrieval::Corpus;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct InputDoc {
    id: String,
    #[serde(alias = "text")]
    body: String,
}

#[derive(Debug, Clone)]
pub enum Source {
    /// Every file below `root`, optionally filtered by extension.
    Dir { root: PathBuf, extensions: Vec<String> },
    /// A fixed, ordered list of file names under `root`.
    Files { root: PathBuf, names: Vec<String> },
    /// A JSON array/object or JSONL file of `{ "id", "body" }` records.
    Input(PathBuf),
}

pub fn load(source: &Source) -> Result<Corpus> {
    let corpus = match source {
        Source::Dir { root, extensions } => load_dir(root, extensions)?,
        Source::Files { root, names } => load_files(root, names)?,
        Source::Input(path) => load_input(path)?,
    };
    tracing::info!(num_docs = corpus.len(), "loaded documents");
    Ok(corpus)
}

/// Walks `root` in file name order. Document ids are paths relative to `root`.
pub fn load_dir(root: &Path, extensions: &[String]) -> Result<Corpus> {
    if !root.is_dir() {
        bail!("document directory {} not found", root.display());
    }
    let mut corpus = Corpus::new();
    for entry in WalkDir::new(root).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if !p.is_file() || !has_extension(p, extensions) {
            continue;
        }
        let id = p.strip_prefix(root).unwrap_or(p).to_string_lossy().replace('\\', "/");
        corpus.insert(id, read_lossy(p));
    }
    Ok(corpus)
}

/// Loads `names` under `root` in the given order; missing files become empty documents.
pub fn load_files(root: &Path, names: &[String]) -> Result<Corpus> {
    if !root.is_dir() {
        bail!("document directory {} not found", root.display());
    }
    Ok(names.iter().map(|name| (name.clone(), read_lossy(&root.join(name)))).collect())
}

/// Dispatches on the extension: `.jsonl` is one record per line, anything else one JSON value.
pub fn load_input(path: &Path) -> Result<Corpus> {
    if path.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        load_jsonl(path)
    } else {
        load_json(path)
    }
}

pub fn load_jsonl(path: &Path) -> Result<Corpus> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(f);
    let mut corpus = Corpus::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid document record", path.display(), lineno + 1))?;
        corpus.insert(doc.id, doc.body);
    }
    Ok(corpus)
}

pub fn load_json(path: &Path) -> Result<Corpus> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(f);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let mut corpus = Corpus::new();
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let doc: InputDoc = serde_json::from_value(v)?;
                corpus.insert(doc.id, doc.body);
            }
        }
        serde_json::Value::Object(_) => {
            let doc: InputDoc = serde_json::from_value(json)?;
            corpus.insert(doc.id, doc.body);
        }
        _ => bail!("{}: expected a document object or an array of them", path.display()),
    }
    Ok(corpus)
}

fn has_extension(p: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    p.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.iter().any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// File contents with invalid UTF-8 replaced; unreadable files read as "".
fn read_lossy(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "unreadable document, indexing as empty");
            String::new()
        }
    }
}
