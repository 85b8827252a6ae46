use criterion::{criterion_group, criterion_main, Criterion};
use retrieval::tokenizer::tokenize;
use retrieval::{Corpus, Model, Session};

const WORDS: &[&str] = &[
    "retrieval", "boolean", "vector", "model", "index", "query", "term", "weight", "cosine", "fuzzy", "set",
    "document", "corpus", "rank", "score", "token",
];

fn synthetic_corpus(docs: usize, words_per_doc: usize) -> Corpus {
    (0..docs)
        .map(|d| {
            let text: Vec<&str> = (0..words_per_doc).map(|w| WORDS[(d * 7 + w * 3) % WORDS.len()]).collect();
            (format!("{d}.doc"), text.join(" "))
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = WORDS.join(", ").repeat(64);
    c.bench_function("tokenize_1k_words", |b| b.iter(|| tokenize(&text)));
}

fn bench_build(c: &mut Criterion) {
    let corpus = synthetic_corpus(200, 150);
    c.bench_function("build_session_200_docs", |b| b.iter(|| Session::new(corpus.clone())));
}

fn bench_queries(c: &mut Criterion) {
    let session = Session::new(synthetic_corpus(200, 150));
    for model in Model::ALL {
        c.bench_function(&format!("query_{model}"), |b| {
            b.iter(|| session.search(model, "boolean and vector or fuzzy"))
        });
    }
}

criterion_group!(benches, bench_tokenize, bench_build, bench_queries);
criterion_main!(benches);
