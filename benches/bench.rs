//! Criterion benchmarks for Sarissa analysis.
//!
//! Compares analyzing through a shared analyzer (pipelines cached per thread)
//! against building a fresh analyzer for every input.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sarissa_analysis::analysis::analyzer::{
    Analyzer, KeywordAnalysis, PerFieldAnalysis, StandardAnalysis,
};

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "search",
        "engine",
        "full",
        "text",
        "index",
        "query",
        "document",
        "field",
        "term",
        "phrase",
        "the",
        "and",
        "relevance",
        "score",
        "analysis",
        "tokenization",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

/// Benchmark cached pipelines against per-call construction.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let factory = Arc::new(StandardAnalysis::new().unwrap());
    let analyzer = Analyzer::new(factory.clone());
    let texts = generate_test_documents(1000);

    group.bench_function("analyze_reused_pipeline", |b| {
        b.iter(|| black_box(analyzer.analyze("body", black_box(&texts[0]))))
    });

    group.bench_function("analyze_fresh_analyzer", |b| {
        b.iter(|| {
            let analyzer = Analyzer::new(factory.clone());
            black_box(analyzer.analyze("body", black_box(&texts[0])))
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let result = analyzer.analyze("body", black_box(text));
                let _ = black_box(result);
            }
        })
    });

    group.finish();
}

/// Benchmark per-field lookup across alternating fields.
fn bench_per_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("per_field");

    let mut analysis = PerFieldAnalysis::new(Arc::new(StandardAnalysis::new().unwrap()));
    analysis.add_analysis("id", Arc::new(KeywordAnalysis::new()));
    let analyzer = analysis.into_analyzer();
    let texts = generate_test_documents(10);

    group.bench_function("alternating_fields", |b| {
        b.iter(|| {
            for (i, text) in texts.iter().enumerate() {
                let field = if i % 2 == 0 { "id" } else { "body" };
                let _ = black_box(analyzer.analyze(field, black_box(text)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_per_field);
criterion_main!(benches);
