// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Pipeline Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the per-stage scorers and the full
//! analyze → render path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rippletruth_core::{extract, fact_stack, force, render_markdown, RipplePipeline};

const SHORT: &str = "The economy is great and will improve.";

const ARTICLE: &str = "Officials announced new border measures on Monday. \
    Critics warn the policy will never work because migrant numbers are rising. \
    Sources say the ministry was not consulted. The ministry said it was consulted in March. \
    Therefore the debate must continue, and everyone agrees the outcome is absolutely critical! \
    Analysts urge calm and call for a careful review of the evidence.";

// ── Stages ──────────────────────────────────────────────────────────

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_article", |b| b.iter(|| extract(black_box(ARTICLE))));
}

fn bench_force(c: &mut Criterion) {
    c.bench_function("force_article", |b| {
        b.iter(|| force::measure(black_box(ARTICLE)))
    });
}

fn bench_fact_stack(c: &mut Criterion) {
    c.bench_function("fact_stack_article", |b| {
        b.iter(|| fact_stack::analyze(black_box(ARTICLE)))
    });
}

// ── Full pipeline ───────────────────────────────────────────────────

fn bench_pipeline_short(c: &mut Criterion) {
    let pipeline = RipplePipeline::default();
    c.bench_function("pipeline_short", |b| {
        b.iter(|| pipeline.analyze(black_box(SHORT)))
    });
}

fn bench_pipeline_article_markdown(c: &mut Criterion) {
    let pipeline = RipplePipeline::default();
    c.bench_function("pipeline_article_markdown", |b| {
        b.iter(|| render_markdown(&pipeline.analyze(black_box(ARTICLE))))
    });
}

fn bench_pipeline_long(c: &mut Criterion) {
    let pipeline = RipplePipeline::default();
    let long = ARTICLE.repeat(50);
    c.bench_function("pipeline_long_50x", |b| {
        b.iter(|| pipeline.analyze(black_box(&long)))
    });
}

criterion_group!(
    benches,
    bench_extract,
    bench_force,
    bench_fact_stack,
    bench_pipeline_short,
    bench_pipeline_article_markdown,
    bench_pipeline_long,
);
criterion_main!(benches);
