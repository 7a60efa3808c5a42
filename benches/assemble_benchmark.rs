//! Benchmarks for page assembly and evidence search.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic layout-mode text, so no extractor is needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagecite::render::assemble;
use pagecite::{build_terms, split_pages, EvidenceIndex, MarkdownRenderer, RenderOptions};

/// Creates a synthetic extraction stream with the given number of pages.
fn create_test_stream(page_count: usize) -> String {
    let mut stream = String::new();
    for i in 0..page_count {
        stream.push_str(&format!("제{}조(휴학) 학생은 질병 등의 사유로 휴학할 수 있다.\n\n", i + 1));
        stream.push_str("구분        학기      기간\n");
        stream.push_str("일반휴학    1         6개월\n");
        stream.push_str("군휴학      2         2년\n");
        stream.push_str("질병휴학    2 $ 4     1년 * 비고\n\n");
        stream.push_str("휴학 기간은 통산 3년을 초과할 수 없다.\n");
        stream.push('\u{000C}');
    }
    stream
}

/// Benchmark page splitting and assembly at various sizes.
fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");

    for page_count in [1, 10, 100].iter() {
        let pages = split_pages(&create_test_stream(*page_count));

        group.bench_function(format!("{}_pages_parallel", page_count), |b| {
            b.iter(|| assemble("bench", "bench.pdf", black_box(&pages), &RenderOptions::new()));
        });

        group.bench_function(format!("{}_pages_sequential", page_count), |b| {
            let options = RenderOptions::new().sequential();
            b.iter(|| assemble("bench", "bench.pdf", black_box(&pages), &options));
        });
    }

    group.finish();
}

/// Benchmark Markdown rendering of an assembled document.
fn bench_render(c: &mut Criterion) {
    let pages = split_pages(&create_test_stream(50));
    let doc = assemble("bench", "bench.pdf", &pages, &RenderOptions::new());
    let renderer = MarkdownRenderer::new();

    c.bench_function("render_50_pages", |b| {
        b.iter(|| renderer.render(black_box(&doc)));
    });
}

/// Benchmark term search over rendered Markdown.
fn bench_search(c: &mut Criterion) {
    let pages = split_pages(&create_test_stream(100));
    let doc = assemble("학칙", "학칙.pdf", &pages, &RenderOptions::new());
    let markdown = MarkdownRenderer::new().render(&doc);
    let index = EvidenceIndex::from_documents([("knowledge/normalized-md/학칙.md", markdown)]);
    let terms = build_terms("휴학 기간 알려줘");

    c.bench_function("search_100_pages", |b| {
        b.iter(|| index.search(black_box(&terms), 12));
    });
}

criterion_group!(benches, bench_assemble, bench_render, bench_search);
criterion_main!(benches);
