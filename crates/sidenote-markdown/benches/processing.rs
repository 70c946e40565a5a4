//! Benchmarks for note processing performance.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sidenote_markdown::{MarkdownEngine, has_markdown, preview};

/// Generate a note with the given number of sections and items per section.
fn generate_note(sections: usize, items_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * (60 + items_per_section * 80));
    md.push_str("# Reading list\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        md.push_str("> Notes collected while browsing.\n");
        for j in 0..items_per_section {
            md.push_str(&format!(
                "- item {j} with **bold**, *italic*, `code` and [a link](https://example.com/{j})\n"
            ));
        }
        md.push_str("\n```rust\nfn main() {}\n```\n\n---\n");
    }
    md
}

fn bench_process_simple(c: &mut Criterion) {
    let engine = MarkdownEngine::with_default_plugins();

    c.bench_function("process_simple_note", |b| {
        b.iter(|| engine.process(black_box("# Hello\n\nSimple **content**.")));
    });
}

fn bench_process_varying_sizes(c: &mut Criterion) {
    let engine = MarkdownEngine::with_default_plugins();
    let mut group = c.benchmark_group("process_by_size");

    for (sections, items) in [(2, 3), (10, 5), (50, 10)] {
        let markdown = generate_note(sections, items);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{sections}s_{items}i")),
            &markdown,
            |b, md| b.iter(|| engine.process(md)),
        );
    }

    group.finish();
}

fn bench_parse_vs_render(c: &mut Criterion) {
    let engine = MarkdownEngine::with_default_plugins();
    let markdown = generate_note(10, 5);
    let tokens = engine.parse(&markdown);

    let mut group = c.benchmark_group("stages");

    group.bench_function("parse", |b| b.iter(|| engine.parse(black_box(&markdown))));
    group.bench_function("render_tokens", |b| b.iter(|| engine.render(black_box(&tokens))));

    group.finish();
}

fn bench_text_helpers(c: &mut Criterion) {
    let markdown = generate_note(10, 5);
    let mut group = c.benchmark_group("text_helpers");

    group.bench_function("preview", |b| b.iter(|| preview(black_box(&markdown), 30)));
    group.bench_function("has_markdown", |b| b.iter(|| has_markdown(black_box(&markdown))));

    group.finish();
}

criterion_group!(
    benches,
    bench_process_simple,
    bench_process_varying_sizes,
    bench_parse_vs_render,
    bench_text_helpers,
);
criterion_main!(benches);
