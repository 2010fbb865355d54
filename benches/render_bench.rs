//! Benchmarks for content parsing and grid rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio::prelude::*;
use serde_json::json;

const CATEGORIES: &[&str] = &["branding", "print", "web", "illustration", "mood"];

/// Flat content document with `n` portfolio items.
fn generate_content(n: usize) -> String {
    let portfolio: Vec<_> = (0..n)
        .map(|i| {
            json!({
                "id": format!("p{}", i),
                "title": format!("Project {}", i),
                "category": CATEGORIES[i % CATEGORIES.len()],
                "image": format!("images/p{}.jpg", i),
                "gallery": (0..4).map(|g| format!("images/p{}-{}.jpg", i, g)).collect::<Vec<_>>()
            })
        })
        .collect();
    json!({
        "profile": {"name": "Bench"},
        "portfolio": portfolio
    })
    .to_string()
}

fn home_page(content: ContentSchema) -> Page<MemoryDocument, MemoryPreferenceStore> {
    let mut page = Page::new(
        MemoryDocument::home_page(),
        MemoryPreferenceStore::new(),
        SiteConfig::default(),
        Location::parse("/"),
    );
    page.load(content);
    page
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("ContentSchema::from_json");

    for size in [10, 100, 1_000] {
        let raw = generate_content(size);
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| ContentSchema::from_json(black_box(raw)));
        });
    }

    group.finish();
}

fn bench_home_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Page::load/home");

    for size in [10, 100, 1_000] {
        let content = ContentSchema::from_json(&generate_content(size)).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| home_page(black_box(content.clone())));
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Page::dispatch/category");

    for size in [100, 1_000] {
        let content = ContentSchema::from_json(&generate_content(size)).unwrap();
        let mut page = home_page(content);
        let mut i = 0;
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let filter = CATEGORIES[i % CATEGORIES.len()];
                i += 1;
                page.dispatch(PageEvent::Click(ClickTarget::Category(filter.to_string())))
            });
        });
    }

    group.finish();
}

fn bench_lightbox_cycle(c: &mut Criterion) {
    let raw = generate_content(1);
    let mut page = Page::new(
        MemoryDocument::project_page(),
        MemoryPreferenceStore::new(),
        SiteConfig::default(),
        Location::parse("project.html?id=p0"),
    );
    page.load(ContentSchema::from_json(&raw).unwrap());
    page.dispatch(PageEvent::Click(ClickTarget::GalleryCell(0)));

    c.bench_function("lightbox/next", |b| {
        b.iter(|| page.dispatch(black_box(PageEvent::Key(Key::ArrowRight))));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_home_render,
    bench_filter,
    bench_lightbox_cycle,
);
criterion_main!(benches);
