//! Benchmarks for the full filter + sort pipeline over the built-in catalog

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bazaar_finder::data::CatalogData;
use bazaar_finder::{FilterState, Mode, QueryEngine, SortOrder};

fn bench_pipeline(c: &mut Criterion) {
    let catalog = CatalogData::default().into_catalog();
    let engine = QueryEngine::new(&catalog);

    c.bench_function("all_unfiltered", |b| {
        let filter = FilterState::new();
        b.iter(|| engine.run(black_box(Mode::All), black_box(&filter)))
    });

    c.bench_function("all_text_locked_sorted", |b| {
        let mut filter = FilterState::new().with_text("milk").with_selected(&["Egg"]);
        filter.sort_order = SortOrder::Descending;
        b.iter(|| engine.run(black_box(Mode::All), black_box(&filter)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
