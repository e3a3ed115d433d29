// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use fbref_dash::{config::options::DocumentKind, core::html, specs};

const STANDINGS: &str = include_str!("../tests/fixtures/standings.html");
const FIXTURES: &str = include_str!("../tests/fixtures/fixtures.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("first_table_standings", |b| {
        b.iter(|| {
            let t = html::first_table(black_box(STANDINGS));
            black_box(t.map(|t| t.nrows()))
        })
    });

    c.bench_function("extract_normalize_fixtures", |b| {
        b.iter(|| {
            let raw = html::first_table(black_box(FIXTURES)).unwrap_or_default();
            let n = specs::normalize(&raw, DocumentKind::Fixtures).map(|t| t.len());
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
