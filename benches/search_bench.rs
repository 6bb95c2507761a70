//! Benchmarks for the linear-scan search and the filter pipeline.
//!
//! Simulates realistic catalog sizes:
//! - small:  ~500 entries   (a starter phrase collection)
//! - medium: ~2,500 entries (the full production catalog)
//! - large:  ~10,000 entries (headroom check for the linear scan)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huli::{apply_filters, highlight, search, Entry, FilterState, Marker, TagCategoryMap};

struct CatalogSize {
    name: &'static str,
    entries: usize,
}

const CATALOG_SIZES: &[CatalogSize] = &[
    CatalogSize {
        name: "small",
        entries: 500,
    },
    CatalogSize {
        name: "medium",
        entries: 2_500,
    },
    CatalogSize {
        name: "large",
        entries: 10_000,
    },
];

/// Vocabulary for synthetic phrase text, diacritics included.
const WORDS: &[&str] = &[
    "aloha", "ʻāina", "mahalo", "ohana", "mālama", "pono", "hula", "kahiko", "mele", "moana",
    "mauka", "makai", "keiki", "kupuna", "lāhui", "wai", "kai", "lani", "honua", "pua", "lei",
    "hale", "kanaka", "mana", "kapu", "heiau", "ahupuaʻa", "kalo", "poi", "laulima",
];

const TAGS: &[&str] = &[
    "land", "love", "nature", "dance", "tradition", "family", "food", "ocean", "values", "music",
];

/// Deterministic synthetic catalog; no RNG so runs are comparable.
fn build_catalog(size: usize) -> Vec<Entry> {
    (0..size)
        .map(|i| {
            let a = WORDS[i % WORDS.len()];
            let b = WORDS[(i * 7 + 3) % WORDS.len()];
            let c = WORDS[(i * 13 + 5) % WORDS.len()];
            Entry {
                id: i as u32 + 1,
                primary_text: format!("{a} {b}"),
                translation: Some(format!("{b} and {c}")),
                gloss: Some(format!("about {a} {c}")),
                tags: vec![
                    TAGS[i % TAGS.len()].to_string(),
                    TAGS[(i * 3 + 1) % TAGS.len()].to_string(),
                ],
                index_letter: huli::index_letter(a),
            }
        })
        .collect()
}

fn build_tag_map() -> TagCategoryMap {
    TAGS.iter()
        .map(|t| (t.to_string(), format!("category {}", t.len() % 3)))
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in CATALOG_SIZES {
        let catalog = build_catalog(size.entries);
        group.bench_with_input(BenchmarkId::new("text", size.name), &catalog, |b, catalog| {
            b.iter(|| search(black_box(catalog), black_box("aloha aina")))
        });
        group.bench_with_input(
            BenchmarkId::new("numeric", size.name),
            &catalog,
            |b, catalog| b.iter(|| search(black_box(catalog), black_box("123"))),
        );
    }
    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    let tag_map = build_tag_map();
    for size in CATALOG_SIZES {
        let catalog = build_catalog(size.entries);
        let state = FilterState {
            categories: vec!["category 1".to_string()],
            query: "mahalo".to_string(),
            page: 1,
            ..FilterState::default()
        };
        group.bench_with_input(
            BenchmarkId::new("pipeline", size.name),
            &catalog,
            |b, catalog| b.iter(|| apply_filters(black_box(catalog), &state, &tag_map)),
        );
    }
    group.finish();
}

fn bench_highlight(c: &mut Criterion) {
    let marker = Marker::html();
    let text = "Aloha ʻāina a me ka mālama pono i ka ʻohana a me ka lāhui";
    c.bench_function("highlight/diacritic_text", |b| {
        b.iter(|| highlight(black_box(text), black_box("aloha aina"), &marker))
    });
}

criterion_group!(benches, bench_search, bench_filters, bench_highlight);
criterion_main!(benches);
