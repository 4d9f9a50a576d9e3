use country_search_core::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Roughly the size of the restcountries dataset (250 entries), built from
/// the bundled sample so the benchmark never touches the network.
fn dataset() -> RecordSet {
    let sample = RecordSet::load_from_path(RecordSet::sample_dataset_path())
        .expect("sample dataset");
    (0..13)
        .flat_map(|i| {
            sample.iter().map(move |r| {
                CountryRecord::new(
                    format!("{} {i}", r.name()),
                    r.capital(),
                    r.population(),
                    r.area(),
                    r.flag(),
                )
            })
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let set = dataset();

    c.bench_function("filter/short_query", |b| {
        b.iter(|| set.filter(black_box("la")))
    });

    c.bench_function("suggest/short_query", |b| {
        b.iter(|| set.suggest(black_box("la")))
    });

    c.bench_function("search/keystrokes", |b| {
        b.iter(|| {
            for q in ["s", "sw", "swi", "swit", "switz"] {
                black_box(set.search(black_box(q)).suggestion_names());
            }
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
