//! Benchmarks for positional load queries

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use beamcheck::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

fn create_segmented_beam(elements: usize, rows_per_case: usize) -> Beam {
    let section: SectionRef = Arc::new(Circle::new(Material::as3678_250(), 0.01).unwrap());

    let mut built = Vec::with_capacity(elements);

    for e in 0..elements {
        let rows: Vec<[f64; 7]> = (0..rows_per_case)
            .map(|i| {
                let p = i as f64 / (rows_per_case - 1) as f64;
                let n = 10e3 * (e as f64 + p);
                [p, 0.0, 0.0, n, 0.0, 0.0, 0.0]
            })
            .collect();

        let case = LoadCase::new(rows).unwrap();
        built.push(
            Element::new(BTreeMap::from([(1, case)]), 2.0, section.clone()).unwrap(),
        );
    }

    Beam::new(built).unwrap()
}

fn bench_list_positions(c: &mut Criterion) {
    let beam = create_segmented_beam(10, 20);

    c.bench_function("list_positions_min_100", |b| {
        b.iter(|| {
            beam.list_positions(Some(1), black_box(&PositionQuery::min_positions(100)))
                .unwrap()
        })
    });
}

fn bench_get_loads(c: &mut Criterion) {
    let beam = create_segmented_beam(10, 20);

    c.bench_function("get_loads_min_100", |b| {
        b.iter(|| {
            beam.get_loads(1, black_box(&PositionQuery::min_positions(100)))
                .unwrap()
        })
    });

    let positions: Vec<f64> = (0..50).map(|i| i as f64 * 0.4).collect();

    c.bench_function("get_loads_explicit_50", |b| {
        b.iter(|| {
            beam.get_loads(1, black_box(&PositionQuery::at_each(positions.clone())))
                .unwrap()
        })
    });
}

fn bench_tension_utilisation(c: &mut Criterion) {
    let beam = create_segmented_beam(10, 20);
    let check = As4100::for_beam(beam).unwrap();

    c.bench_function("as4100_tension_utilisation", |b| {
        b.iter(|| check.tension_utilisation(black_box(Some(1)), None).unwrap())
    });
}

criterion_group!(
    benches,
    bench_list_positions,
    bench_get_loads,
    bench_tension_utilisation
);
criterion_main!(benches);
