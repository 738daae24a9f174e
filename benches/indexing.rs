use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use flatdim::Shape;

fn bench_indexing(c: &mut Criterion) {
    let shape = Shape::new([16, 16, 16, 16]).unwrap();

    c.bench_function("offset_of", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for coords in shape.coords() {
                acc = acc.wrapping_add(shape.offset_of(black_box(coords)));
            }
            acc
        })
    });

    c.bench_function("coords_of", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for offset in 0..shape.len() {
                acc = acc.wrapping_add(shape.coords_of(black_box(offset))[3]);
            }
            acc
        })
    });

    c.bench_function("round_trip", |b| {
        b.iter(|| {
            for offset in 0..shape.len() {
                assert_eq!(shape.offset_of(shape.coords_of(black_box(offset))), offset);
            }
        })
    });
}

criterion_group!(benches, bench_indexing);
criterion_main!(benches);
