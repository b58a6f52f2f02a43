//! Benchmarks for per-row geometry queries.
//!
//! Run with: `cargo bench --bench geometry_bench`
//!
//! The area/volume queries sit in the integrator's per-timestep inner loop,
//! once per (k, j) row, so they must stay allocation-free and vectorizable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fvgeom_rs::coordinates::{CoordinateSystem, MinkowskiCartesian};
use fvgeom_rs::mesh::MeshBlock;
use fvgeom_rs::types::{Axis, Real};

fn row_block(n1: usize) -> MeshBlock {
    MeshBlock::builder()
        .ghost(2)
        .x1(0.0, 1.0, n1)
        .x2(0.0, 1.0, 8)
        .x3(0.0, 1.0, 8)
        .build()
        .unwrap()
}

fn bench_row_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_queries");

    for &n1 in &[64usize, 256, 1024] {
        let mut block = row_block(n1);
        let coords = MinkowskiCartesian::new(&mut block);
        let n = coords.block().n_cells(Axis::X1);
        let mut out: Vec<Real> = vec![0.0; n];

        group.bench_with_input(BenchmarkId::new("face_area_x1", n1), &n1, |b, _| {
            b.iter(|| {
                coords.face_area_x1(black_box(4), black_box(4), 0, n - 1, &mut out);
                black_box(out[n - 1])
            })
        });

        group.bench_with_input(BenchmarkId::new("face_area_x2", n1), &n1, |b, _| {
            b.iter(|| {
                coords.face_area_x2(black_box(4), black_box(4), 0, n - 1, &mut out);
                black_box(out[n - 1])
            })
        });

        group.bench_with_input(BenchmarkId::new("cell_volume", n1), &n1, |b, _| {
            b.iter(|| {
                coords.cell_volume(black_box(4), black_box(4), 0, n - 1, &mut out);
                black_box(out[n - 1])
            })
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &n1 in &[64usize, 1024] {
        group.bench_with_input(BenchmarkId::new("minkowski_cartesian", n1), &n1, |b, _| {
            b.iter(|| {
                let mut block = row_block(n1);
                let coords = MinkowskiCartesian::new(&mut block);
                black_box(coords.block().center(Axis::X1, 0))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_row_queries, bench_construction);
criterion_main!(benches);
