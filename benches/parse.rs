//! Benchmarks for the STL parser.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tricount::parse_str;

/// Build a well-formed solid with `n` facets.
fn synthetic_solid(n: usize) -> String {
    let mut out = String::from("solid bench\n");
    for i in 0..n {
        let x = i as f32;
        out.push_str("facet normal 0 0 1\n");
        out.push_str("  outer loop\n");
        out.push_str(&format!("    vertex {} 0 0\n", x));
        out.push_str(&format!("    vertex {} 1 0\n", x));
        out.push_str(&format!("    vertex {} 0 1\n", x));
        out.push_str("  endloop\n");
        out.push_str("endfacet\n");
    }
    out.push_str("endsolid bench\n");
    out
}

/// Same solid with the loop keyword corrupted in every facet, so each
/// one is skipped and recovery has to scan for the next facet.
fn corrupted_solid(n: usize) -> String {
    synthetic_solid(n).replace("outer loop", "outer lop")
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let small = synthetic_solid(10);
    let large = synthetic_solid(10_000);

    group.bench_function("parse_10_facets", |b| {
        b.iter(|| parse_str(black_box(&small)))
    });

    group.bench_function("parse_10k_facets", |b| {
        b.iter(|| parse_str(black_box(&large)))
    });

    group.finish();
}

fn bench_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("recovery");

    let corrupted = corrupted_solid(1_000);

    group.bench_function("parse_with_skips", |b| {
        b.iter(|| parse_str(black_box(&corrupted)))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_recovery);
criterion_main!(benches);
