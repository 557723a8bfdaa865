//! Chordless cycle enumeration benchmarks, unbounded and length-limited.
#![allow(clippy::expect_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nacycle_bench::{SizeTier, generate_structure};
use nacycle_core::{BasisOptions, build_graph, chordless_cycle_basis_with_options};

fn bench_chordless_basis(c: &mut Criterion) {
    let mut group = c.benchmark_group("chordless_basis");
    group.sample_size(20);

    for (name, tier) in [("S", SizeTier::Small), ("M", SizeTier::Medium)] {
        let set = generate_structure(&tier.config(42));
        let graph = build_graph(&set).expect("builds");

        for (label, options) in [
            ("max_6", BasisOptions::default().with_max_cycle_len(6)),
            ("max_12", BasisOptions::default().with_max_cycle_len(12)),
        ] {
            group.bench_function(BenchmarkId::new(label, name), |b| {
                b.iter(|| {
                    let basis =
                        chordless_cycle_basis_with_options(&graph, &options).expect("works");
                    black_box(basis.len())
                });
            });
        }
    }

    let set = generate_structure(&SizeTier::Small.config(42));
    let graph = build_graph(&set).expect("builds");
    let unbounded = BasisOptions::default();
    group.bench_function(BenchmarkId::new("unbounded", "S"), |b| {
        b.iter(|| {
            let basis = chordless_cycle_basis_with_options(&graph, &unbounded).expect("works");
            black_box(basis.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_chordless_basis);
criterion_main!(benches);
