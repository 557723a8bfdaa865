//! Canonicalization benchmarks over the chordless cycles of generated
//! structures, keyed by interaction class.
#![allow(clippy::expect_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nacycle_bench::{SizeTier, generate_structure};
use nacycle_core::{BasisOptions, build_graph, canonicalize, chordless_cycle_basis_with_options};

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");

    for (name, tier) in [("S", SizeTier::Small), ("M", SizeTier::Medium)] {
        let set = generate_structure(&tier.config(42));
        let graph = build_graph(&set).expect("builds");
        let options = BasisOptions::default().with_max_cycle_len(8);
        let basis = chordless_cycle_basis_with_options(&graph, &options).expect("works");

        group.bench_function(BenchmarkId::new("class_keys", name), |b| {
            b.iter(|| {
                for cycle in &basis {
                    let canonical = canonicalize(cycle, |step| {
                        graph
                            .edge_weight(step.edge)
                            .and_then(|w| w.class.as_deref())
                            .unwrap_or("")
                    })
                    .expect("works");
                    black_box(canonical.offset());
                }
            });
        });

        group.bench_function(BenchmarkId::new("index_keys", name), |b| {
            b.iter(|| {
                for cycle in &basis {
                    let canonical =
                        canonicalize(cycle, |step| (step.from.index(), step.edge.index()))
                            .expect("works");
                    black_box(canonical.offset());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_canonicalize);
criterion_main!(benches);
