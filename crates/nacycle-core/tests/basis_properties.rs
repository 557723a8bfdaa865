//! Property-based tests for the basis builders and the cycle algebra.
//!
//! Graphs are small random simple graphs (3-9 vertices, up to 16 candidate
//! edges with small integer weights); self-loops and repeated pairs drawn
//! by the strategy are dropped before the graph is built.
#![allow(clippy::expect_used)]

use std::collections::BTreeSet;

use nacycle_core::{
    BasisOptions, Cycle, Interaction, InteractionGraph, InteractionSet, SpanningTreeStrategy,
    Step, Topology, Vertex, build_graph, canonicalize, chordless_cycle_basis,
    fundamental_cycle_basis, fundamental_cycle_basis_with_options,
};
use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use proptest::prelude::*;

/// Builds a simple graph from raw `(source, target, weight)` draws.
fn make_graph(n: usize, raw: &[(usize, usize, u8)]) -> InteractionGraph {
    let mut seen = BTreeSet::new();
    let interactions = raw
        .iter()
        .filter(|(a, b, _)| a != b)
        .filter(|(a, b, _)| seen.insert((*a.min(b), *a.max(b))))
        .enumerate()
        .map(|(i, &(a, b, w))| {
            Interaction::new(format!("e{i}"), format!("v{a}"), format!("v{b}"))
                .with_weight(f64::from(w))
        })
        .collect();
    let set = InteractionSet {
        vertices: (0..n).map(|i| Vertex::new(format!("v{i}"))).collect(),
        interactions,
    };
    build_graph(&set).expect("generated graph is simple")
}

fn arb_graph() -> impl Strategy<Value = InteractionGraph> {
    (3usize..=9).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, 0u8..4), 0..=16)
            .prop_map(move |raw| make_graph(n, &raw))
    })
}

/// Connected components; strongly connected components of an undirected
/// graph are its connected components.
fn components(g: &InteractionGraph) -> usize {
    petgraph::algo::kosaraju_scc(g.graph()).len()
}

fn has_chord(g: &InteractionGraph, cycle: &Cycle<NodeIndex, EdgeIndex>) -> bool {
    let vs = cycle.vertices();
    let m = vs.len();
    (0..m).any(|i| {
        ((i + 2)..m)
            .filter(|&j| !(i == 0 && j == m - 1))
            .any(|j| g.edge_between(vs[i], vs[j]).is_some())
    })
}

fn pairwise_distinct(cycles: &[Cycle<NodeIndex, EdgeIndex>]) -> bool {
    cycles
        .iter()
        .enumerate()
        .all(|(i, a)| cycles[i + 1..].iter().all(|b| a != b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fundamental_basis_size_is_cyclomatic_number(g in arb_graph()) {
        let expected = g.edge_count() + components(&g) - g.node_count();
        for strategy in [SpanningTreeStrategy::MinimumWeight, SpanningTreeStrategy::BreadthFirst] {
            let options = BasisOptions::default().with_spanning_tree(strategy);
            let basis = fundamental_cycle_basis_with_options(&g, &options).expect("basis");
            prop_assert_eq!(basis.len(), expected, "{:?}", strategy);
            prop_assert_eq!(basis.cyclomatic_number(), expected);
        }
    }

    #[test]
    fn fundamental_cycles_are_distinct_closed_walks(g in arb_graph()) {
        let basis = fundamental_cycle_basis(&g).expect("basis");
        prop_assert!(pairwise_distinct(basis.cycles()));
        for cycle in &basis {
            let rebuilt = Cycle::new(&g, cycle.start(), cycle.end(), cycle.edges().to_vec())
                .expect("basis cycle is a valid walk");
            prop_assert_eq!(&rebuilt, cycle);
            prop_assert!(cycle.len() >= 3);
        }
    }

    #[test]
    fn chordless_cycles_have_no_chords(g in arb_graph()) {
        let basis = chordless_cycle_basis(&g).expect("basis");
        prop_assert!(pairwise_distinct(basis.cycles()));
        for cycle in &basis {
            prop_assert!(!has_chord(&g, cycle), "{:?}", cycle.vertices());
        }
    }

    #[test]
    fn every_triangle_is_chordless(g in arb_graph()) {
        let basis = chordless_cycle_basis(&g).expect("basis");
        let vertices = g.vertices();
        for (i, &a) in vertices.iter().enumerate() {
            for (j, &b) in vertices.iter().enumerate().skip(i + 1) {
                for &c in vertices.iter().skip(j + 1) {
                    if let Ok(triangle) = Cycle::from_vertices(&g, &[a, b, c]) {
                        prop_assert!(basis.contains(&triangle));
                    }
                }
            }
        }
    }

    #[test]
    fn rotation_round_trip_and_inversion(g in arb_graph(), pick in any::<prop::sample::Index>()) {
        let basis = fundamental_cycle_basis(&g).expect("basis");
        for cycle in &basis {
            let steps: Vec<_> = cycle.steps().collect();
            let step = steps[pick.index(steps.len())];
            for (a, b) in [(step.to, step.from), (step.from, step.to)] {
                let rotated = cycle.rotate(a, b).expect("adjacent");
                prop_assert_eq!(&rotated, cycle);
                prop_assert_eq!(rotated.start(), a);
                prop_assert_eq!(rotated.end(), b);
                let back = rotated.rotate(cycle.start(), cycle.end()).expect("adjacent");
                prop_assert_eq!(back.edges(), cycle.edges());
                prop_assert_eq!(back.vertices(), cycle.vertices());
            }
            let twice = cycle.invert().invert();
            prop_assert_eq!(twice.edges(), cycle.edges());
        }
    }

    #[test]
    fn canonical_keys_ignore_anchoring(g in arb_graph(), pick in any::<prop::sample::Index>()) {
        let basis = chordless_cycle_basis(&g).expect("basis");
        let key = |s: Step<NodeIndex, EdgeIndex>| (s.from.index(), s.edge.index());
        for cycle in &basis {
            let reference = canonicalize(cycle, key).expect("canonical");
            let steps: Vec<_> = cycle.steps().collect();
            let step = steps[pick.index(steps.len())];
            let moved = cycle.rotate(step.from, step.to).expect("adjacent");
            let canonical = canonicalize(&moved, key).expect("canonical");
            prop_assert_eq!(canonical.keys(), reference.keys());
            prop_assert_eq!(canonical.cycle(), reference.cycle());
        }
    }
}
