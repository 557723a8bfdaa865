//! Canonical anchoring of cycles.
//!
//! A cycle of length `n` has `2n` anchorings: `n` rotations in each
//! traversal direction. Each anchoring is encoded step by step with a
//! caller-supplied encoder, and the lexicographically smallest encoding wins.
//! Two cycles with equal canonical keys are the same motif under the
//! encoder, however they were discovered.
//!
//! Candidates are visited forward orientation first, offsets ascending; a
//! tie keeps the earlier candidate, so the result is deterministic for any
//! deterministic encoder.

use std::fmt::Display;

use crate::cycle::{Cycle, CycleError, Step};
use crate::graph::GraphElement;

/// Traversal direction of a canonical anchoring relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Same direction as the input cycle.
    Forward,
    /// Input cycle inverted.
    Inverted,
}

/// The canonical anchoring of a cycle with its key sequence.
#[derive(Debug, Clone)]
pub struct CanonicalCycle<V, E, K> {
    cycle: Cycle<V, E>,
    keys: Vec<K>,
    offset: usize,
    orientation: Orientation,
}

impl<V, E, K> CanonicalCycle<V, E, K> {
    /// The re-anchored cycle.
    pub fn cycle(&self) -> &Cycle<V, E> {
        &self.cycle
    }

    /// Encoded steps of the re-anchored cycle, in traversal order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Vertex position, in the winning orientation, where the canonical
    /// anchoring starts.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Winning orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Consumes the result, returning the re-anchored cycle.
    pub fn into_cycle(self) -> Cycle<V, E> {
        self.cycle
    }
}

impl<V, E, K: Display> CanonicalCycle<V, E, K> {
    /// Joins the keys with `separator`.
    pub fn to_key_string(&self, separator: &str) -> String {
        canonical_string(&self.keys, separator)
    }
}

/// Finds the canonical anchoring of `cycle` under `encode`.
///
/// `encode` is called once per step of every candidate anchoring (`2n²`
/// calls for a cycle of length `n`) and must be deterministic.
///
/// # Errors
///
/// Propagates [`CycleError`] from re-anchoring; unreachable for a cycle
/// built by this crate.
pub fn canonicalize<V, E, K, F>(
    cycle: &Cycle<V, E>,
    mut encode: F,
) -> Result<CanonicalCycle<V, E, K>, CycleError>
where
    V: GraphElement,
    E: GraphElement,
    K: Ord,
    F: FnMut(Step<V, E>) -> K,
{
    let inverted = cycle.invert();
    let n = cycle.len();
    let mut best: Option<CanonicalCycle<V, E, K>> = None;

    let candidates = [
        (cycle, Orientation::Forward),
        (&inverted, Orientation::Inverted),
    ];
    for (base, orientation) in candidates {
        let vertices = base.vertices();
        for offset in 0..n {
            let start = vertices[offset];
            let end = vertices[(offset + n - 1) % n];
            let candidate = base.rotate(start, end)?;
            let keys: Vec<K> = candidate.steps().map(&mut encode).collect();

            let better = best.as_ref().is_none_or(|b| keys < b.keys);
            if better {
                best = Some(CanonicalCycle {
                    cycle: candidate,
                    keys,
                    offset,
                    orientation,
                });
            }
        }
    }

    best.ok_or(CycleError::TooFewEdges { count: n })
}

/// Returns `true` if `cycle`, as anchored, already has the canonical
/// encoding under `encode`.
///
/// # Errors
///
/// See [`canonicalize`].
pub fn is_canonical<V, E, K, F>(cycle: &Cycle<V, E>, mut encode: F) -> Result<bool, CycleError>
where
    V: GraphElement,
    E: GraphElement,
    K: Ord,
    F: FnMut(Step<V, E>) -> K,
{
    let own: Vec<K> = cycle.steps().map(&mut encode).collect();
    let canonical = canonicalize(cycle, encode)?;
    Ok(own == canonical.keys)
}

/// Joins `Display` keys with `separator`.
pub fn canonical_string<K: Display>(keys: &[K], separator: &str) -> String {
    let mut out = String::new();
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&key.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use petgraph::stable_graph::{EdgeIndex, NodeIndex};

    use super::*;
    use crate::graph::InteractionGraph;
    use crate::test_helpers::{es, pentagon_with_chord, stem_graph, v, vs};

    fn by_vertex_id(
        g: &InteractionGraph,
    ) -> impl FnMut(Step<NodeIndex, EdgeIndex>) -> String + '_ {
        move |step| g.vertex_id(step.from).unwrap_or_default().to_owned()
    }

    fn by_edge_class(
        g: &InteractionGraph,
    ) -> impl FnMut(Step<NodeIndex, EdgeIndex>) -> String + '_ {
        move |step| {
            g.edge_weight(step.edge)
                .and_then(|w| w.class.clone())
                .unwrap_or_default()
        }
    }

    #[test]
    fn smallest_vertex_id_first_then_smaller_neighbour() {
        let g = pentagon_with_chord();
        let cycle = Cycle::from_vertices(&g, &vs(&g, &["v4", "v5", "v1", "v2", "v3"]))
            .expect("pentagon");
        let canonical = canonicalize(&cycle, by_vertex_id(&g)).expect("canonicalizes");

        assert_eq!(canonical.keys(), ["v1", "v2", "v3", "v4", "v5"]);
        assert_eq!(canonical.orientation(), Orientation::Forward);
        assert_eq!(canonical.offset(), 2);
        assert_eq!(canonical.cycle().start(), v(&g, "v1"));
        assert_eq!(canonical.cycle().end(), v(&g, "v5"));
        assert_eq!(canonical.cycle(), &cycle);
        assert_eq!(canonical.to_key_string("-"), "v1-v2-v3-v4-v5");
    }

    #[test]
    fn inverted_orientation_wins_when_smaller() {
        let g = pentagon_with_chord();
        let cycle = Cycle::from_vertices(&g, &vs(&g, &["v1", "v5", "v4", "v3", "v2"]))
            .expect("pentagon");
        let canonical = canonicalize(&cycle, by_vertex_id(&g)).expect("canonicalizes");

        assert_eq!(canonical.keys(), ["v1", "v2", "v3", "v4", "v5"]);
        assert_eq!(canonical.orientation(), Orientation::Inverted);
        assert_eq!(
            canonical.cycle().edges(),
            es(&g, &["a", "b", "c", "d", "e"]).as_slice()
        );
    }

    #[test]
    fn every_anchoring_maps_to_the_same_keys() {
        let g = pentagon_with_chord();
        let cycle = Cycle::from_vertices(&g, &vs(&g, &["v1", "v2", "v3", "v4", "v5"]))
            .expect("pentagon");
        let reference = canonicalize(&cycle, by_vertex_id(&g)).expect("canonicalizes");

        for step in cycle.steps().collect::<Vec<_>>() {
            for (a, b) in [(step.to, step.from), (step.from, step.to)] {
                let anchored = cycle.rotate(a, b).expect("adjacent");
                let canonical = canonicalize(&anchored, by_vertex_id(&g)).expect("canonicalizes");
                assert_eq!(canonical.keys(), reference.keys());
            }
        }
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let g = pentagon_with_chord();
        let cycle = Cycle::from_vertices(&g, &vs(&g, &["v3", "v4", "v5"])).expect("triangle");
        let canonical = canonicalize(&cycle, |_| 0u8).expect("canonicalizes");
        assert_eq!(canonical.offset(), 0);
        assert_eq!(canonical.orientation(), Orientation::Forward);
        assert_eq!(canonical.cycle().edges(), cycle.edges());
        assert!(is_canonical(&cycle, |_| 0u8).expect("canonicalizes"));
    }

    #[test]
    fn interaction_classes_label_stem_rungs() {
        let g = stem_graph();
        let cycle = Cycle::from_vertices(&g, &vs(&g, &["n2", "n3", "n6", "n7"])).expect("rung");
        let canonical = canonicalize(&cycle, by_edge_class(&g)).expect("canonicalizes");
        assert_eq!(canonical.to_key_string(" "), "backbone cWW backbone cWW");
    }

    #[test]
    fn is_canonical_detects_non_minimal_anchoring() {
        let g = pentagon_with_chord();
        let canonical_form = Cycle::from_vertices(&g, &vs(&g, &["v1", "v2", "v3", "v4", "v5"]))
            .expect("pentagon");
        assert!(is_canonical(&canonical_form, by_vertex_id(&g)).expect("ok"));

        let shifted = canonical_form
            .rotate(v(&g, "v3"), v(&g, "v2"))
            .expect("adjacent");
        assert!(!is_canonical(&shifted, by_vertex_id(&g)).expect("ok"));
    }

    #[test]
    fn canonical_string_joins_keys() {
        assert_eq!(canonical_string(&[1, 2, 3], ","), "1,2,3");
        assert_eq!(canonical_string::<u8>(&[], ","), "");
    }
}
