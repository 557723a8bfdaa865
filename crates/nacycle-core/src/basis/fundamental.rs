//! Fundamental cycle basis.
//!
//! Every non-tree edge `e = (u, v)` contributes one cycle. If no live cycle
//! passes through both `u` and `v`, the cycle is the tree path `u → v`
//! closed by `e`. Otherwise the first live cycle through both (in the order
//! `u` met them) is split along `e` into two smaller cycles that replace it.
//! Each non-tree edge thus adds exactly one cycle to the live set, giving
//! `|E| - |V| + c` cycles in total.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use super::spanning::spanning_forest;
use super::{BasisError, CycleBasis};
use crate::cycle::{Cycle, CycleError};
use crate::graph::{GraphElement, Topology, validate_topology};
use crate::options::BasisOptions;

/// Computes the fundamental cycle basis of `graph` with default options.
///
/// # Errors
///
/// [`BasisError::InvalidGraph`] if the graph violates the [`Topology`]
/// contract; other variants signal internal invariant violations.
pub fn fundamental_cycle_basis<G: Topology>(graph: &G) -> Result<CycleBasis<'_, G>, BasisError> {
    fundamental_cycle_basis_with_options(graph, &BasisOptions::default())
}

/// Computes the fundamental cycle basis of `graph`.
///
/// `options.spanning_tree` selects the spanning forest; `max_cycle_len` is
/// ignored.
///
/// # Errors
///
/// See [`fundamental_cycle_basis`]; additionally
/// [`BasisError::InvalidOptions`] for out-of-range options.
pub fn fundamental_cycle_basis_with_options<'g, G: Topology>(
    graph: &'g G,
    options: &BasisOptions,
) -> Result<CycleBasis<'g, G>, BasisError> {
    options.validate()?;
    validate_topology(graph)?;

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "computing fundamental cycle basis"
    );

    let forest = spanning_forest(graph, options.spanning_tree);
    let mut index = IncidenceIndex::new(graph.vertices());

    for &edge in forest.non_tree_edges() {
        let (u, v) = graph
            .endpoints(edge)
            .ok_or_else(|| CycleError::UnknownEdge {
                edge: format!("{edge:?}"),
            })?;

        match index.first_shared(u, v) {
            Some(id) => {
                let Some(parent) = index.retire(id) else {
                    continue;
                };
                let (first, second) = parent.split(graph, edge)?;
                trace!(
                    edge = ?edge,
                    parent_len = parent.len(),
                    first_len = first.len(),
                    second_len = second.len(),
                    "split cycle"
                );
                index.register(first);
                index.register(second);
            }
            None => {
                let mut edges = forest
                    .path(u, v)
                    .ok_or_else(|| BasisError::TreePathMissing {
                        from: format!("{u:?}"),
                        to: format!("{v:?}"),
                    })?;
                edges.push(edge);
                let cycle = Cycle::new(graph, u, v, edges)?;
                trace!(edge = ?edge, len = cycle.len(), "closed tree path");
                index.register(cycle);
            }
        }
    }

    let cycles = index.into_live();
    debug!(cycles = cycles.len(), "fundamental cycle basis complete");
    Ok(CycleBasis::new(graph, cycles))
}

/// Live cycles plus, for each vertex, the ids of the live cycles through it.
///
/// Ids are slot positions in creation order; a retired cycle leaves an empty
/// slot behind so ids stay stable.
struct IncidenceIndex<V, E> {
    slots: Vec<Option<Cycle<V, E>>>,
    by_vertex: HashMap<V, Vec<usize>>,
}

impl<V: GraphElement, E: GraphElement> IncidenceIndex<V, E> {
    fn new(vertices: Vec<V>) -> Self {
        Self {
            slots: Vec::new(),
            by_vertex: vertices.into_iter().map(|v| (v, Vec::new())).collect(),
        }
    }

    /// The first cycle in `u`'s list that also passes through `v`.
    fn first_shared(&self, u: V, v: V) -> Option<usize> {
        let through_v = self.by_vertex.get(&v)?;
        self.by_vertex
            .get(&u)?
            .iter()
            .copied()
            .find(|id| through_v.contains(id))
    }

    fn register(&mut self, cycle: Cycle<V, E>) -> usize {
        let id = self.slots.len();
        for &vertex in cycle.vertices() {
            let list = self.by_vertex.entry(vertex).or_default();
            if !list.contains(&id) {
                list.push(id);
            }
        }
        self.slots.push(Some(cycle));
        id
    }

    fn retire(&mut self, id: usize) -> Option<Cycle<V, E>> {
        let cycle = self.slots.get_mut(id)?.take()?;
        for vertex in cycle.vertices() {
            if let Some(list) = self.by_vertex.get_mut(vertex) {
                list.retain(|&other| other != id);
            }
        }
        Some(cycle)
    }

    /// Live cycles in creation order, duplicates dropped.
    fn into_live(self) -> Vec<Cycle<V, E>> {
        let mut seen: HashSet<Cycle<V, E>> = HashSet::new();
        let mut live = Vec::new();
        for cycle in self.slots.into_iter().flatten() {
            if seen.insert(cycle.clone()) {
                live.push(cycle);
            }
        }
        live
    }
}
