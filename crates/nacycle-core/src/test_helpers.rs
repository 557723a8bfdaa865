//! Shared fixtures for unit tests.
//!
//! Compiled only in test builds. Integration tests in
//! `crates/nacycle-core/tests/` define their own helpers because they link
//! against the non-test library build where this module is not available.
#![allow(clippy::expect_used)]

use std::collections::BTreeSet;

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::cycle::Cycle;
use crate::graph::{InteractionGraph, Topology, build_graph};
use crate::structures::{Interaction, InteractionSet, Vertex};

/// Builds a graph whose interactions all weigh `1.0`.
///
/// Interactions are `(id, source, target)`.
pub fn graph_of(vertices: &[&str], interactions: &[(&str, &str, &str)]) -> InteractionGraph {
    let weighted: Vec<(&str, &str, &str, f64)> = interactions
        .iter()
        .map(|&(id, s, t)| (id, s, t, 1.0))
        .collect();
    weighted_graph(vertices, &weighted)
}

/// Builds a graph from `(id, source, target, weight)` interactions.
pub fn weighted_graph(
    vertices: &[&str],
    interactions: &[(&str, &str, &str, f64)],
) -> InteractionGraph {
    let set = InteractionSet {
        vertices: vertices.iter().map(|id| Vertex::new(*id)).collect(),
        interactions: interactions
            .iter()
            .map(|&(id, s, t, w)| Interaction::new(id, s, t).with_weight(w))
            .collect(),
    };
    build_graph(&set).expect("fixture graph is valid")
}

/// Five-ring `v1..v5` (edges `a..e`, `e` closing `v5-v1`) plus chord
/// `f = v3-v5`.
pub fn pentagon_with_chord() -> InteractionGraph {
    graph_of(
        &["v1", "v2", "v3", "v4", "v5"],
        &[
            ("a", "v1", "v2"),
            ("b", "v2", "v3"),
            ("c", "v3", "v4"),
            ("d", "v4", "v5"),
            ("e", "v5", "v1"),
            ("f", "v3", "v5"),
        ],
    )
}

/// Six vertices, nine weighted edges. The minimum spanning tree is
/// `{a, b, c, d, h}`.
pub fn sample_graph_2() -> InteractionGraph {
    weighted_graph(
        &["v1", "v2", "v3", "v4", "v5", "v6"],
        &[
            ("a", "v1", "v2", 1.0),
            ("b", "v2", "v3", 1.0),
            ("c", "v3", "v4", 1.0),
            ("d", "v4", "v5", 1.0),
            ("e", "v5", "v6", 2.0),
            ("f", "v6", "v1", 2.0),
            ("g", "v1", "v5", 2.0),
            ("h", "v3", "v6", 1.0),
            ("i", "v2", "v6", 2.0),
        ],
    )
}

/// A hairpin: strand `n1..n4`, loop `n4-n5`, strand `n5..n8`, closed by the
/// pair `n1-n8` and rungs `n2-n7`, `n3-n6`.
pub fn stem_graph() -> InteractionGraph {
    let set = InteractionSet {
        vertices: (1..=8).map(|i| Vertex::new(format!("n{i}"))).collect(),
        interactions: (1..8)
            .map(|i| {
                Interaction::new(format!("b{i}{}", i + 1), format!("n{i}"), format!("n{}", i + 1))
                    .with_class("backbone")
            })
            .chain([
                Interaction::new("p18", "n1", "n8").with_class("cWW"),
                Interaction::new("p27", "n2", "n7").with_class("cWW"),
                Interaction::new("p36", "n3", "n6").with_class("cWW"),
            ])
            .collect(),
    };
    build_graph(&set).expect("stem graph is valid")
}

/// Resolves a vertex id.
pub fn v(g: &InteractionGraph, id: &str) -> NodeIndex {
    g.node_index(id).expect("vertex exists")
}

/// Resolves an interaction id.
pub fn e(g: &InteractionGraph, id: &str) -> EdgeIndex {
    g.edge_index(id).expect("edge exists")
}

/// Resolves several vertex ids, keeping order.
pub fn vs(g: &InteractionGraph, ids: &[&str]) -> Vec<NodeIndex> {
    ids.iter().map(|id| v(g, id)).collect()
}

/// Resolves several interaction ids, keeping order.
pub fn es(g: &InteractionGraph, ids: &[&str]) -> Vec<EdgeIndex> {
    ids.iter().map(|id| e(g, id)).collect()
}

/// Owned id set for comparisons.
pub fn ids(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| (*s).to_owned()).collect()
}

/// The interaction ids of a cycle.
pub fn edge_ids(g: &InteractionGraph, cycle: &Cycle<NodeIndex, EdgeIndex>) -> BTreeSet<String> {
    cycle
        .edges()
        .iter()
        .map(|&idx| g.edge_id(idx).expect("edge exists").to_owned())
        .collect()
}

/// The vertex ids of a cycle.
pub fn vertex_ids(g: &InteractionGraph, cycle: &Cycle<NodeIndex, EdgeIndex>) -> BTreeSet<String> {
    cycle
        .vertices()
        .iter()
        .map(|&idx| g.vertex_id(idx).expect("vertex exists").to_owned())
        .collect()
}

/// Minimal adjacency-list topology over `u32` vertices and `usize` edge
/// positions, for exercising the builders without petgraph.
pub struct ListGraph {
    vertices: Vec<u32>,
    edges: Vec<(u32, u32, f64)>,
}

impl ListGraph {
    /// Creates a graph; edge handles are positions in `edges`.
    pub fn new(vertices: &[u32], edges: &[(u32, u32, f64)]) -> Self {
        Self {
            vertices: vertices.to_vec(),
            edges: edges.to_vec(),
        }
    }
}

impl Topology for ListGraph {
    type Vertex = u32;
    type Edge = usize;

    fn vertices(&self) -> Vec<u32> {
        self.vertices.clone()
    }

    fn edges(&self) -> Vec<usize> {
        (0..self.edges.len()).collect()
    }

    fn edge_between(&self, a: u32, b: u32) -> Option<usize> {
        self.edges
            .iter()
            .position(|&(x, y, _)| (x == a && y == b) || (x == b && y == a))
    }

    fn endpoints(&self, edge: usize) -> Option<(u32, u32)> {
        self.edges.get(edge).map(|&(a, b, _)| (a, b))
    }

    fn weight(&self, edge: usize) -> Option<f64> {
        self.edges.get(edge).map(|&(_, _, w)| w)
    }

    fn incident_edges(&self, vertex: u32) -> Vec<usize> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, (a, b, _))| *a == vertex || *b == vertex)
            .map(|(i, _)| i)
            .collect()
    }
}
