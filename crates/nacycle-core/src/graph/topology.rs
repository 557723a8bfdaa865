//! Read-only graph contract consumed by the cycle-basis builders.
//!
//! The builders never mutate the graph and never hold references back from
//! the graph into the cycles they produce: cycles copy the vertex and edge
//! handles they need. Any simple, undirected, edge-weighted graph can be
//! analyzed by implementing [`Topology`]; [`crate::InteractionGraph`] is the
//! petgraph-backed implementation shipped with this crate.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use super::InvalidGraphError;

/// Bounds shared by vertex and edge handles.
///
/// Handles are small copyable identities. `Ord` is required so that the
/// unordered vertex/edge sets of a [`crate::Cycle`] can be compared and
/// hashed deterministically.
pub trait GraphElement: Copy + Eq + Ord + Hash + fmt::Debug {}

impl<T: Copy + Eq + Ord + Hash + fmt::Debug> GraphElement for T {}

/// An immutable, simple, undirected, edge-weighted graph snapshot.
///
/// Enumeration order of [`Topology::vertices`], [`Topology::edges`] and
/// [`Topology::incident_edges`] must be stable for a given snapshot: the
/// builders iterate in that order and their output order (and tie-breaking
/// in the spanning tree) follows from it.
pub trait Topology {
    /// Vertex handle.
    type Vertex: GraphElement;
    /// Edge handle.
    type Edge: GraphElement;

    /// All vertices.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// All edges.
    fn edges(&self) -> Vec<Self::Edge>;

    /// The edge joining `a` and `b` (in either orientation), if any.
    fn edge_between(&self, a: Self::Vertex, b: Self::Vertex) -> Option<Self::Edge>;

    /// The two endpoints of `edge`, or `None` for an unknown edge.
    fn endpoints(&self, edge: Self::Edge) -> Option<(Self::Vertex, Self::Vertex)>;

    /// The spanning-tree weight of `edge`, or `None` for an unknown edge.
    fn weight(&self, edge: Self::Edge) -> Option<f64>;

    /// Every edge incident to `vertex`.
    fn incident_edges(&self, vertex: Self::Vertex) -> Vec<Self::Edge>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// The endpoint of `edge` that is not `vertex`.
    ///
    /// Returns `None` if `edge` is unknown or `vertex` is not one of its
    /// endpoints.
    fn opposite(&self, edge: Self::Edge, vertex: Self::Vertex) -> Option<Self::Vertex> {
        let (a, b) = self.endpoints(edge)?;
        if a == vertex {
            Some(b)
        } else if b == vertex {
            Some(a)
        } else {
            None
        }
    }
}

/// Checks that `graph` honours the [`Topology`] contract.
///
/// Verifies that every edge resolves to two distinct endpoints drawn from
/// the vertex set, that every weight is finite and non-negative, and that no
/// two edges join the same pair of vertices. Both basis builders call this
/// before doing any work.
///
/// # Errors
///
/// Returns the first [`InvalidGraphError`] found, in edge enumeration order.
pub fn validate_topology<G: Topology>(graph: &G) -> Result<(), InvalidGraphError> {
    let vertices: HashSet<G::Vertex> = graph.vertices().into_iter().collect();
    let mut pairs: HashMap<(G::Vertex, G::Vertex), G::Edge> = HashMap::new();

    for edge in graph.edges() {
        let Some((a, b)) = graph.endpoints(edge) else {
            return Err(InvalidGraphError::UnknownEdge {
                edge_id: format!("{edge:?}"),
            });
        };
        if a == b {
            return Err(InvalidGraphError::SelfLoop {
                edge_id: format!("{edge:?}"),
                vertex_id: format!("{a:?}"),
            });
        }
        for endpoint in [a, b] {
            if !vertices.contains(&endpoint) {
                return Err(InvalidGraphError::DanglingEdgeRef {
                    edge_id: format!("{edge:?}"),
                    missing_vertex_id: format!("{endpoint:?}"),
                });
            }
        }
        match graph.weight(edge) {
            Some(w) if w.is_finite() && w >= 0.0 => {}
            Some(w) => {
                return Err(InvalidGraphError::InvalidWeight {
                    edge_id: format!("{edge:?}"),
                    weight: w,
                });
            }
            None => {
                return Err(InvalidGraphError::UnknownEdge {
                    edge_id: format!("{edge:?}"),
                });
            }
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if let Some(existing) = pairs.insert(key, edge) {
            return Err(InvalidGraphError::ParallelEdge {
                edge_id: format!("{edge:?}"),
                existing_edge_id: format!("{existing:?}"),
            });
        }
    }

    Ok(())
}
