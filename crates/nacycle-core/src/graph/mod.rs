//! Graph construction from an [`InteractionSet`] using `petgraph`.
//!
//! [`build_graph`] runs two passes over the set:
//! 1. **Vertex pass**: inserts all vertices into a `StableUnGraph` and
//!    records the `id → NodeIndex` mapping. Fails on duplicate IDs.
//! 2. **Interaction pass**: resolves `source`/`target` IDs and inserts one
//!    undirected edge per interaction. Fails on dangling references,
//!    self-loops, parallel interactions and invalid weights.
//!
//! The resulting [`InteractionGraph`] implements the read-only [`Topology`]
//! contract consumed by the basis builders.

pub mod topology;

pub use topology::{GraphElement, Topology, validate_topology};

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::EdgeRef;

use crate::structures::InteractionSet;

/// Weight stored inline on each petgraph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeWeight {
    /// Set-local identifier copied from the vertex's `id` field.
    pub local_id: String,
    /// Optional display label.
    pub label: Option<String>,
    /// Index into `InteractionSet::vertices`.
    pub data_index: usize,
}

/// Weight stored inline on each petgraph edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeight {
    /// Set-local identifier copied from the interaction's `id` field.
    pub local_id: String,
    /// Opaque interaction class.
    pub class: Option<String>,
    /// Spanning-tree weight.
    pub weight: f64,
    /// Index into `InteractionSet::interactions`.
    pub data_index: usize,
}

/// Errors raised for a malformed input graph.
///
/// Produced by [`build_graph`] while constructing an [`InteractionGraph`],
/// and by [`validate_topology`] for arbitrary [`Topology`] implementations.
/// In the latter case vertex and edge ids are the `Debug` rendering of the
/// handles.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidGraphError {
    /// Two vertices share the same id.
    DuplicateVertexId(String),
    /// Two interactions share the same id.
    DuplicateEdgeId(String),
    /// An interaction references a vertex that is not in the vertex set.
    DanglingEdgeRef {
        /// The interaction containing the reference.
        edge_id: String,
        /// The vertex id that could not be resolved.
        missing_vertex_id: String,
    },
    /// An interaction joins a vertex to itself.
    SelfLoop {
        /// The offending interaction.
        edge_id: String,
        /// The vertex at both ends.
        vertex_id: String,
    },
    /// A second interaction joins an already-connected pair of vertices.
    ParallelEdge {
        /// The offending interaction.
        edge_id: String,
        /// The interaction that already joins the pair.
        existing_edge_id: String,
    },
    /// A weight is negative, NaN or infinite.
    InvalidWeight {
        /// The offending interaction.
        edge_id: String,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge handle enumerated by the graph has no endpoints or weight.
    UnknownEdge {
        /// The unresolvable edge.
        edge_id: String,
    },
}

impl std::fmt::Display for InvalidGraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidGraphError::DuplicateVertexId(id) => write!(f, "duplicate vertex ID: {id:?}"),
            InvalidGraphError::DuplicateEdgeId(id) => {
                write!(f, "duplicate interaction ID: {id:?}")
            }
            InvalidGraphError::DanglingEdgeRef {
                edge_id,
                missing_vertex_id,
            } => write!(
                f,
                "interaction {edge_id:?} references unknown vertex {missing_vertex_id:?}"
            ),
            InvalidGraphError::SelfLoop { edge_id, vertex_id } => write!(
                f,
                "interaction {edge_id:?} joins vertex {vertex_id:?} to itself"
            ),
            InvalidGraphError::ParallelEdge {
                edge_id,
                existing_edge_id,
            } => write!(
                f,
                "interaction {edge_id:?} duplicates the pair already joined by {existing_edge_id:?}"
            ),
            InvalidGraphError::InvalidWeight { edge_id, weight } => write!(
                f,
                "interaction {edge_id:?} has invalid weight {weight} (must be finite and >= 0)"
            ),
            InvalidGraphError::UnknownEdge { edge_id } => {
                write!(f, "edge {edge_id:?} cannot be resolved by the graph")
            }
        }
    }
}

impl std::error::Error for InvalidGraphError {}

/// A simple undirected weighted graph built from an [`InteractionSet`].
///
/// Wraps a `petgraph` [`StableUnGraph`] with [`NodeWeight`] and
/// [`EdgeWeight`] payloads and keeps `HashMap`s for O(1) lookup of vertices
/// and edges by their set-local ids. Vertices and edges enumerate in
/// insertion order.
///
/// Construct with [`build_graph`].
#[derive(Debug)]
pub struct InteractionGraph {
    graph: StableUnGraph<NodeWeight, EdgeWeight>,
    id_to_index: HashMap<String, NodeIndex>,
    edge_id_to_index: HashMap<String, EdgeIndex>,
}

impl InteractionGraph {
    /// Returns the number of vertices.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up the [`NodeIndex`] for a vertex id.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_index.get(id).copied()
    }

    /// Looks up the [`EdgeIndex`] for an interaction id.
    pub fn edge_index(&self, id: &str) -> Option<EdgeIndex> {
        self.edge_id_to_index.get(id).copied()
    }

    /// Returns the [`NodeWeight`] for the given index.
    pub fn node_weight(&self, idx: NodeIndex) -> Option<&NodeWeight> {
        self.graph.node_weight(idx)
    }

    /// Returns the [`EdgeWeight`] for the given index.
    pub fn edge_weight(&self, idx: EdgeIndex) -> Option<&EdgeWeight> {
        self.graph.edge_weight(idx)
    }

    /// Returns the set-local id of a vertex.
    pub fn vertex_id(&self, idx: NodeIndex) -> Option<&str> {
        self.node_weight(idx).map(|w| w.local_id.as_str())
    }

    /// Returns the set-local id of an edge.
    pub fn edge_id(&self, idx: EdgeIndex) -> Option<&str> {
        self.edge_weight(idx).map(|w| w.local_id.as_str())
    }

    /// Returns a reference to the underlying [`StableUnGraph`].
    pub fn graph(&self) -> &StableUnGraph<NodeWeight, EdgeWeight> {
        &self.graph
    }
}

impl Topology for InteractionGraph {
    type Vertex = NodeIndex;
    type Edge = EdgeIndex;

    fn vertices(&self) -> Vec<NodeIndex> {
        self.graph.node_indices().collect()
    }

    fn edges(&self) -> Vec<EdgeIndex> {
        self.graph.edge_indices().collect()
    }

    fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    fn endpoints(&self, edge: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(edge)
    }

    fn weight(&self, edge: EdgeIndex) -> Option<f64> {
        self.graph.edge_weight(edge).map(|w| w.weight)
    }

    fn incident_edges(&self, vertex: NodeIndex) -> Vec<EdgeIndex> {
        let mut edges: Vec<EdgeIndex> = self.graph.edges(vertex).map(|e| e.id()).collect();
        // petgraph walks its adjacency list newest-first.
        edges.sort_unstable();
        edges
    }

    fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Constructs an [`InteractionGraph`] from an [`InteractionSet`].
///
/// Construction is O(V + E).
///
/// # Errors
///
/// - [`InvalidGraphError::DuplicateVertexId`]: two vertices share an id.
/// - [`InvalidGraphError::DuplicateEdgeId`]: two interactions share an id.
/// - [`InvalidGraphError::DanglingEdgeRef`]: an endpoint id is unknown.
/// - [`InvalidGraphError::SelfLoop`]: `source == target`.
/// - [`InvalidGraphError::ParallelEdge`]: the pair is already joined.
/// - [`InvalidGraphError::InvalidWeight`]: weight is negative or not finite.
pub fn build_graph(set: &InteractionSet) -> Result<InteractionGraph, InvalidGraphError> {
    let node_count = set.vertices.len();
    let edge_count = set.interactions.len();

    let mut graph: StableUnGraph<NodeWeight, EdgeWeight> =
        StableUnGraph::with_capacity(node_count, edge_count);
    let mut id_to_index: HashMap<String, NodeIndex> = HashMap::with_capacity(node_count);
    let mut edge_id_to_index: HashMap<String, EdgeIndex> = HashMap::with_capacity(edge_count);

    for (data_index, vertex) in set.vertices.iter().enumerate() {
        if id_to_index.contains_key(&vertex.id) {
            return Err(InvalidGraphError::DuplicateVertexId(vertex.id.clone()));
        }
        let idx = graph.add_node(NodeWeight {
            local_id: vertex.id.clone(),
            label: vertex.label.clone(),
            data_index,
        });
        id_to_index.insert(vertex.id.clone(), idx);
    }

    for (data_index, interaction) in set.interactions.iter().enumerate() {
        if edge_id_to_index.contains_key(&interaction.id) {
            return Err(InvalidGraphError::DuplicateEdgeId(interaction.id.clone()));
        }

        let resolve = |id: &String| {
            id_to_index
                .get(id)
                .copied()
                .ok_or_else(|| InvalidGraphError::DanglingEdgeRef {
                    edge_id: interaction.id.clone(),
                    missing_vertex_id: id.clone(),
                })
        };
        let source_idx = resolve(&interaction.source)?;
        let target_idx = resolve(&interaction.target)?;

        if source_idx == target_idx {
            return Err(InvalidGraphError::SelfLoop {
                edge_id: interaction.id.clone(),
                vertex_id: interaction.source.clone(),
            });
        }
        if let Some(existing) = graph.find_edge(source_idx, target_idx) {
            let existing_edge_id = graph
                .edge_weight(existing)
                .map(|w| w.local_id.clone())
                .unwrap_or_default();
            return Err(InvalidGraphError::ParallelEdge {
                edge_id: interaction.id.clone(),
                existing_edge_id,
            });
        }
        if !interaction.weight.is_finite() || interaction.weight < 0.0 {
            return Err(InvalidGraphError::InvalidWeight {
                edge_id: interaction.id.clone(),
                weight: interaction.weight,
            });
        }

        let edge_idx = graph.add_edge(
            source_idx,
            target_idx,
            EdgeWeight {
                local_id: interaction.id.clone(),
                class: interaction.class.clone(),
                weight: interaction.weight,
                data_index,
            },
        );
        edge_id_to_index.insert(interaction.id.clone(), edge_idx);
    }

    Ok(InteractionGraph {
        graph,
        id_to_index,
        edge_id_to_index,
    })
}
