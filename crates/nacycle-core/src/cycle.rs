//! The [`Cycle`] entity and its structural algebra.
//!
//! A cycle is a closed walk over a [`Topology`]: an ordered edge list of at
//! least three edges plus the vertex list derived from it. The vertex at
//! position `i` is the vertex shared by edge `i - 1` and edge `i`; position 0
//! sits between the last and the first edge. Walking forward, edge `i`
//! therefore leads from `vertices[i]` to `vertices[i + 1]`, and the last edge
//! closes the walk back onto `vertices[0]`.
//!
//! Cycles built by this crate are *anchored*: the declared start vertex is at
//! position 0 and the declared end vertex at the last position, so the last
//! edge joins end to start. Every transform returns an anchored cycle.
//!
//! All operations are pure. Cycles copy the vertex and edge handles they use
//! and hold no reference to the graph once constructed.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::graph::{GraphElement, Topology};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The kind of a [`CycleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleErrorKind {
    /// Malformed input to cycle construction.
    Construction,
    /// Invalid rotation target.
    Rotation,
    /// Degenerate or unresolvable split.
    Split,
    /// Degenerate sub-list request.
    SubList,
}

/// Errors raised by [`Cycle`] construction and algebra.
///
/// Vertices and edges are carried as their `Debug` rendering so the error
/// does not depend on the handle types. Rotation, split and sub-list errors
/// are precondition violations on the caller's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    // --- construction ---
    /// Fewer than three edges were supplied.
    TooFewEdges {
        /// Number of edges supplied.
        count: usize,
    },
    /// An edge is unknown to the graph.
    UnknownEdge {
        /// The unresolvable edge.
        edge: String,
    },
    /// The edges at `position` and `position + 1` (cyclically) do not share
    /// exactly one vertex.
    UnlinkedEdges {
        /// Position of the first edge of the pair.
        position: usize,
    },
    /// The edge at `position` does not lead from one derived vertex to the
    /// next, or the walk revisits a vertex.
    BrokenWalk {
        /// Position of the offending edge.
        position: usize,
    },
    /// Two consecutive vertices of a vertex sequence are not adjacent.
    MissingEdge {
        /// First vertex of the pair.
        from: String,
        /// Second vertex of the pair.
        to: String,
    },
    /// The declared start or end vertex is not on the derived walk.
    EndpointNotInCycle {
        /// The missing vertex.
        vertex: String,
    },

    // --- rotation ---
    /// Rotation requested with identical start and end.
    RotationSameVertex {
        /// The repeated vertex.
        vertex: String,
    },
    /// Rotation target is not on the cycle.
    RotationVertexMissing {
        /// The missing vertex.
        vertex: String,
    },
    /// Rotation start and end are not cyclically adjacent.
    RotationNotAdjacent {
        /// Requested start.
        start: String,
        /// Requested end.
        end: String,
    },

    // --- split ---
    /// The splitting edge has no endpoints in the graph.
    SplitUnresolved {
        /// The splitting edge.
        edge: String,
    },
    /// The splitting edge is already an edge of the cycle.
    SplitEdgeInCycle {
        /// The splitting edge.
        edge: String,
    },
    /// An endpoint of the splitting edge is not on the cycle.
    SplitEndpointMissing {
        /// The missing vertex.
        vertex: String,
    },
    /// One side of the split has fewer than two edges.
    SplitRunTooShort {
        /// Length of the short run.
        length: usize,
    },

    // --- sub-list ---
    /// Sub-list requested with identical start and end.
    SubListSameVertex {
        /// The repeated vertex.
        vertex: String,
    },
    /// A sub-list bound is not on the cycle.
    SubListVertexMissing {
        /// The missing vertex.
        vertex: String,
    },
}

impl CycleError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> CycleErrorKind {
        match self {
            CycleError::TooFewEdges { .. }
            | CycleError::UnknownEdge { .. }
            | CycleError::UnlinkedEdges { .. }
            | CycleError::BrokenWalk { .. }
            | CycleError::MissingEdge { .. }
            | CycleError::EndpointNotInCycle { .. } => CycleErrorKind::Construction,
            CycleError::RotationSameVertex { .. }
            | CycleError::RotationVertexMissing { .. }
            | CycleError::RotationNotAdjacent { .. } => CycleErrorKind::Rotation,
            CycleError::SplitUnresolved { .. }
            | CycleError::SplitEdgeInCycle { .. }
            | CycleError::SplitEndpointMissing { .. }
            | CycleError::SplitRunTooShort { .. } => CycleErrorKind::Split,
            CycleError::SubListSameVertex { .. } | CycleError::SubListVertexMissing { .. } => {
                CycleErrorKind::SubList
            }
        }
    }
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleError::TooFewEdges { count } => {
                write!(f, "a cycle needs at least 3 edges, got {count}")
            }
            CycleError::UnknownEdge { edge } => write!(f, "edge {edge} is not in the graph"),
            CycleError::UnlinkedEdges { position } => write!(
                f,
                "edges at positions {position} and {} do not share exactly one vertex",
                position + 1
            ),
            CycleError::BrokenWalk { position } => {
                write!(f, "edge at position {position} breaks the closed walk")
            }
            CycleError::MissingEdge { from, to } => {
                write!(f, "no edge joins consecutive vertices {from} and {to}")
            }
            CycleError::EndpointNotInCycle { vertex } => {
                write!(f, "declared endpoint {vertex} is not on the cycle")
            }
            CycleError::RotationSameVertex { vertex } => {
                write!(f, "cannot rotate to start and end at the same vertex {vertex}")
            }
            CycleError::RotationVertexMissing { vertex } => {
                write!(f, "rotation target {vertex} is not on the cycle")
            }
            CycleError::RotationNotAdjacent { start, end } => {
                write!(f, "rotation targets {start} and {end} are not adjacent")
            }
            CycleError::SplitUnresolved { edge } => {
                write!(f, "splitting edge {edge} has no endpoints in the graph")
            }
            CycleError::SplitEdgeInCycle { edge } => {
                write!(f, "splitting edge {edge} already belongs to the cycle")
            }
            CycleError::SplitEndpointMissing { vertex } => {
                write!(f, "splitting edge endpoint {vertex} is not on the cycle")
            }
            CycleError::SplitRunTooShort { length } => {
                write!(f, "split leaves a run of {length} edge(s); at least 2 required")
            }
            CycleError::SubListSameVertex { vertex } => {
                write!(f, "sub-list bounds are both {vertex}")
            }
            CycleError::SubListVertexMissing { vertex } => {
                write!(f, "sub-list bound {vertex} is not on the cycle")
            }
        }
    }
}

impl std::error::Error for CycleError {}

// ---------------------------------------------------------------------------
// Cycle
// ---------------------------------------------------------------------------

/// One traversal step of a cycle: `from` reaches `to` through `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step<V, E> {
    /// Vertex the step leaves.
    pub from: V,
    /// Edge traversed.
    pub edge: E,
    /// Vertex the step enters.
    pub to: V,
}

/// A closed walk over a graph.
///
/// Equality is rotation- and orientation-insensitive: two cycles are equal
/// when their edge sets, vertex sets and weights match and each contains the
/// other's declared start and end. Hashing uses the vertex set only.
#[derive(Debug, Clone)]
pub struct Cycle<V, E> {
    start: V,
    end: V,
    edges: Vec<E>,
    vertices: Vec<V>,
    weight: f64,
    vertex_key: Vec<V>,
    edge_key: Vec<E>,
}

impl<V: GraphElement, E: GraphElement> Cycle<V, E> {
    /// Builds a cycle from an ordered edge list.
    ///
    /// The vertex list is derived from the edges; the weight is the sum of
    /// the edge weights (summed in sorted edge order, so the same edge set
    /// always yields the same weight).
    ///
    /// # Errors
    ///
    /// Returns a [`CycleErrorKind::Construction`] error if fewer than three
    /// edges are given, an edge is unknown, consecutive edges do not share
    /// exactly one vertex, the walk is not a simple closed walk, or `start`
    /// or `end` is not on it.
    pub fn new<G>(graph: &G, start: V, end: V, edges: Vec<E>) -> Result<Self, CycleError>
    where
        G: Topology<Vertex = V, Edge = E>,
    {
        if edges.len() < 3 {
            return Err(CycleError::TooFewEdges { count: edges.len() });
        }

        let ends = edges
            .iter()
            .map(|&edge| {
                graph.endpoints(edge).ok_or_else(|| CycleError::UnknownEdge {
                    edge: format!("{edge:?}"),
                })
            })
            .collect::<Result<Vec<(V, V)>, CycleError>>()?;
        let vertices = derive_vertices(&ends)?;

        for endpoint in [start, end] {
            if !vertices.contains(&endpoint) {
                return Err(CycleError::EndpointNotInCycle {
                    vertex: format!("{endpoint:?}"),
                });
            }
        }

        let mut edge_key = edges.clone();
        edge_key.sort_unstable();
        let mut weight = 0.0;
        for &edge in &edge_key {
            weight += graph.weight(edge).ok_or_else(|| CycleError::UnknownEdge {
                edge: format!("{edge:?}"),
            })?;
        }
        let mut vertex_key = vertices.clone();
        vertex_key.sort_unstable();

        Ok(Self {
            start,
            end,
            edges,
            vertices,
            weight,
            vertex_key,
            edge_key,
        })
    }

    /// Builds the closed walk `v0 → v1 → … → v(k-1) → v0`.
    ///
    /// The start vertex is `v0` and the end vertex `v(k-1)`.
    ///
    /// # Errors
    ///
    /// [`CycleError::TooFewEdges`] for fewer than three vertices,
    /// [`CycleError::MissingEdge`] if two consecutive vertices are not
    /// adjacent, or any error of [`Cycle::new`].
    pub fn from_vertices<G>(graph: &G, vertices: &[V]) -> Result<Self, CycleError>
    where
        G: Topology<Vertex = V, Edge = E>,
    {
        let (Some(&start), Some(&end)) = (vertices.first(), vertices.last()) else {
            return Err(CycleError::TooFewEdges { count: 0 });
        };
        if vertices.len() < 3 {
            return Err(CycleError::TooFewEdges {
                count: vertices.len(),
            });
        }

        let mut edges = Vec::with_capacity(vertices.len());
        for (i, &from) in vertices.iter().enumerate() {
            let to = vertices[(i + 1) % vertices.len()];
            let edge = graph
                .edge_between(from, to)
                .ok_or_else(|| CycleError::MissingEdge {
                    from: format!("{from:?}"),
                    to: format!("{to:?}"),
                })?;
            edges.push(edge);
        }

        Self::new(graph, start, end, edges)
    }

    /// Replaces the cycle weight with an assigned value.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Declared start vertex.
    pub fn start(&self) -> V {
        self.start
    }

    /// Declared end vertex.
    pub fn end(&self) -> V {
        self.end
    }

    /// Edges in traversal order.
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Vertices in traversal order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Cycle weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of edges (equal to the number of vertices).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always `false` for a constructed cycle.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` if `vertex` is on the cycle.
    pub fn contains_vertex(&self, vertex: V) -> bool {
        self.vertex_key.binary_search(&vertex).is_ok()
    }

    /// Returns `true` if `edge` is on the cycle.
    pub fn contains_edge(&self, edge: E) -> bool {
        self.edge_key.binary_search(&edge).is_ok()
    }

    fn position(&self, vertex: V) -> Option<usize> {
        self.vertices.iter().position(|&v| v == vertex)
    }

    /// The edge entering `vertex` in traversal order.
    ///
    /// Wraps to the last edge for the vertex at position 0.
    pub fn incoming_edge(&self, vertex: V) -> Option<E> {
        let i = self.position(vertex)?;
        self.edges.get((i + self.len() - 1) % self.len()).copied()
    }

    /// The edge leaving `vertex` in traversal order.
    pub fn outgoing_edge(&self, vertex: V) -> Option<E> {
        let i = self.position(vertex)?;
        self.edges.get(i).copied()
    }

    /// The successor of `vertex`, wrapping from the last vertex to the first.
    pub fn next_vertex(&self, vertex: V) -> Option<V> {
        let i = self.position(vertex)?;
        self.vertices.get((i + 1) % self.len()).copied()
    }

    /// The predecessor of `vertex`, wrapping from the first vertex to the last.
    pub fn previous_vertex(&self, vertex: V) -> Option<V> {
        let i = self.position(vertex)?;
        self.vertices.get((i + self.len() - 1) % self.len()).copied()
    }

    /// Traversal steps in order, ending with the closing step back to the
    /// first vertex.
    pub fn steps(&self) -> impl Iterator<Item = Step<V, E>> + '_ {
        let n = self.len();
        self.edges
            .iter()
            .zip(self.vertices.iter())
            .enumerate()
            .map(move |(i, (&edge, &from))| Step {
                from,
                edge,
                to: self.vertices[(i + 1) % n],
            })
    }

    /// The same cycle traversed in the opposite direction.
    ///
    /// Start and end are swapped; the closing edge stays last.
    #[must_use]
    pub fn invert(&self) -> Self {
        let n = self.len();
        let mut edges: Vec<E> = self.edges[..n - 1].iter().rev().copied().collect();
        edges.extend_from_slice(&self.edges[n - 1..]);
        let vertices: Vec<V> = self.vertices.iter().rev().copied().collect();

        Self {
            start: self.end,
            end: self.start,
            edges,
            vertices,
            weight: self.weight,
            vertex_key: self.vertex_key.clone(),
            edge_key: self.edge_key.clone(),
        }
    }

    /// Re-anchors the cycle to start at `new_start` and end at `new_end`.
    ///
    /// The two vertices must be distinct and cyclically adjacent. When
    /// `new_end` precedes `new_start` the traversal direction is kept;
    /// when it follows, the cycle is inverted first. Rotating to the current
    /// anchors returns an identical cycle, and rotating to the swapped
    /// anchors returns the inversion.
    ///
    /// # Errors
    ///
    /// A [`CycleErrorKind::Rotation`] error if the vertices coincide, are not
    /// on the cycle, or are not adjacent.
    pub fn rotate(&self, new_start: V, new_end: V) -> Result<Self, CycleError> {
        if new_start == new_end {
            return Err(CycleError::RotationSameVertex {
                vertex: format!("{new_start:?}"),
            });
        }
        let missing = |v: V| CycleError::RotationVertexMissing {
            vertex: format!("{v:?}"),
        };
        let i = self.position(new_start).ok_or_else(|| missing(new_start))?;
        let j = self.position(new_end).ok_or_else(|| missing(new_end))?;
        let n = self.len();

        if j == (i + n - 1) % n {
            Ok(self.rotated_left(i, new_start, new_end))
        } else if j == (i + 1) % n {
            Ok(self.invert().rotated_left(n - 1 - i, new_start, new_end))
        } else {
            Err(CycleError::RotationNotAdjacent {
                start: format!("{new_start:?}"),
                end: format!("{new_end:?}"),
            })
        }
    }

    fn rotated_left(&self, offset: usize, start: V, end: V) -> Self {
        let mut edges = self.edges.clone();
        let mut vertices = self.vertices.clone();
        edges.rotate_left(offset);
        vertices.rotate_left(offset);
        Self {
            start,
            end,
            edges,
            vertices,
            weight: self.weight,
            vertex_key: self.vertex_key.clone(),
            edge_key: self.edge_key.clone(),
        }
    }

    /// The contiguous edges walking forward from `from` to `to`, including
    /// the edge that enters `to`.
    ///
    /// # Errors
    ///
    /// A [`CycleErrorKind::SubList`] error if `from == to` or either vertex is
    /// not on the cycle.
    pub fn edge_sub_list(&self, from: V, to: V) -> Result<Vec<E>, CycleError> {
        if from == to {
            return Err(CycleError::SubListSameVertex {
                vertex: format!("{from:?}"),
            });
        }
        let missing = |v: V| CycleError::SubListVertexMissing {
            vertex: format!("{v:?}"),
        };
        let i = self.position(from).ok_or_else(|| missing(from))?;
        let j = self.position(to).ok_or_else(|| missing(to))?;
        let n = self.len();
        let run = (j + n - i) % n;
        Ok((0..run).map(|k| self.edges[(i + k) % n]).collect())
    }

    /// Splits the cycle along `chord`, an edge joining two vertices of the
    /// cycle that is not itself a cycle edge.
    ///
    /// With `chord = (u, v)`, the first child walks the cycle from `u` to
    /// `v` and closes with the chord (start `u`, end `v`); the second walks
    /// on from `v` back to `u` and closes with the chord (start `v`, end
    /// `u`). Both children contain the chord and together cover every edge
    /// of the parent exactly once.
    ///
    /// # Errors
    ///
    /// A [`CycleErrorKind::Split`] error if the chord cannot be resolved, is
    /// already on the cycle, has an endpoint off the cycle, or leaves a run
    /// shorter than two edges. Construction errors of the children propagate.
    pub fn split<G>(&self, graph: &G, chord: E) -> Result<(Self, Self), CycleError>
    where
        G: Topology<Vertex = V, Edge = E>,
    {
        let (u, v) = graph
            .endpoints(chord)
            .ok_or_else(|| CycleError::SplitUnresolved {
                edge: format!("{chord:?}"),
            })?;
        if self.contains_edge(chord) {
            return Err(CycleError::SplitEdgeInCycle {
                edge: format!("{chord:?}"),
            });
        }
        let missing = |x: V| CycleError::SplitEndpointMissing {
            vertex: format!("{x:?}"),
        };
        let before_u = self.previous_vertex(u).ok_or_else(|| missing(u))?;
        if !self.contains_vertex(v) {
            return Err(missing(v));
        }

        let rotated = self.rotate(u, before_u)?;
        let k = rotated.position(v).ok_or_else(|| missing(v))?;
        let n = rotated.len();
        let short = k.min(n - k);
        if short < 2 {
            return Err(CycleError::SplitRunTooShort { length: short });
        }

        let mut first = rotated.edges[..k].to_vec();
        first.push(chord);
        let mut second = rotated.edges[k..].to_vec();
        second.push(chord);

        Ok((
            Self::new(graph, u, v, first)?,
            Self::new(graph, v, u, second)?,
        ))
    }
}

/// Derives the vertex list from the endpoint pairs of a closed edge list.
fn derive_vertices<V: GraphElement>(ends: &[(V, V)]) -> Result<Vec<V>, CycleError> {
    let n = ends.len();
    let mut vertices = Vec::with_capacity(n);
    for i in 0..n {
        let prev = (i + n - 1) % n;
        let shared = shared_vertex(ends[prev], ends[i])
            .ok_or(CycleError::UnlinkedEdges { position: prev })?;
        vertices.push(shared);
    }

    let mut seen = HashSet::with_capacity(n);
    for (i, &(a, b)) in ends.iter().enumerate() {
        let from = vertices[i];
        let to = vertices[(i + 1) % n];
        let joins = (a == from && b == to) || (a == to && b == from);
        if !joins || !seen.insert(from) {
            return Err(CycleError::BrokenWalk { position: i });
        }
    }

    Ok(vertices)
}

/// The single vertex shared by two edges, or `None` if they share none or
/// both.
fn shared_vertex<V: GraphElement>(x: (V, V), y: (V, V)) -> Option<V> {
    let first = x.0 == y.0 || x.0 == y.1;
    let second = x.1 == y.0 || x.1 == y.1;
    match (first, second) {
        (true, false) => Some(x.0),
        (false, true) => Some(x.1),
        (true, true) | (false, false) => None,
    }
}

impl<V: GraphElement, E: GraphElement> PartialEq for Cycle<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_key == other.edge_key
            && self.vertex_key == other.vertex_key
            && self.weight.total_cmp(&other.weight) == Ordering::Equal
            && self.contains_vertex(other.start)
            && self.contains_vertex(other.end)
            && other.contains_vertex(self.start)
            && other.contains_vertex(self.end)
    }
}

impl<V: GraphElement, E: GraphElement> Eq for Cycle<V, E> {}

impl<V: GraphElement, E: GraphElement> Hash for Cycle<V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertex_key.hash(state);
    }
}
