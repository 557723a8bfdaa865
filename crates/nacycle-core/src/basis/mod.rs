//! Cycle-basis builders and the [`CycleBasis`] they return.
//!
//! Two builders share one result type:
//!
//! - [`fundamental_cycle_basis`]: one cycle per non-tree edge of a spanning
//!   forest, refined by splitting cycles that already join both endpoints of
//!   the edge. Yields exactly `|E| - |V| + c` cycles.
//! - [`chordless_cycle_basis`]: every chordless (induced) cycle, found by
//!   backtracking over induced paths.
//!
//! Both validate the input with [`crate::validate_topology`] before doing
//! any work and never mutate the graph.

pub mod chordless;
pub mod fundamental;
pub mod spanning;

pub use chordless::{chordless_cycle_basis, chordless_cycle_basis_with_options};
pub use fundamental::{fundamental_cycle_basis, fundamental_cycle_basis_with_options};
pub use spanning::{SpanningForest, component_count, spanning_forest};

use std::fmt;

use crate::cycle::{Cycle, CycleError};
use crate::graph::{InvalidGraphError, Topology};
use crate::options::OptionsError;

/// Errors raised by the basis builders.
#[derive(Debug, Clone, PartialEq)]
pub enum BasisError {
    /// The input graph violates the [`Topology`] contract.
    InvalidGraph(InvalidGraphError),
    /// A cycle operation failed during construction.
    Cycle(CycleError),
    /// The options passed to a `*_with_options` builder are out of range.
    InvalidOptions(OptionsError),
    /// A closed chordless candidate whose first and last vertex are not
    /// adjacent. Internal invariant violation.
    ChordTest {
        /// First vertex of the candidate path.
        first: String,
        /// Last vertex of the candidate path.
        last: String,
    },
    /// No spanning-forest path joins the endpoints of a non-tree edge.
    /// Internal invariant violation.
    TreePathMissing {
        /// Path origin.
        from: String,
        /// Path target.
        to: String,
    },
}

impl fmt::Display for BasisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisError::InvalidGraph(e) => write!(f, "invalid graph: {e}"),
            BasisError::Cycle(e) => write!(f, "cycle operation failed: {e}"),
            BasisError::InvalidOptions(e) => write!(f, "{e}"),
            BasisError::ChordTest { first, last } => write!(
                f,
                "chord test on a path whose ends {first} and {last} are not adjacent"
            ),
            BasisError::TreePathMissing { from, to } => {
                write!(f, "no spanning-forest path from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for BasisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BasisError::InvalidGraph(e) => Some(e),
            BasisError::Cycle(e) => Some(e),
            BasisError::InvalidOptions(e) => Some(e),
            BasisError::ChordTest { .. } | BasisError::TreePathMissing { .. } => None,
        }
    }
}

impl From<InvalidGraphError> for BasisError {
    fn from(e: InvalidGraphError) -> Self {
        BasisError::InvalidGraph(e)
    }
}

impl From<CycleError> for BasisError {
    fn from(e: CycleError) -> Self {
        BasisError::Cycle(e)
    }
}

impl From<OptionsError> for BasisError {
    fn from(e: OptionsError) -> Self {
        BasisError::InvalidOptions(e)
    }
}

/// An ordered collection of cycles computed over one graph.
///
/// Read-only once built. Cycles appear in the order the builder created
/// them and are pairwise distinct under [`Cycle`] equality.
pub struct CycleBasis<'g, G: Topology> {
    graph: &'g G,
    cycles: Vec<Cycle<G::Vertex, G::Edge>>,
}

impl<'g, G: Topology> CycleBasis<'g, G> {
    pub(crate) fn new(graph: &'g G, cycles: Vec<Cycle<G::Vertex, G::Edge>>) -> Self {
        Self { graph, cycles }
    }

    /// The graph the basis was computed over.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// The cycles, in creation order.
    pub fn cycles(&self) -> &[Cycle<G::Vertex, G::Edge>] {
        &self.cycles
    }

    /// Number of cycles.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Returns `true` for an acyclic graph.
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Iterates the cycles in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cycle<G::Vertex, G::Edge>> {
        self.cycles.iter()
    }

    /// Returns `true` if a cycle equal to `cycle` (up to rotation and
    /// orientation) is in the basis.
    pub fn contains(&self, cycle: &Cycle<G::Vertex, G::Edge>) -> bool {
        self.cycles.contains(cycle)
    }

    /// Cycles passing through `vertex`.
    pub fn cycles_through(
        &self,
        vertex: G::Vertex,
    ) -> impl Iterator<Item = &Cycle<G::Vertex, G::Edge>> + '_ {
        self.cycles
            .iter()
            .filter(move |c| c.contains_vertex(vertex))
    }

    /// The cyclomatic number `|E| - |V| + c` of the underlying graph.
    ///
    /// Equals [`CycleBasis::len`] for a fundamental basis.
    pub fn cyclomatic_number(&self) -> usize {
        (self.graph.edge_count() + component_count(self.graph))
            .saturating_sub(self.graph.vertex_count())
    }

    /// Consumes the basis, returning its cycles.
    pub fn into_cycles(self) -> Vec<Cycle<G::Vertex, G::Edge>> {
        self.cycles
    }
}

impl<G: Topology> fmt::Debug for CycleBasis<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CycleBasis")
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}

impl<'a, G: Topology> IntoIterator for &'a CycleBasis<'_, G> {
    type Item = &'a Cycle<G::Vertex, G::Edge>;
    type IntoIter = std::slice::Iter<'a, Cycle<G::Vertex, G::Edge>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}
