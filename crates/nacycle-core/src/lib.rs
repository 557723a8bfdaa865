#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod basis;
pub mod canonical;
pub mod cycle;
pub mod graph;
pub mod options;
pub mod structures;
pub mod union_find;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use basis::{
    BasisError, CycleBasis, SpanningForest, chordless_cycle_basis,
    chordless_cycle_basis_with_options, fundamental_cycle_basis,
    fundamental_cycle_basis_with_options, spanning_forest,
};
pub use canonical::{CanonicalCycle, Orientation, canonical_string, canonicalize, is_canonical};
pub use cycle::{Cycle, CycleError, CycleErrorKind, Step};
pub use graph::{
    EdgeWeight, GraphElement, InteractionGraph, InvalidGraphError, NodeWeight, Topology,
    build_graph, validate_topology,
};
pub use options::{BasisOptions, OptionsError, SpanningTreeStrategy};
pub use structures::{Interaction, InteractionSet, Vertex};
pub use union_find::UnionFind;

/// Returns the current version of the nacycle-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
