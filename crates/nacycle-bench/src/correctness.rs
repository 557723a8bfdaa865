//! Post-operation invariant checkers for correctness validation.

use std::collections::HashSet;

use nacycle_core::{CycleBasis, InteractionGraph, InteractionSet, Topology};

/// Verifies graph construction invariants.
pub fn check_graph_invariants(set: &InteractionSet, graph: &InteractionGraph) -> Result<(), String> {
    if graph.node_count() != set.vertices.len() {
        return Err(format!(
            "vertex count mismatch: graph={}, set={}",
            graph.node_count(),
            set.vertices.len()
        ));
    }
    if graph.edge_count() != set.interactions.len() {
        return Err(format!(
            "edge count mismatch: graph={}, set={}",
            graph.edge_count(),
            set.interactions.len()
        ));
    }
    for vertex in &set.vertices {
        if graph.node_index(&vertex.id).is_none() {
            return Err(format!("vertex {} not found in graph index", vertex.id));
        }
    }
    Ok(())
}

/// Connected components of the graph, counted by petgraph independently of
/// the basis builders.
pub fn component_count(graph: &InteractionGraph) -> usize {
    petgraph::algo::kosaraju_scc(graph.graph()).len()
}

/// Verifies that every cycle is a simple closed walk over real edges:
/// each step's edge joins exactly its `from` and `to` vertices and no
/// vertex repeats.
pub fn check_closed_walks(basis: &CycleBasis<'_, InteractionGraph>) -> Result<(), String> {
    let graph = basis.graph();
    for (i, cycle) in basis.iter().enumerate() {
        if cycle.len() < 3 {
            return Err(format!("cycle {i} has only {} edges", cycle.len()));
        }
        let unique: HashSet<_> = cycle.vertices().iter().collect();
        if unique.len() != cycle.len() {
            return Err(format!("cycle {i} repeats a vertex"));
        }
        for step in cycle.steps() {
            let Some((a, b)) = graph.endpoints(step.edge) else {
                return Err(format!("cycle {i} uses an unknown edge"));
            };
            let joins = (a == step.from && b == step.to) || (a == step.to && b == step.from);
            if !joins {
                return Err(format!("cycle {i} has a step off its edge"));
            }
        }
    }
    Ok(())
}

/// Verifies that no two cycles in the basis are equal.
pub fn check_distinct(basis: &CycleBasis<'_, InteractionGraph>) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(basis.len());
    for (i, cycle) in basis.iter().enumerate() {
        if !seen.insert(cycle) {
            return Err(format!("cycle {i} duplicates an earlier cycle"));
        }
    }
    Ok(())
}

/// Verifies fundamental basis invariants:
/// - size is `|E| - |V| + c`
/// - every cycle is a simple closed walk
/// - no duplicates
pub fn check_fundamental_basis(basis: &CycleBasis<'_, InteractionGraph>) -> Result<(), String> {
    let graph = basis.graph();
    let expected = (graph.edge_count() + component_count(graph)).saturating_sub(graph.node_count());
    if basis.len() != expected {
        return Err(format!(
            "basis size mismatch: got {}, cyclomatic number {expected}",
            basis.len()
        ));
    }
    check_closed_walks(basis)?;
    check_distinct(basis)
}

/// Verifies chordless basis invariants:
/// - no cycle has an edge between non-consecutive vertices
/// - every cycle is a simple closed walk
/// - no duplicates
pub fn check_chordless_basis(basis: &CycleBasis<'_, InteractionGraph>) -> Result<(), String> {
    let graph = basis.graph();
    for (n, cycle) in basis.iter().enumerate() {
        let vs = cycle.vertices();
        let m = vs.len();
        for i in 0..m {
            for j in (i + 2)..m {
                if i == 0 && j == m - 1 {
                    continue;
                }
                if graph.edge_between(vs[i], vs[j]).is_some() {
                    return Err(format!("cycle {n} has a chord between positions {i} and {j}"));
                }
            }
        }
    }
    check_closed_walks(basis)?;
    check_distinct(basis)
}
