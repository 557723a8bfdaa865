//! Chordless (induced) cycle enumeration.
//!
//! Each edge `(s, t)` seeds two paths, `[t, s]` and `[s, t]`. A path grows
//! by prepending a neighbour of its first vertex (the anchor). When the
//! anchor reaches the path's last vertex the closed walk is a candidate,
//! kept only if no edge joins two of its non-consecutive vertices.
//!
//! A neighbour adjacent to an interior path vertex would put a chord into
//! every completion, so such extensions are cut immediately.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::{BasisError, CycleBasis};
use crate::cycle::Cycle;
use crate::graph::{Topology, validate_topology};
use crate::options::BasisOptions;

/// Enumerates every chordless cycle of `graph` with default options.
///
/// # Errors
///
/// [`BasisError::InvalidGraph`] if the graph violates the [`Topology`]
/// contract; [`BasisError::ChordTest`] and [`BasisError::Cycle`] signal
/// internal invariant violations.
pub fn chordless_cycle_basis<G: Topology>(graph: &G) -> Result<CycleBasis<'_, G>, BasisError> {
    chordless_cycle_basis_with_options(graph, &BasisOptions::default())
}

/// Enumerates chordless cycles of `graph`, honouring
/// `options.max_cycle_len`.
///
/// Cycles are returned in discovery order, each exactly once.
///
/// # Errors
///
/// See [`chordless_cycle_basis`]; additionally
/// [`BasisError::InvalidOptions`] for out-of-range options.
pub fn chordless_cycle_basis_with_options<'g, G: Topology>(
    graph: &'g G,
    options: &BasisOptions,
) -> Result<CycleBasis<'g, G>, BasisError> {
    options.validate()?;
    validate_topology(graph)?;

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        max_cycle_len = ?options.max_cycle_len,
        "enumerating chordless cycles"
    );

    let mut search = Search {
        graph,
        limit: options.max_cycle_len,
        found: Vec::new(),
        seen: HashSet::new(),
    };

    for edge in graph.edges() {
        let Some((s, t)) = graph.endpoints(edge) else {
            continue;
        };
        for (first, last) in [(t, s), (s, t)] {
            // Stored reversed: the anchor is the top of the stack.
            let mut stack = vec![last, first];
            search.extend(&mut stack)?;
        }
    }

    debug!(cycles = search.found.len(), "chordless enumeration complete");
    Ok(CycleBasis::new(graph, search.found))
}

struct Search<'g, G: Topology> {
    graph: &'g G,
    limit: Option<usize>,
    found: Vec<Cycle<G::Vertex, G::Edge>>,
    seen: HashSet<Cycle<G::Vertex, G::Edge>>,
}

impl<G: Topology> Search<'_, G> {
    /// Explores every extension of the path held (reversed) in `stack`.
    fn extend(&mut self, stack: &mut Vec<G::Vertex>) -> Result<(), BasisError> {
        let (Some(&anchor), Some(&last)) = (stack.last(), stack.first()) else {
            return Ok(());
        };
        let can_grow = self.limit.is_none_or(|limit| stack.len() < limit);

        for edge in self.graph.incident_edges(anchor) {
            let Some(x) = self.graph.opposite(edge, anchor) else {
                continue;
            };

            if x == last {
                if stack.len() > 2 {
                    self.close(stack)?;
                }
                continue;
            }
            if !can_grow || stack.contains(&x) || self.touches_interior(stack, x) {
                continue;
            }

            stack.push(x);
            self.extend(stack)?;
            stack.pop();
        }
        Ok(())
    }

    /// Returns `true` if `x` is adjacent to a path vertex other than the
    /// anchor and the last vertex.
    fn touches_interior(&self, stack: &[G::Vertex], x: G::Vertex) -> bool {
        let interior = stack.len().saturating_sub(1);
        stack
            .get(1..interior)
            .is_some_and(|inner| inner.iter().any(|&w| self.graph.edge_between(x, w).is_some()))
    }

    fn close(&mut self, stack: &[G::Vertex]) -> Result<(), BasisError> {
        let path: Vec<G::Vertex> = stack.iter().rev().copied().collect();
        if has_chord(self.graph, &path)? {
            return Ok(());
        }
        let cycle = Cycle::from_vertices(self.graph, &path)?;
        if self.seen.insert(cycle.clone()) {
            trace!(len = cycle.len(), "accepted chordless cycle");
            self.found.push(cycle);
        }
        Ok(())
    }
}

/// Chord test on a closed candidate path.
///
/// # Errors
///
/// [`BasisError::ChordTest`] if the first and last vertex are not adjacent.
fn has_chord<G: Topology>(graph: &G, path: &[G::Vertex]) -> Result<bool, BasisError> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Ok(false);
    };
    if graph.edge_between(first, last).is_none() {
        return Err(BasisError::ChordTest {
            first: format!("{first:?}"),
            last: format!("{last:?}"),
        });
    }

    let m = path.len();
    for i in 0..m {
        for j in (i + 2)..m {
            if i == 0 && j == m - 1 {
                continue;
            }
            if graph.edge_between(path[i], path[j]).is_some() {
                return Ok(true);
            }
        }
    }
    Ok(false)
}
