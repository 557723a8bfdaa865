//! Spanning forests and tree paths.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::graph::{GraphElement, Topology};
use crate::options::SpanningTreeStrategy;
use crate::union_find::UnionFind;

/// A spanning forest of a graph, one tree per connected component.
#[derive(Debug, Clone)]
pub struct SpanningForest<V, E> {
    tree_edges: Vec<E>,
    non_tree_edges: Vec<E>,
    components: usize,
    adjacency: HashMap<V, Vec<(V, E)>>,
}

impl<V: GraphElement, E: GraphElement> SpanningForest<V, E> {
    /// Tree edges, in the order they joined the forest.
    pub fn tree_edges(&self) -> &[E] {
        &self.tree_edges
    }

    /// Edges outside the forest, in graph enumeration order.
    pub fn non_tree_edges(&self) -> &[E] {
        &self.non_tree_edges
    }

    /// Number of trees (connected components, isolated vertices included).
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns `true` if `edge` is a tree edge.
    pub fn contains(&self, edge: E) -> bool {
        self.tree_edges.contains(&edge)
    }

    /// The unique tree path from `from` to `to`, as edges in walking order.
    ///
    /// Returns `None` when the vertices lie in different trees. A path from
    /// a vertex to itself is empty.
    pub fn path(&self, from: V, to: V) -> Option<Vec<E>> {
        let mut predecessor: HashMap<V, (V, E)> = HashMap::new();
        let mut visited: HashSet<V> = HashSet::from([from]);
        let mut queue: VecDeque<V> = VecDeque::from([from]);

        while let Some(current) = queue.pop_front() {
            if current == to {
                break;
            }
            let Some(neighbours) = self.adjacency.get(&current) else {
                continue;
            };
            for &(next, edge) in neighbours {
                if visited.insert(next) {
                    predecessor.insert(next, (current, edge));
                    queue.push_back(next);
                }
            }
        }

        if !visited.contains(&to) {
            return None;
        }

        let mut path = Vec::new();
        let mut cursor = to;
        while cursor != from {
            let &(prev, edge) = predecessor.get(&cursor)?;
            path.push(edge);
            cursor = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes a spanning forest of `graph`.
///
/// [`SpanningTreeStrategy::MinimumWeight`] runs Kruskal over a stable sort
/// by weight, so equal weights keep edge enumeration order.
/// [`SpanningTreeStrategy::BreadthFirst`] grows a BFS tree from the first
/// unvisited vertex of each component. Edges whose endpoints or weight do
/// not resolve are ignored.
pub fn spanning_forest<G: Topology>(
    graph: &G,
    strategy: SpanningTreeStrategy,
) -> SpanningForest<G::Vertex, G::Edge> {
    let (tree_edges, components) = match strategy {
        SpanningTreeStrategy::MinimumWeight => kruskal(graph),
        SpanningTreeStrategy::BreadthFirst => breadth_first(graph),
    };

    let in_tree: HashSet<G::Edge> = tree_edges.iter().copied().collect();
    let non_tree_edges: Vec<G::Edge> = graph
        .edges()
        .into_iter()
        .filter(|e| !in_tree.contains(e))
        .collect();

    let mut adjacency: HashMap<G::Vertex, Vec<(G::Vertex, G::Edge)>> = HashMap::new();
    for &edge in &tree_edges {
        if let Some((a, b)) = graph.endpoints(edge) {
            adjacency.entry(a).or_default().push((b, edge));
            adjacency.entry(b).or_default().push((a, edge));
        }
    }

    debug!(
        ?strategy,
        tree_edges = tree_edges.len(),
        non_tree_edges = non_tree_edges.len(),
        components,
        "spanning forest built"
    );

    SpanningForest {
        tree_edges,
        non_tree_edges,
        components,
        adjacency,
    }
}

/// Number of connected components of `graph`, isolated vertices included.
pub fn component_count<G: Topology>(graph: &G) -> usize {
    let vertices = graph.vertices();
    let ordinal: HashMap<G::Vertex, usize> =
        vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let mut uf = UnionFind::new(vertices.len());
    for edge in graph.edges() {
        let Some((a, b)) = graph.endpoints(edge) else {
            continue;
        };
        if let (Some(&i), Some(&j)) = (ordinal.get(&a), ordinal.get(&b)) {
            uf.union(i, j);
        }
    }
    uf.set_count()
}

fn kruskal<G: Topology>(graph: &G) -> (Vec<G::Edge>, usize) {
    let vertices = graph.vertices();
    let ordinal: HashMap<G::Vertex, usize> =
        vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut candidates: Vec<(f64, G::Edge, usize, usize)> = graph
        .edges()
        .into_iter()
        .filter_map(|edge| {
            let (a, b) = graph.endpoints(edge)?;
            let weight = graph.weight(edge)?;
            Some((weight, edge, *ordinal.get(&a)?, *ordinal.get(&b)?))
        })
        .collect();
    candidates.sort_by(|x, y| x.0.total_cmp(&y.0));

    let mut uf = UnionFind::new(vertices.len());
    let mut tree = Vec::with_capacity(vertices.len().saturating_sub(1));
    for (_, edge, i, j) in candidates {
        if uf.union(i, j) {
            tree.push(edge);
        }
    }
    (tree, uf.set_count())
}

fn breadth_first<G: Topology>(graph: &G) -> (Vec<G::Edge>, usize) {
    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut tree = Vec::new();
    let mut components = 0;

    for root in graph.vertices() {
        if !visited.insert(root) {
            continue;
        }
        components += 1;
        let mut queue: VecDeque<G::Vertex> = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            for edge in graph.incident_edges(current) {
                let Some(next) = graph.opposite(edge, current) else {
                    continue;
                };
                if visited.insert(next) {
                    tree.push(edge);
                    queue.push_back(next);
                }
            }
        }
    }
    (tree, components)
}
