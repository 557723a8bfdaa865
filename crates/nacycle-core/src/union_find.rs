//! Disjoint-set forest over vertex ordinals.
//!
//! Drives the minimum-weight spanning forest: an edge joins the forest only
//! when its endpoints still lie in different sets. `find` uses iterative
//! path-halving; `union` is by rank, and on equal rank the lower ordinal
//! becomes the root so representatives do not depend on call order.

/// A union-find structure with path-halving and union-by-rank.
///
/// Elements are `usize` ordinals in `[0, n)`. Ordinals outside that range
/// are treated as singletons that can never be merged.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0u8; n],
            sets: n,
        }
    }

    /// Returns the representative of the set containing `x`.
    pub fn find(&mut self, mut x: usize) -> usize {
        while let Some(&p) = self.parent.get(x) {
            if p == x {
                break;
            }
            let grandparent = self.parent[p];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `true` if two distinct sets were merged, `false` if `a` and
    /// `b` were already connected (or either ordinal is out of range).
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len() || b >= self.len() {
            return false;
        }
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        let (root, child) = match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => (rb, ra),
            std::cmp::Ordering::Greater => (ra, rb),
            std::cmp::Ordering::Equal => {
                let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                self.rank[root] = self.rank[root].saturating_add(1);
                (root, child)
            }
        };
        self.parent[child] = root;
        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
