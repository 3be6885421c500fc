/*!
# Union-Find

Disjoint-set forest over the nodes `0..n` with union-by-rank and full path compression.
`find` is iterative: a first pass locates the representative, a second pass re-points every
node on the way directly to it.
*/

use crate::node::*;

/// Disjoint-set forest with one element per node
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
    num_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_sets: n,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }

    /// Returns the representative of the set containing `x`.
    /// ** Panics if `x >= n` **
    pub fn find(&mut self, x: Node) -> Node {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut u = x;
        while u != root {
            let next = self.parent[u as usize];
            self.parent[u as usize] = root;
            u = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    /// Returns *false* if both already were in the same set.
    /// ** Panics if `x >= n || y >= n` **
    pub fn union(&mut self, x: Node, y: Node) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        let (low, high) = if self.rank[rx as usize] < self.rank[ry as usize] {
            (rx, ry)
        } else {
            (ry, rx)
        };

        self.parent[low as usize] = high;
        if self.rank[low as usize] == self.rank[high as usize] {
            self.rank[high as usize] += 1;
        }
        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `x` and `y` are in the same set
    /// ** Panics if `x >= n || y >= n` **
    pub fn same_set(&mut self, x: Node, y: Node) -> bool {
        self.find(x) == self.find(y)
    }
}
