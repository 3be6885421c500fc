/*!
# Random Spanning Trees

[`RandomSpanningTree`] generates a random weighted tree on `n` nodes whose edges are
oriented away from a root node (default `0`). Nodes are attached by random walks over not
yet connected nodes: once a walk hits the tree, the whole walk is attached as a path.
*/

use std::ops::RangeInclusive;

use rand_distr::Distribution;

use super::*;

/// Generator for a random weighted spanning tree.
#[derive(Debug, Clone)]
pub struct RandomSpanningTree<W> {
    n: NumNodes,
    root: Node,
    weights: Option<RangeInclusive<W>>,
}

impl<W> Default for RandomSpanningTree<W> {
    fn default() -> Self {
        Self {
            n: 0,
            root: 0,
            weights: None,
        }
    }
}

impl<W> RandomSpanningTree<W> {
    /// Creates a new generator with `n = 0` and `root = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root node all edges are oriented away from.
    ///
    /// # Panics
    /// Panics if `root >= n` when used in generation.
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Sets the root node all edges are oriented away from.
    ///
    /// # Panics
    /// Panics if `root >= n` when used in generation.
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }
}

impl<W> NumNodesGen for RandomSpanningTree<W> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<W> WeightsGen<W> for RandomSpanningTree<W> {
    fn set_weights(&mut self, weights: RangeInclusive<W>) {
        self.weights = Some(weights);
    }
}

impl<W> WeightedGraphGenerator<W> for RandomSpanningTree<W>
where
    W: EdgeWeight + SampleUniform,
{
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<W>>
    where
        R: Rng,
    {
        let weights = weight_distribution(
            self.weights
                .as_ref()
                .expect("Weights of RandomSpanningTree were not set!"),
        );
        SpanningTreeEdges::new(self.n, self.root, weights, rng)
    }
}

/// Streaming generator for the edges of a [`RandomSpanningTree`].
///
/// Yields exactly `n - 1` edges.
pub struct SpanningTreeEdges<'a, R, W>
where
    R: Rng,
    W: SampleUniform,
{
    rng: &'a mut R,
    node_gen: Uniform<Node>,
    weight_gen: Uniform<W>,
    connected: NodeBitSet,
    on_path: NodeBitSet,
    path: Vec<Node>,
    path_pos: usize,
}

impl<'a, R, W> SpanningTreeEdges<'a, R, W>
where
    R: Rng,
    W: EdgeWeight + SampleUniform,
{
    /// Creates a new generator for a tree of `n` nodes rooted at `root`.
    ///
    /// # Panics
    /// Panics if `root >= n`.
    pub fn new(n: NumNodes, root: Node, weight_gen: Uniform<W>, rng: &'a mut R) -> Self {
        assert!(root < n, "Root must be a node of the tree!");

        Self {
            rng,
            node_gen: Uniform::new(0, n).expect("Tree has at least one node"),
            weight_gen,
            connected: NodeBitSet::new_with_bits_set(n, [root]),
            on_path: NodeBitSet::new(n),
            path: Vec::new(),
            path_pos: 0,
        }
    }
}

impl<R, W> Iterator for SpanningTreeEdges<'_, R, W>
where
    R: Rng,
    W: EdgeWeight + SampleUniform,
{
    type Item = WeightedEdge<W>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.path_pos == 0 {
            if self.connected.are_all_set() {
                return None;
            }
            self.walk_to_tree();
        }

        // `path` runs from a new node to the tree; emit it backwards, starting at the tree
        self.path_pos -= 1;
        let weight = self.weight_gen.sample(self.rng);
        Some(WeightedEdge(
            self.path[self.path_pos + 1],
            self.path[self.path_pos],
            weight,
        ))
    }
}

impl<R, W> SpanningTreeEdges<'_, R, W>
where
    R: Rng,
    W: EdgeWeight + SampleUniform,
{
    /// Random walk from an unconnected node until the tree is hit
    fn walk_to_tree(&mut self) {
        self.on_path.clear_all();
        self.path.clear();

        loop {
            let u = self.node_gen.sample(self.rng);

            if self.path.is_empty() && self.connected.get_bit(u) {
                continue;
            }

            // walks never revisit a node
            if self.on_path.set_bit(u) {
                continue;
            }

            self.path.push(u);

            if self.connected.set_bit(u) {
                self.path_pos = self.path.len() - 1;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, utils::UnionFind};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn is_tree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [1, 2, 5, 30, 100] {
            for root in [0, n - 1] {
                let edges = RandomSpanningTree::new()
                    .nodes(n)
                    .root(root)
                    .weights(3..=7u16)
                    .generate(rng);
                assert_eq!(edges.len(), n as usize - 1);

                let mut components = UnionFind::new(n);
                for e in &edges {
                    assert!((3..=7).contains(&e.weight()));
                    assert!(components.union(e.tail(), e.head()));
                }

                // oriented away from the root: every node is reachable from it
                let graph = WeightedAdjArray::from_edges(n, edges).unwrap();
                let paths = graph.bfs_distances(root).unwrap();
                assert!(graph.vertices().all(|v| paths.is_reachable(v)));
            }
        }
    }

    #[test]
    fn random_connected_is_connected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);

        for n in [1, 10, 40] {
            let graph = Graph::random_connected(rng, n, 0.05, -5..=5);
            assert!(graph.kruskal().is_spanning());
            assert!(Graph::random_spanning_tree(rng, n, 1..=1).kruskal().is_spanning());
        }
    }
}
