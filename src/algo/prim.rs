/*!
# Prim

Grows a minimum spanning tree from a source node. Each node outside the tree keeps the
weight of its cheapest edge into the tree (`key`) and that edge's tree endpoint (`parent`).
The node of minimal key joins next, contributing the edge `(parent, node, key)`.

- [`PrimVariant::ArrayScan`] finds the minimal key by scanning all nodes.
- [`PrimVariant::BinaryHeap`] keeps candidates in a [`MinHeap`] with lazy deletion.
*/

use super::*;

/// Strategy to find the next node to include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimVariant {
    /// Linear scan over all keys
    ArrayScan,
    /// Binary min-heap with lazy deletion
    #[default]
    BinaryHeap,
}

/// Configurable run of Prim's algorithm
pub struct Prim<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    variant: PrimVariant,
}

/// Per-node state of a run
struct PrimState<W> {
    key: Vec<Distance<W>>,
    parent: Vec<Option<OptionalNode>>,
    included: NodeBitSet,
    tree: SpanningTree<W>,
}

impl<W: EdgeWeight> PrimState<W> {
    fn new(n: NumNodes, source: Node) -> Self {
        let mut key = vec![Distance::Infinite; n as usize];
        key[source as usize] = Distance::zero();
        Self {
            key,
            parent: vec![None; n as usize],
            included: NodeBitSet::new(n),
            tree: SpanningTree::new(n),
        }
    }

    /// Adds `u` to the tree and returns the nodes whose key improved
    fn include<G>(&mut self, graph: &G, u: Node, improved: &mut Vec<Node>)
    where
        G: WeightedAdjacencyList<Weight = W>,
    {
        self.included.set_bit(u);
        if let Some(p) = self.parent[u as usize] {
            if let Distance::Finite(w) = self.key[u as usize] {
                trace!("Prim includes {u} via ({},{u},{w})", p.get());
                self.tree.push(WeightedEdge(p.get(), u, w));
            }
        }

        for e in graph.edges_of(u) {
            let v = e.head();
            if !self.included.get_bit(v) && Distance::Finite(e.weight()) < self.key[v as usize] {
                self.key[v as usize] = Distance::Finite(e.weight());
                self.parent[v as usize] = OptionalNode::new(u);
                improved.push(v);
            }
        }
    }
}

impl<'a, G> Prim<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Creates a new heap-based run on `graph`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            variant: PrimVariant::default(),
        }
    }

    /// Sets the strategy used to find the next node
    pub fn set_variant(&mut self, variant: PrimVariant) {
        self.variant = variant;
    }

    /// Sets the strategy used to find the next node
    pub fn variant(mut self, variant: PrimVariant) -> Self {
        self.set_variant(variant);
        self
    }

    /// Computes a minimum spanning tree of the component containing `source`
    pub fn run(&self, source: Node) -> Result<SpanningTree<G::Weight>> {
        self.graph.check_vertex(source)?;

        let mut state = PrimState::new(self.graph.number_of_nodes(), source);
        match self.variant {
            PrimVariant::ArrayScan => self.run_array_scan(&mut state),
            PrimVariant::BinaryHeap => self.run_binary_heap(&mut state, source)?,
        }

        let tree = state.tree;
        if tree.is_spanning() {
            debug!(
                "Prim ({:?}) from {source} accepted {} edges of total weight {:?}",
                self.variant,
                tree.number_of_edges(),
                tree.total_weight()
            );
        } else {
            warn!(
                "Graph is disconnected: Prim from {source} only spans {} of {} nodes",
                tree.number_of_edges() + 1,
                self.graph.number_of_nodes()
            );
        }

        Ok(tree)
    }

    fn run_array_scan(&self, state: &mut PrimState<G::Weight>) {
        let mut improved = Vec::new();
        for _ in self.graph.vertices_range() {
            let next = self
                .graph
                .vertices()
                .filter(|&v| !state.included.get_bit(v))
                .min_by_key(|&v| state.key[v as usize]);

            match next {
                Some(u) if state.key[u as usize].is_finite() => {
                    state.include(self.graph, u, &mut improved);
                    improved.clear();
                }
                _ => break,
            }
        }
    }

    fn run_binary_heap(&self, state: &mut PrimState<G::Weight>, source: Node) -> Result<()> {
        let mut heap = MinHeap::new();
        heap.insert(Distance::<G::Weight>::zero(), source)?;

        let mut improved = Vec::new();
        while let Ok((_, u)) = heap.extract() {
            if state.included.get_bit(u) {
                continue;
            }

            state.include(self.graph, u, &mut improved);
            for v in improved.drain(..) {
                heap.insert(state.key[v as usize], v)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::brute_force_mst_weight};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    const VARIANTS: [PrimVariant; 2] = [PrimVariant::ArrayScan, PrimVariant::BinaryHeap];

    #[test]
    fn example() {
        let graph = Graph::from_undirected_edges(
            4,
            [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
        )
        .unwrap();

        for variant in VARIANTS {
            let mst = graph.prim(0, variant).unwrap();
            assert_eq!(
                mst.edges(),
                &[WeightedEdge(0, 3, 5), WeightedEdge(3, 2, 4), WeightedEdge(0, 1, 10)]
            );
            assert_eq!(mst.total_weight(), Some(19));
            assert!(mst.is_spanning());
        }
    }

    #[test]
    fn disconnected() {
        let graph = Graph::from_undirected_edges(5, [(0, 1, 3), (1, 2, 1), (3, 4, 2)]).unwrap();
        for variant in VARIANTS {
            let mst = graph.prim(3, variant).unwrap();
            assert!(!mst.is_spanning());
            assert_eq!(mst.edges(), &[WeightedEdge(3, 4, 2)]);
            assert!(graph.prim(5, variant).is_err());
        }
    }

    #[test]
    fn single_node() {
        let graph = Graph::new(1);
        for variant in VARIANTS {
            let mst = graph.prim(0, variant).unwrap();
            assert!(mst.is_spanning());
            assert_eq!(mst.number_of_edges(), 0);
        }
    }

    #[test]
    fn random_against_kruskal_and_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(19);

        for _ in 0..200 {
            let n = rng.random_range(1..=6);
            let p = rng.random_range(0.2..0.8);
            let graph = Graph::random_gnp_undirected(rng, n, p, 0..=10);
            let expected = brute_force_mst_weight(&graph);

            for variant in VARIANTS {
                let mst = graph.prim(0, variant).unwrap();
                assert_eq!(mst.is_spanning(), expected.is_some());
                if let Some(weight) = expected {
                    assert_eq!(mst.total_weight(), Some(weight));
                }
            }
        }

        for n in [10, 50, 100] {
            let graph: WeightedAdjArray<u32> = WeightedAdjArray::random_connected(rng, n, 0.1, 1..=100);
            let csr = WeightedCsrGraph::from(&graph);
            let kruskal = graph.kruskal();
            assert!(kruskal.is_spanning());

            for variant in VARIANTS {
                for source in [0, n - 1] {
                    let mst = graph.prim(source, variant).unwrap();
                    assert!(mst.is_spanning());
                    assert_eq!(mst.total_weight(), kruskal.total_weight());
                    assert_eq!(csr.prim(source, variant).unwrap(), mst);
                }
            }

            let array = graph.prim(0, PrimVariant::ArrayScan).unwrap();
            let heap = graph.prim(0, PrimVariant::BinaryHeap).unwrap();
            assert_eq!(
                array.edges().iter().map(|e| e.head()).sorted().collect_vec(),
                heap.edges().iter().map(|e| e.head()).sorted().collect_vec()
            );
        }
    }
}
