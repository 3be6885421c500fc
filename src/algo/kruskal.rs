use itertools::Itertools;

use super::*;

/// Kruskal's algorithm: scan all edges by ascending weight and accept every edge that
/// joins two different components of a [`UnionFind`].
///
/// The sort is stable, so edges of equal weight are considered in the order of
/// [`WeightedAdjacencyList::edges`].
pub struct Kruskal<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
}

impl<'a, G> Kruskal<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Creates a new run on `graph`
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Computes a minimum spanning forest
    pub fn compute(&self) -> SpanningTree<G::Weight> {
        kruskal_on_checked_edges(self.graph.number_of_nodes(), self.graph.edges().collect_vec())
    }
}

/// Minimum spanning forest of the undirected graph on nodes `0..n` given by `edges`.
///
/// Returns `Err(GraphError::InvalidVertex)` if an endpoint is not below `n`.
///
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mst = kruskal_from_edges(3, [(0, 1, 2), (1, 2, 2), (0, 2, 1)]).unwrap();
/// assert_eq!(mst.edges(), &[WeightedEdge(0, 2, 1), WeightedEdge(0, 1, 2)]);
/// ```
pub fn kruskal_from_edges<W, I, E>(n: NumNodes, edges: I) -> Result<SpanningTree<W>>
where
    W: EdgeWeight,
    I: IntoIterator<Item = E>,
    E: Into<WeightedEdge<W>>,
{
    let edges = edges.into_iter().map(|e| e.into()).collect_vec();
    for e in &edges {
        for u in [e.tail(), e.head()] {
            if u >= n {
                return Err(GraphError::InvalidVertex {
                    node: u,
                    number_of_nodes: n,
                });
            }
        }
    }
    Ok(kruskal_on_checked_edges(n, edges))
}

fn kruskal_on_checked_edges<W: EdgeWeight>(
    n: NumNodes,
    mut edges: Vec<WeightedEdge<W>>,
) -> SpanningTree<W> {
    edges.sort_by_key(|e| e.weight());

    let mut components = UnionFind::new(n);
    let mut tree = SpanningTree::new(n);

    for e in edges {
        if tree.is_spanning() {
            break;
        }
        if components.union(e.tail(), e.head()) {
            trace!("Kruskal accepts {e}");
            tree.push(e);
        }
    }

    if tree.is_spanning() {
        debug!(
            "Kruskal accepted {} edges of total weight {:?}",
            tree.number_of_edges(),
            tree.total_weight()
        );
    } else {
        warn!(
            "Graph is disconnected: Kruskal returns a spanning forest with {} components",
            components.number_of_sets()
        );
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::brute_force_mst_weight};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    const EXAMPLE: [(Node, Node, i32); 5] = [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)];

    #[test]
    fn example_edge_list() {
        let mst = kruskal_from_edges(4, EXAMPLE).unwrap();
        assert_eq!(
            mst.edges(),
            &[WeightedEdge(2, 3, 4), WeightedEdge(0, 3, 5), WeightedEdge(0, 1, 10)]
        );
        assert_eq!(mst.total_weight(), Some(19));
        assert!(mst.is_spanning());
    }

    #[test]
    fn example_graph() {
        let graph = WeightedAdjArray::from_undirected_edges(4, EXAMPLE).unwrap();
        let mst = graph.kruskal();
        assert_eq!(
            mst.edges(),
            &[WeightedEdge(2, 3, 4), WeightedEdge(0, 3, 5), WeightedEdge(0, 1, 10)]
        );
        assert_eq!(mst.total_weight(), Some(19));
    }

    #[test]
    fn forest() {
        let graph = Graph::from_undirected_edges(5, [(0, 1, 3), (1, 2, 1), (3, 4, -2)]).unwrap();
        let mst = graph.kruskal();
        assert!(!mst.is_spanning());
        assert_eq!(mst.number_of_edges(), 3);
        assert_eq!(mst.total_weight(), Some(2));
    }

    #[test]
    fn trivial_graphs() {
        assert!(Graph::new(0).kruskal().is_spanning());
        assert!(Graph::new(1).kruskal().is_spanning());
        assert!(!Graph::new(2).kruskal().is_spanning());
        assert!(kruskal_from_edges(2, [(0, 2, 1)]).is_err());
    }

    #[test]
    fn total_weight_outside_weight_range() {
        let graph = WeightedAdjArray::<u8>::from_undirected_edges(3, [(0, 1, 200), (1, 2, 200)]).unwrap();
        let mst = graph.kruskal();
        assert!(mst.is_spanning());
        assert_eq!(mst.number_of_edges(), 2);
        assert_eq!(mst.total_weight(), None);

        // intermediate sums below `i8::MIN` are fine as long as the total fits
        let mst = kruskal_from_edges(4, [(0, 1, -100i8), (1, 2, -100), (2, 3, 120)]).unwrap();
        assert_eq!(mst.total_weight(), Some(-80));
    }

    #[test]
    fn random_against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for _ in 0..200 {
            let n = rng.random_range(1..=6);
            let p = rng.random_range(0.2..0.8);
            let graph = Graph::random_gnp_undirected(rng, n, p, -5..=10);

            let mst = graph.kruskal();
            match brute_force_mst_weight(&graph) {
                Some(weight) => {
                    assert!(mst.is_spanning());
                    assert_eq!(mst.total_weight(), Some(weight));
                }
                None => assert!(!mst.is_spanning()),
            }
        }
    }
}
