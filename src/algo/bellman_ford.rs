/*!
# Bellman-Ford

Single-source shortest paths for arbitrary (also negative) edge weights.

Every edge is relaxed in exactly `n - 1` passes. A further *detection pass* relaxes every
edge once more: if any distance still improves, a negative-weight cycle is reachable from
the source. Starting at the node improved last in that pass, following predecessors `n`
times is guaranteed to end on a cycle of the predecessor graph, which is then extracted.

Path lengths are accumulated in `i128` and only converted back to the weight type once the
run is finished. Hence, for weights of up to 64 bits, no intermediate distance overflows and
the detection pass sees every improvement. Final distances outside the range of the weight
type are saturated as described in [`Distance::extend`].
*/

use num::ToPrimitive;

use super::*;

/// Type in which path lengths are accumulated during a run
type PathLength = i128;

/// Outcome of a Bellman-Ford run
#[derive(Debug, Clone)]
pub struct BellmanFordResult<W> {
    paths: ShortestPaths<W>,
    negative_cycle: Option<Vec<Node>>,
}

impl<W: EdgeWeight> BellmanFordResult<W> {
    /// Returns *true* if no negative cycle is reachable from the source
    pub fn is_success(&self) -> bool {
        self.negative_cycle.is_none()
    }

    /// Distances and predecessors. Only meaningful if [`BellmanFordResult::is_success`].
    pub fn paths(&self) -> &ShortestPaths<W> {
        &self.paths
    }

    /// Consumes the result and returns the distances and predecessors
    pub fn into_paths(self) -> ShortestPaths<W> {
        self.paths
    }

    /// A negative cycle reachable from the source as a closed node sequence
    /// `c_0, c_1, ..., c_k, c_0` in edge direction, if one was detected
    pub fn negative_cycle(&self) -> Option<&[Node]> {
        self.negative_cycle.as_deref()
    }
}

/// Configurable Bellman-Ford run
pub struct BellmanFord<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
}

impl<'a, G> BellmanFord<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Creates a new run on `graph`
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Relaxes every edge once and returns the last node whose distance improved
    fn relax_all(&self, paths: &mut ShortestPaths<PathLength>) -> Option<Node> {
        let mut last = None;
        for e in self.graph.edges() {
            let weight = e.weight().to_i128().unwrap_or(PathLength::MAX);
            if paths.relax(e.tail(), e.head(), weight) {
                last = Some(e.head());
            }
        }
        last
    }

    /// Computes distances from `source` or detects a negative cycle reachable from it
    pub fn run(&self, source: Node) -> Result<BellmanFordResult<G::Weight>> {
        self.graph.check_vertex(source)?;

        let n = self.graph.number_of_nodes();
        let mut paths = ShortestPaths::new(n, source);

        for _ in 1..n {
            self.relax_all(&mut paths);
        }

        let negative_cycle = match self.relax_all(&mut paths) {
            None => {
                for v in self.graph.vertices_range() {
                    if paths.is_reachable(v) {
                        paths.settle(v);
                    }
                }
                debug!("Bellman-Ford from {source} succeeded after {} passes", n.max(1) - 1);
                None
            }
            Some(v) => {
                trace!("Detection pass still improves node {v}");
                let cycle = Self::extract_cycle(&paths, v)?;
                warn!("Bellman-Ford from {source} found a negative cycle {cycle:?}");
                Some(cycle)
            }
        };

        Ok(BellmanFordResult {
            paths: paths.convert(),
            negative_cycle,
        })
    }

    /// Walks `n` predecessors from `v` onto the cycle, then collects the cycle
    /// until a node repeats.
    fn extract_cycle(paths: &ShortestPaths<PathLength>, v: Node) -> Result<Vec<Node>> {
        let pred = |u: Node| {
            paths
                .predecessor(u)
                .ok_or(GraphError::SourceUnreachableCycle { node: u })
        };

        let mut u = v;
        for _ in 0..paths.len() {
            u = pred(u)?;
        }

        let mut visited = NodeBitSet::new(paths.len() as NumNodes);
        let mut walk = Vec::new();
        while !visited.set_bit(u) {
            walk.push(u);
            u = pred(u)?;
        }

        // `u` is the first repeated node; the walk runs against edge direction
        let start = walk.iter().position(|&w| w == u).unwrap_or_default();
        let mut cycle = walk.split_off(start);
        cycle.reverse();
        cycle.push(cycle[0]);
        Ok(cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::floyd_warshall};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn cycle_weight(graph: &Graph, cycle: &[Node]) -> i64 {
        cycle
            .iter()
            .tuple_windows()
            .map(|(&u, &v)| graph.weight_of(u, v).unwrap())
            .sum()
    }

    fn assert_negative_cycle(graph: &Graph, result: &BellmanFordResult<i64>) {
        let cycle = result.negative_cycle().unwrap();
        assert!(cycle.len() >= 2);
        assert_eq!(cycle.first(), cycle.last());
        assert_eq!(cycle[..cycle.len() - 1].iter().unique().count(), cycle.len() - 1);
        assert!(cycle_weight(graph, cycle) < 0);
    }

    #[test]
    fn negative_cycle_example() {
        let mut graph = Graph::new(0);
        let [s, t, x, y, z] = ["s", "t", "x", "y", "z"].map(|l| graph.add_labelled_vertex(l));
        graph
            .add_edges([
                (s, t, 6),
                (s, y, 7),
                (t, x, 5),
                (t, y, -8),
                (t, z, -4),
                (x, t, -2),
                (y, x, 2),
                (y, z, 9),
                (z, s, 2),
                (z, x, -4),
            ])
            .unwrap();

        let result = graph.bellman_ford(s).unwrap();
        assert!(!result.is_success());
        assert_negative_cycle(&graph, &result);
    }

    #[test]
    fn negative_weights_without_cycle() {
        let graph = Graph::from_edges(
            5,
            [
                (0, 1, 6),
                (0, 3, 7),
                (1, 2, 5),
                (1, 3, 8),
                (1, 4, -4),
                (2, 1, -2),
                (3, 2, -3),
                (3, 4, 9),
                (4, 0, 2),
                (4, 2, 7),
            ],
        )
        .unwrap();

        let result = graph.bellman_ford(0).unwrap();
        assert!(result.is_success());
        assert_eq!(result.negative_cycle(), None);

        let dists = result
            .paths()
            .distances()
            .iter()
            .map(|d| d.finite().unwrap())
            .collect_vec();
        assert_eq!(dists, vec![0, 2, 4, 7, -2]);
        assert_eq!(result.paths().path_to(4), Some(vec![0, 3, 2, 1, 4]));
        assert!(graph.vertices().all(|v| result.paths().settled(v)));
    }

    #[test]
    fn unreachable_cycle_is_ignored() {
        let graph = Graph::from_edges(4, [(0, 1, 3), (2, 3, -5), (3, 2, 1)]).unwrap();
        let result = graph.bellman_ford(0).unwrap();

        assert!(result.is_success());
        assert_eq!(result.paths().distance(1), Distance::Finite(3));
        assert!(!result.paths().is_reachable(2));
        assert!(!result.paths().settled(2));
    }

    #[test]
    fn negative_self_loop() {
        let graph = Graph::from_edges(2, [(0, 1, 1), (1, 1, -1)]).unwrap();
        let result = graph.bellman_ford(0).unwrap();
        assert_eq!(result.negative_cycle(), Some([1, 1].as_slice()));
    }

    #[test]
    fn single_node() {
        let graph = Graph::new(1);
        let result = graph.bellman_ford(0).unwrap();
        assert!(result.is_success());
        assert!(graph.bellman_ford(1).is_err());
    }

    #[test]
    fn negative_cycle_below_min_weight() {
        let graph = WeightedAdjArray::<i8>::from_edges(3, [(0, 1, -100), (1, 0, -100)]).unwrap();
        let result = graph.bellman_ford(0).unwrap();
        assert!(!result.is_success());
        assert_eq!(result.negative_cycle(), Some([0, 1, 0].as_slice()));

        // the cycle only becomes visible once distances drop below `i8::MIN`
        let graph = WeightedAdjArray::<i8>::from_edges(3, [(0, 1, -128), (1, 2, -2), (2, 1, 1)]).unwrap();
        let result = graph.bellman_ford(0).unwrap();
        assert_eq!(result.negative_cycle(), Some([1, 2, 1].as_slice()));

        let graph = Graph::from_edges(2, [(0, 1, i64::MIN), (1, 0, -1)]).unwrap();
        let result = graph.bellman_ford(0).unwrap();
        assert_eq!(result.negative_cycle(), Some([1, 0, 1].as_slice()));
    }

    #[test]
    fn distances_below_min_weight_saturate() {
        let graph = WeightedAdjArray::<i8>::from_edges(3, [(0, 1, -100), (1, 2, -100)]).unwrap();
        let result = graph.bellman_ford(0).unwrap();
        assert!(result.is_success());
        assert_eq!(
            result.paths().distances(),
            &[Distance::Finite(0), Distance::Finite(-100), Distance::Finite(i8::MIN)]
        );
        assert_eq!(result.paths().path_to(2), Some(vec![0, 1, 2]));

        let graph = WeightedAdjArray::<u8>::from_edges(3, [(0, 1, 200), (1, 2, 200)]).unwrap();
        let result = graph.bellman_ford(0).unwrap();
        assert!(result.is_success());
        assert_eq!(result.paths().distance(2), Distance::Infinite);
        assert_eq!(result.paths().predecessor(2), Some(1));
    }

    #[test]
    fn random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [2, 5, 10, 20] {
            for _ in 0..20 {
                let p = rng.random_range(0.1..0.5);
                let graph: Graph = Graph::random_gnp(rng, n, p, -3..=15);
                let reference = floyd_warshall(&graph);
                let has_negative_cycle = (0..n as usize).any(|u| reference[u][u].is_some_and(|d| d < 0));

                for source in graph.vertices() {
                    let result = graph.bellman_ford(source).unwrap();
                    let reaches_cycle = graph
                        .vertices()
                        .any(|v| reference[source as usize][v as usize].is_some() && reference[v as usize][v as usize].is_some_and(|d| d < 0));

                    if !has_negative_cycle {
                        assert!(result.is_success());
                        let expected = reference[source as usize]
                            .iter()
                            .map(|d| d.map_or(Distance::Infinite, Distance::Finite))
                            .collect_vec();
                        assert_eq!(result.paths().distances(), expected.as_slice());

                        let nonneg: WeightedAdjArray<i64> = Graph::from_edges(
                            n,
                            graph.edges().filter(|e| e.weight() >= 0),
                        )
                        .unwrap();
                        let dijkstra = nonneg.dijkstra(source, DijkstraVariant::BinaryHeap).unwrap();
                        let bf = nonneg.bellman_ford(source).unwrap();
                        assert_eq!(dijkstra.distances(), bf.paths().distances());
                    } else if reaches_cycle {
                        assert_negative_cycle(&graph, &result);
                    } else {
                        assert!(result.is_success());
                    }
                }
            }
        }
    }
}
