/*!
# Unweighted Distances

[`BfsDistance`] computes hop counts from a source with a breadth-first search. Nodes are
marked as discovered before they are enqueued, so each node enters the queue at most once.
*/

use std::collections::VecDeque;

use super::*;

/// Breadth-first search computing hop distances and a BFS tree
pub struct BfsDistance<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    stop_at: Option<Node>,
}

impl<'a, G> BfsDistance<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Creates a new search on `graph` that explores everything reachable
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            stop_at: None,
        }
    }

    /// Sets a stopper node. Once it is dequeued, the search ends.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. Once it is dequeued, the search ends.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Runs the search from `source`
    pub fn run(&self, source: Node) -> Result<ShortestPaths<NumNodes>> {
        self.graph.check_vertex(source)?;
        if let Some(target) = self.stop_at {
            self.graph.check_vertex(target)?;
        }

        let mut paths = ShortestPaths::new(self.graph.number_of_nodes(), source);
        let mut discovered = self.graph.vertex_bitset_unset();
        let mut queue = VecDeque::from([source]);
        discovered.set_bit(source);

        while let Some(u) = queue.pop_front() {
            paths.settle(u);
            if self.stop_at == Some(u) {
                break;
            }

            for v in self.graph.neighbors_of(u) {
                if !discovered.set_bit(v) {
                    paths.relax(u, v, 1);
                    queue.push_back(v);
                }
            }
        }

        debug!(
            "BFS from {source} reached {} of {} nodes",
            paths.number_of_settled(),
            self.graph.number_of_nodes()
        );

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn example_graph() -> Graph {
        Graph::from_undirected_edges(
            6,
            [(0, 1), (0, 3), (1, 5), (2, 5), (3, 4), (4, 5), (0, 5)].map(|(u, v)| (u, v, 1)),
        )
        .unwrap()
    }

    #[test]
    fn direct_edge() {
        let graph = example_graph();
        let paths = graph.bfs_distances(0).unwrap();

        assert_eq!(paths.distance(5), Distance::Finite(1));
        assert_eq!(paths.path_to(5), Some(vec![0, 5]));
        assert_eq!(
            paths.distances().iter().map(|d| d.finite().unwrap()).collect_vec(),
            vec![0, 1, 2, 1, 2, 1]
        );
    }

    #[test]
    fn ignores_weights() {
        let graph = Graph::from_edges(3, [(0, 1, 100), (1, 2, 100), (0, 2, 1000)]).unwrap();
        let paths = graph.bfs_distances(0).unwrap();
        assert_eq!(paths.distance(2), Distance::Finite(1));
    }

    #[test]
    fn unreachable() {
        let graph = Graph::from_edges(4, [(0, 1, 1), (2, 3, 1)]).unwrap();
        let paths = graph.bfs_distances(0).unwrap();

        assert!(paths.is_reachable(1));
        assert_eq!(paths.distance(2), Distance::Infinite);
        assert_eq!(paths.predecessor(3), None);
        assert_eq!(paths.number_of_settled(), 2);
    }

    #[test]
    fn stop_at() {
        let graph = Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
        let paths = BfsDistance::new(&graph).stop_at(1).run(0).unwrap();

        assert_eq!(paths.distance(1), Distance::Finite(1));
        assert!(paths.settled(1));
        assert!(!paths.settled(2));
        assert_eq!(paths.distance(3), Distance::Infinite);
    }

    #[test]
    fn invalid_source() {
        let graph = example_graph();
        assert_eq!(
            graph.bfs_distances(6).unwrap_err(),
            GraphError::InvalidVertex {
                node: 6,
                number_of_nodes: 6
            }
        );
        assert!(BfsDistance::new(&graph).stop_at(9).run(0).is_err());
    }
}
