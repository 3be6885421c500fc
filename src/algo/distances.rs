/*!
# Single-Source Shortest Paths

[`ShortestPaths`] is the result object shared by all shortest-path algorithms. It holds,
per node, the best known [`Distance`] from the source and the predecessor on such a path.
Creating it performs the *single-source initialisation* (source at distance zero, every
other node at `Infinite` without predecessor); algorithms then improve it exclusively via
[`ShortestPaths::relax`].

The [`ShortestPath`] trait exposes the algorithms directly on every graph.
*/

use num::NumCast;

use super::*;

/// Distances and predecessors of one shortest-path run
#[derive(Debug, Clone)]
pub struct ShortestPaths<W> {
    source: Node,
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<OptionalNode>>,
    settled: NodeBitSet,
}

impl<W: EdgeWeight> ShortestPaths<W> {
    /// Single-source initialisation for a graph with `n` nodes.
    /// ** Panics if `source >= n` **
    pub fn new(n: NumNodes, source: Node) -> Self {
        assert!(source < n);
        let mut distances = vec![Distance::Infinite; n as usize];
        distances[source as usize] = Distance::zero();

        Self {
            source,
            distances,
            predecessors: vec![None; n as usize],
            settled: NodeBitSet::new(n),
        }
    }

    /// The node all distances are measured from
    pub fn source(&self) -> Node {
        self.source
    }

    /// Number of nodes covered
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Always *false* as the source is covered
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Best known distance of `v`
    /// ** Panics if `v >= n` **
    pub fn distance(&self, v: Node) -> Distance<W> {
        self.distances[v as usize]
    }

    /// All distances indexed by node
    pub fn distances(&self) -> &[Distance<W>] {
        &self.distances
    }

    /// Predecessor of `v` on the best known path; `None` for the source and unreached nodes
    /// ** Panics if `v >= n` **
    pub fn predecessor(&self, v: Node) -> Option<Node> {
        self.predecessors[v as usize].map(|p| p.get())
    }

    /// Returns *true* if a path from the source to `v` is known
    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distances[v as usize].is_finite()
    }

    /// Returns *true* if the distance of `v` is final.
    /// Runs that stopped at a target leave the remaining nodes unsettled.
    /// ** Panics if `v >= n` **
    pub fn settled(&self, v: Node) -> bool {
        self.settled.get_bit(v)
    }

    /// Number of settled nodes
    pub fn number_of_settled(&self) -> NumNodes {
        self.settled.cardinality()
    }

    /// Reconstructs the path `source, ..., v` by following predecessors.
    ///
    /// Returns `None` if `v` is unreachable or the predecessor chain does not lead back to
    /// the source within `n` steps (which only happens after a negative cycle was found).
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.is_reachable(v) {
            return None;
        }

        let mut path = vec![v];
        let mut u = v;
        while u != self.source {
            if path.len() > self.len() {
                return None;
            }
            u = self.predecessor(u)?;
            path.push(u);
        }

        path.reverse();
        Some(path)
    }

    /// If `distance(u) + weight < distance(v)`, updates the distance and predecessor of `v`
    /// and returns *true*. Never extends an `Infinite` distance.
    /// ** Panics if `u >= n || v >= n` **
    pub fn relax(&mut self, u: Node, v: Node, weight: W) -> bool {
        let Distance::Finite(_) = self.distances[u as usize] else {
            return false;
        };

        let candidate = self.distances[u as usize].extend(weight);
        if candidate < self.distances[v as usize] {
            self.distances[v as usize] = candidate;
            self.predecessors[v as usize] = OptionalNode::new(u);
            true
        } else {
            false
        }
    }

    /// Marks the distance of `v` as final and returns *true* if it already was
    pub(crate) fn settle(&mut self, v: Node) -> bool {
        self.settled.set_bit(v)
    }

    /// Converts all distances to the weight type `V`, keeping predecessors and settled nodes.
    /// Distances below `V::min_value()` become `Finite(V::min_value())`, distances above
    /// `V::max_value()` become `Infinite`.
    pub(crate) fn convert<V: EdgeWeight>(self) -> ShortestPaths<V> {
        let distances = self
            .distances
            .into_iter()
            .map(|d| match d {
                Distance::Infinite => Distance::Infinite,
                Distance::Finite(d) => match <V as NumCast>::from(d) {
                    Some(d) => Distance::Finite(d),
                    None if d < W::zero() => Distance::Finite(V::min_value()),
                    None => Distance::Infinite,
                },
            })
            .collect();

        ShortestPaths {
            source: self.source,
            distances,
            predecessors: self.predecessors,
            settled: self.settled,
        }
    }
}

/// Shortest-path algorithms available on every graph
pub trait ShortestPath: WeightedAdjacencyList {
    /// Hop distances from `source` via breadth-first search, ignoring weights.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [(0, 1, 7), (1, 2, 7)]).unwrap();
    /// let paths = g.bfs_distances(0).unwrap();
    /// assert_eq!(paths.distance(2), Distance::Finite(2));
    /// ```
    fn bfs_distances(&self, source: Node) -> Result<ShortestPaths<NumNodes>> {
        BfsDistance::new(self).run(source)
    }

    /// Shortest distances from `source` for non-negative weights.
    /// Negative weights are not detected and yield meaningless results.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [(0, 1, 7), (1, 2, 1), (0, 2, 9)]).unwrap();
    /// let paths = g.dijkstra(0, DijkstraVariant::BinaryHeap).unwrap();
    /// assert_eq!(paths.distance(2), Distance::Finite(8));
    /// assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    /// ```
    fn dijkstra(
        &self,
        source: Node,
        variant: DijkstraVariant,
    ) -> Result<ShortestPaths<Self::Weight>> {
        Dijkstra::new(self).variant(variant).run(source)
    }

    /// Shortest distances from `source` for arbitrary weights; reports a negative cycle
    /// reachable from `source` if one exists.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [(0, 1, 4), (1, 2, -3), (2, 1, 1)]).unwrap();
    /// let result = g.bellman_ford(0).unwrap();
    /// assert!(!result.is_success());
    /// assert_eq!(result.negative_cycle().unwrap().len(), 3);
    /// ```
    fn bellman_ford(&self, source: Node) -> Result<BellmanFordResult<Self::Weight>> {
        BellmanFord::new(self).run(source)
    }
}

impl<G: WeightedAdjacencyList> ShortestPath for G {}
