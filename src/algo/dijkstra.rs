/*!
# Dijkstra

Single-source shortest paths for non-negative edge weights. Two strategies compute the
same distances:

- [`DijkstraVariant::ArrayScan`] scans all unsettled nodes for the minimum distance,
  taking *O(n^2 + m)* time. Good for dense graphs.
- [`DijkstraVariant::BinaryHeap`] keeps candidates in a [`MinHeap`]. Improved nodes are
  pushed again and stale entries are skipped once their node is settled (lazy deletion),
  taking *O((n + m) log n)* time.

Negative weights violate the precondition and are not detected.
*/

use super::*;

/// Strategy to find the next node to settle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DijkstraVariant {
    /// Linear scan over all distances
    ArrayScan,
    /// Binary min-heap with lazy deletion
    #[default]
    BinaryHeap,
}

/// Configurable Dijkstra run
pub struct Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    variant: DijkstraVariant,
    stop_at: Option<Node>,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Creates a new heap-based run on `graph`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            variant: DijkstraVariant::default(),
            stop_at: None,
        }
    }

    /// Sets the strategy used to find the next node
    pub fn set_variant(&mut self, variant: DijkstraVariant) {
        self.variant = variant;
    }

    /// Sets the strategy used to find the next node
    pub fn variant(mut self, variant: DijkstraVariant) -> Self {
        self.set_variant(variant);
        self
    }

    /// Sets a stopper node. Once it is settled, the run ends.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. Once it is settled, the run ends.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Computes distances from `source`
    pub fn run(&self, source: Node) -> Result<ShortestPaths<G::Weight>> {
        self.graph.check_vertex(source)?;
        if let Some(target) = self.stop_at {
            self.graph.check_vertex(target)?;
        }

        if self.graph.has_negative_weights() {
            warn!("Dijkstra from {source} runs on a graph with negative weights");
        }

        let mut paths = ShortestPaths::new(self.graph.number_of_nodes(), source);
        match self.variant {
            DijkstraVariant::ArrayScan => self.run_array_scan(&mut paths),
            DijkstraVariant::BinaryHeap => self.run_binary_heap(&mut paths)?,
        }

        debug!(
            "Dijkstra ({:?}) from {source} settled {} of {} nodes",
            self.variant,
            paths.number_of_settled(),
            self.graph.number_of_nodes()
        );

        Ok(paths)
    }

    /// Settles `u` and relaxes its edges into unsettled nodes.
    /// Returns *false* if the run should stop.
    fn settle_and_relax<F>(&self, paths: &mut ShortestPaths<G::Weight>, u: Node, mut improved: F) -> bool
    where
        F: FnMut(Node, Distance<G::Weight>),
    {
        paths.settle(u);
        if self.stop_at == Some(u) {
            return false;
        }

        for e in self.graph.edges_of(u) {
            let v = e.head();
            if !paths.settled(v) && paths.relax(u, v, e.weight()) {
                improved(v, paths.distance(v));
            }
        }
        true
    }

    fn run_array_scan(&self, paths: &mut ShortestPaths<G::Weight>) {
        loop {
            let next = self
                .graph
                .vertices()
                .filter(|&v| !paths.settled(v) && paths.is_reachable(v))
                .min_by_key(|&v| paths.distance(v));

            let Some(u) = next else {
                break;
            };

            if !self.settle_and_relax(paths, u, |_, _| {}) {
                break;
            }
        }
    }

    fn run_binary_heap(&self, paths: &mut ShortestPaths<G::Weight>) -> Result<()> {
        let mut heap = MinHeap::from_vec(
            self.graph
                .vertices()
                .map(|v| (paths.distance(v), v))
                .collect(),
        );

        let mut improved = Vec::new();
        while let Ok((dist, u)) = heap.extract() {
            if !dist.is_finite() {
                break;
            }
            if paths.settled(u) {
                continue;
            }

            let proceed = self.settle_and_relax(paths, u, |v, d| improved.push((d, v)));
            if !proceed {
                break;
            }
            for (d, v) in improved.drain(..) {
                heap.insert(d, v)?;
            }
        }

        Ok(())
    }
}
