/*!
# Minimum Spanning Trees

[`SpanningTree`] is the result of [`Kruskal`] and [`Prim`]. Both treat the graph as
undirected, i.e. they expect every edge to be stored in both directions with equal weight.

A disconnected graph is not an error: the result then is a spanning forest (Kruskal) or
the tree of the source's component (Prim), and [`SpanningTree::is_spanning`] returns *false*.
*/

use num::{NumCast, ToPrimitive};

use super::*;

/// Edges of a (minimum) spanning tree or forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<W> {
    edges: Vec<WeightedEdge<W>>,
    /// `None` once the sum left the range of `i128`
    total_weight: Option<i128>,
    number_of_nodes: NumNodes,
}

impl<W: EdgeWeight> SpanningTree<W> {
    pub(crate) fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            edges: Vec::with_capacity(number_of_nodes.saturating_sub(1) as usize),
            total_weight: Some(0),
            number_of_nodes,
        }
    }

    pub(crate) fn push(&mut self, edge: WeightedEdge<W>) {
        self.total_weight = self
            .total_weight
            .and_then(|total| total.checked_add(edge.weight().to_i128()?));
        self.edges.push(edge);
    }

    /// The accepted edges in the order they were chosen
    pub fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    /// Consumes the tree and returns its edges
    pub fn into_edges(self) -> Vec<WeightedEdge<W>> {
        self.edges
    }

    /// Sum of all edge weights, or `None` if it does not fit into `W`.
    /// Intermediate sums may leave the range of `W` as long as the total does not.
    pub fn total_weight(&self) -> Option<W> {
        self.total_weight.and_then(<W as NumCast>::from)
    }

    /// Number of accepted edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns *true* if the edges connect all nodes, i.e. there are `n - 1` of them
    pub fn is_spanning(&self) -> bool {
        self.number_of_edges() + 1 >= self.number_of_nodes
    }
}

/// Minimum-spanning-tree algorithms available on every graph
pub trait MinimumSpanningTree: WeightedAdjacencyList {
    /// Minimum spanning forest via Kruskal's algorithm
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_undirected_edges(3, [(0, 1, 4), (1, 2, 1), (0, 2, 2)]).unwrap();
    /// let mst = g.kruskal();
    /// assert_eq!(mst.total_weight(), Some(3));
    /// assert!(mst.is_spanning());
    /// ```
    fn kruskal(&self) -> SpanningTree<Self::Weight> {
        Kruskal::new(self).compute()
    }

    /// Minimum spanning tree of the component of `source` via Prim's algorithm
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_undirected_edges(3, [(0, 1, 4), (1, 2, 1), (0, 2, 2)]).unwrap();
    /// let mst = g.prim(0, PrimVariant::ArrayScan).unwrap();
    /// assert_eq!(mst.edges(), &[WeightedEdge(0, 2, 2), WeightedEdge(2, 1, 1)]);
    /// ```
    fn prim(&self, source: Node, variant: PrimVariant) -> Result<SpanningTree<Self::Weight>> {
        Prim::new(self).variant(variant).run(source)
    }
}

impl<G: WeightedAdjacencyList> MinimumSpanningTree for G {}
