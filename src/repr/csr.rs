/*!
# Compressed Sparse Row (CSR) Graph

[`WeightedCsrGraph`] stores all out-lists in one flattened edge array with an offset per
node marking the start of each list. It is immutable: build it from an edge list or freeze
an existing graph with `WeightedCsrGraph::from(&graph)`. Edge order per node equals the
insertion order of the source, so algorithms break ties identically on both
representations.
*/

use itertools::Itertools;

use super::*;
use crate::testing::test_graph_ops;

/// Immutable weighted CSR graph.
///
/// ```
/// use wgraphs::prelude::*;
///
/// let graph = WeightedAdjArray::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, 2)]).unwrap();
/// let csr = WeightedCsrGraph::from(&graph);
///
/// assert_eq!(csr.number_of_edges(), 3);
/// assert_eq!(csr.edges_of(0), graph.edges_of(0));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedCsrGraph<W> {
    offsets: Vec<NumEdges>,
    edges: Vec<WeightedEdge<W>>,
    labels: LabelStore,
}

impl<W: EdgeWeight> WeightedCsrGraph<W> {
    /// Create a graph from a number of nodes and a collection of directed edges.
    /// Edges keep their relative order within each out-list.
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<W>>,
    {
        let edges = edges.into_iter().map(|e| e.into()).collect_vec();
        check_edges(n, &edges)?;
        Ok(Self::from_checked_edges(n, edges, LabelStore::new(n)))
    }

    /// Create a graph from a number of nodes and a collection of undirected edges,
    /// storing each edge once per direction.
    pub fn from_undirected_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<W>>,
    {
        let edges = edges.into_iter().map(|e| e.into()).collect_vec();
        check_edges(n, &edges)?;
        let edges = edges
            .into_iter()
            .flat_map(|e| {
                let rev = (!e.is_loop()).then(|| e.reverse());
                std::iter::once(e).chain(rev)
            })
            .collect_vec();
        Ok(Self::from_checked_edges(n, edges, LabelStore::new(n)))
    }

    /// Stable counting sort of `edges` by tail
    fn from_checked_edges(n: NumNodes, edges: Vec<WeightedEdge<W>>, labels: LabelStore) -> Self {
        let mut offsets = vec![0 as NumEdges; n as usize + 1];
        for e in &edges {
            offsets[e.0 as usize + 1] += 1;
        }
        for i in 1..offsets.len() {
            offsets[i] += offsets[i - 1];
        }

        let mut write_pos = offsets.clone();
        let mut sorted = edges.clone();
        for e in edges {
            let pos = &mut write_pos[e.0 as usize];
            sorted[*pos as usize] = e;
            *pos += 1;
        }

        Self {
            offsets,
            edges: sorted,
            labels,
        }
    }
}

impl<G> From<&G> for WeightedCsrGraph<G::Weight>
where
    G: WeightedAdjacencyList + VertexLabels,
{
    fn from(graph: &G) -> Self {
        let mut offsets = Vec::with_capacity(graph.len() + 1);
        let mut edges = Vec::with_capacity(graph.number_of_edges() as usize);

        offsets.push(0);
        for u in graph.vertices_range() {
            edges.extend_from_slice(graph.edges_of(u));
            offsets.push(edges.len() as NumEdges);
        }

        Self {
            offsets,
            edges,
            labels: LabelStore::copy_from(graph),
        }
    }
}

impl<W> GraphNodeOrder for WeightedCsrGraph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        (self.offsets.len() - 1) as NumNodes
    }
}

impl<W> GraphEdgeOrder for WeightedCsrGraph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<W: EdgeWeight> WeightedAdjacencyList for WeightedCsrGraph<W> {
    type Weight = W;

    fn edges_of(&self, u: Node) -> &[WeightedEdge<W>] {
        let beg = self.offsets[u as usize] as usize;
        let end = self.offsets[u as usize + 1] as usize;
        &self.edges[beg..end]
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.offsets[u as usize + 1] - self.offsets[u as usize]
    }
}

impl<W> VertexLabels for WeightedCsrGraph<W> {
    fn label_of(&self, u: Node) -> Option<&str> {
        self.labels.label_of(u)
    }

    fn node_by_label(&self, label: &str) -> Option<Node> {
        self.labels.node_by_label(label)
    }
}

test_graph_ops!(test_csr_graph, WeightedCsrGraph, (WeightedAdjacencyList));
