use super::*;
use crate::testing::test_graph_ops;

/// Growable weighted adjacency array.
///
/// Each node owns a `Vec` of its outgoing edges in insertion order; parallel edges and
/// self-loops are kept as given.
///
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = WeightedAdjArray::<i32>::new(0);
/// let s = graph.add_labelled_vertex("s");
/// let t = graph.add_labelled_vertex("t");
/// graph.add_edge(s, t, 7).unwrap();
///
/// assert_eq!(graph.node_by_label("t"), Some(t));
/// assert_eq!(graph.edges_of(s), &[WeightedEdge(s, t, 7)]);
/// assert!(graph.add_edge(s, 2, 1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WeightedAdjArray<W> {
    out_edges: Vec<Vec<WeightedEdge<W>>>,
    labels: LabelStore,
    num_edges: NumEdges,
}

/// Adjacency array with signed 64-bit weights
pub type Graph = WeightedAdjArray<i64>;

impl<W> Default for WeightedAdjArray<W> {
    fn default() -> Self {
        Self {
            out_edges: Vec::new(),
            labels: LabelStore::default(),
            num_edges: 0,
        }
    }
}

impl<W> GraphNodeOrder for WeightedAdjArray<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_edges.len() as NumNodes
    }
}

impl<W> GraphEdgeOrder for WeightedAdjArray<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<W: EdgeWeight> WeightedAdjacencyList for WeightedAdjArray<W> {
    type Weight = W;

    fn edges_of(&self, u: Node) -> &[WeightedEdge<W>] {
        &self.out_edges[u as usize]
    }
}

impl<W> VertexLabels for WeightedAdjArray<W> {
    fn label_of(&self, u: Node) -> Option<&str> {
        self.labels.label_of(u)
    }

    fn node_by_label(&self, label: &str) -> Option<Node> {
        self.labels.node_by_label(label)
    }
}

impl<W> GraphNew for WeightedAdjArray<W> {
    fn new(n: NumNodes) -> Self {
        Self {
            out_edges: (0..n).map(|_| Vec::new()).collect(),
            labels: LabelStore::new(n),
            num_edges: 0,
        }
    }
}

impl<W> GraphVertexEditing for WeightedAdjArray<W> {
    fn add_vertex(&mut self) -> Node {
        self.out_edges.push(Vec::new());
        self.labels.push(None)
    }

    fn add_labelled_vertex(&mut self, label: impl Into<String>) -> Node {
        self.out_edges.push(Vec::new());
        self.labels.push(Some(label.into()))
    }
}

impl<W: EdgeWeight> GraphEdgeEditing for WeightedAdjArray<W> {
    fn add_edge(&mut self, u: Node, v: Node, weight: W) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.out_edges[u as usize].push(WeightedEdge(u, v, weight));
        self.num_edges += 1;
        Ok(())
    }
}

test_graph_ops!(
    test_adj_array,
    WeightedAdjArray,
    (GraphNew, WeightedAdjacencyList, GraphEdgeEditing, GraphVertexEditing)
);
