/*!
# Graph Representations

Both representations store **directed, weighted** edges in per-node out-lists that keep
insertion order. Undirected graphs are modelled by storing each edge once per direction
(see [`GraphEdgeEditing::add_undirected_edge`]).

- [`WeightedAdjArray`]: growable adjacency array. Nodes and edges can be appended at any time.
- [`WeightedCsrGraph`]: immutable compressed-sparse-row graph, obtained by freezing any
  other graph via `WeightedCsrGraph::from(&graph)`.

Both optionally carry a label per node, looked up via [`VertexLabels`].
*/

use crate::{error::Result, prelude::*};
use fxhash::FxHashMap;

mod adj_array;
mod csr;

pub use adj_array::*;
pub use csr::*;

/// Per-node labels plus a reverse lookup, shared by all representations
#[derive(Debug, Clone, Default)]
struct LabelStore {
    labels: Vec<Option<String>>,
    index: FxHashMap<String, Node>,
}

impl LabelStore {
    fn new(n: NumNodes) -> Self {
        Self {
            labels: vec![None; n as usize],
            index: FxHashMap::default(),
        }
    }

    fn push(&mut self, label: Option<String>) -> Node {
        let u = self.labels.len() as Node;
        if let Some(label) = &label {
            self.index.entry(label.clone()).or_insert(u);
        }
        self.labels.push(label);
        u
    }

    fn label_of(&self, u: Node) -> Option<&str> {
        self.labels[u as usize].as_deref()
    }

    fn node_by_label(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }

    fn copy_from<G: VertexLabels>(graph: &G) -> Self {
        let mut store = Self::new(0);
        for u in graph.vertices_range() {
            store.push(graph.label_of(u).map(String::from));
        }
        store
    }
}

/// Returns `Err(GraphError::InvalidVertex)` if any endpoint of `edges` is not below `n`
fn check_edges<W>(n: NumNodes, edges: &[WeightedEdge<W>]) -> Result<()> {
    match edges.iter().find(|e| e.0 >= n || e.1 >= n) {
        Some(e) => Err(GraphError::InvalidVertex {
            node: if e.0 >= n { e.0 } else { e.1 },
            number_of_nodes: n,
        }),
        None => Ok(()),
    }
}
