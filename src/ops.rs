use std::ops::Range;

use itertools::Itertools;
use num::Zero;

use crate::{error::Result, prelude::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a range over all nodes.
    /// In contrast to self.vertices(), the returned range does not borrow self.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if `u` is a node of the graph
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `Err(GraphError::InvalidVertex)` if `u` is not a node of the graph
    fn check_vertex(&self, u: Node) -> Result<()> {
        if self.has_vertex(u) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (directed) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for weighted out-neighborhoods & edges
pub trait WeightedAdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Type of the edge weights
    type Weight: EdgeWeight;

    /// Returns the outgoing edges of `u` in insertion order.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> &[WeightedEdge<Self::Weight>];

    /// Returns the outgoing edges of `u` or `Err(GraphError::InvalidVertex)` if `u >= n`
    fn try_edges_of(&self, u: Node) -> Result<&[WeightedEdge<Self::Weight>]> {
        self.check_vertex(u)?;
        Ok(self.edges_of(u))
    }

    /// Returns an iterator over the heads of all outgoing edges of `u`.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges_of(u).iter().map(|e| e.head())
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.edges_of(u).len() as NumNodes
    }

    /// Returns an iterator over all edges, ordered by tail and then by insertion order
    fn edges(&self) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u).iter().copied())
    }

    /// Returns the weight of the first edge `(u, v)` if it exists.
    /// ** Panics if `u >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Self::Weight> {
        self.edges_of(u)
            .iter()
            .find(|e| e.head() == v)
            .map(|e| e.weight())
    }

    /// Returns *true* if the graph contains at least one edge with negative weight
    fn has_negative_weights(&self) -> bool {
        self.edges().any(|e| e.weight() < Self::Weight::zero())
    }
}

/// Optional labels (names) attached to nodes
pub trait VertexLabels: GraphNodeOrder {
    /// Returns the label of `u` if one was assigned
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> Option<&str>;

    /// Returns the first node carrying the given label
    fn node_by_label(&self, label: &str) -> Option<Node>;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n unlabelled singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to append nodes
pub trait GraphVertexEditing: GraphNodeOrder {
    /// Appends an unlabelled node and returns its id
    fn add_vertex(&mut self) -> Node;

    /// Appends a labelled node and returns its id.
    /// If the label is already in use, [`VertexLabels::node_by_label`] keeps returning
    /// the earlier node.
    fn add_labelled_vertex(&mut self, label: impl Into<String>) -> Node;

    /// Appends one labelled node per label and returns the id of the first one
    fn add_labelled_vertices<I>(&mut self, labels: I) -> Node
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let first = self.number_of_nodes();
        for label in labels {
            self.add_labelled_vertex(label);
        }
        first
    }
}

/// Provides functions to insert edges. There are no removal operations.
pub trait GraphEdgeEditing: WeightedAdjacencyList {
    /// Appends the directed edge *(u,v)* with the given weight.
    /// Parallel edges are allowed.
    ///
    /// Returns `Err(GraphError::InvalidVertex)` without modifying the graph if `u >= n || v >= n`.
    fn add_edge(&mut self, u: Node, v: Node, weight: Self::Weight) -> Result<()>;

    /// Appends the edges *(u,v)* and *(v,u)* with the same weight.
    /// A self-loop is only added once.
    fn add_undirected_edge(&mut self, u: Node, v: Node, weight: Self::Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.add_edge(u, v, weight)?;
        if u != v {
            self.add_edge(v, u, weight)?;
        }
        Ok(())
    }

    /// Appends all edges in the collection.
    /// All endpoints are validated first, so on error the graph remains unchanged.
    fn add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        let edges = edges.into_iter().map(|e| e.into()).collect_vec();
        for e in &edges {
            self.check_vertex(e.tail())?;
            self.check_vertex(e.head())?;
        }
        for WeightedEdge(u, v, w) in edges {
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }

    /// Appends both directions of all edges in the collection.
    /// All endpoints are validated first, so on error the graph remains unchanged.
    fn add_undirected_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        let edges = edges.into_iter().map(|e| e.into()).collect_vec();
        for e in &edges {
            self.check_vertex(e.tail())?;
            self.check_vertex(e.head())?;
        }
        for WeightedEdge(u, v, w) in edges {
            self.add_undirected_edge(u, v, w)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: WeightedAdjacencyList {
    /// Create a graph from a number of nodes and an iterator over directed edges
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>;

    /// Create a graph from a number of nodes and an iterator over undirected edges;
    /// each edge is stored in both directions
    fn from_undirected_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }

    fn from_undirected_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        let mut graph = Self::new(n);
        graph.add_undirected_edges(edges)?;
        Ok(graph)
    }
}
