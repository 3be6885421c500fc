use std::fmt::{Debug, Display};

use crate::{node::*, weight::*};

/// A weighted, directed edge `WeightedEdge(from, to, weight)`.
///
/// Undirected graphs store every edge twice, once per direction, both with the same weight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge<W>(pub Node, pub Node, pub W);

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

impl<W: Display> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

impl<W: Debug> Debug for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{:?})", self.0, self.1, self.2)
    }
}

impl<W: EdgeWeight> WeightedEdge<W> {
    /// Tail of the edge, i.e. the node it leaves
    #[inline]
    pub fn tail(&self) -> Node {
        self.0
    }

    /// Head of the edge, i.e. the node it enters
    #[inline]
    pub fn head(&self) -> Node {
        self.1
    }

    /// Weight of the edge
    #[inline]
    pub fn weight(&self) -> W {
        self.2
    }

    /// Returns both endpoints as a tuple
    pub fn endpoints(&self) -> (Node, Node) {
        (self.0, self.1)
    }

    /// Reverses the edge by switching the endpoints; the weight is kept
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl<W> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<W: Copy> From<&(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: &(Node, Node, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<W: Copy> From<&WeightedEdge<W>> for WeightedEdge<W> {
    fn from(value: &WeightedEdge<W>) -> Self {
        *value
    }
}
