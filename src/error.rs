/*!
# Errors

All fallible operations of this crate return [`Result<T>`] with a [`GraphError`].

Only caller-input violations and heap misuse are errors. Algorithmic outcomes such as a
disconnected graph (see [`SpanningTree::is_spanning`](crate::algo::SpanningTree::is_spanning))
or a negative-weight cycle (see
[`BellmanFordResult::negative_cycle`](crate::algo::BellmanFordResult::negative_cycle))
are part of the normal result types.
*/

use thiserror::Error;

use crate::node::*;

/// Error type for graph construction, heap operations and algorithm runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node id outside of `0..number_of_nodes` was provided
    #[error("Invalid vertex {node}: graph has {number_of_nodes} nodes")]
    InvalidVertex {
        node: Node,
        number_of_nodes: NumNodes,
    },

    /// Extract/peek on an empty heap
    #[error("Heap is empty")]
    HeapEmpty,

    /// Insert into a fixed-capacity heap that is already full
    #[error("Heap is full (capacity {capacity})")]
    HeapFull { capacity: usize },

    /// Key update on a position that does not hold an entry
    #[error("Heap index {index} out of bounds (heap size {len})")]
    InvalidHeapIndex { index: usize, len: usize },

    /// Key update that moves away from the heap's extreme
    #[error("Key update at heap index {index} moves away from the heap's extreme")]
    InvalidKeyUpdate { index: usize },

    /// The predecessor chain ended while reconstructing a negative cycle.
    /// This indicates a bug and is never expected to surface.
    #[error("Predecessor chain of node {node} ended while reconstructing a negative cycle")]
    SourceUnreachableCycle { node: Node },
}

/// Result type used throughout this crate
pub type Result<T> = std::result::Result<T, GraphError>;
