/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly index
per-node arrays (distances, predecessors, union-find parents) without abstracting over ids.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, used for visited/settled/included markers
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>` for predecessor arrays. This instead
/// uses the `NonZero`-Wrapper so that `Option<OptionalNodeImpl<N>>` has the size of a `Node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}
