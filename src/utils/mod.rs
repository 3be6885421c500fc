/*!
# Utilities

Data structures the algorithms are built on:
- [`IndexedBinaryHeap`](self::heap::IndexedBinaryHeap): min-/max-heap with index-based key updates and [`heap_sort`](self::heap::heap_sort),
- [`UnionFind`](self::union_find::UnionFind): disjoint-set forest used by Kruskal.
*/

use num::{One, Zero};

pub mod heap;
pub mod union_find;

pub use heap::{IndexedBinaryHeap, MaxHeap, MinHeap};
pub use union_find::UnionFind;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
