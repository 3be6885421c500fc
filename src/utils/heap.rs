/*!
# Indexed Binary Heap

[`IndexedBinaryHeap`] is a 0-indexed, array-backed binary heap over `(key, payload)` entries.
Whether it behaves as a min- or a max-heap is decided by the [`HeapOrder`] type parameter
([`MinOrder`] or [`MaxOrder`]), so both share one implementation.

In contrast to `std::collections::BinaryHeap`, entries are addressed by their current array
index: [`IndexedBinaryHeap::insert`] and [`IndexedBinaryHeap::update_key`] report the index an
entry ends up at, and [`IndexedBinaryHeap::update_key`] moves an entry towards the root after
its key became more extreme. Keys can only move *towards* the extreme; other updates are
rejected with [`GraphError::InvalidKeyUpdate`].

The heap algorithms of this crate use the simpler *lazy deletion* pattern instead:
improved entries are pushed again and stale ones are skipped on extraction.

```
use wgraphs::utils::heap::*;

let mut heap = MinHeap::new();
heap.insert(5, 'a').unwrap();
heap.insert(3, 'b').unwrap();
let idx = heap.position(|&p| p == 'a').unwrap();
heap.decrease_key(idx, 1).unwrap();

assert_eq!(heap.extract().unwrap(), (1, 'a'));
assert_eq!(heap.extract().unwrap(), (3, 'b'));
assert!(heap.extract().is_err());
```
*/

use std::marker::PhantomData;

use crate::error::{GraphError, Result};

/// Decides which of two keys is closer to the root
pub trait HeapOrder {
    /// Returns *true* if `a` is strictly more extreme than `b`
    fn precedes<K: Ord>(a: &K, b: &K) -> bool;
}

/// Smallest key at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

/// Largest key at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

impl HeapOrder for MinOrder {
    #[inline]
    fn precedes<K: Ord>(a: &K, b: &K) -> bool {
        a < b
    }
}

impl HeapOrder for MaxOrder {
    #[inline]
    fn precedes<K: Ord>(a: &K, b: &K) -> bool {
        a > b
    }
}

/// Array-backed binary heap with index-based key updates
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<K, P, O = MinOrder> {
    entries: Vec<(K, P)>,
    capacity: Option<usize>,
    _order: PhantomData<O>,
}

/// Heap with the smallest key at the root
pub type MinHeap<K, P> = IndexedBinaryHeap<K, P, MinOrder>;

/// Heap with the largest key at the root
pub type MaxHeap<K, P> = IndexedBinaryHeap<K, P, MaxOrder>;

impl<K: Ord, P, O: HeapOrder> Default for IndexedBinaryHeap<K, P, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, P, O: HeapOrder> IndexedBinaryHeap<K, P, O> {
    /// Creates an empty heap that grows as needed
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            capacity: None,
            _order: PhantomData,
        }
    }

    /// Creates an empty heap that rejects inserts beyond `capacity` entries
    pub fn with_fixed_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity: Some(capacity),
            _order: PhantomData,
        }
    }

    /// Builds a growable heap from arbitrary entries in *O(n)* by sifting down every
    /// inner node, starting with the last one
    pub fn from_vec(entries: Vec<(K, P)>) -> Self {
        let mut heap = Self {
            entries,
            capacity: None,
            _order: PhantomData,
        };
        for i in (0..heap.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns *true* if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the fixed capacity or `None` for a growable heap
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Removes all entries; a fixed capacity is kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over all entries in array order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &P)> + '_ {
        self.entries.iter().map(|(k, p)| (k, p))
    }

    /// Returns the entry at array position `index`
    pub fn get(&self, index: usize) -> Option<(&K, &P)> {
        self.entries.get(index).map(|(k, p)| (k, p))
    }

    /// Returns the current index of the first entry (in array order) whose payload
    /// satisfies `predicate`. Takes linear time.
    pub fn position<F: FnMut(&P) -> bool>(&self, mut predicate: F) -> Option<usize> {
        self.entries.iter().position(|(_, p)| predicate(p))
    }

    /// Returns the root entry without removing it
    pub fn peek(&self) -> Result<(&K, &P)> {
        self.get(0).ok_or(GraphError::HeapEmpty)
    }

    /// Inserts an entry and returns its final index
    pub fn insert(&mut self, key: K, payload: P) -> Result<usize> {
        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity {
                return Err(GraphError::HeapFull { capacity });
            }
        }

        self.entries.push((key, payload));
        Ok(self.sift_up(self.entries.len() - 1))
    }

    /// Removes and returns the root entry
    pub fn extract(&mut self) -> Result<(K, P)> {
        if self.entries.is_empty() {
            return Err(GraphError::HeapEmpty);
        }

        let root = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Replaces the key of the entry at `index` by one that is at least as extreme and
    /// returns the entry's new index.
    ///
    /// Fails with [`GraphError::InvalidHeapIndex`] if `index` holds no entry and with
    /// [`GraphError::InvalidKeyUpdate`] if the new key is less extreme than the current one.
    pub fn update_key(&mut self, index: usize, key: K) -> Result<usize> {
        let len = self.entries.len();
        let Some(entry) = self.entries.get_mut(index) else {
            return Err(GraphError::InvalidHeapIndex { index, len });
        };

        if O::precedes(&entry.0, &key) {
            return Err(GraphError::InvalidKeyUpdate { index });
        }

        entry.0 = key;
        Ok(self.sift_up(index))
    }

    /// Drains the heap, returning entries from the most to the least extreme key
    pub fn into_sorted_vec(mut self) -> Vec<(K, P)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(entry) = self.extract() {
            sorted.push(entry);
        }
        sorted
    }

    /// Moves the entry at `idx` towards the root while it precedes its parent
    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !O::precedes(&self.entries[idx].0, &self.entries[parent].0) {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
        idx
    }

    /// Moves the entry at `idx` towards the leaves while a child is strictly more extreme.
    /// Among two equally extreme children the left one is taken.
    fn sift_down(&mut self, idx: usize) {
        sift_down_by(&mut self.entries, idx, |a, b| O::precedes(&a.0, &b.0));
    }
}

impl<K: Ord, P> IndexedBinaryHeap<K, P, MinOrder> {
    /// [`IndexedBinaryHeap::update_key`] for min-heaps
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<usize> {
        self.update_key(index, key)
    }
}

impl<K: Ord, P> IndexedBinaryHeap<K, P, MaxOrder> {
    /// [`IndexedBinaryHeap::update_key`] for max-heaps
    pub fn increase_key(&mut self, index: usize, key: K) -> Result<usize> {
        self.update_key(index, key)
    }
}

/// Iterative sift-down on `data` where `precedes(a, b)` is *true* if `a` belongs above `b`
fn sift_down_by<T, F>(data: &mut [T], mut idx: usize, precedes: F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = data.len();
    loop {
        let left = 2 * idx + 1;
        if left >= len {
            break;
        }

        let right = left + 1;
        let child = if right < len && precedes(&data[right], &data[left]) {
            right
        } else {
            left
        };

        if !precedes(&data[child], &data[idx]) {
            break;
        }
        data.swap(idx, child);
        idx = child;
    }
}

/// Sorts `data` in ascending order in place using an in-place max-heap.
///
/// ```
/// let mut data = [5, 1, 4, 1, 3];
/// wgraphs::utils::heap::heap_sort(&mut data);
/// assert_eq!(data, [1, 1, 3, 4, 5]);
/// ```
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    let precedes = |a: &T, b: &T| a > b;

    for i in (0..data.len() / 2).rev() {
        sift_down_by(data, i, precedes);
    }

    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down_by(&mut data[..end], 0, precedes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn assert_heap_property<K: Ord, P, O: HeapOrder>(heap: &IndexedBinaryHeap<K, P, O>) {
        for i in 1..heap.len() {
            let parent = heap.get((i - 1) / 2).unwrap().0;
            let child = heap.get(i).unwrap().0;
            assert!(!O::precedes(child, parent));
        }
    }

    #[test]
    fn min_and_max_order() {
        let keys = [7, 3, 9, 3, 1, 8];

        let mut min_heap = MinHeap::new();
        let mut max_heap = MaxHeap::new();
        for (i, &k) in keys.iter().enumerate() {
            min_heap.insert(k, i).unwrap();
            max_heap.insert(k, i).unwrap();
        }
        assert_heap_property(&min_heap);
        assert_heap_property(&max_heap);

        assert_eq!(min_heap.peek().unwrap(), (&1, &4));
        assert_eq!(max_heap.peek().unwrap(), (&9, &2));

        let min_keys = min_heap.into_sorted_vec().into_iter().map(|(k, _)| k).collect_vec();
        let max_keys = max_heap.into_sorted_vec().into_iter().map(|(k, _)| k).collect_vec();
        assert_eq!(min_keys, vec![1, 3, 3, 7, 8, 9]);
        assert_eq!(max_keys, vec![9, 8, 7, 3, 3, 1]);
    }

    #[test]
    fn empty_and_full() {
        let mut heap = MinHeap::<u32, ()>::with_fixed_capacity(2);
        assert_eq!(heap.extract(), Err(GraphError::HeapEmpty));
        assert_eq!(heap.peek(), Err(GraphError::HeapEmpty));

        heap.insert(2, ()).unwrap();
        heap.insert(1, ()).unwrap();
        assert_eq!(heap.insert(0, ()), Err(GraphError::HeapFull { capacity: 2 }));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.capacity(), Some(2));

        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.insert(0, ()), Ok(0));
    }

    #[test]
    fn update_key() {
        let mut heap = MaxHeap::from_vec(vec![(4, 'a'), (10, 'b'), (2, 'c'), (7, 'd')]);
        assert_heap_property(&heap);
        assert_eq!(heap.peek().unwrap(), (&10, &'b'));

        let idx = heap.position(|&p| p == 'c').unwrap();
        assert_eq!(
            heap.increase_key(idx, 1),
            Err(GraphError::InvalidKeyUpdate { index: idx })
        );
        assert_eq!(
            heap.update_key(4, 1),
            Err(GraphError::InvalidHeapIndex { index: 4, len: 4 })
        );

        assert_eq!(heap.increase_key(idx, 12), Ok(0));
        assert_heap_property(&heap);
        assert_eq!(heap.extract().unwrap(), (12, 'c'));

        let idx = heap.position(|&p| p == 'a').unwrap();
        let new_idx = heap.increase_key(idx, 4).unwrap();
        assert_eq!(heap.get(new_idx), Some((&4, &'a')));
    }

    #[test]
    fn insert_returns_index() {
        let mut heap = MinHeap::new();
        assert_eq!(heap.insert(5, ()), Ok(0));
        assert_eq!(heap.insert(6, ()), Ok(1));
        assert_eq!(heap.insert(4, ()), Ok(0));
        assert_eq!(heap.insert(7, ()), Ok(3));
    }

    #[test]
    fn ties_prefer_left_child() {
        let mut heap = MinHeap::from_vec(vec![(0, 'r'), (2, 'l'), (2, 'm'), (5, 'z')]);
        assert_eq!(heap.extract().unwrap(), (0, 'r'));
        // (5, 'z') moved to the root and sinks into the left one of two equal children
        assert_eq!(heap.peek().unwrap(), (&2, &'l'));
        assert_eq!(heap.get(1), Some((&5, &'z')));
    }

    #[test]
    fn random_operations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..50 {
            let mut heap = MinHeap::new();
            let mut reference = Vec::new();

            for i in 0..200 {
                match rng.random_range(0..4) {
                    0 if !heap.is_empty() => {
                        let (k, p) = heap.extract().unwrap();
                        let min = *reference.iter().map(|(k, _)| k).min().unwrap();
                        assert_eq!(k, min);
                        let pos = reference.iter().position(|&e| e == (k, p)).unwrap();
                        reference.swap_remove(pos);
                    }
                    1 if !heap.is_empty() => {
                        let idx = rng.random_range(0..heap.len());
                        let (&k, &p) = heap.get(idx).unwrap();
                        let new_key = k - rng.random_range(0..20);
                        heap.decrease_key(idx, new_key).unwrap();
                        let pos = reference.iter().position(|&e| e == (k, p)).unwrap();
                        reference[pos].0 = new_key;
                    }
                    _ => {
                        let k = rng.random_range(-100i32..100);
                        heap.insert(k, i).unwrap();
                        reference.push((k, i));
                    }
                }
                assert_heap_property(&heap);
                assert_eq!(heap.len(), reference.len());
            }
        }
    }

    #[test]
    fn heap_sort_sorts() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for n in [0, 1, 2, 3, 10, 100, 257] {
            let mut data = (0..n).map(|_| rng.random_range(0..50u32)).collect_vec();
            let mut expected = data.clone();
            expected.sort();

            heap_sort(&mut data);
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn from_vec_matches_inserts() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let entries = (0..100).map(|i| (rng.random_range(0..30u8), i)).collect_vec();

        let heap = MaxHeap::from_vec(entries.clone());
        assert_heap_property(&heap);

        let keys = heap.into_sorted_vec().into_iter().map(|(k, _)| k).collect_vec();
        let mut expected = entries.iter().map(|(k, _)| *k).collect_vec();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(keys, expected);
    }
}
