//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) insert, find-min and delete-min
//! - O(log n) decrease_key and delete (bubble up, no cutting)
//! - O(log n) union of the root lists, after relocating the smaller heap's nodes
//!
//! # Algorithm Overview
//!
//! **Binomial Tree Bₖ**: B₀ is a single node; Bₖ is two B_{k-1} trees where
//! one root becomes the first child of the other. Bₖ has exactly 2ᵏ nodes and
//! height k, and its root's children are B_{k-1}, ..., B₀ in that order.
//!
//! **Forest**: the roots form a list in strictly increasing degree order, at
//! most one tree per degree. The degrees present are the set bits of n.
//!
//! **Union** merges two root lists by degree, then runs a carry pass that
//! links adjacent equal-degree roots exactly like carries in binary addition.
//! Insert is a union with a single B₀; delete-min unions the removed root's
//! reversed child list back in.
//!
//! **Decrease-key** moves the entry up by exchanging entries with ancestors;
//! nodes never change position. **Delete** raises the entry all the way to
//! its tree root regardless of keys, then removes that root.
//!
//! # Storage
//!
//! Nodes live in a `slotmap` arena owned by the heap and refer to each other
//! by generation-checked keys. A node's owner is either its parent or the
//! root sentinel, so no raw back-pointers exist.

mod display;
mod forest;
mod link;
mod node;

use crate::compare::{Comparator, NaturalOrder};
use crate::traits::{Heap, HeapError};
use forest::Forest;
use std::fmt;

/// Binomial Heap keyed by `K`, carrying values of type `V`
///
/// Duplicate keys are allowed. Key-addressed operations (`find`,
/// `decrease_key`, `delete`) act on the first matching entry in pre-order
/// (node, then its children, then its siblings), which is unspecified among
/// duplicates.
///
/// # Example
///
/// ```rust
/// use binomial_forest::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.insert(10, "ten");
/// heap.insert(20, "twenty");
/// heap.decrease_key(&20, 5).unwrap();
/// assert_eq!(heap.min(), Some(&"twenty"));
/// assert_eq!(heap.find(&20), None);
/// assert_eq!(heap.extract_min(), Some("twenty"));
/// ```
pub struct BinomialHeap<K, V, C = NaturalOrder> {
    forest: Forest<K, V, C>,
}

impl<K: Ord, V> BinomialHeap<K, V, NaturalOrder> {
    /// Creates an empty heap ordered by `K: Ord`
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K: Ord, V> Default for BinomialHeap<K, V, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Comparator<K>> BinomialHeap<K, V, C> {
    /// Creates an empty heap ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            forest: Forest::new(comparator),
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.forest.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Inserts an entry
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// A new B₀ tree is unioned into the forest; the carry pass may link up
    /// to log n trees, like incrementing a binary counter.
    pub fn insert(&mut self, key: K, value: V) {
        self.forest.insert(key, value);
    }

    /// Returns the value of an entry with the given key
    ///
    /// **Time Complexity**: O(n) worst-case (depth-first search)
    pub fn find(&self, key: &K) -> Option<&V> {
        self.forest
            .find(key)
            .map(|node| &self.forest.entry(node).value)
    }

    /// Returns true if some entry has the given key
    pub fn contains_key(&self, key: &K) -> bool {
        self.forest.find(key).is_some()
    }

    /// Returns the value of a minimum-key entry
    ///
    /// **Time Complexity**: O(log n), a scan of the roots. Among roots with
    /// equal minimal keys the lowest-degree one is returned.
    pub fn min(&self) -> Option<&V> {
        self.peek().map(|(_, value)| value)
    }

    /// Returns the key and value of a minimum-key entry
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.forest.min().map(|node| {
            let entry = self.forest.entry(node);
            (&entry.key, &entry.value)
        })
    }

    /// Removes a minimum-key entry and returns its value
    ///
    /// **Time Complexity**: O(log n) worst-case
    pub fn extract_min(&mut self) -> Option<V> {
        self.pop().map(|(_, value)| value)
    }

    /// Removes a minimum-key entry and returns its key and value
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.forest
            .extract_min()
            .map(|entry| (entry.key, entry.value))
    }

    /// Lowers the key of the entry with key `key` to `new_key`
    ///
    /// The entry keeps its value. A `new_key` equal to the current key is
    /// accepted and changes nothing.
    ///
    /// **Time Complexity**: O(n) to find the entry, O(log n) to restore order
    ///
    /// # Errors
    ///
    /// - [`HeapError::NotFound`] if no entry has key `key`
    /// - [`HeapError::KeyIncreased`] if `new_key` compares greater than
    ///   `key`; the heap is left unchanged
    pub fn decrease_key(&mut self, key: &K, new_key: K) -> Result<(), HeapError> {
        self.forest.decrease_key(key, new_key)
    }

    /// Removes the entry with the given key and returns its value
    ///
    /// Returns `None`, leaving the heap untouched, if no entry has that key.
    ///
    /// **Time Complexity**: O(n) to find the entry, O(log n) to remove it
    pub fn delete(&mut self, key: &K) -> Option<V> {
        self.forest.delete(key).map(|entry| entry.value)
    }

    /// Consumes both heaps and returns one holding all of their entries
    ///
    /// The result keeps this heap's comparator.
    ///
    /// **Time Complexity**: O(min(n, m)) to relocate the smaller heap's
    /// nodes, then O(log(n + m)) for the merge and carry pass
    pub fn union(mut self, other: Self) -> Self {
        self.merge(other);
        self
    }

    /// Moves every entry of `other` into this heap
    pub fn merge(&mut self, other: Self) {
        self.forest.meld(other.forest);
    }

    /// Iterates over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.forest
            .arena()
            .entries()
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Checks the forest, binomial-tree and heap-order invariants
    ///
    /// Meant for tests; walks the whole structure.
    pub fn verify_invariants(&self) -> bool {
        self.forest.verify()
    }
}

impl<K: Ord, V> Heap<V, K> for BinomialHeap<K, V, NaturalOrder> {
    fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    fn is_empty(&self) -> bool {
        BinomialHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinomialHeap::len(self)
    }

    fn push(&mut self, priority: K, item: V) {
        self.insert(priority, item);
    }

    fn peek(&self) -> Option<(&K, &V)> {
        BinomialHeap::peek(self)
    }

    fn pop(&mut self) -> Option<(K, V)> {
        BinomialHeap::pop(self)
    }

    fn merge(&mut self, other: Self) {
        BinomialHeap::merge(self, other);
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for BinomialHeap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinomialHeap<K, V, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = BinomialHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<K, V, C> fmt::Debug for BinomialHeap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Comparator<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHeap")
            .field("len", &self.len())
            .field("min", &self.peek())
            .finish()
    }
}
