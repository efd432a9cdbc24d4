//! The root list of a binomial heap
//!
//! A [`Forest`] owns a node arena, the head of its root list and the key
//! comparator. Root degrees strictly increase along the list and are unique,
//! so a forest of n entries has at most ⌊log₂ n⌋ + 1 roots.

use super::link::{Link, Owner};
use super::node::{Entry, NodeArena, NodeKey};
use crate::compare::Comparator;
use crate::traits::HeapError;
use std::cmp::Ordering;
use std::mem;

pub(crate) struct Forest<K, V, C> {
    arena: NodeArena<K, V>,
    head: Link,
    comparator: C,
}

impl<K, V, C: Comparator<K>> Forest<K, V, C> {
    pub(crate) fn new(comparator: C) -> Self {
        Self {
            arena: NodeArena::new(),
            head: Link::Leaf,
            comparator,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head == Link::Leaf
    }

    pub(crate) fn arena(&self) -> &NodeArena<K, V> {
        &self.arena
    }

    pub(crate) fn head(&self) -> Link {
        self.head
    }

    pub(crate) fn entry(&self, node: NodeKey) -> &Entry<K, V> {
        &self.arena.node(node).entry
    }

    /// Unions a singleton tree into the forest
    pub(crate) fn insert(&mut self, key: K, value: V) {
        let node = self.arena.alloc(key, value);
        self.union_roots(Link::Node(node));
    }

    pub(crate) fn find(&self, key: &K) -> Option<NodeKey> {
        self.arena.find(self.head, key, &self.comparator)
    }

    pub(crate) fn min(&self) -> Option<NodeKey> {
        self.arena.min_root(self.head, &self.comparator)
    }

    pub(crate) fn extract_min(&mut self) -> Option<Entry<K, V>> {
        let min = self.min()?;
        Some(self.remove_root(min))
    }

    /// Lowers the key of the first entry matching `key` to `new_key`
    ///
    /// The entry keeps its value. An equal key is accepted and leaves the
    /// structure as it was.
    pub(crate) fn decrease_key(&mut self, key: &K, new_key: K) -> Result<(), HeapError> {
        let node = self.find(key).ok_or(HeapError::NotFound)?;
        if self.comparator.compare(&new_key, &self.arena.node(node).entry.key) == Ordering::Greater {
            return Err(HeapError::KeyIncreased);
        }

        self.arena.entry_mut(node).key = new_key;
        self.arena.sift_up(node, &self.comparator);
        Ok(())
    }

    /// Removes the first entry matching `key`
    pub(crate) fn delete(&mut self, key: &K) -> Option<Entry<K, V>> {
        let node = self.find(key)?;
        let root = self.arena.raise(node);
        Some(self.remove_root(root))
    }

    /// Moves every tree of `other` into this forest
    ///
    /// The smaller arena is relocated into the larger one, then the root
    /// lists are merged and carries propagated. `other`'s comparator is
    /// dropped; this forest keeps its own.
    pub(crate) fn meld(&mut self, mut other: Self) {
        if other.arena.len() > self.arena.len() {
            mem::swap(&mut self.arena, &mut other.arena);
            mem::swap(&mut self.head, &mut other.head);
        }
        let incoming = self.arena.absorb(other.arena, other.head);
        self.union_roots(incoming);
    }

    /// Unlinks a root, re-unions its children and frees it
    fn remove_root(&mut self, root: NodeKey) -> Entry<K, V> {
        self.head = self.arena.unlink(self.head, root);
        let orphans = self.arena.orphan_children(root);
        self.union_roots(orphans);
        self.arena.free(root)
    }

    fn union_roots(&mut self, roots: Link) {
        let merged = self.arena.merge(self.head, roots);
        self.head = self.arena.combine(merged, &self.comparator);
    }

    /// Checks every structural invariant of the forest
    ///
    /// - Root degrees strictly increase and every root is owned by [`Owner::Root`]
    /// - A node of degree d has children of degrees d-1, ..., 0, each owned by it
    /// - No child key compares less than its parent's key
    /// - Every arena node is reachable from the root list
    pub(crate) fn verify(&self) -> bool {
        let mut reachable = 0;
        let mut last_degree: Option<usize> = None;

        for root in self.arena.siblings(self.head) {
            let node = self.arena.node(root);
            if node.owner != Owner::Root || last_degree.map_or(false, |d| d >= node.degree) {
                return false;
            }
            last_degree = Some(node.degree);
            match self.verify_tree(root) {
                Some(size) => reachable += size,
                None => return false,
            }
        }

        reachable == self.arena.len()
    }

    /// Verifies the tree rooted at `root` and returns its size
    fn verify_tree(&self, root: NodeKey) -> Option<usize> {
        let node = self.arena.node(root);
        let mut size = 1;
        let mut expected = node.degree;

        for child in self.arena.siblings(node.child) {
            let child_node = self.arena.node(child);
            if expected == 0
                || child_node.degree != expected - 1
                || child_node.owner != Owner::Parent(root)
                || self.comparator.compare(&node.entry.key, &child_node.entry.key) == Ordering::Greater
            {
                return None;
            }
            expected -= 1;
            size += self.verify_tree(child)?;
        }

        (expected == 0 && size == 1 << node.degree).then_some(size)
    }
}
