//! Binomial tree nodes and the structural primitives that relink them
//!
//! Nodes live in a [`NodeArena`] and refer to one another by [`NodeKey`].
//! Every relinking step is an index splice: it rewrites which key a
//! `sibling`, `child` or `owner` field holds.
//!
//! **Layout**: a root list runs from low to high degree, while a node's child
//! list runs from high to low degree (the child linked last is the head).
//! [`NodeArena::reverse`] converts one into the other when a node goes away.

use super::link::{Link, Owner};
use crate::compare::Comparator;
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::mem;

new_key_type! {
    /// Generation-checked arena index of a tree node
    pub(crate) struct NodeKey;
}

/// A (key, value) pair. Entries move between nodes during decrease-key and
/// delete; nodes never move.
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// A node of a binomial tree
///
/// A node of degree d has exactly d children whose degrees, from the child
/// list head onward, are d-1, d-2, ..., 0.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) entry: Entry<K, V>,
    pub(crate) degree: usize,
    /// Next node at the same level
    pub(crate) sibling: Link,
    /// Head of the child list (highest degree child)
    pub(crate) child: Link,
    pub(crate) owner: Owner,
}

impl<K, V> Node<K, V> {
    fn singleton(key: K, value: V) -> Self {
        Node {
            entry: Entry { key, value },
            degree: 0,
            sibling: Link::Leaf,
            child: Link::Leaf,
            owner: Owner::Root,
        }
    }
}

/// Storage for every node of one forest
#[derive(Debug)]
pub(crate) struct NodeArena<K, V> {
    nodes: SlotMap<NodeKey, Node<K, V>>,
}

impl<K, V> NodeArena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Allocates a detached degree-0 tree
    pub(crate) fn alloc(&mut self, key: K, value: V) -> NodeKey {
        self.nodes.insert(Node::singleton(key, value))
    }

    /// Releases a node that is no longer linked anywhere
    pub(crate) fn free(&mut self, node: NodeKey) -> Entry<K, V> {
        self.nodes
            .remove(node)
            .expect("freed node must still be in the arena")
            .entry
    }

    #[inline]
    pub(crate) fn node(&self, node: NodeKey) -> &Node<K, V> {
        &self.nodes[node]
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, node: NodeKey) -> &mut Entry<K, V> {
        &mut self.nodes[node].entry
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &Entry<K, V>> + '_ {
        self.nodes.values().map(|node| &node.entry)
    }

    /// Iterates the nodes of the sibling list starting at `head`
    pub(crate) fn siblings(&self, head: Link) -> Siblings<'_, K, V> {
        Siblings {
            arena: self,
            cursor: head,
        }
    }

    fn set_next(&mut self, head: &mut Link, prev: Option<NodeKey>, next: Link) {
        match prev {
            Some(prev) => self.nodes[prev].sibling = next,
            None => *head = next,
        }
    }

    /// Merges two sibling lists, each sorted by increasing degree, into one
    ///
    /// The result may hold two (never three) consecutive roots of equal
    /// degree; [`combine`](Self::combine) resolves them. On equal degrees
    /// the node from `left` comes first.
    pub(crate) fn merge(&mut self, mut left: Link, mut right: Link) -> Link {
        let mut head = Link::Leaf;
        let mut tail: Option<NodeKey> = None;

        loop {
            let next = match (left, right) {
                (Link::Leaf, rest) | (rest, Link::Leaf) => {
                    self.set_next(&mut head, tail, rest);
                    return head;
                }
                (Link::Node(l), Link::Node(r)) => {
                    if self.nodes[r].degree < self.nodes[l].degree {
                        right = self.nodes[r].sibling;
                        r
                    } else {
                        left = self.nodes[l].sibling;
                        l
                    }
                }
            };
            self.set_next(&mut head, tail, Link::Node(next));
            tail = Some(next);
        }
    }

    /// Carry propagation over a merged root list
    ///
    /// Scans left to right. Whenever exactly two adjacent roots share a
    /// degree, the one with the larger key is linked under the other, like a
    /// carry in binary addition. When three in a row share a degree the
    /// first is skipped so the last two combine. Returns the new head; root
    /// degrees are unique afterwards.
    pub(crate) fn combine<C: Comparator<K>>(&mut self, mut head: Link, cmp: &C) -> Link {
        let mut prev: Option<NodeKey> = None;
        let mut cursor = head;

        while let Link::Node(current) = cursor {
            let Link::Node(next) = self.nodes[current].sibling else {
                break;
            };
            let degree = self.nodes[current].degree;
            let three_in_a_row = matches!(
                self.nodes[next].sibling,
                Link::Node(after) if self.nodes[after].degree == degree
            );

            if self.nodes[next].degree != degree || three_in_a_row {
                prev = Some(current);
                cursor = Link::Node(next);
            } else if cmp.compare(&self.nodes[current].entry.key, &self.nodes[next].entry.key)
                != Ordering::Greater
            {
                self.nodes[current].sibling = self.nodes[next].sibling;
                self.link(next, current);
            } else {
                self.set_next(&mut head, prev, Link::Node(next));
                self.link(current, next);
                cursor = Link::Node(next);
            }
        }

        head
    }

    /// Makes `child` the new head of `parent`'s child list
    pub(crate) fn link(&mut self, child: NodeKey, parent: NodeKey) {
        let first = mem::replace(&mut self.nodes[parent].child, Link::Node(child));
        self.nodes[parent].degree += 1;

        let node = &mut self.nodes[child];
        node.sibling = first;
        node.owner = Owner::Parent(parent);
    }

    /// Detaches `node`'s child list and returns it as a root list
    ///
    /// The children come out in increasing degree order, each owned by
    /// [`Owner::Root`]. `node` keeps its degree; it is about to be freed.
    pub(crate) fn orphan_children(&mut self, node: NodeKey) -> Link {
        let children = mem::replace(&mut self.nodes[node].child, Link::Leaf);
        self.reverse(children, Link::Leaf)
    }

    /// Reverses a sibling list onto `acc`, turning every node into a root
    pub(crate) fn reverse(&mut self, list: Link, mut acc: Link) -> Link {
        let mut cursor = list;
        while let Link::Node(current) = cursor {
            let node = &mut self.nodes[current];
            cursor = mem::replace(&mut node.sibling, acc);
            node.owner = Owner::Root;
            acc = Link::Node(current);
        }
        acc
    }

    /// Unlinks `target` from the root list starting at `head`
    pub(crate) fn unlink(&mut self, head: Link, target: NodeKey) -> Link {
        let after = self.nodes[target].sibling;
        if head == Link::Node(target) {
            return after;
        }

        let pred = self
            .siblings(head)
            .find(|&root| self.nodes[root].sibling == Link::Node(target))
            .expect("unlinked node must be on the root list");
        self.nodes[pred].sibling = after;
        head
    }

    /// Sift-up for decrease-key
    ///
    /// The entry at `node` trades places with each ancestor whose key is
    /// greater than its own, so every such ancestor's entry moves one level
    /// down. Stops under the first ancestor with a key that is not greater,
    /// or at the root. Returns the node now holding the entry.
    pub(crate) fn sift_up<C: Comparator<K>>(&mut self, node: NodeKey, cmp: &C) -> NodeKey {
        let mut slot = node;
        while let Owner::Parent(parent) = self.nodes[slot].owner {
            let ordering = cmp.compare(&self.nodes[parent].entry.key, &self.nodes[slot].entry.key);
            if ordering != Ordering::Greater {
                break;
            }
            self.swap_entries(slot, parent);
            slot = parent;
        }
        slot
    }

    /// Raises the entry at `node` to the root of its tree, ignoring key order
    ///
    /// Same walk as [`sift_up`](Self::sift_up) with every comparison treated
    /// as "parent is greater". Returns the root.
    pub(crate) fn raise(&mut self, node: NodeKey) -> NodeKey {
        let mut slot = node;
        while let Owner::Parent(parent) = self.nodes[slot].owner {
            self.swap_entries(slot, parent);
            slot = parent;
        }
        slot
    }

    fn swap_entries(&mut self, lower: NodeKey, upper: NodeKey) {
        let [lower, upper] = self
            .nodes
            .get_disjoint_mut([lower, upper])
            .expect("a node is never its own parent");
        mem::swap(&mut lower.entry, &mut upper.entry);
    }

    /// Pre-order search: a node, then its child list, then its siblings
    pub(crate) fn find<C: Comparator<K>>(&self, head: Link, key: &K, cmp: &C) -> Option<NodeKey> {
        let mut pending: SmallVec<[Link; 32]> = SmallVec::new();
        pending.push(head);

        while let Some(link) = pending.pop() {
            let Link::Node(current) = link else {
                continue;
            };
            let node = &self.nodes[current];
            if cmp.compare(&node.entry.key, key) == Ordering::Equal {
                return Some(current);
            }
            pending.push(node.sibling);
            pending.push(node.child);
        }

        None
    }

    /// Minimum root of the list starting at `head`; the leftmost wins ties
    pub(crate) fn min_root<C: Comparator<K>>(&self, head: Link, cmp: &C) -> Option<NodeKey> {
        self.siblings(head).reduce(|best, root| {
            match cmp.compare(&self.nodes[best].entry.key, &self.nodes[root].entry.key) {
                Ordering::Greater => root,
                Ordering::Less | Ordering::Equal => best,
            }
        })
    }

    /// Moves every node of `other` into this arena
    ///
    /// Keys are reassigned, so all links of the moved nodes are rewritten.
    /// Returns `other_head` translated into this arena.
    pub(crate) fn absorb(&mut self, other: NodeArena<K, V>, other_head: Link) -> Link {
        let mut moved: SecondaryMap<NodeKey, NodeKey> = SecondaryMap::with_capacity(other.len());
        let mut incoming = Vec::with_capacity(other.len());

        for (old, node) in other.nodes {
            let new = self.nodes.insert(node);
            moved.insert(old, new);
            incoming.push(new);
        }

        let relink = |link: Link| match link {
            Link::Node(old) => Link::Node(moved[old]),
            Link::Leaf => Link::Leaf,
        };

        for key in incoming {
            let node = &mut self.nodes[key];
            node.sibling = relink(node.sibling);
            node.child = relink(node.child);
            if let Owner::Parent(old) = node.owner {
                node.owner = Owner::Parent(moved[old]);
            }
        }

        relink(other_head)
    }
}

/// Iterator over the keys of one sibling list
pub(crate) struct Siblings<'a, K, V> {
    arena: &'a NodeArena<K, V>,
    cursor: Link,
}

impl<K, V> Iterator for Siblings<'_, K, V> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let current = self.cursor.node()?;
        self.cursor = self.arena.nodes[current].sibling;
        Some(current)
    }
}
