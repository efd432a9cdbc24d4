//! Sentinel-aware references between tree nodes
//!
//! Absence is a variant, not a null: a sibling list or child list ends in
//! [`Link::Leaf`], and a node with no parent is owned by [`Owner::Root`].

use super::node::NodeKey;

/// Next element of a sibling list, or head of a child list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    Node(NodeKey),
    /// End of the list (no sibling, or no children)
    Leaf,
}

impl Link {
    #[inline]
    pub(crate) fn node(self) -> Option<NodeKey> {
        match self {
            Link::Node(key) => Some(key),
            Link::Leaf => None,
        }
    }
}

/// Whatever structurally owns the slot a node occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Owner {
    /// The node sits in this node's child list
    Parent(NodeKey),
    /// The node is the top of its tree
    Root,
}
