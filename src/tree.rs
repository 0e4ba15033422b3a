use crate::symbol::{Bit, Code, Symbol};
use slotmap::{DefaultKey, SlotMap};

/// A node of the Huffman tree.
///
/// The variant split makes "exactly two children or none" structural.
/// `weight` is the aggregate frequency of the subtree; it is only meaningful
/// for trees produced by the builder and is `0` for reloaded trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A terminal node holding one symbol.
    Leaf { symbol: Symbol, weight: u64 },

    /// A branch with a `0` (left) and a `1` (right) child.
    Internal {
        left: DefaultKey,
        right: DefaultKey,
        weight: u64,
    },
}

impl Node {
    /// Aggregate frequency of the subtree rooted here.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for a [`Node::Leaf`].
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The leaf's symbol, `None` for an internal node.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }
}

/// An immutable prefix-free code tree.
///
/// Nodes live in a `SlotMap` arena; internal nodes refer to their children
/// by key and nothing refers back up, since every traversal is top-down.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub(crate) nodes: SlotMap<DefaultKey, Node>,
    pub(crate) root: DefaultKey,
}

impl HuffmanTree {
    pub(crate) fn from_parts(nodes: SlotMap<DefaultKey, Node>, root: DefaultKey) -> Self {
        debug_assert!(nodes.contains_key(root), "root must be in the arena");
        Self { nodes, root }
    }

    /// Key of the root node.
    pub fn root(&self) -> DefaultKey {
        self.root
    }

    /// Node stored under `key`, or `None` if `key` is not from this tree.
    pub fn node(&self, key: DefaultKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Follows one branch from `key`. Returns `None` at a leaf or for a
    /// key that is not from this tree.
    pub fn child(&self, key: DefaultKey, bit: Bit) -> Option<DefaultKey> {
        match *self.nodes.get(key)? {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit == 0 { left } else { right }),
        }
    }

    /// Total weight of the tree, the sum of every leaf frequency.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root].weight()
    }

    /// Number of nodes, leaves and internal nodes together.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves, one per coded symbol.
    pub fn leaf_count(&self) -> usize {
        self.nodes.values().filter(|node| node.is_leaf()).count()
    }

    /// True for the degenerate tree whose root is its only leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.nodes[self.root].is_leaf()
    }

    /// Length of the longest code.
    pub fn max_depth(&self) -> usize {
        self.leaves().map(|(_, code)| code.len()).max().unwrap_or(0)
    }

    /// Code of `symbol`, if it has a leaf.
    pub fn code_of(&self, symbol: Symbol) -> Option<Code> {
        self.leaves()
            .find(|(leaf, _)| *leaf == symbol)
            .map(|(_, code)| code)
    }

    /// Walks `code` from the root and returns the symbol it lands on.
    ///
    /// `None` if the walk stops at an internal node or runs past a leaf.
    pub fn symbol_at(&self, code: &Code) -> Option<Symbol> {
        let mut current = self.root;
        for &bit in code.bits() {
            current = self.child(current, bit)?;
        }
        self.nodes[current].symbol()
    }
}
