use crate::symbol::{Code, Symbol};
use crate::tree::{HuffmanTree, Node};
use slotmap::DefaultKey;

/// Iterator over `(symbol, code)` for every leaf, left subtree before right.
///
/// Uses an explicit stack so deep, unbalanced trees don't recurse.
pub struct Leaves<'a> {
    tree: &'a HuffmanTree,
    stack: Vec<(DefaultKey, Code)>,
}

impl<'a> Leaves<'a> {
    pub(crate) fn new(tree: &'a HuffmanTree) -> Self {
        Self {
            tree,
            stack: vec![(tree.root, Code::new())],
        }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (Symbol, Code);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, code)) = self.stack.pop() {
            match self.tree.nodes[key] {
                Node::Leaf { symbol, .. } => return Some((symbol, code)),
                Node::Internal { left, right, .. } => {
                    // Right goes on first so the left subtree is visited first
                    self.stack.push((right, code.child(1)));
                    self.stack.push((left, code.child(0)));
                }
            }
        }
        None
    }
}

impl HuffmanTree {
    /// Returns an iterator over every leaf's symbol and code.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(self)
    }
}

impl<'a> IntoIterator for &'a HuffmanTree {
    type Item = (Symbol, Code);
    type IntoIter = Leaves<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves()
    }
}
