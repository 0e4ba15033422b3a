//! Line-oriented text form of a code tree.
//!
//! Each leaf is written as two lines: its decimal symbol code, then its path
//! as a string of `0`/`1` characters (empty for a single-leaf tree):
//!
//! ```text
//! 102
//! 0
//! 99
//! 100
//! ```
//!
//! Pairs are written in left-before-right leaf order. Reading accepts pairs
//! in any order and rebuilds the same tree.

use crate::config::CodecConfig;
use crate::error::{HuffmanError, Result};
use crate::symbol::{Bit, Code, Symbol};
use crate::tree::{HuffmanTree, Node};
use ahash::AHashSet;
use slotmap::{DefaultKey, SecondaryMap, SlotMap};
use std::io::{BufRead, Write};
use tracing::debug;

impl HuffmanTree {
    /// Writes one `(symbol, path)` line pair per leaf to `out`.
    pub fn save<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut pairs = 0usize;
        for (symbol, code) in self.leaves() {
            writeln!(out, "{symbol}")?;
            writeln!(out, "{code}")?;
            pairs += 1;
        }
        out.flush()?;
        debug!(pairs, "saved code table");
        Ok(())
    }

    /// Rebuilds a tree from its text form, accepting any symbol value.
    ///
    /// Every node of the result has weight `0`.
    pub fn load<R: BufRead>(input: R) -> Result<Self> {
        read_table(input, None)
    }

    /// Rebuilds a tree, rejecting symbols outside `config`'s symbol space.
    pub fn load_with<R: BufRead>(config: &CodecConfig, input: R) -> Result<Self> {
        read_table(input, Some(config))
    }
}

fn read_table<R: BufRead>(input: R, config: Option<&CodecConfig>) -> Result<HuffmanTree> {
    let mut partial = PartialTree::new();
    let mut seen = AHashSet::new();
    let mut lines = input.lines().enumerate();

    while let Some((index, symbol_line)) = lines.next() {
        let symbol_line = symbol_line?;
        let line = index + 1;
        let symbol = parse_symbol(&symbol_line, line)?;
        if let Some(config) = config {
            config.check_symbol(symbol)?;
        }
        if !seen.insert(symbol) {
            return Err(HuffmanError::DuplicateSymbol { line, symbol });
        }

        let Some((_, path_line)) = lines.next() else {
            return Err(HuffmanError::MissingPath { line });
        };
        let path_line = path_line?;
        let code = parse_path(&path_line, line + 1)?;
        partial.insert(symbol, &code, line + 1)?;
    }

    let tree = partial.finish()?;
    debug!(leaves = seen.len(), "loaded code table");
    Ok(tree)
}

fn parse_symbol(text: &str, line: usize) -> Result<Symbol> {
    text.trim_end_matches('\r')
        .parse()
        .map_err(|_| HuffmanError::InvalidSymbol {
            line,
            text: text.to_string(),
        })
}

fn parse_path(text: &str, line: usize) -> Result<Code> {
    text.trim_end_matches('\r')
        .chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            found => Err(HuffmanError::InvalidPath { line, found }),
        })
        .collect::<Result<Vec<Bit>>>()
        .map(|bits| bits.into_iter().collect())
}

/// A node of a tree still being read; branches may be missing a child until
/// a later pair fills it in.
#[derive(Debug)]
enum Slot {
    Branch {
        left: Option<DefaultKey>,
        right: Option<DefaultKey>,
    },
    Leaf(Symbol),
}

#[derive(Debug)]
struct PartialTree {
    slots: SlotMap<DefaultKey, Slot>,
    root: Option<DefaultKey>,
}

impl PartialTree {
    fn new() -> Self {
        Self {
            slots: SlotMap::new(),
            root: None,
        }
    }

    fn new_slot(&mut self, last: bool, symbol: Symbol) -> DefaultKey {
        if last {
            self.slots.insert(Slot::Leaf(symbol))
        } else {
            self.slots.insert(Slot::Branch {
                left: None,
                right: None,
            })
        }
    }

    /// Walks `code` from the root, creating branches on first visit, and
    /// places a leaf for `symbol` where the code ends.
    fn insert(&mut self, symbol: Symbol, code: &Code, line: usize) -> Result<()> {
        let conflict = HuffmanError::PathConflict { line };

        let root = match self.root {
            Some(_) if code.is_empty() => return Err(conflict),
            Some(root) => root,
            None => {
                let root = self.new_slot(code.is_empty(), symbol);
                self.root = Some(root);
                if code.is_empty() {
                    return Ok(());
                }
                root
            }
        };

        let mut cursor = root;
        for (depth, &bit) in code.bits().iter().enumerate() {
            let last = depth + 1 == code.len();
            let existing = match &self.slots[cursor] {
                Slot::Leaf(_) => return Err(conflict),
                Slot::Branch { left, right } => {
                    if bit == 0 {
                        *left
                    } else {
                        *right
                    }
                }
            };

            cursor = match existing {
                Some(_) if last => return Err(conflict),
                Some(child) => child,
                None => {
                    let child = self.new_slot(last, symbol);
                    if let Slot::Branch { left, right } = &mut self.slots[cursor] {
                        if bit == 0 {
                            *left = Some(child);
                        } else {
                            *right = Some(child);
                        }
                    }
                    child
                }
            };
        }
        Ok(())
    }

    /// Converts into an immutable tree, failing if any branch is half empty.
    fn finish(self) -> Result<HuffmanTree> {
        let root = self.root.ok_or(HuffmanError::EmptyCodeTable)?;
        let mut nodes = SlotMap::with_capacity(self.slots.len());
        let mut built: SecondaryMap<DefaultKey, DefaultKey> = SecondaryMap::new();
        let mut stack = vec![root];

        while let Some(&key) = stack.last() {
            match self.slots[key] {
                Slot::Leaf(symbol) => {
                    built.insert(key, nodes.insert(Node::Leaf { symbol, weight: 0 }));
                    stack.pop();
                }
                Slot::Branch { left, right } => {
                    let (Some(left), Some(right)) = (left, right) else {
                        return Err(HuffmanError::IncompleteTree);
                    };
                    let done_left = built.get(left).copied();
                    let done_right = built.get(right).copied();
                    match (done_left, done_right) {
                        (Some(left), Some(right)) => {
                            let node = nodes.insert(Node::Internal {
                                left,
                                right,
                                weight: 0,
                            });
                            built.insert(key, node);
                            stack.pop();
                        }
                        _ => {
                            if done_right.is_none() {
                                stack.push(right);
                            }
                            if done_left.is_none() {
                                stack.push(left);
                            }
                        }
                    }
                }
            }
        }

        Ok(HuffmanTree::from_parts(nodes, built[root]))
    }
}
