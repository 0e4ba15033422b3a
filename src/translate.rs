use crate::bits::{BitSource, SymbolSink};
use crate::config::CodecConfig;
use crate::error::{HuffmanError, Result};
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node};
use tracing::{debug, trace};

/// Decodes a bit stream into symbols by walking a tree from the root.
///
/// Each symbol restarts at the root and descends one bit per internal node
/// until it lands on a leaf. Exhaustion of the source is only checked
/// between symbols; running dry mid-descent is a [`HuffmanError::Truncated`].
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    tree: &'a HuffmanTree,
    config: CodecConfig,
}

impl<'a> Translator<'a> {
    /// Translates with `tree` and no end-of-data sentinel.
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self {
            tree,
            config: CodecConfig::default(),
        }
    }

    /// Stops translation at `config`'s end-of-data sentinel, if it has one.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Decodes exactly one symbol, consuming as many bits as its code is long.
    pub fn decode_symbol<S: BitSource>(&self, source: &mut S) -> Result<Symbol> {
        let mut current = self.tree.root;
        let mut bits_read = 0;

        loop {
            match self.tree.nodes[current] {
                Node::Leaf { symbol, .. } => return Ok(symbol),
                Node::Internal { left, right, .. } => {
                    if !source.has_next_bit()? {
                        return Err(HuffmanError::Truncated { bits_read });
                    }
                    let bit = source.next_bit()?;
                    bits_read += 1;
                    current = if bit == 0 { left } else { right };
                }
            }
        }
    }

    /// Decodes symbols into `sink` until the source runs out or the
    /// end-of-data sentinel is reached. Returns the number of symbols written.
    ///
    /// A single-leaf tree has empty codes, so each of its symbols consumes one
    /// filler bit instead.
    pub fn translate<S, K>(&self, source: &mut S, sink: &mut K) -> Result<usize>
    where
        S: BitSource,
        K: SymbolSink,
    {
        let mut written = 0;

        while source.has_next_bit()? {
            if self.tree.is_single_leaf() {
                source.next_bit()?;
            }
            let symbol = self.decode_symbol(source)?;
            if self.config.is_end_of_data(symbol) {
                trace!(symbol, "reached end of data");
                break;
            }
            sink.write_symbol(symbol)?;
            trace!(symbol, "decoded symbol");
            written += 1;
        }

        sink.finish()?;
        debug!(symbols = written, "translated bit stream");
        Ok(written)
    }
}

impl HuffmanTree {
    /// Decodes one symbol from `source`.
    pub fn decode_symbol<S: BitSource>(&self, source: &mut S) -> Result<Symbol> {
        Translator::new(self).decode_symbol(source)
    }

    /// Decodes `source` into `sink` until the source is exhausted.
    pub fn translate<S, K>(&self, source: &mut S, sink: &mut K) -> Result<usize>
    where
        S: BitSource,
        K: SymbolSink,
    {
        Translator::new(self).translate(source, sink)
    }
}
