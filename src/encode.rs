use crate::bits::BitSink;
use crate::config::CodecConfig;
use crate::error::{HuffmanError, Result};
use crate::symbol::{Code, Symbol};
use crate::tree::HuffmanTree;
use ahash::AHashMap as HashMap;
use tracing::debug;

/// Symbol-to-code lookup derived from a tree; the inverse of translation.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: HashMap<Symbol, Code>,
    config: CodecConfig,
    single_leaf: bool,
}

impl CodeTable {
    /// Builds the table under the default configuration.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        Self::from_tree_with(tree, CodecConfig::default())
    }

    /// Builds the table; with an end-of-data sentinel in `config`, every
    /// encoded stream is terminated by the sentinel's code.
    pub fn from_tree_with(tree: &HuffmanTree, config: CodecConfig) -> Self {
        Self {
            codes: tree.leaves().collect(),
            config,
            single_leaf: tree.is_single_leaf(),
        }
    }

    /// Code of `symbol`, if the tree has a leaf for it.
    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn write_code<S: BitSink>(&self, symbol: Symbol, sink: &mut S) -> Result<usize> {
        let code = self
            .codes
            .get(&symbol)
            .ok_or(HuffmanError::UnknownSymbol { symbol })?;

        if self.single_leaf {
            // Filler bit, so the translator can see one bit per symbol
            sink.write_bit(0)?;
            return Ok(1);
        }
        for &bit in code.bits() {
            sink.write_bit(bit)?;
        }
        Ok(code.len())
    }

    /// Writes the code of each symbol to `sink`, then the end-of-data code if
    /// configured, and finishes the sink. Returns the number of bits written.
    pub fn encode<I, S>(&self, symbols: I, sink: &mut S) -> Result<usize>
    where
        I: IntoIterator<Item = Symbol>,
        S: BitSink,
    {
        let mut bits = 0;
        let mut count = 0usize;
        for symbol in symbols {
            bits += self.write_code(symbol, sink)?;
            count += 1;
        }
        if let Some(sentinel) = self.config.end_of_data {
            bits += self.write_code(sentinel, sink)?;
        }
        sink.finish()?;
        debug!(symbols = count, bits, "encoded symbols");
        Ok(bits)
    }
}
