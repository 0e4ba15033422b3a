use crate::config::CodecConfig;
use crate::error::{HuffmanError, Result};
use crate::queue::WeightQueue;
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node};
use slotmap::SlotMap;
use tracing::{debug, trace};

/// Occurrence counts indexed by symbol code.
///
/// Counting is done elsewhere; this only holds the result and turns it into
/// a tree. Symbols with a zero count get no leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    config: CodecConfig,
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Creates a table of zero counts covering the configured symbol space.
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            counts: vec![0; config.symbol_space()],
        }
    }

    /// Wraps a count array whose length is the alphabet size.
    pub fn from_counts(counts: &[u64]) -> Self {
        Self {
            config: CodecConfig::new().with_alphabet_size(counts.len()),
            counts: counts.to_vec(),
        }
    }

    /// Wraps a count array under an explicit configuration.
    ///
    /// Fails if the array has more entries than the symbol space.
    pub fn from_counts_with(config: CodecConfig, counts: &[u64]) -> Result<Self> {
        let mut table = Self::new(config);
        for (symbol, &count) in counts.iter().enumerate() {
            if count > 0 {
                table.set(symbol as Symbol, count)?;
            }
        }
        Ok(table)
    }

    /// Reserves an end-of-data sentinel past the alphabet and gives it a count of one.
    pub fn with_end_of_data(mut self) -> Self {
        if self.config.end_of_data.is_none() {
            self.config = self.config.with_end_of_data();
        }
        self.counts.resize(self.config.symbol_space(), 0);
        if let Some(sentinel) = self.config.end_of_data {
            self.counts[sentinel as usize] = 1;
        }
        self
    }

    /// Alphabet and sentinel settings the counts are indexed by.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Sets the count of `symbol`, rejecting symbols outside the symbol space.
    pub fn set(&mut self, symbol: Symbol, count: u64) -> Result<()> {
        self.config.check_symbol(symbol)?;
        self.counts[symbol as usize] = count;
        Ok(())
    }

    /// Count of `symbol`; `0` for symbols outside the table.
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// Symbols with a positive count, in ascending symbol order.
    pub fn iter_positive(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as Symbol, count))
    }

    /// Builds the Huffman tree for these counts.
    ///
    /// Fails with [`HuffmanError::NoSymbols`] if no count is positive, and
    /// with [`HuffmanError::WeightOverflow`] if a merged weight exceeds `u64`.
    pub fn build(&self) -> Result<HuffmanTree> {
        self.build_observed(|_, _| {})
    }

    /// Builds the tree, reporting the weights of each merged pair to `on_merge`.
    pub(crate) fn build_observed<F>(&self, mut on_merge: F) -> Result<HuffmanTree>
    where
        F: FnMut(u64, u64),
    {
        let mut nodes = SlotMap::new();
        let mut queue = WeightQueue::new();

        for (symbol, weight) in self.iter_positive() {
            let key = nodes.insert(Node::Leaf { symbol, weight });
            queue.push(weight, key);
        }

        let leaf_count = queue.len();
        if leaf_count == 0 {
            return Err(HuffmanError::NoSymbols);
        }

        while queue.len() > 1 {
            let (Some((left_weight, left)), Some((right_weight, right))) =
                (queue.pop(), queue.pop())
            else {
                unreachable!("queue holds at least two nodes");
            };

            on_merge(left_weight, right_weight);
            trace!(left_weight, right_weight, "merging lightest pair");

            let weight = left_weight.checked_add(right_weight).ok_or(
                HuffmanError::WeightOverflow {
                    left: left_weight,
                    right: right_weight,
                },
            )?;
            let key = nodes.insert(Node::Internal {
                left,
                right,
                weight,
            });
            queue.push(weight, key);
        }

        let Some((weight, root)) = queue.pop() else {
            unreachable!("queue holds exactly one node");
        };

        debug!(leaves = leaf_count, weight, "built huffman tree");
        Ok(HuffmanTree::from_parts(nodes, root))
    }
}

impl HuffmanTree {
    /// Builds a tree from a count array indexed by symbol code.
    pub fn from_frequencies(counts: &[u64]) -> Result<Self> {
        FrequencyTable::from_counts(counts).build()
    }
}
