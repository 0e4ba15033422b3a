use crate::builder::FrequencyTable;
use crate::tree::HuffmanTree;

/// Statistics about a code and the data it was built for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeStats {
    /// Number of symbols with a code
    pub leaves: usize,
    /// Length of the longest code
    pub max_depth: usize,
    /// Total input symbols, the sum of all frequencies (saturates at `u64::MAX`)
    pub input_symbols: u64,
    /// Bits needed to encode every input symbol (saturates at `u64::MAX`)
    pub encoded_bits: u64,
    /// Sum of 2^-len over all codes; exactly 1.0 for a full binary tree
    pub kraft_sum: f64,
}

impl CodeStats {
    /// Computes statistics for `tree` weighted by `frequencies`.
    pub fn compute(tree: &HuffmanTree, frequencies: &FrequencyTable) -> Self {
        let mut stats = CodeStats {
            leaves: 0,
            max_depth: 0,
            input_symbols: 0,
            encoded_bits: 0,
            kraft_sum: 0.0,
        };

        for (symbol, code) in tree.leaves() {
            let count = frequencies.get(symbol);
            stats.leaves += 1;
            stats.max_depth = stats.max_depth.max(code.len());
            stats.input_symbols = stats.input_symbols.saturating_add(count);
            stats.encoded_bits = stats
                .encoded_bits
                .saturating_add(count.saturating_mul(code.len() as u64));
            stats.kraft_sum += 0.5f64.powi(code.len() as i32);
        }

        stats
    }

    /// Average code length in bits per input symbol.
    pub fn average_code_length(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.input_symbols as f64
        }
    }

    /// Encoded size as a percentage of fixed 8-bit symbols.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            (self.encoded_bits as f64 / (self.input_symbols as f64 * 8.0)) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_example() {
        let table = FrequencyTable::from_counts(&[5, 9, 12, 13, 16, 45]);
        let tree = table.build().unwrap();
        let stats = CodeStats::compute(&tree, &table);

        assert_eq!(stats.leaves, 6);
        assert_eq!(stats.max_depth, 4);
        assert_eq!(stats.input_symbols, 100);
        // 45*1 + (12+13+16)*3 + (5+9)*4
        assert_eq!(stats.encoded_bits, 224);
        assert_eq!(stats.kraft_sum, 1.0);
        assert!((stats.average_code_length() - 2.24).abs() < 1e-9);
        assert!((stats.compression_ratio() - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_leaf() {
        let table = FrequencyTable::from_counts(&[7]);
        let tree = table.build().unwrap();
        let stats = CodeStats::compute(&tree, &table);

        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.encoded_bits, 0);
        assert_eq!(stats.kraft_sum, 1.0);
    }

    #[test]
    fn test_huge_counts_saturate() {
        let table = FrequencyTable::from_counts(&[u64::MAX / 2, u64::MAX / 2, 1]);
        let tree = table.build().unwrap();
        let stats = CodeStats::compute(&tree, &table);

        assert_eq!(stats.input_symbols, u64::MAX);
        assert_eq!(stats.encoded_bits, u64::MAX);
        assert!(stats.compression_ratio() > 0.0);
    }
}
