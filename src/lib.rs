//! # Huffman - Prefix-Free Code Trees
//!
//! Builds a Huffman code from symbol frequencies, persists it as a compact
//! line-oriented text table, and translates a bit stream back into symbols.
//!
//! The tree has three facets:
//! 1. **Builder**: merges the two lightest nodes until one root remains
//!    (equal weights are merged in insertion order, so trees are reproducible)
//! 2. **Codec**: writes and reads `(symbol, path)` line pairs
//! 3. **Translator**: walks the tree one bit at a time to recover symbols
//!
//! ## Example
//!
//! ```
//! use huffman_rs::{CodeTable, HuffmanTree};
//!
//! let mut counts = vec![0u64; 256];
//! for byte in "abracadabra".bytes() {
//!     counts[byte as usize] += 1;
//! }
//! let tree = HuffmanTree::from_frequencies(&counts).unwrap();
//!
//! // Persist and reload the code
//! let mut saved: Vec<u8> = Vec::new();
//! tree.save(&mut saved).unwrap();
//! let reloaded = HuffmanTree::load(&saved[..]).unwrap();
//!
//! // Encode with one tree, decode with the other
//! let mut bits: Vec<u8> = Vec::new();
//! CodeTable::from_tree(&tree)
//!     .encode("abracadabra".bytes().map(u32::from), &mut bits)
//!     .unwrap();
//! let mut source: std::collections::VecDeque<u8> = bits.into();
//! let mut symbols: Vec<u32> = Vec::new();
//! reloaded.translate(&mut source, &mut symbols).unwrap();
//!
//! let text: String = symbols.iter().map(|&s| s as u8 as char).collect();
//! assert_eq!(text, "abracadabra");
//! ```

mod bits;
mod builder;
mod codec;
mod config;
mod encode;
mod error;
mod iter;
mod queue;
mod stats;
mod symbol;
mod translate;
mod tree;


pub use bits::{BitReader, BitSink, BitSource, BitWriter, ByteSink, SymbolSink};
pub use builder::FrequencyTable;
pub use config::CodecConfig;
pub use encode::CodeTable;
pub use error::{HuffmanError, Result};
pub use iter::Leaves;
pub use stats::CodeStats;
pub use symbol::{Bit, Code, Symbol, BYTE_ALPHABET};
pub use translate::Translator;
pub use tree::{HuffmanTree, Node};
