use crate::symbol::Symbol;
use thiserror::Error;

/// Errors surfaced by building, persisting and translating Huffman codes.
///
/// None of these are recovered internally. Output already written to a sink
/// before the failure stays written.
#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("no symbol has a positive frequency")]
    NoSymbols,

    #[error("combined weight of {left} and {right} does not fit in a u64")]
    WeightOverflow { left: u64, right: u64 },

    #[error("symbol {symbol} is outside the alphabet of {alphabet_size} symbols")]
    SymbolOutOfRange { symbol: Symbol, alphabet_size: usize },

    #[error("line {line}: expected a symbol code, found {text:?}")]
    InvalidSymbol { line: usize, text: String },

    #[error("line {line}: path may only contain '0' and '1', found {found:?}")]
    InvalidPath { line: usize, found: char },

    #[error("line {line}: symbol has no path line")]
    MissingPath { line: usize },

    #[error("line {line}: path collides with a previously read code")]
    PathConflict { line: usize },

    #[error("line {line}: symbol {symbol} already has a code")]
    DuplicateSymbol { line: usize, symbol: Symbol },

    #[error("code table leaves an internal node with a missing branch")]
    IncompleteTree,

    #[error("code table is empty")]
    EmptyCodeTable,

    #[error("bit stream ended in the middle of a code after {bits_read} bits")]
    Truncated { bits_read: usize },

    #[error("symbol {symbol} has no code in this tree")]
    UnknownSymbol { symbol: Symbol },

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
